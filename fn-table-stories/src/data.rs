//! Sample rows.

use fn_table::{CellValue, RowData};
use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Adam", "Adora", "Bow", "Catra", "Duncan", "Entrapta", "Glimmer", "Marlena", "Mermista",
    "Orko", "Randor", "Scorpia", "Teela", "Netossa", "Spinnerella",
];

const LAST_NAMES: &[&str] = &[
    "Grayskull", "Eternia", "Brightmoon", "Salineas", "Dryl", "Plumeria", "Mystacor", "Halfmoon",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub married: bool,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, age: u8, married: bool) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            married,
        }
    }
}

impl RowData for Person {
    fn get(&self, key: &str) -> Option<CellValue> {
        match key {
            "firstName" => Some(self.first_name.as_str().into()),
            "lastName" => Some(self.last_name.as_str().into()),
            "age" => Some(i64::from(self.age).into()),
            "married" => Some(self.married.into()),
            _ => None,
        }
    }
}

/// The two fixed rows most stories show.
pub fn heroes() -> Vec<Person> {
    vec![
        Person::new("He", "Man", 20, false),
        Person::new("She", "Ra", 19, true),
    ]
}

/// `size` random people aged 5 to 99.
pub fn create_people_list(size: usize, rng: &mut impl Rng) -> Vec<Person> {
    (0..size)
        .map(|_| Person {
            first_name: FIRST_NAMES.choose(rng).copied().unwrap_or_default().to_string(),
            last_name: LAST_NAMES.choose(rng).copied().unwrap_or_default().to_string(),
            age: rng.random_range(5..=99),
            married: rng.random_bool(0.5),
        })
        .collect()
}
