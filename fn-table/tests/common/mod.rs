#![allow(dead_code)]

use fn_table::{CellValue, Element, RowData};

#[derive(Clone, Debug)]
pub struct Person {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub age: u32,
    pub married: bool,
}

impl RowData for Person {
    fn get(&self, key: &str) -> Option<CellValue> {
        match key {
            "firstName" => Some(self.first_name.into()),
            "lastName" => Some(self.last_name.into()),
            "age" => Some(self.age.into()),
            "married" => Some(self.married.into()),
            _ => None,
        }
    }
}

pub fn he_man_and_she_ra() -> Vec<Person> {
    vec![
        Person {
            first_name: "He",
            last_name: "Man",
            age: 20,
            married: false,
        },
        Person {
            first_name: "She",
            last_name: "Ra",
            age: 19,
            married: true,
        },
    ]
}

pub fn people(count: usize) -> Vec<Person> {
    const NAMES: [&str; 5] = ["Adora", "Adam", "Glimmer", "Bow", "Teela"];
    (0..count)
        .map(|i| Person {
            first_name: NAMES[i % NAMES.len()],
            last_name: "Eternia",
            age: 20 + i as u32,
            married: i % 2 == 0,
        })
        .collect()
}

/// Text of every body cell, row by row.
pub fn body_cells(table: &Element) -> Vec<Vec<String>> {
    table.find_all("tbody")[0]
        .find_all("tr")
        .into_iter()
        .map(|tr| tr.find_all("td").into_iter().map(Element::text_content).collect())
        .collect()
}

/// Header rows as `(text, colspan)` pairs.
pub fn header_rows(table: &Element) -> Vec<Vec<(String, usize)>> {
    table.find_all("thead")[0]
        .find_all("tr")
        .into_iter()
        .map(|tr| {
            tr.find_all("th")
                .into_iter()
                .map(|th| {
                    let span = th.get_attr("colspan").and_then(|s| s.parse().ok()).unwrap_or(1);
                    (th.text_content(), span)
                })
                .collect()
        })
        .collect()
}

/// Selection inputs in body order.
pub fn row_inputs(table: &Element) -> Vec<&Element> {
    table.find_all("tbody")[0].find_all("input")
}

pub fn header_input(table: &Element) -> Option<&Element> {
    table.find_all("thead")[0].find_all("input").into_iter().next()
}
