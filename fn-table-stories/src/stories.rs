//! Story definitions: one configured table each.

use fn_table::markup::escape;
use fn_table::prelude::*;
use fn_table::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::{create_people_list, heroes, Person};

pub struct Story {
    pub name: &'static str,
    pub title: &'static str,
    pub render: fn() -> Result<Element, ConfigError>,
}

pub fn all() -> Vec<Story> {
    vec![
        Story {
            name: "default",
            title: "Default",
            render: default_table,
        },
        Story {
            name: "custom-cells",
            title: "Custom headers and cells",
            render: custom_cells,
        },
        Story {
            name: "grouped",
            title: "Grouped headers",
            render: grouped,
        },
        Story {
            name: "sequence",
            title: "Sequence numbers",
            render: sequence,
        },
        Story {
            name: "multiple-selection",
            title: "Multiple selection",
            render: multiple_selection,
        },
        Story {
            name: "single-selection",
            title: "Single selection",
            render: single_selection,
        },
        Story {
            name: "footer",
            title: "Footer",
            render: footer,
        },
        Story {
            name: "generated",
            title: "Generated people",
            render: generated,
        },
        Story {
            name: "configured",
            title: "Configured from JSON",
            render: configured,
        },
    ]
}

/// Wrap a rendered table in a standalone HTML page.
pub fn document(story: &Story, table: &Element) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{table}\n</body>\n</html>\n",
        title = escape(story.title),
        table = table.to_html(),
    )
}

fn default_column() -> DefaultColumnSpec {
    DefaultColumnSpec {
        width: Some(200),
        alignment: Some(Alignment::Center),
    }
}

fn person_columns() -> Vec<ColumnSpec<Person>> {
    vec![
        ColumnSpec::leaf("firstName", "First Name").into(),
        ColumnSpec::leaf("lastName", "Last Name").into(),
        ColumnSpec::leaf("age", "Age").into(),
        ColumnSpec::leaf("married", "Married").into(),
    ]
}

fn default_table() -> Result<Element, ConfigError> {
    let options = FnTableOptions::new(person_columns()).default_column(default_column());
    Ok(FnTable::new().render(&heroes(), &options))
}

fn custom_cells() -> Result<Element, ConfigError> {
    let columns = vec![
        ColumnSpec::leaf("firstName", "First Name").width(200).into(),
        ColumnSpec::leaf(
            "lastName",
            HeaderSpec::render(|_: &[ColumnSpec<Person>]| {
                Element::new("i")
                    .style(Style::new().property("color", "red"))
                    .child(Element::text("Last Name"))
            }),
        )
        .into(),
        ColumnSpec::leaf("age", "Age").align(Alignment::Right).into(),
        ColumnSpec::leaf("married", "Married")
            .cell(|value, _| Element::text(if value().as_bool() == Some(true) { "Y" } else { "N" }))
            .width(80)
            .align(Alignment::Center)
            .into(),
        ColumnSpec::leaf("fullName", "Full Name")
            .cell(|_, person: &Person| {
                Element::text(format!("{} {}", person.first_name, person.last_name))
            })
            .into(),
    ];
    let options = FnTableOptions::new(columns).default_column(default_column());
    Ok(FnTable::new().render(&heroes(), &options))
}

fn grouped() -> Result<Element, ConfigError> {
    let columns = vec![
        ColumnSpec::group(
            HeaderSpec::render(|children: &[ColumnSpec<Person>]| {
                Element::text(format!("Name ({} columns)", children.len()))
            }),
            vec![
                ColumnSpec::leaf("firstName", "First Name").into(),
                ColumnSpec::leaf("lastName", "Last Name").into(),
            ],
        )
        .key("name")
        .into(),
        ColumnSpec::group(
            "Details",
            vec![
                ColumnSpec::leaf("age", "Age").align(Alignment::Right).into(),
                ColumnSpec::leaf("married", "Married").into(),
            ],
        )
        .into(),
    ];
    let options = FnTableOptions::new(columns).show_sequence(true);
    Ok(FnTable::new().render(&heroes(), &options))
}

fn sequence() -> Result<Element, ConfigError> {
    let options = FnTableOptions::new(person_columns())
        .show_sequence(true)
        .default_column(default_column());
    Ok(FnTable::new().render(&heroes(), &options))
}

fn multiple_selection() -> Result<Element, ConfigError> {
    let rows = heroes();
    let options = FnTableOptions::new(person_columns())
        .selection_mode(SelectionMode::Multiple)
        .row_id(|person: &Person, _| person.first_name.clone());
    let table = FnTable::new();

    // Tick She-Ra so the header checkbox shows its mixed state.
    let markup = table.render(&rows, &options);
    if let Some(input) = row_inputs(&markup).get(1) {
        input.fire_change(true);
    }
    Ok(table.render(&rows, &options))
}

fn single_selection() -> Result<Element, ConfigError> {
    let rows = heroes();
    let options = FnTableOptions::new(person_columns()).selection_mode(SelectionMode::Single);
    let table = FnTable::new();

    // Click both radios; only the last one stays selected.
    let markup = table.render(&rows, &options);
    for input in row_inputs(&markup) {
        input.fire_change(true);
    }
    Ok(table.render(&rows, &options))
}

/// Selection controls in the body, one per row.
fn row_inputs(markup: &Element) -> Vec<&Element> {
    markup
        .find_all("tbody")
        .into_iter()
        .flat_map(|body| body.find_all("input"))
        .collect()
}

fn footer() -> Result<Element, ConfigError> {
    let rows = heroes();
    let total_age: i64 = rows.iter().map(|person| i64::from(person.age)).sum();
    let married = rows.iter().filter(|person| person.married).count();

    let columns = vec![
        ColumnSpec::leaf("firstName", "First Name").footer("Total").into(),
        ColumnSpec::leaf("lastName", "Last Name").into(),
        ColumnSpec::leaf("age", "Age")
            .align(Alignment::Right)
            .footer(total_age.to_string())
            .into(),
        ColumnSpec::leaf("married", "Married")
            .footer(format!("{married} married"))
            .into(),
    ];
    let options = FnTableOptions::new(columns)
        .show_footer(true)
        .show_sequence(true);
    Ok(FnTable::new().render(&rows, &options))
}

fn generated() -> Result<Element, ConfigError> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let rows = create_people_list(50, &mut rng);
    let options = FnTableOptions::new(person_columns())
        .show_sequence(true)
        .selection_mode(SelectionMode::Multiple)
        .default_column(DefaultColumnSpec {
            width: Some(160),
            alignment: None,
        });
    Ok(FnTable::new().render(&rows, &options))
}

const CONFIGURED_TABLE: &str = r#"{
    "showSequence": true,
    "selectionMode": "single",
    "showFooter": true,
    "defaultColumn": { "width": 180, "alignment": "left" },
    "columns": [
        { "key": "name", "header": "Name", "footer": "From JSON", "children": [
            { "key": "firstName", "header": "First Name" },
            { "key": "lastName", "header": "Last Name" }
        ]},
        { "key": "age", "header": "Age", "alignment": "right", "width": 60 },
        { "key": "married", "header": "Married", "alignment": "center" }
    ]
}"#;

fn configured() -> Result<Element, ConfigError> {
    let options = TableConfig::from_json(CONFIGURED_TABLE)?.to_options::<serde_json::Value>()?;
    let rows = vec![
        serde_json::json!({ "firstName": "He", "lastName": "Man", "age": 20, "married": false }),
        serde_json::json!({ "firstName": "She", "lastName": "Ra", "age": 19, "married": true }),
    ];
    Ok(FnTable::new().render(&rows, &options))
}
