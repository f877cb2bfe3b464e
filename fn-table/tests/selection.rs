//! Row selection through the rendered controls.

mod common;

use common::{header_input, he_man_and_she_ra, people, row_inputs, Person};
use fn_table::prelude::*;

fn options(mode: SelectionMode) -> FnTableOptions<Person> {
    FnTableOptions::new(vec![ColumnSpec::leaf("firstName", "First Name").into()])
        .selection_mode(mode)
}

fn selected_ids(table: &FnTable) -> Vec<String> {
    table
        .selection()
        .into_iter()
        .filter(|(_, selected)| *selected)
        .map(|(id, _)| id)
        .collect()
}

// ============================================================================
// Multiple
// ============================================================================

#[test]
fn test_no_selection_column_by_default() {
    let markup = FnTable::new().render(&he_man_and_she_ra(), &options(SelectionMode::None));
    assert!(markup.find_all("input").is_empty());
    assert_eq!(markup.find_all("td").len(), 2);
}

#[test]
fn test_multiple_renders_header_and_row_checkboxes() {
    let markup = FnTable::new().render(&he_man_and_she_ra(), &options(SelectionMode::Multiple));

    let header = header_input(&markup).expect("select-all checkbox");
    assert_eq!(header.get_attr("type"), Some("checkbox"));
    assert!(!header.checked);
    assert!(!header.indeterminate);

    let inputs = row_inputs(&markup);
    assert_eq!(inputs.len(), 2);
    assert!(inputs.iter().all(|input| input.has_class("fn-cell-multi-select")));
}

#[test]
fn test_row_checkbox_selects_row() {
    let rows = people(3);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    let markup = table.render(&rows, &opts);
    assert!(row_inputs(&markup)[1].fire_change(true));
    assert_eq!(selected_ids(&table), vec!["1"]);

    let markup = table.render(&rows, &opts);
    let inputs = row_inputs(&markup);
    assert!(!inputs[0].checked);
    assert!(inputs[1].checked);

    let header = header_input(&markup).unwrap();
    assert!(!header.checked);
    assert!(header.indeterminate);

    let tr = &markup.find_all("tr")[2];
    assert_eq!(tr.get_attr("data-selected"), Some("true"));
}

#[test]
fn test_select_all_selects_every_row_when_not_all_selected() {
    let rows = people(4);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    let markup = table.render(&rows, &opts);
    row_inputs(&markup)[0].fire_change(true);

    let markup = table.render(&rows, &opts);
    header_input(&markup).unwrap().fire_change(true);
    assert_eq!(selected_ids(&table), vec!["0", "1", "2", "3"]);

    let markup = table.render(&rows, &opts);
    let header = header_input(&markup).unwrap();
    assert!(header.checked);
    assert!(!header.indeterminate);
    assert!(row_inputs(&markup).iter().all(|input| input.checked));
}

#[test]
fn test_select_all_clears_when_all_selected() {
    let rows = people(3);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    let markup = table.render(&rows, &opts);
    header_input(&markup).unwrap().fire_change(true);
    assert_eq!(selected_ids(&table).len(), 3);

    let markup = table.render(&rows, &opts);
    header_input(&markup).unwrap().fire_change(false);
    assert!(selected_ids(&table).is_empty());
}

#[test]
fn test_select_all_uses_selection_at_click_time() {
    let rows = people(2);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    // Every control below comes from the same, unselected render.
    let markup = table.render(&rows, &opts);
    for input in row_inputs(&markup) {
        input.fire_change(true);
    }
    assert_eq!(selected_ids(&table), vec!["0", "1"]);

    header_input(&markup).unwrap().fire_change(false);
    assert!(selected_ids(&table).is_empty());

    header_input(&markup).unwrap().fire_change(true);
    assert_eq!(selected_ids(&table), vec!["0", "1"]);
}

#[test]
fn test_select_all_from_all_selected_render_fills_after_row_cleared() {
    let rows = people(3);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    let markup = table.render(&rows, &opts);
    header_input(&markup).unwrap().fire_change(true);

    let markup = table.render(&rows, &opts);
    assert!(header_input(&markup).unwrap().checked);
    row_inputs(&markup)[1].fire_change(false);
    header_input(&markup).unwrap().fire_change(true);
    assert_eq!(selected_ids(&table), vec!["0", "1", "2"]);
}

#[test]
fn test_unchecking_row_deselects_it() {
    let rows = people(2);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    let markup = table.render(&rows, &opts);
    header_input(&markup).unwrap().fire_change(true);

    let markup = table.render(&rows, &opts);
    row_inputs(&markup)[0].fire_change(false);
    assert_eq!(selected_ids(&table), vec!["1"]);
}

// ============================================================================
// Single
// ============================================================================

#[test]
fn test_single_renders_radios_without_header_control() {
    let markup = FnTable::new().render(&he_man_and_she_ra(), &options(SelectionMode::Single));

    assert!(header_input(&markup).is_none());
    let inputs = row_inputs(&markup);
    assert_eq!(inputs.len(), 2);
    assert!(inputs.iter().all(|input| input.get_attr("type") == Some("radio")));
}

#[test]
fn test_single_keeps_only_latest_selection() {
    let rows = people(3);
    let table = FnTable::new();
    let opts = options(SelectionMode::Single);

    let markup = table.render(&rows, &opts);
    row_inputs(&markup)[0].fire_change(true);
    assert_eq!(selected_ids(&table), vec!["0"]);

    // Handlers from a stale render still apply to the current selection.
    row_inputs(&markup)[2].fire_change(true);
    assert_eq!(selected_ids(&table), vec!["2"]);

    let markup = table.render(&rows, &opts);
    let checked: Vec<bool> = row_inputs(&markup).iter().map(|input| input.checked).collect();
    assert_eq!(checked, vec![false, false, true]);
}

#[test]
fn test_single_ignores_select_all() {
    let rows = people(3);
    let table = FnTable::new();
    let engine = table.table(&rows, &options(SelectionMode::Single));

    engine.toggle_all_rows_selected(Some(true));
    assert!(table.selection().is_empty());
}

// ============================================================================
// Programmatic updates
// ============================================================================

#[test]
fn test_toggle_row_selected_flips_or_sets() {
    let rows = people(3);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    table.table(&rows, &opts).toggle_row_selected("1", None);
    assert_eq!(selected_ids(&table), vec!["1"]);

    let engine = table.table(&rows, &opts);
    assert!(engine.is_row_selected("1"));
    assert_eq!(engine.row_selection().get("1"), Some(&true));
    engine.toggle_row_selected("1", None);
    assert!(selected_ids(&table).is_empty());

    table.table(&rows, &opts).toggle_row_selected("2", Some(true));
    table.table(&rows, &opts).toggle_row_selected("2", Some(true));
    assert_eq!(selected_ids(&table), vec!["2"]);
}

#[test]
fn test_toggle_row_selected_ignored_without_selection() {
    let rows = people(2);
    let table = FnTable::new();
    let engine = table.table(&rows, &options(SelectionMode::None));

    assert!(!engine.can_select_rows());
    engine.toggle_row_selected("0", Some(true));
    engine.toggle_all_rows_selected(None);
    assert!(table.selection().is_empty());
    assert!(engine.row_selection().is_empty());
}

#[test]
fn test_toggle_all_rows_selected_without_value_flips() {
    let rows = people(2);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple);

    table.table(&rows, &opts).toggle_all_rows_selected(None);
    assert_eq!(selected_ids(&table), vec!["0", "1"]);
    table.table(&rows, &opts).toggle_all_rows_selected(None);
    assert!(selected_ids(&table).is_empty());
}

#[test]
fn test_set_selection_accepts_value_or_function() {
    let table = FnTable::new();

    let mut state = RowSelectionState::new();
    state.insert("a".to_string(), true);
    table.set_selection(Updater::Value(state));
    assert_eq!(selected_ids(&table), vec!["a"]);

    table.set_selection(Updater::with(|previous: &RowSelectionState| {
        let mut next = previous.clone();
        next.insert("b".to_string(), true);
        next
    }));
    assert_eq!(selected_ids(&table), vec!["a", "b"]);
}

#[test]
fn test_selected_rows_follow_row_ids() {
    let rows = people(4);
    let table = FnTable::new();
    let opts = options(SelectionMode::Multiple).row_id(|person, _| person.age.to_string());

    let markup = table.render(&rows, &opts);
    row_inputs(&markup)[2].fire_change(true);

    assert_eq!(selected_ids(&table), vec!["22"]);
    let selected = table.selected_rows(&rows, &opts);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].age, 22);
}

#[test]
fn test_tables_do_not_share_selection() {
    let rows = people(2);
    let opts = options(SelectionMode::Multiple);
    let first = FnTable::new();
    let second = FnTable::new();

    let markup = first.render(&rows, &opts);
    row_inputs(&markup)[0].fire_change(true);

    assert_eq!(selected_ids(&first), vec!["0"]);
    assert!(selected_ids(&second).is_empty());
}
