//! Tests for the selection cell renderers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fn_table::display_columns::{multi_select, single_select, MultiSelectProps, SingleSelectProps};

#[test]
fn test_multi_select_is_checkbox() {
    let input = multi_select(MultiSelectProps {
        checked: true,
        ..Default::default()
    });
    assert_eq!(input.tag, "input");
    assert_eq!(input.get_attr("type"), Some("checkbox"));
    assert!(input.has_class("fn-cell-multi-select"));
    assert!(input.checked);
}

#[test]
fn test_indeterminate_shown_when_unchecked() {
    let input = multi_select(MultiSelectProps {
        indeterminate: true,
        ..Default::default()
    });
    assert!(input.indeterminate);
    assert!(input.to_html().contains("data-indeterminate=\"true\""));
}

#[test]
fn test_indeterminate_suppressed_when_checked() {
    let input = multi_select(MultiSelectProps {
        checked: true,
        indeterminate: true,
        ..Default::default()
    });
    assert!(!input.indeterminate);
    assert!(input.checked);
}

#[test]
fn test_extra_class_is_kept() {
    let input = multi_select(MultiSelectProps {
        class: Some("compact".to_string()),
        ..Default::default()
    });
    assert_eq!(input.classes, vec!["compact", "fn-cell-multi-select"]);
}

#[test]
fn test_single_select_is_radio() {
    let input = single_select(SingleSelectProps {
        disabled: true,
        ..Default::default()
    });
    assert_eq!(input.get_attr("type"), Some("radio"));
    assert!(input.has_class("fn-cell-select"));
    assert!(input.disabled);
    assert_eq!(input.to_html(), "<input class=\"fn-cell-select\" type=\"radio\" disabled>");
}

#[test]
fn test_change_handler_receives_checked() {
    let seen = Arc::new(AtomicBool::new(false));
    let sink = Arc::clone(&seen);
    let input = single_select(SingleSelectProps {
        on_change: Some(Arc::new(move |checked| sink.store(checked, Ordering::SeqCst))),
        ..Default::default()
    });

    assert!(input.fire_change(true));
    assert!(seen.load(Ordering::SeqCst));
}

#[test]
fn test_disabled_control_ignores_change() {
    let seen = Arc::new(AtomicBool::new(false));
    let sink = Arc::clone(&seen);
    let input = multi_select(MultiSelectProps {
        disabled: true,
        on_change: Some(Arc::new(move |checked| sink.store(checked, Ordering::SeqCst))),
        ..Default::default()
    });

    assert!(!input.fire_change(true));
    assert!(!seen.load(Ordering::SeqCst));
}
