use crate::markup::{ChangeHandler, Element};

/// Properties of a multi-select checkbox.
#[derive(Clone, Default)]
pub struct MultiSelectProps {
    pub checked: bool,
    pub indeterminate: bool,
    pub disabled: bool,
    pub on_change: Option<ChangeHandler>,
    pub class: Option<String>,
}

/// Render a selection checkbox.
///
/// The indeterminate look only applies while the box is unchecked.
pub fn multi_select(props: MultiSelectProps) -> Element {
    let mut input = Element::input("checkbox")
        .class(props.class.unwrap_or_default())
        .class("fn-cell-multi-select")
        .checked(props.checked)
        .indeterminate(props.indeterminate && !props.checked)
        .disabled(props.disabled);
    if let Some(handler) = props.on_change {
        input = input.on_change(handler);
    }
    input
}
