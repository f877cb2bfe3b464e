use crate::markup::{ChangeHandler, Element};

/// Properties of a single-select radio button.
#[derive(Clone, Default)]
pub struct SingleSelectProps {
    pub checked: bool,
    pub disabled: bool,
    pub on_change: Option<ChangeHandler>,
    pub class: Option<String>,
}

pub fn single_select(props: SingleSelectProps) -> Element {
    let mut input = Element::input("radio")
        .class(props.class.unwrap_or_default())
        .class("fn-cell-select")
        .checked(props.checked)
        .disabled(props.disabled);
    if let Some(handler) = props.on_change {
        input = input.on_change(handler);
    }
    input
}
