use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::Style;

/// Callback attached to a form control. Receives the control's new `checked` value.
pub type ChangeHandler = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Children(c) => write!(f, "Children({c:?})"),
        }
    }
}

/// A node in the rendered markup tree.
///
/// An element with an empty tag is a bare text fragment: it serializes to its
/// escaped text and nothing else.
#[derive(Clone, Default)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub style: Style,
    pub content: Content,

    // Form control properties
    pub checked: bool,
    /// Tri-state visual flag of a checkbox. Not an attribute; hosts apply it
    /// as a property after the element is mounted.
    pub indeterminate: bool,
    pub disabled: bool,
    pub on_change: Option<ChangeHandler>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("style", &self.style)
            .field("content", &self.content)
            .field("checked", &self.checked)
            .field("indeterminate", &self.indeterminate)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    /// A bare text fragment.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// An `<input>` of the given type.
    pub fn input(kind: &str) -> Self {
        Self::new("input").attr("type", kind)
    }

    pub fn is_text(&self) -> bool {
        self.tag.is_empty()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Descendants (including self) with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }

    /// First descendant (including self) matching the predicate.
    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.find_dyn(&predicate)
    }

    fn find_dyn(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements()
            .iter()
            .find_map(|child| child.find_dyn(predicate))
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    /// Simulate a change event on this element. Returns false when no
    /// handler is attached or the element is disabled.
    pub fn fire_change(&self, checked: bool) -> bool {
        if self.disabled {
            return false;
        }
        match &self.on_change {
            Some(handler) => {
                handler(checked);
                true
            }
            None => false,
        }
    }
}
