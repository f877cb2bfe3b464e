//! Retained element tree the table renders into.

mod html;
mod node;
mod style;

pub use html::escape;
pub use node::{ChangeHandler, Content, Element};
pub use style::{Alignment, Style};

