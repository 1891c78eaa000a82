//! Dialog data model.
//!
//! Inputs handed to the dialog operations and the results they resolve
//! with. Everything here is plain data: created per invocation, owned by
//! the caller once the operation resolves.

mod action;
mod buttons;
mod items;
mod result;

pub use action::{ButtonKind, DialogAction};
pub use buttons::Buttons;
pub use items::{ItemsError, MultiChoiceItems, SingleChoiceItems};
pub use result::{MultiChoiceResult, SingleChoiceResult};
