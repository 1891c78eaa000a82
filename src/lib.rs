//! Await modal dialogs.
//!
//! Dialog toolkits report interaction through independent callbacks: a
//! button was tapped, an item was selected, the dialog went away. This crate
//! bridges those callbacks into one future per dialog that resolves exactly
//! once, with the outcome read when the dialog closes. Dropping the future
//! while the dialog is up dismisses it.
//!
//! The widget toolkit stays behind the [`host::DialogBuilder`] and
//! [`host::DialogHandle`] traits; [`host::headless`] provides an in-memory
//! host for tests and scripted flows.

pub mod bridge;
pub mod config;
pub mod dialog;
pub mod error;
pub mod ext;
pub mod host;
pub mod logging;
mod suspend;

pub use config::{ConfigError, DialogConfig, SelectionPolicy};
pub use dialog::{
    ButtonKind, Buttons, DialogAction, ItemsError, MultiChoiceItems, MultiChoiceResult,
    SingleChoiceItems, SingleChoiceResult,
};
pub use error::DialogError;
pub use ext::DialogBuilderExt;
pub use suspend::{alert, confirm, multi_choice_items, single_choice_items, SuspendDialogs};
