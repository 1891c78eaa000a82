//! Dialog host seam.
//!
//! The bridge never talks to a widget toolkit directly. A host provides a
//! [`DialogBuilder`] (the configurable, not yet shown modal descriptor) and
//! a [`DialogHandle`] for the live dialog once shown.
//!
//! # Host contract
//!
//! - Tapping a button runs its click handler, then closes the dialog.
//! - Selecting or toggling an item runs the matching handler; the dialog
//!   stays open.
//! - Every way of closing (button, outside tap, back, [`DialogHandle::dismiss`])
//!   fires the dismissal handler. Firing it more than once is tolerated.

pub mod headless;

use thiserror::Error;

use crate::dialog::ButtonKind;

/// Called when a button is tapped.
pub type ClickHandler = Box<dyn FnMut() + Send + 'static>;

/// Called with the index of the newly selected option.
pub type SelectHandler = Box<dyn FnMut(usize) + Send + 'static>;

/// Called with the index of the toggled option and its new checked state.
pub type ToggleHandler = Box<dyn FnMut(usize, bool) + Send + 'static>;

/// Called every time the dialog closes.
pub type DismissHandler = Box<dyn FnMut() + Send + 'static>;

/// The host failed to put a dialog on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A configurable modal descriptor that has not been shown yet.
///
/// Title and message are host specific and applied by the caller before a
/// builder reaches the bridge.
pub trait DialogBuilder {
    /// The live dialog produced by [`show`](Self::show).
    type Handle: DialogHandle;

    /// Show a button in `kind`'s slot.
    fn set_button(&mut self, kind: ButtonKind, label: &str, on_click: ClickHandler);

    /// Show a single-selection list with `selected_index` pre-selected.
    fn set_single_choice_items(
        &mut self,
        items: &[String],
        selected_index: Option<usize>,
        on_select: SelectHandler,
    );

    /// Show a multi-selection list seeded with `checked`.
    fn set_multi_choice_items(
        &mut self,
        items: &[String],
        checked: &[bool],
        on_toggle: ToggleHandler,
    );

    /// Register the handler fired whenever the dialog closes.
    fn set_on_dismiss(&mut self, on_dismiss: DismissHandler);

    /// Put the dialog on screen.
    fn show(self) -> Result<Self::Handle, HostError>;
}

/// A dialog currently on screen.
pub trait DialogHandle: Send + 'static {
    /// Close the dialog. Must fire the dismissal handler if the dialog was
    /// still showing; a no-op otherwise.
    fn dismiss(&self);
}
