//! Shared helpers for driving dialogs on the headless host.

#![allow(dead_code, unused_imports)]

use std::future::Future;

use suspend_dialogs::host::headless::{HeadlessDialog, HeadlessHost};
use suspend_dialogs::{ButtonKind, Buttons};
use tokio::task::JoinHandle;

pub const CITIES: [&str; 4] = ["Hello", "World", "Berlin", "Germany"];

/// Save / Cancel / Minimize, as used by the demo screens.
pub fn all_buttons() -> Buttons {
    Buttons::new()
        .positive("Save")
        .negative("Cancel")
        .neutral("Minimize")
}

/// Every way a user can close a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Close {
    Button(ButtonKind),
    OutsideTap,
    Back,
}

pub const EVERY_CLOSE: [Close; 5] = [
    Close::Button(ButtonKind::Positive),
    Close::Button(ButtonKind::Negative),
    Close::Button(ButtonKind::Neutral),
    Close::OutsideTap,
    Close::Back,
];

impl Close {
    pub fn apply(self, dialog: &HeadlessDialog) -> bool {
        match self {
            Close::Button(kind) => dialog.click(kind),
            Close::OutsideTap => dialog.tap_outside(),
            Close::Back => dialog.press_back(),
        }
    }
}

/// Run a dialog operation on the runtime and hand back its live dialog.
pub async fn start<T, Fut>(host: &HeadlessHost, operation: Fut) -> (HeadlessDialog, JoinHandle<T>)
where
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::spawn(operation);
    let dialog = host.next_dialog().await;
    (dialog, task)
}
