//! In-memory dialog host.
//!
//! Nothing is rendered. Shown dialogs are queued on the [`HeadlessHost`] and
//! driven through [`HeadlessDialog`], which replays user gestures (button
//! taps, selection, toggles, outside tap, back) against the registered
//! handlers following the host contract in [`crate::host`].

use std::collections::VecDeque;
use std::pin::pin;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::dialog::ButtonKind;

use super::{
    ClickHandler, DialogBuilder, DialogHandle, DismissHandler, HostError, SelectHandler,
    ToggleHandler,
};

/// How a headless dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Button(ButtonKind),
    OutsideTap,
    Back,
    /// Closed through [`DialogHandle::dismiss`].
    Programmatic,
}

/// Host that records every shown dialog for later driving.
#[derive(Clone, Default)]
pub struct HeadlessHost {
    inner: Arc<HostInner>,
}

#[derive(Default)]
struct HostInner {
    pending: Mutex<VecDeque<HeadlessDialog>>,
    shown: Mutex<Vec<HeadlessDialog>>,
    notify: Notify,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh, unshown descriptor bound to this host.
    pub fn builder(&self) -> HeadlessBuilder {
        HeadlessBuilder {
            host: self.clone(),
            title: None,
            message: None,
            buttons: Vec::new(),
            list: ChoiceList::Empty,
            on_dismiss: None,
            show_error: None,
        }
    }

    /// Wait until a dialog is shown and take it from the queue.
    pub async fn next_dialog(&self) -> HeadlessDialog {
        loop {
            // Register interest before checking the queue so a show() racing
            // with this call is not missed.
            let mut notified = pin!(self.inner.notify.notified());
            notified.as_mut().enable();
            if let Some(dialog) = self.try_next_dialog() {
                return dialog;
            }
            notified.await;
        }
    }

    /// Take the oldest shown dialog not yet handed out, if any.
    pub fn try_next_dialog(&self) -> Option<HeadlessDialog> {
        self.inner.pending.lock().pop_front()
    }

    /// Number of dialogs shown so far.
    pub fn shown_count(&self) -> usize {
        self.inner.shown.lock().len()
    }

    /// Every dialog shown so far, oldest first.
    pub fn shown(&self) -> Vec<HeadlessDialog> {
        self.inner.shown.lock().clone()
    }

    fn register(&self, dialog: HeadlessDialog) {
        self.inner.shown.lock().push(dialog.clone());
        self.inner.pending.lock().push_back(dialog);
        self.inner.notify.notify_waiters();
    }
}

enum ChoiceList {
    Empty,
    Single {
        items: Vec<String>,
        selected: Option<usize>,
        on_select: Option<SelectHandler>,
    },
    Multi {
        items: Vec<String>,
        checked: Vec<bool>,
        on_toggle: Option<ToggleHandler>,
    },
}

struct HeadlessButton {
    kind: ButtonKind,
    label: String,
    on_click: Option<ClickHandler>,
}

/// Unshown descriptor for the headless host.
pub struct HeadlessBuilder {
    host: HeadlessHost,
    title: Option<String>,
    message: Option<String>,
    buttons: Vec<HeadlessButton>,
    list: ChoiceList,
    on_dismiss: Option<DismissHandler>,
    show_error: Option<String>,
}

impl HeadlessBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Make [`DialogBuilder::show`] fail, as a toolkit does when its window
    /// is already gone.
    pub fn fail_show(mut self, reason: impl Into<String>) -> Self {
        self.show_error = Some(reason.into());
        self
    }
}

impl DialogBuilder for HeadlessBuilder {
    type Handle = HeadlessDialog;

    fn set_button(&mut self, kind: ButtonKind, label: &str, on_click: ClickHandler) {
        self.buttons.retain(|button| button.kind != kind);
        self.buttons.push(HeadlessButton {
            kind,
            label: label.to_string(),
            on_click: Some(on_click),
        });
    }

    fn set_single_choice_items(
        &mut self,
        items: &[String],
        selected_index: Option<usize>,
        on_select: SelectHandler,
    ) {
        self.list = ChoiceList::Single {
            items: items.to_vec(),
            selected: selected_index,
            on_select: Some(on_select),
        };
    }

    fn set_multi_choice_items(
        &mut self,
        items: &[String],
        checked: &[bool],
        on_toggle: ToggleHandler,
    ) {
        self.list = ChoiceList::Multi {
            items: items.to_vec(),
            checked: checked.to_vec(),
            on_toggle: Some(on_toggle),
        };
    }

    fn set_on_dismiss(&mut self, on_dismiss: DismissHandler) {
        self.on_dismiss = Some(on_dismiss);
    }

    fn show(self) -> Result<HeadlessDialog, HostError> {
        if let Some(reason) = self.show_error {
            return Err(HostError::new(reason));
        }

        let dialog = HeadlessDialog {
            state: Arc::new(Mutex::new(DialogState {
                title: self.title,
                message: self.message,
                buttons: self.buttons,
                list: self.list,
                showing: true,
                dismissed_by: None,
            })),
            on_dismiss: Arc::new(Mutex::new(DismissSlot {
                handler: self.on_dismiss,
                fired: 0,
            })),
        };
        tracing::trace!(title = ?dialog.title(), "headless dialog shown");
        self.host.register(dialog.clone());
        Ok(dialog)
    }
}

struct DialogState {
    title: Option<String>,
    message: Option<String>,
    buttons: Vec<HeadlessButton>,
    list: ChoiceList,
    showing: bool,
    dismissed_by: Option<DismissReason>,
}

struct DismissSlot {
    handler: Option<DismissHandler>,
    fired: usize,
}

/// A dialog on the headless host.
///
/// Gesture methods return `false` when the gesture does not apply: the
/// dialog is closed, the button slot is empty, or the index is out of range.
#[derive(Clone)]
pub struct HeadlessDialog {
    state: Arc<Mutex<DialogState>>,
    on_dismiss: Arc<Mutex<DismissSlot>>,
}

impl HeadlessDialog {
    pub fn title(&self) -> Option<String> {
        self.state.lock().title.clone()
    }

    pub fn message(&self) -> Option<String> {
        self.state.lock().message.clone()
    }

    /// Shown buttons in registration order.
    pub fn buttons(&self) -> Vec<(ButtonKind, String)> {
        self.state
            .lock()
            .buttons
            .iter()
            .map(|button| (button.kind, button.label.clone()))
            .collect()
    }

    pub fn button_label(&self, kind: ButtonKind) -> Option<String> {
        self.state
            .lock()
            .buttons
            .iter()
            .find(|button| button.kind == kind)
            .map(|button| button.label.clone())
    }

    pub fn items(&self) -> Vec<String> {
        match &self.state.lock().list {
            ChoiceList::Empty => Vec::new(),
            ChoiceList::Single { items, .. } | ChoiceList::Multi { items, .. } => items.clone(),
        }
    }

    /// Selection shown by a single choice list.
    pub fn selected_index(&self) -> Option<usize> {
        match &self.state.lock().list {
            ChoiceList::Single { selected, .. } => *selected,
            _ => None,
        }
    }

    /// Check marks shown by a multi choice list.
    pub fn checked(&self) -> Vec<bool> {
        match &self.state.lock().list {
            ChoiceList::Multi { checked, .. } => checked.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_showing(&self) -> bool {
        self.state.lock().showing
    }

    pub fn dismissed_by(&self) -> Option<DismissReason> {
        self.state.lock().dismissed_by
    }

    /// How many times the dismissal handler has run.
    pub fn dismiss_fired(&self) -> usize {
        self.on_dismiss.lock().fired
    }

    /// Tap a button: runs its handler, then closes the dialog.
    pub fn click(&self, kind: ButtonKind) -> bool {
        let handler = {
            let mut state = self.state.lock();
            if !state.showing {
                return false;
            }
            let Some(button) = state.buttons.iter_mut().find(|button| button.kind == kind) else {
                return false;
            };
            button.on_click.take()
        };

        if let Some(mut on_click) = handler {
            on_click();
            let mut state = self.state.lock();
            if let Some(button) = state.buttons.iter_mut().find(|button| button.kind == kind) {
                button.on_click = Some(on_click);
            }
        }

        self.close(DismissReason::Button(kind))
    }

    /// Select an option of a single choice list. The dialog stays open.
    pub fn select(&self, index: usize) -> bool {
        {
            let mut state = self.state.lock();
            if !state.showing {
                return false;
            }
            match &mut state.list {
                ChoiceList::Single {
                    items, selected, ..
                } if index < items.len() => *selected = Some(index),
                _ => return false,
            }
        }
        self.emit_select(index)
    }

    /// Toggle an option of a multi choice list. The dialog stays open.
    pub fn toggle(&self, index: usize) -> bool {
        let now_checked = {
            let mut state = self.state.lock();
            if !state.showing {
                return false;
            }
            match &mut state.list {
                ChoiceList::Multi { checked, .. } if index < checked.len() => {
                    checked[index] = !checked[index];
                    checked[index]
                }
                _ => return false,
            }
        };
        self.emit_toggle(index, now_checked)
    }

    /// Deliver a raw selection event without validating the index, as a
    /// misbehaving toolkit might.
    pub fn emit_select(&self, index: usize) -> bool {
        let handler = match &mut self.state.lock().list {
            ChoiceList::Single { on_select, .. } => on_select.take(),
            _ => None,
        };
        let Some(mut on_select) = handler else {
            return false;
        };
        on_select(index);
        if let ChoiceList::Single { on_select: slot, .. } = &mut self.state.lock().list {
            *slot = Some(on_select);
        }
        true
    }

    /// Deliver a raw toggle event without validating the index.
    pub fn emit_toggle(&self, index: usize, checked: bool) -> bool {
        let handler = match &mut self.state.lock().list {
            ChoiceList::Multi { on_toggle, .. } => on_toggle.take(),
            _ => None,
        };
        let Some(mut on_toggle) = handler else {
            return false;
        };
        on_toggle(index, checked);
        if let ChoiceList::Multi { on_toggle: slot, .. } = &mut self.state.lock().list {
            *slot = Some(on_toggle);
        }
        true
    }

    pub fn tap_outside(&self) -> bool {
        self.close(DismissReason::OutsideTap)
    }

    pub fn press_back(&self) -> bool {
        self.close(DismissReason::Back)
    }

    /// Run the dismissal handler again regardless of state, the way some
    /// toolkits double-fire when an explicit dismiss races a user dismissal.
    pub fn refire_dismiss(&self) {
        self.fire_dismiss();
    }

    fn close(&self, reason: DismissReason) -> bool {
        {
            let mut state = self.state.lock();
            if !state.showing {
                return false;
            }
            state.showing = false;
            state.dismissed_by = Some(reason);
        }
        tracing::trace!(?reason, "headless dialog closed");
        self.fire_dismiss();
        true
    }

    fn fire_dismiss(&self) {
        let handler = {
            let mut slot = self.on_dismiss.lock();
            slot.fired += 1;
            slot.handler.take()
        };
        if let Some(mut on_dismiss) = handler {
            on_dismiss();
            self.on_dismiss.lock().handler = Some(on_dismiss);
        }
    }
}

impl DialogHandle for HeadlessDialog {
    fn dismiss(&self) {
        self.close(DismissReason::Programmatic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, Box<dyn FnMut() + Send + 'static>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (
            count,
            Box::new(move || {
                handle.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn click_runs_handler_then_dismisses() {
        let host = HeadlessHost::new();
        let mut builder = host.builder().title("Title");
        let (clicks, on_click) = counter();
        let (dismissals, on_dismiss) = counter();
        builder.set_button(ButtonKind::Positive, "Save", on_click);
        builder.set_on_dismiss(on_dismiss);
        let dialog = builder.show().unwrap();

        assert!(dialog.click(ButtonKind::Positive));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
        assert!(!dialog.is_showing());
        assert_eq!(
            dialog.dismissed_by(),
            Some(DismissReason::Button(ButtonKind::Positive))
        );

        // closed dialogs ignore further gestures
        assert!(!dialog.click(ButtonKind::Positive));
        assert!(!dialog.tap_outside());
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_button_is_not_clickable() {
        let host = HeadlessHost::new();
        let dialog = host.builder().show().unwrap();
        assert!(!dialog.click(ButtonKind::Neutral));
        assert!(dialog.is_showing());
    }

    #[test]
    fn programmatic_dismiss_fires_once() {
        let host = HeadlessHost::new();
        let mut builder = host.builder();
        let (dismissals, on_dismiss) = counter();
        builder.set_on_dismiss(on_dismiss);
        let dialog = builder.show().unwrap();

        dialog.dismiss();
        dialog.dismiss();
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
        assert_eq!(dialog.dismissed_by(), Some(DismissReason::Programmatic));

        dialog.refire_dismiss();
        assert_eq!(dismissals.load(Ordering::SeqCst), 2);
        assert_eq!(dialog.dismiss_fired(), 2);
    }

    #[test]
    fn toggle_flips_check_mark() {
        let host = HeadlessHost::new();
        let mut builder = host.builder();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        builder.set_multi_choice_items(
            &["a".to_string(), "b".to_string()],
            &[false, true],
            Box::new(move |index, checked| sink.lock().push((index, checked))),
        );
        let dialog = builder.show().unwrap();

        assert!(dialog.toggle(1));
        assert!(dialog.toggle(0));
        assert!(!dialog.toggle(2));
        assert_eq!(dialog.checked(), vec![true, false]);
        assert_eq!(*seen.lock(), vec![(1, false), (0, true)]);
    }

    #[test]
    fn show_failure_registers_nothing() {
        let host = HeadlessHost::new();
        let err = host.builder().fail_show("window gone").show().err();
        assert_eq!(err, Some(HostError::new("window gone")));
        assert_eq!(host.shown_count(), 0);
        assert!(host.try_next_dialog().is_none());
    }

    #[tokio::test]
    async fn next_dialog_waits_for_show() {
        let host = HeadlessHost::new();
        let waiter = tokio::spawn({
            let host = host.clone();
            async move { host.next_dialog().await.title() }
        });
        tokio::task::yield_now().await;

        host.builder().title("Later").show().unwrap();
        assert_eq!(waiter.await.unwrap(), Some("Later".to_string()));
    }
}
