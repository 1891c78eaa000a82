//! The four dialog operations.
//!
//! Each one registers its handlers on the descriptor returned by `factory`,
//! shows it and suspends until the dialog closes. Button taps and list
//! events only record state; the result is read when the dialog closes,
//! whichever way that happens.

use std::future::Future;

use crate::bridge::{suspend_dialog, Accumulator};
use crate::config::{DialogConfig, SelectionPolicy};
use crate::dialog::{
    ButtonKind, Buttons, DialogAction, MultiChoiceItems, MultiChoiceResult, SingleChoiceItems,
    SingleChoiceResult,
};
use crate::error::DialogError;
use crate::host::DialogBuilder;

/// Show a dialog with a single acknowledgement button.
///
/// Resolves once the dialog closes, through the button or otherwise.
pub async fn alert<B, F>(button_label: impl Into<String>, factory: F) -> Result<(), DialogError>
where
    B: DialogBuilder,
    F: FnOnce() -> B,
{
    let label = button_label.into();
    suspend_dialog("alert", factory, move |builder| {
        builder.set_button(ButtonKind::Positive, &label, Box::new(|| {}));
        || ()
    })
    .await
}

/// Show a dialog with up to three buttons and report which one closed it.
///
/// Resolves with [`DialogAction::None`] when the dialog is closed without a
/// button.
pub async fn confirm<B, F>(buttons: Buttons, factory: F) -> Result<DialogAction, DialogError>
where
    B: DialogBuilder,
    F: FnOnce() -> B,
{
    suspend_dialog("confirm", factory, move |builder| {
        let action = Accumulator::new(DialogAction::None);
        wire_buttons(builder, &buttons, &action);
        move || action.snapshot()
    })
    .await
}

/// Show a single-selection list.
///
/// Selecting an option does not close the dialog. The result carries the
/// option selected when the dialog closed, including when it was closed
/// without a button.
pub async fn single_choice_items<B, F>(
    buttons: Buttons,
    items: SingleChoiceItems,
    factory: F,
) -> Result<SingleChoiceResult, DialogError>
where
    B: DialogBuilder,
    F: FnOnce() -> B,
{
    single_choice(buttons, items, SelectionPolicy::KeepLast, factory).await
}

/// Show a multi-selection list.
///
/// Toggling an option does not close the dialog. The result carries the
/// check state of every option when the dialog closed.
pub async fn multi_choice_items<B, F>(
    buttons: Buttons,
    items: MultiChoiceItems,
    factory: F,
) -> Result<MultiChoiceResult, DialogError>
where
    B: DialogBuilder,
    F: FnOnce() -> B,
{
    suspend_dialog("multi_choice_items", factory, move |builder| {
        let action = Accumulator::new(DialogAction::None);
        let checked = Accumulator::new(items.checked().to_vec());

        let writer = checked.clone();
        builder.set_multi_choice_items(
            items.items(),
            items.checked(),
            Box::new(move |index, is_checked| {
                writer.update(|checked| {
                    let len = checked.len();
                    match checked.get_mut(index) {
                        Some(slot) => *slot = is_checked,
                        None => tracing::warn!(index, len, "toggle index out of range ignored"),
                    }
                })
            }),
        );
        wire_buttons(builder, &buttons, &action);

        move || MultiChoiceResult {
            action: action.snapshot(),
            checked: checked.snapshot(),
        }
    })
    .await
}

async fn single_choice<B, F>(
    buttons: Buttons,
    items: SingleChoiceItems,
    policy: SelectionPolicy,
    factory: F,
) -> Result<SingleChoiceResult, DialogError>
where
    B: DialogBuilder,
    F: FnOnce() -> B,
{
    suspend_dialog("single_choice_items", factory, move |builder| {
        let action = Accumulator::new(DialogAction::None);
        let selected = Accumulator::new(items.selected_index());

        let len = items.len();
        let writer = selected.clone();
        builder.set_single_choice_items(
            items.items(),
            items.selected_index(),
            Box::new(move |index| {
                if index < len {
                    writer.set(Some(index));
                } else {
                    tracing::warn!(index, len, "selection index out of range ignored");
                }
            }),
        );
        wire_buttons(builder, &buttons, &action);

        move || {
            let action = action.snapshot();
            SingleChoiceResult {
                action,
                selected_index: policy.apply(action, selected.snapshot()),
            }
        }
    })
    .await
}

/// Each shown button records its action; the host closes the dialog after.
fn wire_buttons<B: DialogBuilder>(
    builder: &mut B,
    buttons: &Buttons,
    action: &Accumulator<DialogAction>,
) {
    for (kind, label) in buttons.iter() {
        let action = action.clone();
        builder.set_button(kind, label, Box::new(move || action.set(kind.action())));
    }
}

/// The dialog operations bound to a [`DialogConfig`].
#[derive(Debug, Clone, Default)]
pub struct SuspendDialogs {
    config: DialogConfig,
}

impl SuspendDialogs {
    pub fn new(config: DialogConfig) -> Self {
        Self { config }
    }

    /// Load the configuration from its default location.
    pub fn from_config_file() -> Result<Self, crate::config::ConfigError> {
        DialogConfig::load().map(Self::new)
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// [`alert`] with the configured button label.
    pub fn alert<B, F>(&self, factory: F) -> impl Future<Output = Result<(), DialogError>>
    where
        B: DialogBuilder,
        F: FnOnce() -> B,
    {
        alert(self.config.alert_button_label.clone(), factory)
    }

    pub fn confirm<B, F>(
        &self,
        buttons: Buttons,
        factory: F,
    ) -> impl Future<Output = Result<DialogAction, DialogError>>
    where
        B: DialogBuilder,
        F: FnOnce() -> B,
    {
        confirm(buttons, factory)
    }

    /// [`single_choice_items`] honoring the configured
    /// [`SelectionPolicy`].
    pub fn single_choice_items<B, F>(
        &self,
        buttons: Buttons,
        items: SingleChoiceItems,
        factory: F,
    ) -> impl Future<Output = Result<SingleChoiceResult, DialogError>>
    where
        B: DialogBuilder,
        F: FnOnce() -> B,
    {
        single_choice(buttons, items, self.config.selection_on_dismiss, factory)
    }

    pub fn multi_choice_items<B, F>(
        &self,
        buttons: Buttons,
        items: MultiChoiceItems,
        factory: F,
    ) -> impl Future<Output = Result<MultiChoiceResult, DialogError>>
    where
        B: DialogBuilder,
        F: FnOnce() -> B,
    {
        multi_choice_items(buttons, items, factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::headless::HeadlessHost;

    #[tokio::test]
    async fn out_of_range_events_leave_accumulators_intact() {
        let host = HeadlessHost::new();
        let items = MultiChoiceItems::new(["a", "b"], vec![true, false]).unwrap();
        let task = tokio::spawn({
            let host = host.clone();
            multi_choice_items(Buttons::new(), items, move || host.builder())
        });

        let dialog = host.next_dialog().await;
        assert!(dialog.emit_toggle(5, true));
        assert!(dialog.toggle(1));
        dialog.tap_outside();

        let result = task.await.unwrap().unwrap();
        assert_eq!(result.checked, vec![true, true]);
    }

    #[tokio::test]
    async fn out_of_range_selection_is_ignored() {
        let host = HeadlessHost::new();
        let items = SingleChoiceItems::new(["a", "b"], 1).unwrap();
        let task = tokio::spawn({
            let host = host.clone();
            single_choice_items(Buttons::new().positive("Ok"), items, move || host.builder())
        });

        let dialog = host.next_dialog().await;
        assert!(dialog.emit_select(9));
        dialog.click(ButtonKind::Positive);

        let result = task.await.unwrap().unwrap();
        assert_eq!(result.selected_index, Some(1));
        assert_eq!(result.action, DialogAction::Positive);
    }

    #[tokio::test]
    async fn alert_shows_only_the_acknowledgement_button() {
        let host = HeadlessHost::new();
        let task = tokio::spawn({
            let host = host.clone();
            alert("Ok", move || host.builder().title("Selected Option"))
        });

        let dialog = host.next_dialog().await;
        assert_eq!(dialog.buttons(), vec![(ButtonKind::Positive, "Ok".to_string())]);
        assert!(dialog.items().is_empty());
        dialog.click(ButtonKind::Positive);
        task.await.unwrap().unwrap();
    }
}
