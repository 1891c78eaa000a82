use serde::{Deserialize, Serialize};

use super::action::DialogAction;

/// Outcome of a single choice dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoiceResult {
    /// Action which finished the dialog.
    pub action: DialogAction,
    /// Option selected when the dialog closed.
    ///
    /// Tracks selection events only, never the button that was pressed.
    /// `None` for an empty list, or when the dialog was dismissed without a
    /// button under [`SelectionPolicy::Reset`](crate::config::SelectionPolicy::Reset).
    pub selected_index: Option<usize>,
}

/// Outcome of a multi choice dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiChoiceResult {
    /// Action which finished the dialog.
    pub action: DialogAction,
    /// Checked state per option, index-aligned with the input items.
    ///
    /// Options `Berlin`, `Potsdam`, `Bayern` with the first two checked
    /// resolve to `[true, true, false]`.
    pub checked: Vec<bool>,
}

impl MultiChoiceResult {
    /// Indices of the checked options, ascending.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(index, &checked)| checked.then_some(index))
            .collect()
    }
}
