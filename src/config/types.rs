use serde::{Deserialize, Serialize};

/// Dialog behavior shared by every operation run through
/// [`SuspendDialogs`](crate::SuspendDialogs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Label of the single `alert` button (default: "Ok").
    pub alert_button_label: String,
    /// What a single choice dialog reports when closed without a button.
    pub selection_on_dismiss: SelectionPolicy,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            alert_button_label: default_alert_button_label(),
            selection_on_dismiss: SelectionPolicy::default(),
        }
    }
}

/// Selection reported by a single choice dialog whose action is
/// [`DialogAction::None`](crate::DialogAction::None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Report the last selected option, like any other close.
    #[default]
    KeepLast,
    /// Report no selection.
    Reset,
}

impl SelectionPolicy {
    pub(crate) fn apply(
        self,
        action: crate::DialogAction,
        selected: Option<usize>,
    ) -> Option<usize> {
        match self {
            Self::Reset if !action.is_button() => None,
            _ => selected,
        }
    }
}

fn default_alert_button_label() -> String {
    "Ok".to_string()
}
