use std::fmt;

use serde::{Deserialize, Serialize};

/// The action which finished a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DialogAction {
    /// Finished by tapping outside, a back action or a programmatic dismiss.
    #[default]
    None,
    /// Finished by tapping the positive button.
    Positive,
    /// Finished by tapping the negative button.
    Negative,
    /// Finished by tapping the neutral button.
    Neutral,
}

impl DialogAction {
    /// True when a button, rather than an external dismissal, ended the dialog.
    pub fn is_button(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for DialogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// One of the three button slots a modal descriptor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Positive,
    Negative,
    Neutral,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// The action recorded when this button is tapped.
    pub fn action(self) -> DialogAction {
        match self {
            Self::Positive => DialogAction::Positive,
            Self::Negative => DialogAction::Negative,
            Self::Neutral => DialogAction::Neutral,
        }
    }
}
