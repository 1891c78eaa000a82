use thiserror::Error;

use crate::host::HostError;

/// Ways a dialog operation can end without a result.
///
/// Cancellation is not one of them: a cancelled operation is a dropped
/// future and produces nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("dialog host could not show the dialog: {0}")]
    Show(#[from] HostError),

    #[error("dialog host dropped the dismissal handler without firing it")]
    Abandoned,
}
