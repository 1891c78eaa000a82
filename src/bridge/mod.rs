//! Callback-to-future bridge.
//!
//! [`suspend_dialog`] turns a dialog host's callbacks into one awaitable
//! result:
//!
//! ```text
//! factory ─→ configure (buttons, lists) ─→ on_dismiss ─→ show ─→ await
//!                 │ writes                     │ reads        │
//!                 └──────→ Accumulator ←───────┘              │
//!                                       drop before resolve ──┴─→ dismiss
//! ```
//!
//! The dismissal handler is the only resolution point. Dropping the returned
//! future before it resolves is cancellation and closes the live dialog.

mod accumulator;
mod completion;

pub use accumulator::Accumulator;
pub use completion::{suspension, Completion, Suspension};

use crate::error::DialogError;
use crate::host::{DialogBuilder, DialogHandle};

/// Show a dialog and wait for it to close.
///
/// `configure` registers the operation's button and list handlers on the
/// descriptor and returns a snapshot closure; the value it produces when the
/// dialog closes is the result. The dismissal handler is attached after
/// `configure` and the dialog is shown only once every handler is in place.
///
/// # Errors
/// [`DialogError::Show`] if the host cannot show the dialog,
/// [`DialogError::Abandoned`] if the host drops the dismissal handler
/// without calling it.
///
/// # Cancellation
/// Dropping the future while the dialog is open dismisses the dialog. The
/// resulting dismissal callback is ignored.
pub async fn suspend_dialog<B, F, C, S, T>(
    operation: &'static str,
    factory: F,
    configure: C,
) -> Result<T, DialogError>
where
    B: DialogBuilder,
    F: FnOnce() -> B,
    C: FnOnce(&mut B) -> S,
    S: FnMut() -> T + Send + 'static,
    T: Send + 'static,
{
    let suspension = {
        let mut builder = factory();
        let mut snapshot = configure(&mut builder);
        let (completion, mut suspension) = suspension();

        builder.set_on_dismiss(Box::new(move || {
            if completion.resolve(snapshot()) {
                tracing::debug!(operation, "dialog resolved");
            }
        }));

        let handle = builder.show().inspect_err(|err| {
            tracing::debug!(operation, error = %err, "dialog host refused to show");
        })?;
        tracing::debug!(operation, "dialog shown");

        suspension.invoke_on_cancellation(move || {
            tracing::debug!(operation, "dialog cancelled, dismissing");
            handle.dismiss();
        });
        suspension
    };

    suspension.await
}
