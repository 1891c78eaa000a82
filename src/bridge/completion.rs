//! Single-resolution completion pair.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::DialogError;

type CancelHook = Box<dyn FnOnce() + Send + 'static>;

/// Create a linked completion handle and suspension.
///
/// The [`Completion`] is handed to callbacks; the [`Suspension`] is awaited
/// by the caller.
pub fn suspension<T>() -> (Completion<T>, Suspension<T>) {
    let (sender, receiver) = oneshot::channel();
    let completion = Completion {
        sender: Arc::new(Mutex::new(Some(sender))),
    };
    let suspension = Suspension {
        receiver,
        on_cancel: None,
        finished: false,
    };
    (completion, suspension)
}

/// Resolving side of a suspension. Cloneable; the first `resolve` wins.
pub struct Completion<T> {
    sender: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> Completion<T> {
    /// Deliver `value` to the waiting suspension.
    ///
    /// Returns `false` without side effects if a value was already delivered
    /// or the suspension was cancelled.
    pub fn resolve(&self, value: T) -> bool {
        let Some(sender) = self.sender.lock().take() else {
            tracing::trace!("duplicate resolution ignored");
            return false;
        };
        if sender.send(value).is_err() {
            tracing::trace!("resolution after cancellation ignored");
            return false;
        }
        true
    }

    /// True once a value was delivered or delivery became impossible.
    pub fn is_done(&self) -> bool {
        match self.sender.lock().as_ref() {
            Some(sender) => sender.is_closed(),
            None => true,
        }
    }
}

/// Awaiting side of a suspension.
///
/// Resolves with the first value passed to [`Completion::resolve`]. Dropping
/// it before that is cancellation: further resolutions become no-ops and the
/// hook registered with [`invoke_on_cancellation`](Self::invoke_on_cancellation)
/// runs.
pub struct Suspension<T> {
    receiver: oneshot::Receiver<T>,
    on_cancel: Option<CancelHook>,
    finished: bool,
}

impl<T> Suspension<T> {
    /// Run `hook` if this suspension is dropped before it resolves.
    ///
    /// Replaces any earlier hook.
    pub fn invoke_on_cancellation<F>(&mut self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_cancel = Some(Box::new(hook));
    }
}

impl<T> Future for Suspension<T> {
    type Output = Result<T, DialogError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Ok(value)) => Ok(value),
            Poll::Ready(Err(_)) => Err(DialogError::Abandoned),
        };
        this.finished = true;
        this.on_cancel = None;
        Poll::Ready(result)
    }
}

impl<T> Drop for Suspension<T> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        // Close first: the hook usually closes the dialog, whose dismissal
        // path must not be able to deliver into a cancelled suspension.
        self.receiver.close();
        if let Some(hook) = self.on_cancel.take() {
            tracing::debug!("suspension cancelled before resolution");
            hook();
        }
    }
}
