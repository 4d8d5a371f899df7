//! Per-call cancellation and deadlines.
//!
//! A [`RequestContext`] bounds how long a call may wait, both for a rate
//! limiter permit and for the HTTP round trip. When the context is cancelled
//! or its deadline passes first, the call fails with
//! [`Error::Cancelled`] or [`Error::DeadlineExceeded`] and yields no result.
//!
//! Dropping a call's future also abandons it; contexts are for when the
//! decision to stop is made somewhere else.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use scryfall_rs::{CancellationHandle, RequestContext, ScryfallClient};
//!
//! # async fn example() -> scryfall_rs::Result<()> {
//! let client = ScryfallClient::new()?;
//! let handle = CancellationHandle::new();
//! let ctx = RequestContext::new()
//!     .with_cancellation(&handle)
//!     .with_timeout(Duration::from_secs(5));
//!
//! let scoped = client.with_context(ctx);
//! // `handle.cancel()` from another task aborts in-flight calls on `scoped`.
//! let card = scoped.cards().random().await?;
//! # Ok(())
//! # }
//! ```

use std::future::{pending, Future};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

use crate::{Error, Result};

/// A cloneable trigger that cancels every context built from it.
#[derive(Debug, Clone)]
pub struct CancellationHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancellationHandle {
    /// Create a handle in the not-cancelled state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Cancel all contexts sharing this handle. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // The sender lives in `self`, so the channel cannot close here.
            pending::<()>().await;
        }
    }
}

impl Default for CancellationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation signal and optional deadline for API calls.
///
/// The default context never cancels and has no deadline. The deadline is
/// absolute: a context built with [`with_timeout`](Self::with_timeout) and
/// reused later counts from when it was built, not from each call.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: Option<CancellationHandle>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that never cancels and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort calls when `handle` is cancelled.
    pub fn with_cancellation(mut self, handle: &CancellationHandle) -> Self {
        self.cancel = Some(handle.clone());
        self
    }

    /// Abort calls still pending `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Abort calls still pending at `deadline`.
    ///
    /// An earlier deadline already set on the context is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// The deadline, if one is set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the context is already cancelled or past its deadline.
    pub fn is_done(&self) -> bool {
        self.cancel.as_ref().is_some_and(|c| c.is_cancelled())
            || self.deadline.is_some_and(|d| d <= Instant::now())
    }

    /// Resolves with the reason once the context is cancelled or expires.
    async fn done(&self) -> Error {
        let cancelled = async {
            match &self.cancel {
                Some(handle) => handle.cancelled().await,
                None => pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Error::Cancelled,
            _ = expired => Error::DeadlineExceeded,
        }
    }

    /// Drive `fut` to completion unless the context ends first.
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.cancel.is_none() && self.deadline.is_none() {
            return fut.await;
        }

        tokio::select! {
            biased;
            reason = self.done() => Err(reason),
            result = fut => result,
        }
    }
}
