//! Client-side request pacing.
//!
//! Every outbound request acquires one permit from the client's
//! [`RateLimiter`] before it is dispatched. The default limiter is a
//! [`PacedRateLimiter`] spacing requests evenly at the configured quota.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Type alias for a boxed future used by [`RateLimiter`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A gate outbound requests must pass.
///
/// Implementations never reject a request; they only delay it. The future
/// returned by [`acquire`](RateLimiter::acquire) may be dropped at any time
/// (the client races it against the request context), and dropping it must
/// not consume a permit.
///
/// # Example
///
/// ```
/// use scryfall_rs::client::{BoxFuture, RateLimiter};
///
/// struct NoWait;
///
/// impl RateLimiter for NoWait {
///     fn acquire(&self) -> BoxFuture<'_, ()> {
///         Box::pin(async {})
///     }
/// }
/// ```
pub trait RateLimiter: Send + Sync {
    /// Wait until a request may be sent.
    fn acquire(&self) -> BoxFuture<'_, ()>;
}

/// A limiter that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl RateLimiter for Unlimited {
    fn acquire(&self) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}

/// Leaky-bucket pacing limiter.
///
/// Successive permits are handed out at least `1 / requests_per_second`
/// apart. The first permit is immediate. Waiters queue on a fair async
/// mutex, so permits are granted in arrival order and never duplicated.
#[derive(Debug)]
pub struct PacedRateLimiter {
    interval: Duration,
    // Time the last permit was granted; `None` until the first one.
    last: Mutex<Option<Instant>>,
}

impl PacedRateLimiter {
    /// Create a limiter allowing `requests_per_second` sustained requests.
    ///
    /// Returns `None` when the rate is not a positive finite number, or is
    /// so small that the spacing between permits overflows a [`Duration`].
    ///
    /// # Example
    ///
    /// ```
    /// use scryfall_rs::client::PacedRateLimiter;
    ///
    /// let limiter = PacedRateLimiter::new(10.0).unwrap();
    /// assert_eq!(limiter.interval().as_millis(), 100);
    /// ```
    pub fn new(requests_per_second: f64) -> Option<Self> {
        if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
            return None;
        }
        let interval = Duration::try_from_secs_f64(1.0 / requests_per_second).ok()?;
        Some(Self::with_interval(interval))
    }

    /// Create a limiter with an explicit spacing between permits.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// The minimum spacing between two permits.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    async fn wait_for_slot(&self) {
        let mut last = self.last.lock().await;

        if let Some(prev) = *last {
            let next = prev.checked_add(self.interval).unwrap_or_else(far_future);
            if next > Instant::now() {
                tracing::trace!(wait = ?(next - Instant::now()), "rate limiter pacing");
                // Cancellation here drops the guard before `last` is updated.
                sleep_until(next).await;
            }
        }

        *last = Some(Instant::now());
    }
}

// Stand-in for an instant past `Instant`'s range; about 30 years out.
fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(86400 * 365 * 30)
}

impl RateLimiter for PacedRateLimiter {
    fn acquire(&self) -> BoxFuture<'_, ()> {
        Box::pin(self.wait_for_slot())
    }
}
