//! HTTP client and request pipeline for the Scryfall API.
//!
//! This module provides the main entry point [`ScryfallClient`]. Every call
//! goes through the same pipeline: the endpoint path is resolved against the
//! base URI, the request waits for a [`RateLimiter`] permit, it is sent
//! under the client's [`RequestContext`], and the response is decoded either
//! as the requested type (status 200) or as an [`ApiError`](crate::ApiError).
//!
//! # Example
//!
//! ```no_run
//! use scryfall_rs::ClientConfig;
//!
//! # async fn example() -> scryfall_rs::Result<()> {
//! let client = ClientConfig::default()
//!     .with_user_agent("my-deck-tool/0.3")
//!     .build()?;
//!
//! let rulings = client.rulings().for_card("f2b9983e-20d4-4d12-9e2c-ec6d9a345787").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod envelope;
mod http;
mod rate_limit;

pub use config::{
    ClientConfig, RateLimit, DEFAULT_BASE_URI, DEFAULT_REQUESTS_PER_SECOND, DEFAULT_TIMEOUT,
};
pub use context::{CancellationHandle, RequestContext};
pub use http::{Credential, ScryfallClient};
pub use rate_limit::{BoxFuture, PacedRateLimiter, RateLimiter, Unlimited};
pub(crate) use http::ClientInner;
