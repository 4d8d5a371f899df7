//! # scryfall-rs
//!
//! An async Rust client for the Scryfall Magic: The Gathering card API.
//!
//! Every call goes through one shared core that paces requests against the
//! API's rate limit, attaches the standard headers, honors caller
//! cancellation and deadlines, and turns non-200 responses into structured
//! errors.
//!
//! ## Features
//!
//! - **Cards**: Search, named and fuzzy lookup, autocomplete, collections
//! - **Reference data**: Sets, catalogs, rulings, symbology, bulk data files
//! - **Rate limiting**: Built-in pacing shared by every clone of a client
//! - **Cancellation**: Per-call cancellation handles and deadlines
//! - **Type Safety**: Strongly-typed models with forward-compatible enums
//! - **Async-first**: Built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scryfall_rs::ScryfallClient;
//! use scryfall_rs::api::SearchOptions;
//!
//! #[tokio::main]
//! async fn main() -> scryfall_rs::Result<()> {
//!     let client = ScryfallClient::new()?;
//!
//!     // Single card lookup
//!     let card = client.cards().named_exact("Black Lotus").await?;
//!     println!("{} ({})", card.name, card.set_name);
//!
//!     // First page of a search
//!     let page = client.cards().search("o:flying t:dragon", &SearchOptions::new()).await?;
//!     for card in &page.data {
//!         println!("{}", card.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration and Cancellation
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use scryfall_rs::{CancellationHandle, ClientConfig, RequestContext};
//!
//! #[tokio::main]
//! async fn main() -> scryfall_rs::Result<()> {
//!     let client = ClientConfig::default()
//!         .with_user_agent("deckbuilder/0.3")
//!         .with_requests_per_second(5.0)
//!         .build()?;
//!
//!     let handle = CancellationHandle::new();
//!     let ctx = RequestContext::new()
//!         .with_cancellation(&handle)
//!         .with_timeout(Duration::from_secs(2));
//!
//!     match client.with_context(ctx).cards().random().await {
//!         Ok(card) => println!("{}", card.name),
//!         Err(e) if e.is_transport_error() => eprintln!("gave up: {}", e),
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{ApiError, Error, Result};
pub use models::Date;
pub use client::{
    CancellationHandle, ClientConfig, Credential, RateLimit, RequestContext, ScryfallClient,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use scryfall_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ApiError, Error, Result};
    pub use crate::models::{
        // Primitives
        Date,
        // Enums
        Color, Lang, Layout, Legality, Rarity, SetType, SortDirection, SortOrder, UniqueMode,
        // Resources
        Card, CardFace, CardIdentifier, CardList, Catalog, CatalogKind, Ruling, Set,
    };
    pub use crate::api::{NameMatch, SearchOptions};
    pub use crate::client::{
        CancellationHandle, ClientConfig, RateLimit, RequestContext, ScryfallClient,
    };
}
