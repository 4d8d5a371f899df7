//! Data models for the Scryfall API.
//!
//! Models are organized by resource:
//!
//! - [`primitives`] - Shared value types like [`Date`]
//! - [`enums`] - Enumerations for colors, layouts, legalities, etc.
//! - [`card`] - Cards, faces, prices and search results
//! - [`set`] - Sets
//! - [`bulk`] - Bulk data file metadata
//! - [`catalog`] - Catalogs of names and types
//! - [`ruling`] - Rulings
//! - [`symbol`] - Card symbols and parsed mana costs
//!
//! Decoding ignores fields the models don't declare, but a missing or
//! mistyped required field fails the call.

pub mod primitives;
pub mod enums;
pub mod card;
pub mod set;
pub mod bulk;
pub mod catalog;
pub mod ruling;
pub mod symbol;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use card::*;
pub use set::*;
pub use bulk::*;
pub use catalog::*;
pub use ruling::*;
pub use symbol::*;
