//! API service modules for Scryfall endpoints.
//!
//! Each service provides methods for interacting with a specific
//! group of Scryfall endpoints. Services are obtained from
//! [`ScryfallClient`](crate::ScryfallClient) and run under the client's
//! [`RequestContext`](crate::RequestContext).

mod bulk_data;
mod cards;
mod catalogs;
mod rulings;
mod sets;
mod symbology;

pub use bulk_data::BulkDataService;
pub use cards::{CardsService, NameMatch, SearchOptions, MAX_COLLECTION_IDENTIFIERS};
pub use catalogs::CatalogsService;
pub use rulings::RulingsService;
pub use sets::SetsService;
pub use symbology::SymbologyService;
