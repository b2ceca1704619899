//! Search module.
//!
//! Listings, in-memory sorting and pagination over the catalog.

mod listing;
mod query;
mod results;

pub use listing::{Listing, HOME_FEATURED_LIMIT, NEW_ARRIVALS_LIMIT};
pub use query::{ProductQuery, SortOption};
pub use results::{Pagination, SearchResults};
