// crates/travelrec-core/src/lib.rs

pub mod common;
pub mod controller;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod render;
pub mod search; // Keyword routing + full-text fallback
pub mod text;
pub mod timezone;

// Re-exports
pub use crate::error::{Result, TravelError};
// Export the Model Types
pub use crate::model::{Catalog, Category, Country, Item, Place};
pub use crate::common::CatalogStats;
pub use crate::controller::Controller;
pub use crate::loader::{CatalogLoader, FetchCatalog, HttpFetch, DATA_PATH};
pub use crate::render::{render, Card, RenderTarget};
pub use crate::search::{SearchOutcome, MSG_EMPTY_QUERY, MSG_NO_RESULTS};
