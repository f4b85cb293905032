// crates/travelrec-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded catalog.
///
/// Returned by [`Catalog::stats`](crate::model::Catalog::stats); the counts
/// reflect the materialized in-memory document after lenient parsing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub cities: usize,
    pub temples: usize,
    pub beaches: usize,
}
