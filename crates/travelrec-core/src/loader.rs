// crates/travelrec-core/src/loader.rs

//! # Data Loader
//!
//! Fetches the catalog document and memoizes it in a single-slot cache, so
//! at most one network round trip happens per loader lifetime.

use crate::error::{Result, TravelError};
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::time::Duration;
use tracing::{debug, trace};

/// Relative resource path of the catalog document.
pub const DATA_PATH: &str = "travel_recommendation_api.json";

/// Transport seam: anything that can produce the raw catalog body.
///
/// The engine only ever asks for the one fixed document, so the contract is
/// a single nullary call. Tests substitute an in-memory implementation.
pub trait FetchCatalog {
    fn fetch(&self) -> Result<String>;
}

/// HTTP transport for [`FetchCatalog`].
///
/// Requests `<base>/travel_recommendation_api.json` with `Cache-Control:
/// no-store`, so every call that reaches the network actually goes to the
/// network rather than an intermediate cache.
pub struct HttpFetch {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpFetch {
    pub fn new(base_url: &str) -> Self {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), DATA_PATH);
        HttpFetch {
            url,
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FetchCatalog for HttpFetch {
    fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TravelError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        Ok(response.text()?)
    }
}

/// Owns the fetcher and the process-wide catalog slot.
///
/// The slot is written at most once: a successful [`load`](Self::load)
/// populates it and every later call returns the cached document without
/// I/O. A failed load leaves it empty, so the next call retries. Tests can
/// [`reset`](Self::reset) the slot explicitly.
pub struct CatalogLoader<F: FetchCatalog> {
    fetcher: F,
    cache: OnceCell<Catalog>,
}

impl<F: FetchCatalog> CatalogLoader<F> {
    pub fn new(fetcher: F) -> Self {
        CatalogLoader {
            fetcher,
            cache: OnceCell::new(),
        }
    }

    /// Return the catalog, fetching and parsing it on first use.
    ///
    /// `get_or_try_init` serializes racing callers, so even two loads
    /// arriving before the first completes produce a single fetch.
    pub fn load(&self) -> Result<&Catalog> {
        self.cache.get_or_try_init(|| {
            let body = self.fetcher.fetch()?;
            let catalog = Catalog::from_json(&body)?;

            let stats = catalog.stats();
            debug!(
                countries = stats.countries,
                cities = stats.cities,
                temples = stats.temples,
                beaches = stats.beaches,
                "catalog loaded"
            );
            trace!(?catalog, "catalog document");

            Ok(catalog)
        })
    }

    /// Whether the slot currently holds a catalog.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Empty the slot so the next [`load`](Self::load) fetches again.
    pub fn reset(&mut self) {
        self.cache.take();
    }
}
