// crates/travelrec-core/src/controller.rs

//! # Interaction Controller
//!
//! Wires the query text, the loader, the search engine, and the render
//! target together. This is the error boundary: load failures are logged
//! and shown as one generic message, never as internal detail.

use crate::loader::{CatalogLoader, FetchCatalog};
use crate::render::{render, RenderTarget};
use crate::search::SearchOutcome;
use tracing::error;

/// Shown for any failure while loading the catalog.
pub const MSG_LOAD_FAILED: &str = "Something went wrong while loading recommendations.";

/// Drives the two user-facing transitions, Search and Clear.
///
/// Both are idempotent: submitting the same query twice renders the same
/// panel, and clearing an already-clear panel stays clear.
pub struct Controller<F: FetchCatalog, T: RenderTarget> {
    loader: CatalogLoader<F>,
    target: T,
    query: String,
}

impl<F: FetchCatalog, T: RenderTarget> Controller<F, T> {
    pub fn new(loader: CatalogLoader<F>, target: T) -> Self {
        Controller {
            loader,
            target,
            query: String::new(),
        }
    }

    /// Current query text, as a text input would hold it.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Search transition: load the catalog, run the search, draw the
    /// outcome. On failure the panel shows the generic message; it is never
    /// left partially rendered, because drawing always clears first.
    pub fn submit(&mut self) {
        let outcome = match self.loader.load() {
            Ok(catalog) => catalog.search(&self.query),
            Err(err) => {
                error!(%err, "search failed");
                SearchOutcome {
                    items: Vec::new(),
                    message: MSG_LOAD_FAILED.to_string(),
                }
            }
        };

        render(&mut self.target, &outcome);
    }

    /// Clear transition: empty the query text and the panel. No message.
    pub fn clear(&mut self) {
        self.query.clear();
        self.target.clear_panel();
    }

    /// Convenience: one full Search transition for the given text.
    pub fn search(&mut self, text: &str) {
        self.set_query(text);
        self.submit();
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, TravelError};
    use crate::render::Card;
    use std::cell::RefCell;

    struct FakeFetch {
        /// `None` simulates a transport-level failure.
        body: Option<String>,
        calls: RefCell<usize>,
    }

    impl FetchCatalog for &FakeFetch {
        fn fetch(&self) -> Result<String> {
            *self.calls.borrow_mut() += 1;
            match &self.body {
                Some(s) => Ok(s.clone()),
                None => Err(TravelError::Status {
                    code: 500,
                    reason: "Internal Server Error".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct PanelSpy {
        clears: usize,
        messages: Vec<String>,
        card_batches: Vec<Vec<Card>>,
    }

    impl RenderTarget for PanelSpy {
        fn clear_panel(&mut self) {
            self.clears += 1;
        }
        fn show_message(&mut self, text: &str) {
            self.messages.push(text.to_string());
        }
        fn show_cards(&mut self, cards: &[Card]) {
            self.card_batches.push(cards.to_vec());
        }
    }

    const BODY: &str = r#"{"beaches": [
        {"name": "Bora Bora", "description": "Lagoon", "imageUrl": "b.jpg"},
        {"name": "Copacabana", "description": "Rio", "imageUrl": "c.jpg"}
    ]}"#;

    fn controller(fetch: &FakeFetch) -> Controller<&FakeFetch, PanelSpy> {
        Controller::new(CatalogLoader::new(fetch), PanelSpy::default())
    }

    #[test]
    fn submit_renders_results() {
        let fetch = FakeFetch {
            body: Some(BODY.to_string()),
            calls: RefCell::new(0),
        };
        let mut ctrl = controller(&fetch);
        ctrl.search("beach");

        let panel = ctrl.target();
        assert_eq!(panel.card_batches.len(), 1);
        assert_eq!(panel.card_batches[0].len(), 2);
        assert!(panel.messages.is_empty());
    }

    #[test]
    fn submit_renders_message_for_empty_query() {
        let fetch = FakeFetch {
            body: Some(BODY.to_string()),
            calls: RefCell::new(0),
        };
        let mut ctrl = controller(&fetch);
        ctrl.submit();

        assert_eq!(
            ctrl.target().messages,
            vec!["Please enter a valid search query."]
        );
    }

    #[test]
    fn repeated_submits_load_once() {
        let fetch = FakeFetch {
            body: Some(BODY.to_string()),
            calls: RefCell::new(0),
        };
        let mut ctrl = controller(&fetch);
        ctrl.search("beach");
        ctrl.search("temple");
        assert_eq!(*fetch.calls.borrow(), 1);
    }

    #[test]
    fn load_failure_shows_generic_message() {
        let fetch = FakeFetch {
            body: None,
            calls: RefCell::new(0),
        };
        let mut ctrl = controller(&fetch);
        ctrl.search("beach");

        let panel = ctrl.target();
        assert_eq!(panel.messages, vec![MSG_LOAD_FAILED]);
        assert!(panel.card_batches.is_empty());
        // The panel was cleared before the message was drawn.
        assert_eq!(panel.clears, 1);
    }

    #[test]
    fn clear_resets_query_and_panel() {
        let fetch = FakeFetch {
            body: Some(BODY.to_string()),
            calls: RefCell::new(0),
        };
        let mut ctrl = controller(&fetch);
        ctrl.search("beach");
        ctrl.clear();

        assert_eq!(ctrl.query(), "");
        assert_eq!(ctrl.target().clears, 2);
        // Clear shows no message.
        assert!(ctrl.target().messages.is_empty());
    }
}
