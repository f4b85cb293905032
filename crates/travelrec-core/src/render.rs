// crates/travelrec-core/src/render.rs

//! # Result Renderer
//!
//! Turns a [`SearchOutcome`] into drawing calls against an abstract panel.
//! Hosts implement [`RenderTarget`] for their UI surface; the engine never
//! touches a concrete toolkit.

use crate::model::Item;
use crate::search::SearchOutcome;
use tracing::info;

/// Capability set a host panel must provide.
///
/// Implementations are expected to create their panel lazily on first use
/// and reuse it afterwards; a host whose container is missing should make
/// all three operations no-ops.
pub trait RenderTarget {
    /// Remove all prior panel content.
    fn clear_panel(&mut self);

    /// Show a single status message block.
    fn show_message(&mut self, text: &str);

    /// Show one card per entry, in order.
    fn show_cards(&mut self, cards: &[Card]);
}

/// Display view of an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// `"{category} • {country}"`, or just the category when the item has
    /// no owning country.
    pub meta: String,
    pub title: String,
    pub description: String,
    /// `None` when the item carries no image; a host that fails to load the
    /// image drops it from this card without affecting the others.
    pub image_url: Option<String>,
}

impl Card {
    pub fn from_item(item: &Item) -> Self {
        let meta = if item.country.is_empty() {
            item.category.to_string()
        } else {
            format!("{} • {}", item.category, item.country)
        };

        let title = if item.name.is_empty() {
            "Untitled".to_string()
        } else {
            item.name.clone()
        };

        Card {
            meta,
            title,
            description: item.description.clone(),
            image_url: if item.image_url.is_empty() {
                None
            } else {
                Some(item.image_url.clone())
            },
        }
    }

    /// The card's action control. Side effect only: a log line, no
    /// navigation, no state change.
    pub fn visit(&self) {
        info!(title = %self.title, meta = %self.meta, "visit requested");
    }
}

/// Draw an outcome onto a target.
///
/// The panel is always cleared first, so stale cards or messages never
/// accumulate and a failed draw cannot leave mixed content behind.
pub fn render(target: &mut dyn RenderTarget, outcome: &SearchOutcome) {
    target.clear_panel();

    if !outcome.message.is_empty() {
        target.show_message(&outcome.message);
        return;
    }

    let cards: Vec<Card> = outcome.items.iter().map(Card::from_item).collect();
    target.show_cards(&cards);
}
