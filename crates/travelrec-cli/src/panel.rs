//! Terminal adapter for the core render seam.
//!
//! A scrolling terminal cannot take content back, so "clearing" the panel
//! ends the current block and the next draw starts a fresh one. Write errors
//! are swallowed: a closed or missing output stream makes every render
//! operation a no-op.

use std::io::{self, Write};

use travelrec_core::timezone::zone_for;
use travelrec_core::{Card, RenderTarget};

pub struct TerminalPanel<W: Write = io::Stdout> {
    out: W,
    opened: bool,
    cards: Vec<Card>,
}

impl TerminalPanel<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalPanel<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalPanel<W> {
    pub fn with_writer(out: W) -> Self {
        TerminalPanel {
            out,
            opened: false,
            cards: Vec::new(),
        }
    }

    /// Lazy panel setup; prints the header once, then reuses the panel.
    fn ensure_panel(&mut self) {
        if !self.opened {
            self.opened = true;
            let _ = writeln!(self.out, "=== Recommendations ===");
        }
    }

    /// Trigger the action control of a currently shown card.
    /// Returns false when no card with that title is on the panel.
    pub fn visit(&self, title: &str) -> bool {
        match self.cards.iter().find(|c| c.title.eq_ignore_ascii_case(title)) {
            Some(card) => {
                card.visit();
                true
            }
            None => false,
        }
    }
}

impl<W: Write> RenderTarget for TerminalPanel<W> {
    fn clear_panel(&mut self) {
        self.cards.clear();
        if self.opened {
            let _ = writeln!(self.out);
        }
    }

    fn show_message(&mut self, text: &str) {
        self.ensure_panel();
        let _ = writeln!(self.out, "{text}");
    }

    fn show_cards(&mut self, cards: &[Card]) {
        self.ensure_panel();
        for card in cards {
            let _ = writeln!(self.out, "[{}] {}", card.meta, card.title);
            if !card.description.is_empty() {
                let _ = writeln!(self.out, "    {}", card.description);
            }
            if let Some(url) = &card.image_url {
                let _ = writeln!(self.out, "    image: {url}");
            }
            if let Some(zone) = zone_for(&card.title) {
                let _ = writeln!(self.out, "    local zone: {zone}");
            }
        }
        self.cards = cards.to_vec();
    }
}
