// crates/travelrec-core/src/text.rs

//! Text folding used by the search engine.
//!
//! Matching is deliberately plain: trim plus Unicode lowercase, nothing
//! else. The routing contract depends on exact substring containment of the
//! folded forms, so no accent stripping or tokenization happens here.

/// Fold a string for comparison: trim surrounding whitespace and lowercase.
pub fn fold_text(s: &str) -> String {
    s.trim().to_lowercase()
}
