//! travelrec-cli
//! =============
//!
//! Command-line interface for the `travelrec-core` recommendation engine.
//!
//! This crate primarily provides a binary (`travelrec`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install travelrec-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! travelrec --help
//! travelrec stats
//! travelrec search "beach resort"
//! travelrec interactive
//! ```
//!
//! For programmatic access to the catalog types and the search engine, use
//! the [`travelrec-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
