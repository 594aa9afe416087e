//! locmerge - merge translation bundles into JSON locale files
//!
//! locmerge reads an existing JSON locale file, replaces (or inserts) the
//! top-level keys given by a translation bundle, and writes the document back
//! with 2-space indentation and non-ASCII text kept verbatim.
//!
//! ## Module Structure
//!
//! - `bundles`: Built-in translation bundles (English, Malayalam)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `merge`: The top-level JSON merge-update operation

pub mod bundles;
pub mod cli;
pub mod config;
pub mod merge;
