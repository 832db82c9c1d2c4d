//! DeepL Client - async Rust binding for the DeepL translation API
//!
//! Translates batches of texts, creates glossaries from TSV entries and
//! lists existing glossaries. Each call is a single HTTP round trip.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::DeeplClient,
    config::ClientConfig,
    errors::{DeeplError, Result},
    models::{EntriesFormat, Glossary, GlossaryCreateRequest, GlossaryList, Translation, TranslationRequest},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
