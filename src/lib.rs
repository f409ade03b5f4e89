//! confsift - conference program sifter.
//!
//! Extracts structured session listings from conference program PDFs (or
//! plain text lists), reconstructs them into records with time, place, title,
//! and body, then ranks and summarizes them for export.
//!
//! # Pipeline
//!
//! 1. [`extract`] - document-to-text providers (PDF text layer with raw-byte
//!    fallback, plain text passthrough)
//! 2. [`parser`] - block splitting and the session reconstruction state
//!    machine (the core of the crate)
//! 3. [`lang`] - best-effort language detection
//! 4. [`enrich`] - keyword scoring, priority ranking, summarization
//! 5. [`export`] - table, CSV, and JSON output
//!
//! The parse pass is a pure function of the input text and configuration:
//! single-threaded, synchronous, no shared state across documents.

pub mod config;
pub mod enrich;
pub mod export;
pub mod extract;
pub mod lang;
pub mod parser;

pub use config::Config;
pub use parser::{ParserConfig, SessionReconstructor, SessionRecord};
