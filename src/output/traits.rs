//! Output handler traits and types
//!
//! This module defines the trait interface for output handlers and the
//! per-document record they receive.

use crate::collector::{CollectionStats, ScanSummary};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output file {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Links collected from one input document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLinks {
    /// Label of the input the document came from
    pub source: String,

    /// URL the document was treated as loaded from
    pub url: String,

    /// Collected links after filtering, in traversal order
    pub links: Vec<String>,

    /// Counters from collection (before filtering)
    pub stats: CollectionStats,
}

/// Destination for collected links
pub trait OutputHandler {
    /// Writes the links of one document
    fn write_document(&mut self, document: &DocumentLinks) -> OutputResult<()>;

    /// Completes the output once every document has been written
    fn finish(&mut self, summary: &ScanSummary) -> OutputResult<()>;
}
