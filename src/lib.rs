//! Linkscan: collects hyperlink references from HTML documents
//!
//! This crate visits every element of an already-loaded document in document
//! order and returns the resolved `href` of each element that exposes one.
//! The surrounding modules load documents from disk or stdin, filter the
//! collected links and render them.

pub mod collector;
pub mod config;
pub mod document;
pub mod input;
pub mod output;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Linkscan operations
#[derive(Debug, Error)]
pub enum LinkscanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("{failed} of {total} inputs could not be read")]
    InputsFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid link pattern: {0}")]
    InvalidPattern(String),
}

/// Errors raised while resolving inputs and reading documents
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input list {path}: {source}")]
    List {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read document from stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Cannot derive a file URL for {path}")]
    FileUrl { path: PathBuf },
}

/// Result type alias for Linkscan operations
pub type Result<T> = std::result::Result<T, LinkscanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for input operations
pub type InputResult<T> = std::result::Result<T, InputError>;

// Re-export commonly used types
pub use collector::{
    collect_links, Collection, CollectionStats, CollectorOptions, LinkCollector, LinkFilter,
};
pub use config::Config;
pub use document::{Document, Element, HtmlDocument, Reference};
