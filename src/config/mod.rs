//! Configuration module for Linkscan
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use linkscan::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkscan.toml")).unwrap();
//! println!("Gathering src values: {}", config.collector.include_sources);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CollectorConfig, Config, DocumentConfig, FilterConfig, OutputConfig};

// Re-export parser and validation functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
