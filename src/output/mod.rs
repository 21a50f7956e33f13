//! Output module for rendering collected links
//!
//! This module handles:
//! - Plain text output, one link per line
//! - Markdown reports with per-document sections and totals
//! - Choosing between stdout and an output file

mod markdown;
mod plain;
mod traits;

pub use markdown::{format_markdown_report, MarkdownOutput};
pub use plain::PlainTextOutput;
pub use traits::{DocumentLinks, OutputError, OutputHandler, OutputResult};

use crate::config::OutputConfig;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Rendering of collected links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One link per line
    #[default]
    Plain,
    /// Markdown report
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Creates the output handler described by the configuration
///
/// Output goes to the configured file when a path is set, otherwise to stdout.
pub fn create_output_handler(config: &OutputConfig) -> OutputResult<Box<dyn OutputHandler>> {
    let writer = open_writer(config.path.as_deref())?;

    Ok(match config.format {
        OutputFormat::Plain => Box::new(PlainTextOutput::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownOutput::new(writer)),
    })
}

fn open_writer(path: Option<&str>) -> OutputResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| OutputError::Create {
                path: path.to_string(),
                source,
            })?;
            tracing::debug!("Writing output to {}", path);
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
