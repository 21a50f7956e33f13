//! Markdown report generation
//!
//! This module renders collected links as a markdown report: one section per
//! input document followed by totals for the whole run.

use crate::collector::ScanSummary;
use crate::output::traits::{DocumentLinks, OutputHandler, OutputResult};
use chrono::{DateTime, Utc};
use std::io::Write;

/// Buffers documents and writes a markdown report on [`OutputHandler::finish`]
#[derive(Debug)]
pub struct MarkdownOutput<W: Write> {
    writer: W,
    documents: Vec<DocumentLinks>,
}

impl<W: Write> MarkdownOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputHandler for MarkdownOutput<W> {
    fn write_document(&mut self, document: &DocumentLinks) -> OutputResult<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary) -> OutputResult<()> {
        let markdown = format_markdown_report(&self.documents, summary, Utc::now());
        self.writer.write_all(markdown.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Formats collected links as markdown
///
/// # Arguments
///
/// * `documents` - Links per input document, in input order
/// * `summary` - Totals for the run
/// * `generated_at` - Timestamp printed in the report header
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(
    documents: &[DocumentLinks],
    summary: &ScanSummary,
    generated_at: DateTime<Utc>,
) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Linkscan Report\n\n");
    md.push_str(&format!(
        "- **Generated**: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Per-document links
    for document in documents {
        md.push_str(&format!("## {}\n\n", document.source));
        md.push_str(&format!("Document URL: `{}`\n\n", document.url));

        if document.links.is_empty() {
            md.push_str("_No links found._\n\n");
            continue;
        }

        for (index, link) in document.links.iter().enumerate() {
            md.push_str(&format!("{}. `{}`\n", index + 1, link));
        }
        md.push('\n');
    }

    // Totals
    md.push_str("## Totals\n\n");
    md.push_str("| Metric | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Documents | {} |\n", summary.documents));
    md.push_str(&format!("| Failed Inputs | {} |\n", summary.failed));
    md.push_str(&format!(
        "| Elements Scanned | {} |\n",
        summary.stats.elements_scanned
    ));
    md.push_str(&format!("| Links Collected | {} |\n", summary.stats.links));
    md.push_str(&format!("| From `src` | {} |\n", summary.stats.sources));
    md.push_str(&format!(
        "| Non-string References | {} |\n",
        summary.stats.opaque_references
    ));
    md.push_str(&format!("| Links Written | {} |\n", summary.links_written));

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CollectionStats;
    use chrono::TimeZone;

    fn summary() -> ScanSummary {
        ScanSummary {
            documents: 2,
            failed: 0,
            links_written: 2,
            config_hash: Some("abc123".to_string()),
            stats: CollectionStats {
                elements_scanned: 12,
                links: 3,
                sources: 0,
                opaque_references: 1,
            },
        }
    }

    fn documents() -> Vec<DocumentLinks> {
        vec![
            DocumentLinks {
                source: "index.html".to_string(),
                url: "https://example.com/".to_string(),
                links: vec![
                    "https://example.com/a".to_string(),
                    "https://example.com/b".to_string(),
                ],
                ..Default::default()
            },
            DocumentLinks {
                source: "empty.html".to_string(),
                url: "https://example.com/empty".to_string(),
                links: vec![],
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_report_contents() {
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let md = format_markdown_report(&documents(), &summary(), generated_at);

        assert!(md.starts_with("# Linkscan Report\n"));
        assert!(md.contains("- **Generated**: 2024-05-01 12:30:00 UTC"));
        assert!(md.contains("- **Config Hash**: abc123"));
        assert!(md.contains("## index.html"));
        assert!(md.contains("1. `https://example.com/a`\n2. `https://example.com/b`"));
        assert!(md.contains("## empty.html\n\nDocument URL: `https://example.com/empty`\n\n_No links found._"));
        assert!(md.contains("| Elements Scanned | 12 |"));
        assert!(md.contains("| Non-string References | 1 |"));
        assert!(md.contains("| Links Written | 2 |"));
    }

    #[test]
    fn test_report_without_config_hash() {
        let mut summary = summary();
        summary.config_hash = None;
        let md = format_markdown_report(&[], &summary, Utc::now());
        assert!(!md.contains("Config Hash"));
        assert!(md.contains("## Totals"));
    }

    #[test]
    fn test_handler_writes_on_finish() {
        let mut output = MarkdownOutput::new(Vec::new());
        for document in documents() {
            output.write_document(&document).unwrap();
        }
        output.finish(&summary()).unwrap();

        let written = String::from_utf8(output.into_inner()).unwrap();
        let first = written.find("## index.html").unwrap();
        let second = written.find("## empty.html").unwrap();
        assert!(first < second);
    }
}
