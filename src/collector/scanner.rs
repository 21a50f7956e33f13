//! Scanner - runs input documents through collection, filtering and output
//!
//! For every input source the scanner:
//! 1. Reads and parses the document
//! 2. Collects links in traversal order
//! 3. Applies the include/exclude filter
//! 4. Hands the result to the output handler
//!
//! A source that cannot be read is logged and skipped; the run reports
//! failure once every other source has been written.

use crate::collector::{CollectionStats, CollectorOptions, LinkCollector, LinkFilter};
use crate::config::Config;
use crate::document::HtmlDocument;
use crate::input::{load_document, InputSource};
use crate::output::{DocumentLinks, OutputHandler};
use crate::{LinkscanError, Result};
use url::Url;

/// Totals for one scanner run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Documents read and scanned
    pub documents: usize,

    /// Sources that could not be read
    pub failed: usize,

    /// Links handed to the output after filtering
    pub links_written: usize,

    /// Hash of the configuration file, when one was used
    pub config_hash: Option<String>,

    /// Collection counters summed over every document
    pub stats: CollectionStats,
}

/// Runs input sources through a [`LinkCollector`] and a [`LinkFilter`]
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    collector: LinkCollector,
    filter: LinkFilter,
    base_url: Option<Url>,
    config_hash: Option<String>,
}

impl Scanner {
    /// Creates a scanner from a collector and a filter
    pub fn new(collector: LinkCollector, filter: LinkFilter) -> Self {
        Self {
            collector,
            filter,
            base_url: None,
            config_hash: None,
        }
    }

    /// Builds a scanner from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scanner)` - Filter patterns compiled and base URL parsed
    /// * `Err(LinkscanError)` - A pattern or the base URL is invalid
    pub fn from_config(config: &Config) -> Result<Self> {
        let collector = LinkCollector::new(CollectorOptions::from(&config.collector));
        let filter = LinkFilter::try_from(&config.filter)?;
        let base_url = config
            .document
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()?;

        Ok(Self::new(collector, filter).with_base_url(base_url))
    }

    /// Treats every document as loaded from `base_url`
    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Records the configuration hash in the run summary
    pub fn with_config_hash(mut self, config_hash: Option<String>) -> Self {
        self.config_hash = config_hash;
        self
    }

    /// Collects and filters the links of one parsed document
    pub fn scan_document(&self, source: &InputSource, document: &HtmlDocument) -> DocumentLinks {
        let collection = self.collector.collect_with_stats(document);
        let collected = collection.links.len();
        let links = if self.filter.is_pass_through() {
            collection.links
        } else {
            self.filter.apply(collection.links)
        };

        tracing::debug!(
            "{}: {} elements, {} links collected, {} kept after filtering",
            source,
            collection.stats.elements_scanned,
            collected,
            links.len()
        );

        DocumentLinks {
            source: source.to_string(),
            url: document.url().to_string(),
            links,
            stats: collection.stats,
        }
    }

    /// Scans every source in order and writes the results to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(ScanSummary)` - Every source was read
    /// * `Err(LinkscanError::InputsFailed)` - Some sources could not be read;
    ///   the others were still written
    /// * `Err(LinkscanError::Output)` - Writing the output failed
    pub fn run(
        &self,
        sources: &[InputSource],
        output: &mut dyn OutputHandler,
    ) -> Result<ScanSummary> {
        let mut summary = ScanSummary {
            config_hash: self.config_hash.clone(),
            ..Default::default()
        };

        for source in sources {
            let document = match load_document(source, self.base_url.as_ref()) {
                Ok(document) => document,
                Err(e) => {
                    tracing::error!("Skipping {}: {}", source, e);
                    summary.failed += 1;
                    continue;
                }
            };

            let links = self.scan_document(source, &document);
            output.write_document(&links)?;

            summary.documents += 1;
            summary.links_written += links.links.len();
            summary.stats += links.stats;
        }

        output.finish(&summary)?;

        tracing::info!(
            "Scanned {} documents: {} elements, {} links collected, {} written",
            summary.documents,
            summary.stats.elements_scanned,
            summary.stats.links,
            summary.links_written
        );

        if summary.failed > 0 {
            return Err(LinkscanError::InputsFailed {
                failed: summary.failed,
                total: sources.len(),
            });
        }

        Ok(summary)
    }
}
