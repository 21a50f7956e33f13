//! Link collection over a [`Document`]
//!
//! This module contains the core collection logic, including:
//! - The single ordered pass over every element (`collect_links`)
//! - Optional `src` gathering and per-document statistics (`LinkCollector`)
//! - Include/exclude filtering of collected links (`LinkFilter`)
//! - Running many input documents through collection and output (`Scanner`)

mod filter;
mod scanner;

pub use filter::{LinkFilter, MATCH_ALL, MATCH_NOTHING};
pub use scanner::{ScanSummary, Scanner};

use crate::config::CollectorConfig;
use crate::document::{Document, Element, Reference};
use std::ops::AddAssign;

/// Collects the resolved reference of every element exposing one
///
/// Elements are visited in traversal order. An element contributes its value
/// when its reference is a non-empty string; opaque (non-string) references
/// and empty strings are skipped. The result is neither deduplicated nor
/// filtered further.
///
/// # Example
///
/// ```
/// use linkscan::{collect_links, HtmlDocument};
/// use url::Url;
///
/// let html = r#"<a href="https://example.com/a">A</a><p>text</p><link href="https://example.com/b">"#;
/// let document = HtmlDocument::parse(html, Url::parse("https://example.com/").unwrap());
/// assert_eq!(
///     collect_links(&document),
///     vec!["https://example.com/a", "https://example.com/b"]
/// );
/// ```
pub fn collect_links<D: Document>(document: &D) -> Vec<String> {
    LinkCollector::default().collect(document)
}

/// Options controlling what a [`LinkCollector`] gathers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorOptions {
    /// Fall back to an element's `src` when it has no usable `href`
    pub include_sources: bool,
}

impl From<&CollectorConfig> for CollectorOptions {
    fn from(config: &CollectorConfig) -> Self {
        Self {
            include_sources: config.include_sources,
        }
    }
}

/// Counters gathered while collecting links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    /// Number of elements visited
    pub elements_scanned: usize,

    /// Number of links collected
    pub links: usize,

    /// Number of collected links that came from `src`
    pub sources: usize,

    /// Number of elements whose reference was not a string
    pub opaque_references: usize,
}

impl AddAssign for CollectionStats {
    fn add_assign(&mut self, other: Self) {
        self.elements_scanned += other.elements_scanned;
        self.links += other.links;
        self.sources += other.sources;
        self.opaque_references += other.opaque_references;
    }
}

/// Links collected from one document, with counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub links: Vec<String>,
    pub stats: CollectionStats,
}

/// Collects links from documents according to [`CollectorOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkCollector {
    options: CollectorOptions,
}

impl LinkCollector {
    /// Creates a collector with the given options
    pub fn new(options: CollectorOptions) -> Self {
        Self { options }
    }

    /// The options this collector was built with
    pub fn options(&self) -> CollectorOptions {
        self.options
    }

    /// Collects links from `document` in traversal order
    pub fn collect<D: Document>(&self, document: &D) -> Vec<String> {
        self.collect_with_stats(document).links
    }

    /// Collects links from `document` and counts what was seen
    pub fn collect_with_stats<D: Document>(&self, document: &D) -> Collection {
        let mut collection = Collection::default();

        for element in document.elements() {
            collection.stats.elements_scanned += 1;

            let reference = element.reference();
            if let Some(link) = reference.as_ref().and_then(Reference::as_link) {
                collection.links.push(link.to_string());
                continue;
            }

            if reference.as_ref().is_some_and(Reference::is_opaque) {
                collection.stats.opaque_references += 1;
            }

            if self.options.include_sources {
                if let Some(Reference::Resolved(source)) = element.source() {
                    if !source.is_empty() {
                        collection.links.push(source);
                        collection.stats.sources += 1;
                    }
                }
            }
        }

        collection.stats.links = collection.links.len();
        collection
    }
}
