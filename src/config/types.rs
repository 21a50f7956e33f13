use crate::collector::{MATCH_ALL, MATCH_NOTHING};
use crate::output::OutputFormat;
use serde::Deserialize;

/// Main configuration structure for Linkscan
///
/// Every table is optional; missing tables and keys take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How input documents are located
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentConfig {
    /// URL every input document is treated as loaded from
    ///
    /// When unset, files use their own `file://` URL and stdin uses
    /// `about:blank`.
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
}

/// What the collector gathers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectorConfig {
    /// Also gather `src` values of media, frame and script elements
    #[serde(rename = "include-sources", default)]
    pub include_sources: bool,
}

/// Regex filters applied to collected links
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Links must match this pattern
    #[serde(default = "default_include")]
    pub include: String,

    /// Links matching this pattern are dropped
    #[serde(default = "default_exclude")]
    pub exclude: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: default_exclude(),
        }
    }
}

fn default_include() -> String {
    MATCH_ALL.to_string()
}

fn default_exclude() -> String {
    MATCH_NOTHING.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Rendering of collected links
    #[serde(default)]
    pub format: OutputFormat,

    /// File to write to instead of stdout
    pub path: Option<String>,
}
