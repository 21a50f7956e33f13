//! Include/exclude filtering of collected links

use crate::config::FilterConfig;
use crate::ConfigError;
use regex::Regex;

/// Pattern that matches every link
pub const MATCH_ALL: &str = ".*";

/// Pattern that matches no link
pub const MATCH_NOTHING: &str = "$^";

/// Keeps links matching `include` and not matching `exclude`
///
/// Patterns use `regex` syntax and match anywhere in the link unless
/// anchored. Inline flags such as `(?i)` may prefix a pattern.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    include: Regex,
    exclude: Regex,
}

impl LinkFilter {
    /// Compiles a filter from include and exclude patterns
    ///
    /// # Arguments
    ///
    /// * `include` - Links must match this pattern to be kept
    /// * `exclude` - Links matching this pattern are dropped
    ///
    /// # Returns
    ///
    /// * `Ok(LinkFilter)` - Both patterns compiled
    /// * `Err(ConfigError::InvalidPattern)` - A pattern is not a valid regex
    pub fn new(include: &str, exclude: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            include: compile("include", include)?,
            exclude: compile("exclude", exclude)?,
        })
    }

    /// Returns true if `link` passes the filter
    ///
    /// # Examples
    ///
    /// ```
    /// use linkscan::LinkFilter;
    ///
    /// let filter = LinkFilter::new(r"^https://", r"\.pdf$").unwrap();
    /// assert!(filter.allows("https://example.com/page"));
    /// assert!(!filter.allows("http://example.com/page"));
    /// assert!(!filter.allows("https://example.com/report.pdf"));
    /// ```
    pub fn allows(&self, link: &str) -> bool {
        self.include.is_match(link) && !self.exclude.is_match(link)
    }

    /// Drops links that do not pass the filter, preserving order
    pub fn apply(&self, links: Vec<String>) -> Vec<String> {
        links.into_iter().filter(|link| self.allows(link)).collect()
    }

    /// Returns true if the filter keeps every link
    pub fn is_pass_through(&self) -> bool {
        self.include.as_str() == MATCH_ALL && self.exclude.as_str() == MATCH_NOTHING
    }
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            include: Regex::new(MATCH_ALL).expect("match-all pattern compiles"),
            exclude: Regex::new(MATCH_NOTHING).expect("match-nothing pattern compiles"),
        }
    }
}

impl TryFrom<&FilterConfig> for LinkFilter {
    type Error = ConfigError;

    fn try_from(config: &FilterConfig) -> Result<Self, Self::Error> {
        Self::new(&config.include, &config.exclude)
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| {
        ConfigError::InvalidPattern(format!("{} pattern '{}' does not compile: {}", name, pattern, e))
    })
}
