//! Input resolution and document loading
//!
//! Input specifications are turned into concrete document sources:
//! - `-` reads a document from stdin
//! - `@path` reads one specification per line from `path`
//! - anything else is a file path, after permutation groups are expanded
//!
//! Each source is then read and parsed into an [`HtmlDocument`].

use crate::document::HtmlDocument;
use crate::url::{blank_url, expand_permutations, file_url};
use crate::{InputError, InputResult};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Specification that selects stdin
pub const STDIN_SPEC: &str = "-";

/// Where a document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A local HTML file
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Expands input specifications into document sources, in order
///
/// With no specifications at all, stdin is the only source.
///
/// # Example
///
/// ```
/// use linkscan::input::{expand_inputs, InputSource};
/// use std::path::PathBuf;
///
/// let sources = expand_inputs(&["page[1-2].html".to_string(), "-".to_string()]).unwrap();
/// assert_eq!(
///     sources,
///     vec![
///         InputSource::File(PathBuf::from("page1.html")),
///         InputSource::File(PathBuf::from("page2.html")),
///         InputSource::Stdin,
///     ]
/// );
/// ```
pub fn expand_inputs(specs: &[String]) -> InputResult<Vec<InputSource>> {
    if specs.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut sources = Vec::new();
    for spec in specs {
        let spec = spec.trim();
        if spec == STDIN_SPEC {
            sources.push(InputSource::Stdin);
        } else if let Some(list) = spec.strip_prefix('@') {
            for line in read_input_list(Path::new(list))? {
                sources.extend(expand_spec(&line));
            }
        } else {
            sources.extend(expand_spec(spec));
        }
    }

    tracing::debug!("Expanded {} input specs into {} sources", specs.len(), sources.len());
    Ok(sources)
}

/// Expands the permutation groups of a single file specification
fn expand_spec(spec: &str) -> Vec<InputSource> {
    let expanded = expand_permutations(spec);
    if expanded.is_empty() {
        tracing::warn!("Input '{}' expands to no files", spec);
    }
    expanded
        .into_iter()
        .map(|path| InputSource::File(PathBuf::from(path)))
        .collect()
}

/// Reads the non-blank lines of an input list file
fn read_input_list(path: &Path) -> InputResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::List {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads the raw markup of a source
pub fn read_source(source: &InputSource) -> InputResult<String> {
    match source {
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(InputError::Stdin)?;
            Ok(content)
        }
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| InputError::Read {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Determines the URL a source is treated as loaded from
///
/// An explicit `base_url` wins; otherwise files use their `file://` URL and
/// stdin uses `about:blank`.
pub fn document_url(source: &InputSource, base_url: Option<&Url>) -> InputResult<Url> {
    if let Some(url) = base_url {
        return Ok(url.clone());
    }

    match source {
        InputSource::Stdin => Ok(blank_url()),
        InputSource::File(path) => file_url(path),
    }
}

/// Reads and parses the document behind a source
///
/// # Arguments
///
/// * `source` - The source to read
/// * `base_url` - URL to treat the document as loaded from, if any
///
/// # Returns
///
/// * `Ok(HtmlDocument)` - The parsed document
/// * `Err(InputError)` - The source could not be read
pub fn load_document(source: &InputSource, base_url: Option<&Url>) -> InputResult<HtmlDocument> {
    let content = read_source(source)?;
    let url = document_url(source, base_url)?;
    tracing::debug!("Loaded {} ({} bytes) as {}", source, content.len(), url);
    Ok(HtmlDocument::parse(&content, url))
}
