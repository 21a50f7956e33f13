use crate::{InputError, InputResult};
use std::path::Path;
use url::Url;

/// URL used for documents that have no location of their own
pub const BLANK_URL: &str = "about:blank";

/// Resolves a reference attribute value the way a browser reflects it
///
/// The value is parsed relative to `base`. When parsing fails the raw
/// attribute value is returned unchanged, which is what the DOM `href` and
/// `src` properties do for unparseable references.
///
/// # Example
///
/// ```
/// use linkscan::url::resolve_reference;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/index.html").unwrap();
/// assert_eq!(resolve_reference("guide.html", &base), "https://example.com/docs/guide.html");
/// assert_eq!(resolve_reference("", &base), "https://example.com/docs/index.html");
/// ```
pub fn resolve_reference(value: &str, base: &Url) -> String {
    match base.join(value) {
        Ok(resolved) => resolved.into(),
        Err(_) => value.to_string(),
    }
}

/// Returns the `about:blank` URL
pub fn blank_url() -> Url {
    Url::parse(BLANK_URL).expect("about:blank is a valid URL")
}

/// Derives the `file://` URL of a local document
///
/// Relative paths are made absolute through the filesystem, so the file must
/// exist.
pub fn file_url(path: &Path) -> InputResult<Url> {
    let absolute = std::fs::canonicalize(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Url::from_file_path(&absolute).map_err(|()| InputError::FileUrl { path: absolute })
}
