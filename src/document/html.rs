//! HTML-backed document model
//!
//! Parses markup with scraper and reproduces the values a browser's `href`
//! and `src` element properties return:
//! - `a`, `area` and `link` resolve `href` against the document base URL
//! - `base` resolves `href` against the document URL itself
//! - SVG elements expose `href` as a non-string object
//! - media, frame, script and input elements resolve `src`

use super::{Document, Element, Reference};
use crate::url::resolve_reference;
use scraper::node::Element as NodeElement;
use scraper::{ElementRef, Html};
use url::Url;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// HTML elements whose `href` property reflects a URL
const HREF_ELEMENTS: &[&str] = &["a", "area", "link"];

/// SVG elements whose `href` property is an animated string object
const SVG_HREF_ELEMENTS: &[&str] = &[
    "a",
    "feImage",
    "filter",
    "image",
    "linearGradient",
    "mpath",
    "pattern",
    "radialGradient",
    "script",
    "textPath",
    "use",
];

/// HTML elements whose `src` property reflects a URL
const SRC_ELEMENTS: &[&str] = &[
    "audio", "embed", "frame", "iframe", "img", "input", "script", "source", "track", "video",
];

/// A parsed HTML document together with the URL it was loaded from
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
    url: Url,
    base_url: Url,
}

impl HtmlDocument {
    /// Parses `source` as a complete HTML document located at `url`
    ///
    /// The base URL is taken from the first `<base href>` element in tree
    /// order, resolved against `url`. Without one (or when it does not
    /// resolve) the document URL is the base URL.
    ///
    /// # Example
    ///
    /// ```
    /// use linkscan::{collect_links, HtmlDocument};
    /// use url::Url;
    ///
    /// let url = Url::parse("https://example.com/blog/").unwrap();
    /// let document = HtmlDocument::parse(r#"<a href="post-1">One</a>"#, url);
    /// assert_eq!(collect_links(&document), vec!["https://example.com/blog/post-1"]);
    /// ```
    pub fn parse(source: &str, url: Url) -> Self {
        let html = Html::parse_document(source);
        let base_url = find_base_url(&html, &url);

        Self {
            html,
            url,
            base_url,
        }
    }

    /// The URL the document was loaded from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL relative references are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Total number of elements in the document
    pub fn element_count(&self) -> usize {
        elements_of(&self.html).count()
    }
}

impl Document for HtmlDocument {
    type Element<'a> = HtmlElement<'a>;

    fn elements(&self) -> impl Iterator<Item = Self::Element<'_>> {
        elements_of(&self.html).map(move |element| HtmlElement {
            element,
            document: self,
        })
    }
}

/// An element of an [`HtmlDocument`]
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a> {
    element: ElementRef<'a>,
    document: &'a HtmlDocument,
}

impl<'a> HtmlElement<'a> {
    /// Local tag name, e.g. `a` or `linearGradient`
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    fn namespace(&self) -> &'a str {
        &self.element.value().name.ns
    }

    /// Reflects a URL attribute: resolved when present, empty when absent
    fn reflect(&self, attribute: &str, base: &Url) -> Reference {
        let value = self
            .element
            .value()
            .attr(attribute)
            .map(|value| resolve_reference(value, base))
            .unwrap_or_default();

        Reference::Resolved(value)
    }
}

impl Element for HtmlElement<'_> {
    fn reference(&self) -> Option<Reference> {
        let name = self.tag_name();

        match self.namespace() {
            HTML_NAMESPACE if HREF_ELEMENTS.contains(&name) => {
                Some(self.reflect("href", &self.document.base_url))
            }
            HTML_NAMESPACE if name == "base" => {
                let value = match self.element.value().attr("href") {
                    Some(href) => resolve_reference(href, &self.document.url),
                    None => self.document.url.to_string(),
                };
                Some(Reference::Resolved(value))
            }
            SVG_NAMESPACE if SVG_HREF_ELEMENTS.contains(&name) => Some(Reference::Opaque),
            _ => None,
        }
    }

    fn source(&self) -> Option<Reference> {
        let name = self.tag_name();

        if self.namespace() == HTML_NAMESPACE && SRC_ELEMENTS.contains(&name) {
            Some(self.reflect("src", &self.document.base_url))
        } else {
            None
        }
    }
}

/// Walks every element of a parsed tree in pre-order, starting at `<html>`
///
/// `<template>` contents are inert and not part of the document tree, so the
/// `<template>` element is visited but nothing below it.
fn elements_of(html: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    html.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| {
            !element
                .ancestors()
                .any(|node| node.value().as_element().is_some_and(is_html_template))
        })
}

fn is_html_template(element: &NodeElement) -> bool {
    element.name() == "template" && &*element.name.ns == HTML_NAMESPACE
}

/// Determines the document base URL from the first `<base href>`
fn find_base_url(html: &Html, url: &Url) -> Url {
    let base_href = elements_of(html).find_map(|element| {
        let value = element.value();
        let is_html_base = value.name() == "base" && &*value.name.ns == HTML_NAMESPACE;
        if is_html_base {
            value.attr("href")
        } else {
            None
        }
    });

    match base_href {
        Some(href) => match url.join(href) {
            Ok(base) => base,
            Err(e) => {
                tracing::debug!("Ignoring unresolvable <base href=\"{}\">: {}", href, e);
                url.clone()
            }
        },
        None => url.clone(),
    }
}
