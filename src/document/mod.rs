//! Document model consumed by the link collector
//!
//! A [`Document`] is any read-only tree of elements that can be walked in
//! traversal order. Each [`Element`] may expose a reference; whether that
//! reference is string-valued is carried by the [`Reference`] variant rather
//! than probed at runtime.

mod html;

pub use html::{HtmlDocument, HtmlElement};

/// A reference member exposed by an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A string-valued, already resolved reference
    Resolved(String),

    /// A reference member that is not a string (for example the animated
    /// `href` object of SVG elements)
    Opaque,
}

impl Reference {
    /// Returns the resolved value when it is a non-empty string
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Self::Resolved(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Returns true if the reference is not string-valued
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque)
    }
}

/// A node of a [`Document`]
pub trait Element {
    /// The element's `href` member, if it exposes one
    fn reference(&self) -> Option<Reference>;

    /// The element's `src` member, if it exposes one
    fn source(&self) -> Option<Reference> {
        None
    }
}

/// A read-only tree of elements
pub trait Document {
    /// Element handle borrowed from the document
    type Element<'a>: Element
    where
        Self: 'a;

    /// Every element of the document in traversal order
    fn elements(&self) -> impl Iterator<Item = Self::Element<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_link() {
        assert_eq!(
            Reference::Resolved("https://example.com/".to_string()).as_link(),
            Some("https://example.com/")
        );
        assert_eq!(Reference::Resolved(String::new()).as_link(), None);
        assert_eq!(Reference::Opaque.as_link(), None);
    }

    #[test]
    fn test_is_opaque() {
        assert!(Reference::Opaque.is_opaque());
        assert!(!Reference::Resolved("x".to_string()).is_opaque());
    }
}
