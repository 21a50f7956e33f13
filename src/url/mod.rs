//! URL handling module for Linkscan
//!
//! This module provides reference resolution against a document base URL,
//! file URL derivation for local documents, and expansion of permutation
//! groups in input specifications.

mod permute;
mod resolve;

// Re-export main functions
pub use permute::expand_permutations;
pub use resolve::{blank_url, file_url, resolve_reference};
