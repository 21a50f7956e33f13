//! Expansion of permutation groups in input specifications
//!
//! A group is a bracketed list of digits, commas and hyphens, for example
//! `pages/[1-3]/index.html` or `chapter[2,5,7].html`. Each comma-separated
//! item is either a literal or a numeric range `begin-end` (inclusive).

use regex::Regex;
use std::sync::LazyLock;

/// Matches a single permutation group such as `[1-10]` or `[1,4,9]`
static PERMUTATION_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9,-]*\]").unwrap());

/// Expands every permutation group in `input`
///
/// Groups are expanded left to right; the leftmost group varies slowest.
/// An input without groups expands to itself. A range whose end lies before
/// its beginning yields no values, so an input containing one expands to
/// nothing.
///
/// # Example
///
/// ```
/// use linkscan::url::expand_permutations;
///
/// assert_eq!(
///     expand_permutations("site/[1-2]/page[5,7].html"),
///     vec![
///         "site/1/page5.html",
///         "site/1/page7.html",
///         "site/2/page5.html",
///         "site/2/page7.html",
///     ]
/// );
/// ```
pub fn expand_permutations(input: &str) -> Vec<String> {
    let mut expanded = vec![String::new()];
    let mut last = 0;

    for group in PERMUTATION_GROUP.find_iter(input) {
        let literal = &input[last..group.start()];
        let choices = parse_group(&input[group.start() + 1..group.end() - 1]);

        expanded = expanded
            .iter()
            .flat_map(|prefix| {
                choices
                    .iter()
                    .map(move |choice| format!("{prefix}{literal}{choice}"))
            })
            .collect();

        last = group.end();
    }

    let tail = &input[last..];
    expanded
        .into_iter()
        .map(|prefix| prefix + tail)
        .collect()
}

/// Parses the body of a group (without brackets) into its values
fn parse_group(body: &str) -> Vec<String> {
    body.split(',').flat_map(parse_item).collect()
}

/// Parses one comma-separated item
///
/// `a-b` with two integer bounds becomes the inclusive range; anything else
/// is kept literally.
fn parse_item(item: &str) -> Vec<String> {
    let bounds: Vec<&str> = item.split('-').collect();
    if bounds.len() != 2 {
        return vec![item.to_string()];
    }

    match (bounds[0].parse::<i64>(), bounds[1].parse::<i64>()) {
        (Ok(begin), Ok(end)) => (begin..=end).map(|n| n.to_string()).collect(),
        _ => vec![item.to_string()],
    }
}
