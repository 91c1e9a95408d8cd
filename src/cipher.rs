//! Substitution of text through a grid's code table.

use unicode_segmentation::UnicodeSegmentation;

use crate::grid::{Grid, CODE_LEN};

/// Transforms `input` into a password string using `grid`.
///
/// The input is uppercased first (full Unicode mapping, so `ß` becomes
/// `SS`), then walked one grapheme cluster at a time. A cluster that is a
/// single alphabet symbol is replaced by its four-character code; any other
/// cluster, including a symbol carrying a combining mark such as `A\u{301}`
/// or a keycap such as `1\u{FE0F}\u{20E3}`, is copied through unchanged.
/// The function is total and pure: the same grid and input always give the
/// same output, and empty input gives empty output.
///
/// # Examples
///
/// ```
/// use kleira::{build_grid, transform};
///
/// let grid = build_grid("test");
/// assert_eq!(transform(&grid, "a0b"), "LhoI02lzu");
/// assert_eq!(transform(&grid, ""), "");
/// ```
pub fn transform(grid: &Grid, input: &str) -> String {
    let upper = input.to_uppercase();
    let mut output = String::with_capacity(upper.len() * CODE_LEN);
    for cluster in upper.graphemes(true) {
        match lone_scalar(cluster).and_then(|ch| grid.code_for(ch)) {
            Some(code) => output.push_str(code),
            None => output.push_str(cluster),
        }
    }
    output
}

/// Returns the cluster's character if it holds exactly one scalar value.
fn lone_scalar(cluster: &str) -> Option<char> {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
