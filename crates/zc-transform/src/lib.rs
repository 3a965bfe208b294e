//! # z-chain Transformation Core
//!
//! The pure string-to-integer-sequence conversion every other layer of the
//! workspace is glue around.
//!
//! ## Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | Segmentation | character sequence | z-chain groups |
//! | Value mapping | groups | group values (letters 1-26, rest 0) |
//! | Traversal | group values | portion sums |
//! | Filtering | portion sums | non-zero portion sums |
//!
//! The whole pipeline is total: any finite string in, a (possibly empty)
//! sequence of integers out. Input validation (ASCII, length caps) belongs
//! to the callers, not here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a string into its z-chain result sequence.
///
/// Segments the input into groups (a maximal run of `z`/`Z` captures one
/// trailing character; every other character stands alone), sums each
/// group's letter values, walks the value list summing lookahead portions,
/// and drops the zero portions.
///
/// Total over every finite input, including the empty string.
pub fn transform(input: &str) -> Vec<u64> {
    debug!(input, "transforming input");

    let groups = segment(input);
    debug!(?groups, "groups created");

    let values: Vec<u64> = groups.iter().map(|g| group_value(g)).collect();
    debug!(?values, "group values");

    let raw = portion_sums(&values);
    let results: Vec<u64> = raw.into_iter().filter(|&v| v != 0).collect();
    debug!(?results, "filtered results");

    results
}

/// Split the input into z-chain groups.
///
/// Invariant: concatenating the groups in order reconstructs the input
/// exactly, and no group is empty.
fn segment(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut groups = Vec::new();
    let mut cursor = 0;

    while cursor < chars.len() {
        if chars[cursor].eq_ignore_ascii_case(&'z') {
            // Maximal run of z/Z, plus one trailing character if any remains.
            let mut end = cursor;
            while end < chars.len() && chars[end].eq_ignore_ascii_case(&'z') {
                end += 1;
            }
            if end < chars.len() {
                end += 1;
            }
            groups.push(chars[cursor..end].iter().collect());
            cursor = end;
        } else {
            groups.push(chars[cursor].to_string());
            cursor += 1;
        }
    }

    groups
}

/// Alphabet position of a letter (`a`/`A` = 1 .. `z`/`Z` = 26), 0 for
/// anything else. Non-ASCII characters deliberately map to 0.
fn char_value(c: char) -> u64 {
    if c.is_ascii_alphabetic() {
        u64::from(c.to_ascii_lowercase() as u32 - 'a' as u32 + 1)
    } else {
        0
    }
}

fn group_value(group: &str) -> u64 {
    group.chars().map(char_value).sum()
}

/// Walk the group values, emitting the sum of the next `N` values for each
/// visited position `idx` with value `N`, then skipping `1 + N` positions.
///
/// The lookahead window is clamped to the end of the list; running past it
/// silently truncates the sum. The step is always at least 1, so the walk
/// terminates after at most `values.len()` visits.
fn portion_sums(values: &[u64]) -> Vec<u64> {
    let mut raw = Vec::new();
    let mut idx = 0usize;

    while idx < values.len() {
        let n = usize::try_from(values[idx]).unwrap_or(usize::MAX);
        let window_end = idx.saturating_add(1).saturating_add(n).min(values.len());
        let portion: u64 = values[idx + 1..window_end].iter().sum();
        raw.push(portion);
        idx = idx.saturating_add(1).saturating_add(n);
    }

    raw
}
