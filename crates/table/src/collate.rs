//! Locale-aware string ordering (root-locale approximation).

use core::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}

/// Canonically decomposed, case-folded characters (accents kept as combining marks).
fn decomposed(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Compare two strings the way a root-locale collator orders table cells.
///
/// Primary level: base letters, ignoring accents and case. Secondary level: accents,
/// unaccented first. Tertiary level: lowercase sorts before uppercase at the first
/// differing letter. The raw code-point order breaks any remaining tie, so `Equal`
/// only for identical strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (da, db) = (decomposed(a), decomposed(b));
    let base = |d: &[char]| d.iter().copied().filter(|c| !is_combining_mark(*c)).collect::<Vec<_>>();
    let case = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(case_rank)
            .collect::<Vec<_>>()
    };

    base(&da)
        .cmp(&base(&db))
        .then_with(|| da.cmp(&db))
        .then_with(|| case(a).cmp(&case(b)))
        .then_with(|| a.cmp(b))
}
