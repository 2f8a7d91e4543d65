//! Fuzzy string similarity.
//!
//! Scores are on a 0–100 scale. [`ratio`] is the normalized indel
//! similarity of two whole strings; [`partial_ratio`] is the best [`ratio`]
//! of the shorter string against any window of the longer one, which lets a
//! short topic identifier score highly inside a long question.
//!
//! Both operate on `char`s, so multi-byte input is compared per code point.

use std::collections::HashSet;

use rapidfuzz::fuzz;

/// Similarity of two whole strings: `100 * 2 * lcs / (len_a + len_b)`.
///
/// Two empty strings are identical (100).
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    100.0 * fuzz::ratio(a.chars(), b.chars())
}

/// Best local alignment score of the shorter string inside the longer one.
///
/// Windows considered are the prefixes of the longer string shorter than the
/// needle, every full needle-length window, and the suffixes, each only
/// when its boundary character occurs in the needle. Returns 0 when either
/// side is empty.
///
/// # Examples
///
/// ```
/// use topicwise::fuzzy::partial_ratio;
///
/// assert_eq!(partial_ratio("tell me about your tools", "tools"), 100.0);
/// assert!(partial_ratio("xyzzy", "education") < 60.0);
/// ```
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (needle, haystack) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let mut best = best_window(needle, haystack);
    if needle.len() == haystack.len() && best < 100.0 {
        best = best.max(best_window(haystack, needle));
    }
    best
}

fn best_window(needle: &[char], haystack: &[char]) -> f64 {
    let m = needle.len();
    let n = haystack.len();
    let alphabet: HashSet<char> = needle.iter().copied().collect();
    let scorer = fuzz::RatioBatchComparator::new(needle.iter().copied());
    let mut best = 0.0_f64;

    let mut consider = |window: &[char], boundary: char| -> bool {
        if alphabet.contains(&boundary) {
            best = best.max(100.0 * scorer.similarity(window.iter().copied()));
        }
        best >= 100.0
    };

    for end in 1..m {
        if consider(&haystack[..end], haystack[end - 1]) {
            return 100.0;
        }
    }
    for start in 0..n - m {
        if consider(&haystack[start..start + m], haystack[start + m - 1]) {
            return 100.0;
        }
    }
    for start in n - m..n {
        if consider(&haystack[start..], haystack[start]) {
            return 100.0;
        }
    }
    best
}
