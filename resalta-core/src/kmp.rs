//! Exact substring search (Knuth-Morris-Pratt)
//!
//! Finds every occurrence of a pattern in a text buffer, overlapping ones
//! included, in O(n + m) time. Matching is case-insensitive on the text side
//! only: the text is folded byte-by-byte with ASCII lowercasing (offsets are
//! preserved, unlike `str::to_lowercase`), while the pattern is assumed
//! already normalized by the caller.

use crate::error::{CoreError, Result};

/// Find all match start offsets of `pattern` in `text`, ascending.
///
/// Overlapping occurrences are all reported: searching `"aa"` in `"aaaa"`
/// yields `[0, 1, 2]`. An empty pattern is rejected with
/// [`CoreError::EmptyPattern`]; an empty text yields no matches.
pub fn find_all(text: &str, pattern: &str) -> Result<Vec<usize>> {
    find_all_counted(text, pattern).map(|(matches, _)| matches)
}

/// Same as [`find_all`], also reporting the number of byte comparisons made.
///
/// The count covers the scan phase only and lets tests pin down the linear
/// time bound on adversarial inputs.
pub(crate) fn find_all_counted(text: &str, pattern: &str) -> Result<(Vec<usize>, usize)> {
    if pattern.is_empty() {
        return Err(CoreError::EmptyPattern);
    }

    let pat = pattern.as_bytes();
    let hay = text.as_bytes();
    let lps = build_lps(pat);

    let mut matches = Vec::new();
    let mut comparisons = 0usize;
    let mut i = 0; // text index
    let mut j = 0; // pattern index

    while i < hay.len() {
        comparisons += 1;
        if hay[i].to_ascii_lowercase() == pat[j] {
            i += 1;
            j += 1;
            if j == pat.len() {
                matches.push(i - j);
                // resume at the longest border, so overlapping matches survive
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    Ok((matches, comparisons))
}

/// Build the prefix-function table: `lps[i]` is the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it.
fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lps_table_for_bordered_pattern() {
        assert_eq!(build_lps(b"aaab"), vec![0, 1, 2, 0]);
        assert_eq!(build_lps(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(build_lps(b"b"), vec![0]);
    }

    #[test]
    fn finds_overlapping_matches() {
        assert_eq!(find_all("aaaa", "aa").unwrap(), vec![0, 1, 2]);
        assert_eq!(find_all("aaa", "aa").unwrap(), vec![0, 1]);
    }

    #[test]
    fn matching_is_case_insensitive_on_text_side() {
        assert_eq!(find_all("La BRisa", "b").unwrap(), vec![3]);
        assert_eq!(find_all("BRA bra", "bra").unwrap(), vec![0, 4]);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!(find_all("texto", ""), Err(CoreError::EmptyPattern));
    }

    #[test]
    fn empty_text_yields_no_matches() {
        assert_eq!(find_all("", "b").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn no_match_when_pattern_longer_than_text() {
        assert_eq!(find_all("ab", "abc").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn offsets_are_byte_offsets_in_multibyte_text() {
        // 'á' is two bytes; the 'b' after it sits at byte offset 3
        assert_eq!(find_all("aáb", "b").unwrap(), vec![3]);
    }

    #[test]
    fn scan_is_linear_on_adversarial_input() {
        // Classic worst case for naive search: long run of 'a' vs "aaab".
        let text = "a".repeat(2000);
        let (matches, comparisons) = find_all_counted(&text, "aaab").unwrap();
        assert!(matches.is_empty());
        // KMP bound: at most 2n comparisons in the scan phase
        assert!(
            comparisons <= 2 * text.len(),
            "expected <= {} comparisons, got {comparisons}",
            2 * text.len()
        );
    }
}
