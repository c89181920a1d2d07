//! Heuristic syllable-break segmentation
//!
//! Suggests visual break points inside long words by counting letters since
//! the last word boundary and marking every third one past the first group.
//! This is a readability aid, not linguistics: breaks land on a fixed stride,
//! and a multi-byte character counts as one visual letter (its continuation
//! bytes are skipped). Linguistically wrong breaks are accepted behavior.

use crate::types::Interval;

/// Letters per visual group; a break is suggested after each full group
/// beyond the first.
const BREAK_STRIDE: usize = 3;

/// Whether `b` ends a word for counting purposes.
fn is_word_boundary(b: u8) -> bool {
    b.is_ascii_whitespace()
        || matches!(
            b,
            b'.' | b',' | b';' | b':' | b'!' | b'?' | b'"' | b'\'' | b'(' | b')' | b'-'
        )
}

/// UTF-8 continuation byte (`10xxxxxx`): part of an already-counted character.
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// UTF-8 lead byte of a multi-byte character (`11xxxxxx`).
fn is_multibyte_lead(b: u8) -> bool {
    b >= 0xC0
}

/// Scan `text` and return length-1 [`IntervalKind::SyllableMark`] intervals
/// at suggested break positions, ascending.
///
/// A position is marked when the running letter count exceeds
/// [`BREAK_STRIDE`] and is an exact multiple of it, and the following byte is
/// neither a word boundary nor the lead byte of a multi-byte character. The
/// counter resets at every word boundary.
///
/// [`IntervalKind::SyllableMark`]: crate::types::IntervalKind::SyllableMark
pub fn break_points(text: &str) -> Vec<Interval> {
    let bytes = text.as_bytes();
    let mut marks = Vec::new();
    let mut letters = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if is_continuation(b) {
            continue;
        }
        if is_word_boundary(b) {
            letters = 0;
            continue;
        }

        letters += 1;
        if letters > BREAK_STRIDE && letters % BREAK_STRIDE == 0 {
            if let Some(&next) = bytes.get(i + 1) {
                if !is_word_boundary(next) && !is_multibyte_lead(next) {
                    marks.push(Interval::syllable_mark(i));
                }
            }
        }
    }

    marks
}
