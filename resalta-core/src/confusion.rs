//! Confusion-zone detection
//!
//! Flags regions where easily-confused trigger letters occur close together.
//! Proximity of confusable letters is a different hazard than any single
//! letter match, so zones carry [`CONFUSION_PRIORITY`] and paint a background
//! layer the pattern merge never displaces.
//!
//! [`CONFUSION_PRIORITY`]: crate::types::CONFUSION_PRIORITY

use crate::types::{Interval, StyleId};

/// Scan `text` for trigger characters and emit a confusion zone for every
/// adjacent pair of occurrences closer than `window_gap` bytes.
///
/// The scan is case-insensitive (ASCII). Each zone covers both triggers of
/// the pair: `[p, q + len(q_char))`. Zero or one trigger occurrence yields no
/// zones. Only adjacent pairs are compared, so a chain of close triggers
/// emits a chain of overlapping zones; merging them is the resolver's job.
pub fn detect_zones(
    text: &str,
    triggers: &[char],
    window_gap: usize,
    style: StyleId,
) -> Vec<Interval> {
    let mut hits: Vec<(usize, char)> = Vec::new();
    for (pos, ch) in text.char_indices() {
        if triggers.contains(&ch.to_ascii_lowercase()) {
            hits.push((pos, ch));
        }
    }

    let mut zones = Vec::new();
    for pair in hits.windows(2) {
        let (prev, _) = pair[0];
        let (next, next_ch) = pair[1];
        if next - prev < window_gap {
            zones.push(Interval::confusion(prev, next + next_ch.len_utf8(), style));
        }
    }

    zones
}
