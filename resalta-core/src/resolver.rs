//! Interval resolution
//!
//! Reconciles the three annotation streams (pattern matches, confusion zones,
//! syllable marks) into one ordered list of non-overlapping styled spans.
//! Works by painting a per-position state buffer and then emitting maximal
//! runs; the buffer is owned by a single `resolve` call and never escapes it.
//!
//! Conflict rule: a pattern overwrites a position only when its priority is
//! strictly greater than the one already painted there, so equal-priority
//! overlaps keep the first-registered pattern. Confusion backgrounds and
//! syllable separators are independent layers; folding patterns never clears
//! them and they never displace a foreground style.

use crate::types::{Interval, IntervalKind, Resolution, StyleId, StyledSpan};

/// Per-position paint state, sized to the text, zeroed at allocation.
#[derive(Debug, Clone, Copy, Default)]
struct PositionState {
    active: bool,
    style: StyleId,
    priority: u8,
    background: Option<StyleId>,
    separator: bool,
}

/// Fold `intervals` over a text of `text_len` bytes into final styled spans.
///
/// Intervals may arrive in any order and any mix of kinds; pattern-vs-pattern
/// conflicts are decided by priority with earlier intervals winning ties.
/// Every interval must satisfy `start < end <= text_len`. Positions carrying
/// no annotation produce no span at all.
pub fn resolve(text_len: usize, intervals: &[Interval]) -> Resolution {
    if text_len == 0 {
        return Resolution::default();
    }

    let mut states = vec![PositionState::default(); text_len];

    for interval in intervals {
        debug_assert!(
            interval.start < interval.end && interval.end <= text_len,
            "interval [{}, {}) out of range for text of {} bytes",
            interval.start,
            interval.end,
            text_len
        );
        let range = interval.start.min(text_len)..interval.end.min(text_len);

        match interval.kind {
            IntervalKind::Pattern { style, priority } => {
                for state in &mut states[range] {
                    if !state.active || priority > state.priority {
                        state.active = true;
                        state.style = style;
                        state.priority = priority;
                    }
                }
            }
            IntervalKind::Confusion { style, .. } => {
                for state in &mut states[range] {
                    state.background = Some(style);
                }
            }
            IntervalKind::SyllableMark => {
                for state in &mut states[range] {
                    state.separator = true;
                }
            }
        }
    }

    emit(&states)
}

/// Single left-to-right pass turning painted positions into maximal runs.
fn emit(states: &[PositionState]) -> Resolution {
    let mut spans = Vec::new();

    // Foreground layer: break on activation edges and style changes.
    let mut open: Option<(usize, StyleId)> = None;
    for (pos, state) in states.iter().enumerate() {
        match open {
            Some((start, style)) if !state.active => {
                spans.push(foreground_span(start, pos, style));
                open = None;
            }
            Some((start, style)) if state.style != style => {
                spans.push(foreground_span(start, pos, style));
                open = Some((pos, state.style));
            }
            Some(_) => {}
            None if state.active => open = Some((pos, state.style)),
            None => {}
        }
    }
    if let Some((start, style)) = open {
        spans.push(foreground_span(start, states.len(), style));
    }

    // Background layer: maximal same-style runs, independent of foreground.
    let mut open_bg: Option<(usize, StyleId)> = None;
    for (pos, state) in states.iter().enumerate() {
        match (open_bg, state.background) {
            (Some((start, style)), None) => {
                spans.push(background_span(start, pos, style));
                open_bg = None;
            }
            (Some((start, style)), Some(current)) if current != style => {
                spans.push(background_span(start, pos, style));
                open_bg = Some((pos, current));
            }
            (Some(_), Some(_)) => {}
            (None, Some(current)) => open_bg = Some((pos, current)),
            (None, None) => {}
        }
    }
    if let Some((start, style)) = open_bg {
        spans.push(background_span(start, states.len(), style));
    }

    spans.sort_by_key(|s| (s.start, s.is_background));

    let breaks = states
        .iter()
        .enumerate()
        .filter(|(_, s)| s.separator)
        .map(|(pos, _)| pos)
        .collect();

    Resolution { spans, breaks }
}

fn foreground_span(start: usize, end: usize, style: StyleId) -> StyledSpan {
    StyledSpan {
        start,
        length: end - start,
        is_background: false,
        style,
    }
}

fn background_span(start: usize, end: usize, style: StyleId) -> StyledSpan {
    StyledSpan {
        start,
        length: end - start,
        is_background: true,
        style,
    }
}
