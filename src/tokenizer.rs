//! Chord tokenization of non-tab lines.
//!
//! The scanner finds every non-overlapping chord-grammar match from left to
//! right, then asks a plausibility policy whether the line as a whole really
//! is a chord line. Short lyric words like "A" or "Am" match the grammar, so
//! without the policy ordinary prose would sprout chord tokens everywhere.

use crate::chord::{self, ChordMatch};
use crate::line::Span;

/// Policy deciding whether a line's grammar matches are genuine chords.
///
/// Swappable so the heuristic can be tuned without touching the scanner.
pub trait ChordPlausibility {
    fn plausible(&self, line: &str, matches: &[ChordMatch]) -> bool;
}

/// Default policy: look at the residue left after removing every matched
/// substring. A genuine chord line carries nothing between its chords except
/// whitespace, parentheses, slashes, the letter `x` (muted strings, "x2"
/// repeat marks) and digits. Any other residue character means the line is
/// prose that happens to contain chord-shaped words, and every candidate is
/// demoted to plain text.
pub struct ResidueFilter;

impl ChordPlausibility for ResidueFilter {
    fn plausible(&self, line: &str, matches: &[ChordMatch]) -> bool {
        let mut last = 0;
        for m in matches {
            if !is_filler(&line[last..m.start]) {
                return false;
            }
            last = m.end;
        }
        is_filler(&line[last..])
    }
}

fn is_filler(residue: &str) -> bool {
    residue
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_digit() || matches!(c, '(' | ')' | '/' | 'x'))
}

/// Find all non-overlapping chord-grammar matches in a line, leftmost first.
pub fn find_chords(line: &str) -> Vec<ChordMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < line.len() {
        match chord::match_chord(line, pos) {
            Some(m) => {
                pos = m.end;
                matches.push(m);
            }
            None => {
                pos += line[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    matches
}

/// Tokenize a non-tab line into spans.
///
/// Returns `Some(spans)` only when the grammar found at least one match and
/// the policy judged the line plausible; the spans then alternate literal
/// text and chord tokens and concatenate back to the original line. Returns
/// `None` for lines that should render as plain text.
pub fn tokenize(line: &str, policy: &dyn ChordPlausibility) -> Option<Vec<Span>> {
    let matches = find_chords(line);
    if matches.is_empty() || !policy.plausible(line, &matches) {
        return None;
    }

    let mut spans = Vec::new();
    let mut last = 0;
    for m in &matches {
        if m.start > last {
            spans.push(Span::Text(line[last..m.start].to_string()));
        }
        spans.push(Span::Chord(m.symbol.clone()));
        last = m.end;
    }
    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }
    Some(spans)
}
