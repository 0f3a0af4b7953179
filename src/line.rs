//! Line classification types and the tablature heuristic.

use serde::Serialize;

use crate::chord::ChordSymbol;

/// How many maximal hyphen groups a fret run needs before a line counts as
/// tablature. Fixed policy; see `is_tab_line`.
const MIN_DASH_GROUPS: usize = 4;

/// A classified line of song text.
///
/// Classification happens exactly once, when the song is rendered; the
/// original text is kept verbatim on every variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Line {
    /// ASCII tablature; never scanned for chords.
    Tab { text: String },
    /// A line holding at least one plausible chord. The concatenation of the
    /// spans reconstructs `text` exactly.
    Chord { text: String, spans: Vec<Span> },
    /// Lyrics or other prose (including lines whose chord-shaped words were
    /// judged implausible).
    Plain { text: String },
}

impl Line {
    /// The original text of the line.
    pub fn text(&self) -> &str {
        match self {
            Line::Tab { text } | Line::Chord { text, .. } | Line::Plain { text } => text,
        }
    }
}

/// One segment of a chord line: literal text or a chord token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    Text(String),
    Chord(ChordSymbol),
}

/// Structural tablature heuristic.
///
/// A line is tablature when it begins with a string/tuning letter A-G (either
/// case), optionally followed by `:`/`|` markers, followed by a fret run of
/// digits and hyphens containing at least four maximal hyphen groups:
///
/// ```text
/// e|---0---2---3---0---|
/// A---0---0---0-2-3-2-0--0--
/// ```
///
/// This is a heuristic, not a guarantee; an all-hyphen string line such as
/// `G------` has a single hyphen group and falls through to chord
/// tokenization, where the hyphens fail the residue filter and the line
/// renders plain.
pub fn is_tab_line(line: &str) -> bool {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !matches!(first.to_ascii_uppercase(), 'A'..='G') {
        return false;
    }

    let rest = chars.as_str().trim_start_matches(['|', ':']);
    let run_end = rest
        .find(|c: char| !matches!(c, '0'..='9' | '-'))
        .unwrap_or(rest.len());

    rest[..run_end]
        .split(|c: char| c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .count()
        >= MIN_DASH_GROUPS
}
