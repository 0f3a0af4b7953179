//! Song rendering: metadata, line classification and the transposition menu.
//!
//! A song source is an optional YAML frontmatter block (delimited by `---`
//! lines, recognized only at the very start of the input) followed by the
//! song text. The text is treated as display-ready: untrusted input is
//! expected to have been HTML-escaped by the caller, and the only markup this
//! module touches is the escaped emphasis pair `&lt;em&gt;`/`&lt;/em&gt;`,
//! which is restored to literal tags before the text is split into lines.

use serde::{Deserialize, Serialize};

use crate::chord::ChordSymbol;
use crate::error::SheetError;
use crate::line::{self, Line, Span};
use crate::tokenizer::{self, ChordPlausibility, ResidueFilter};

/// Inclusive transposition range offered to the user.
pub const MIN_OFFSET: i32 = -5;
pub const MAX_OFFSET: i32 = 6;

/// Song metadata from the frontmatter block. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SongMeta {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub video: Option<String>,
}

/// A parsed song: metadata plus classified lines.
///
/// Lines are derived once; transposition later recomputes chord names from
/// the stored symbols and never reparses the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub meta: SongMeta,
    pub lines: Vec<Line>,
}

/// One entry of the transposition selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetEntry {
    pub offset: i32,
    pub label: String,
    pub selected: bool,
}

/// Parse a song source (optional frontmatter + song text).
pub fn parse_song(source: &str) -> Result<Song, SheetError> {
    let (meta, body) = split_frontmatter(source)?;
    Ok(Song {
        meta,
        lines: render_lines(body),
    })
}

/// Classify the song text into lines using the default plausibility policy.
pub fn render_lines(text: &str) -> Vec<Line> {
    render_lines_with(text, &ResidueFilter)
}

/// Classify the song text into lines with a caller-supplied policy.
pub fn render_lines_with(text: &str, policy: &dyn ChordPlausibility) -> Vec<Line> {
    let text = restore_emphasis(text);
    let all: Vec<&str> = text.split('\n').collect();

    // leading and trailing blank lines are noise from submission forms
    let first = all.iter().position(|l| !l.trim().is_empty());
    let Some(first) = first else {
        return Vec::new();
    };
    let last = all.iter().rposition(|l| !l.trim().is_empty()).unwrap_or(first);

    all[first..=last]
        .iter()
        .map(|raw| {
            if line::is_tab_line(raw) {
                Line::Tab {
                    text: (*raw).to_string(),
                }
            } else if let Some(spans) = tokenizer::tokenize(raw, policy) {
                Line::Chord {
                    text: (*raw).to_string(),
                    spans,
                }
            } else {
                Line::Plain {
                    text: (*raw).to_string(),
                }
            }
        })
        .collect()
}

/// The first chord token of the song, used as the base for the
/// transposition menu previews. `None` when the song has no chords.
pub fn base_chord(lines: &[Line]) -> Option<&ChordSymbol> {
    lines.iter().find_map(|line| match line {
        Line::Chord { spans, .. } => spans.iter().find_map(|span| match span {
            Span::Chord(chord) => Some(chord),
            Span::Text(_) => None,
        }),
        _ => None,
    })
}

/// Build the transposition selector entries, +6 down to -5.
///
/// Each label shows the signed offset and a preview of the base chord at
/// that offset, e.g. `+1 (D#)`. The identity entry `0 (D)` is selected.
pub fn offset_menu(base: &ChordSymbol) -> Vec<OffsetEntry> {
    (MIN_OFFSET..=MAX_OFFSET)
        .rev()
        .map(|offset| {
            let sign = if offset > 0 { "+" } else { "" };
            OffsetEntry {
                offset,
                label: format!("{}{} ({})", sign, offset, base.transposed(offset).spelling()),
                selected: offset == 0,
            }
        })
        .collect()
}

fn restore_emphasis(text: &str) -> String {
    text.replace("&lt;em&gt;", "<em>").replace("&lt;/em&gt;", "</em>")
}

fn split_frontmatter(source: &str) -> Result<(SongMeta, &str), SheetError> {
    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((SongMeta::default(), source));
    };
    if first.trim_end() != "---" {
        return Ok((SongMeta::default(), source));
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &source[header_start..offset];
            let meta = if yaml.trim().is_empty() {
                SongMeta::default()
            } else {
                serde_yaml::from_str(yaml).map_err(|e| SheetError::MetadataError(e.to_string()))?
            };
            return Ok((meta, &source[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(SheetError::MetadataError(
        "unterminated frontmatter block".to_string(),
    ))
}
