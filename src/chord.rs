//! Chord symbol grammar and the `ChordSymbol` value type.
//!
//! A chord symbol is a root letter A-G, an optional accidental (`#`/`b`), an
//! optional quality marker (`maj`, `m`, `aug`, `dim`, `sus`, `add`), an
//! optional extension digit group (2, 4, 5, 6, 7, 9, 11 or 13), an optional
//! second accidental and an optional second digit group. Matching is greedy
//! (longest match at a given start) and respects word boundaries: a match may
//! not begin or end inside a longer alphanumeric run, so the "A" in "And" is
//! never a chord.

use serde::Serialize;

use crate::error::SheetError;
use crate::pitch::PitchClass;

/// Directory the fingering diagram images are served from.
pub const DIAGRAM_DIR: &str = "/static/chords/img/chords/";

/// Quality markers, longest first so "maj" wins over "m".
const QUALITIES: [&str; 6] = ["maj", "aug", "dim", "sus", "add", "m"];

/// Extension digit groups, two-digit entries first.
const EXTENSIONS: [&str; 8] = ["11", "13", "2", "4", "5", "6", "7", "9"];

/// An immutable chord symbol.
///
/// The root is stored sharp-normalized; the original input spelling (which
/// may use a flat root) is kept for display. The suffix is opaque to
/// transposition and carried over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordSymbol {
    root: PitchClass,
    suffix: String,
    spelling: String,
}

impl ChordSymbol {
    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The spelling used for display: the original input text for a parsed
    /// symbol, a sharp-normalized name after nonzero transposition.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Sharp-normalized name (root name + suffix), e.g. "Bbsus4" -> "A#sus4".
    /// This is the key the diagram assets are filed under.
    pub fn sharp_name(&self) -> String {
        format!("{}{}", self.root.name(), self.suffix)
    }

    /// Path of the fingering diagram image for this chord.
    pub fn diagram_path(&self) -> String {
        format!(
            "{}{}.png",
            DIAGRAM_DIR,
            urlencoding::encode(&self.sharp_name())
        )
    }

    /// Parse a complete string as a chord symbol.
    ///
    /// The whole input must be consumed by the grammar; anything else is an
    /// `InvalidChord` error.
    pub fn parse(text: &str) -> Result<ChordSymbol, SheetError> {
        match match_chord(text, 0) {
            Some(m) if m.end == text.len() => Ok(m.symbol),
            _ => Err(SheetError::InvalidChord(text.to_string())),
        }
    }

    /// Return this chord shifted by `semitones`, wrapping around the
    /// chromatic circle. Pure: `self` is never modified.
    ///
    /// An offset of 0 returns the symbol unchanged, preserving a flat input
    /// spelling; any other offset yields a sharp-normalized spelling.
    pub fn transposed(&self, semitones: i32) -> ChordSymbol {
        if semitones == 0 {
            return self.clone();
        }
        let root = self.root.transposed_by(semitones);
        ChordSymbol {
            root,
            suffix: self.suffix.clone(),
            spelling: format!("{}{}", root.name(), self.suffix),
        }
    }
}

/// A chord-grammar match inside a line, with byte offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordMatch {
    pub start: usize,
    pub end: usize,
    pub symbol: ChordSymbol,
}

impl ChordMatch {
    /// The literal matched text.
    pub fn text(&self) -> &str {
        self.symbol.spelling()
    }
}

/// Try to match a chord symbol starting at byte offset `start` of `text`.
///
/// Greedy without backtracking: each optional component is taken if present,
/// and the match is rejected outright if it would end against a letter or
/// digit (e.g. "Amen" matches neither "Am" nor "A").
pub fn match_chord(text: &str, start: usize) -> Option<ChordMatch> {
    // must not begin inside a longer alphanumeric run
    if text[..start]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
    {
        return None;
    }

    let rest = &text[start..];
    let letter = rest.chars().next()?;
    let mut root = PitchClass::from_spelling(letter, None)?;
    let mut pos = letter.len_utf8();

    if let Some(c @ ('#' | 'b')) = rest[pos..].chars().next() {
        // E# and B# do not name a pitch class; leave the marker unconsumed
        if let Some(pc) = PitchClass::from_spelling(letter, Some(c)) {
            root = pc;
            pos += 1;
        }
    }
    let root_len = pos;

    for quality in QUALITIES {
        if rest[pos..].starts_with(quality) {
            pos += quality.len();
            break;
        }
    }
    for extension in EXTENSIONS {
        if rest[pos..].starts_with(extension) {
            pos += extension.len();
            break;
        }
    }
    // an accidental here continues a suffix ("C#m7b5"); after a bare root it
    // would swallow the orphaned marker of E# or B#
    if pos > root_len {
        if let Some('#' | 'b') = rest[pos..].chars().next() {
            pos += 1;
        }
        for extension in EXTENSIONS {
            if rest[pos..].starts_with(extension) {
                pos += extension.len();
                break;
            }
        }
    }

    // must not end inside a longer alphanumeric run
    if rest[pos..].chars().next().is_some_and(char::is_alphanumeric) {
        return None;
    }

    Some(ChordMatch {
        start,
        end: start + pos,
        symbol: ChordSymbol {
            root,
            suffix: rest[root_len..pos].to_string(),
            spelling: rest[..pos].to_string(),
        },
    })
}
