//! Pitch classes and semitone arithmetic.
//!
//! All transposition works on the fixed 12-entry chromatic sequence
//! `C C# D D# E F F# G G# A A# B`. Flat spellings are accepted on input and
//! normalized to their sharp equivalent before any arithmetic.

use serde::Serialize;

/// One of the 12 chromatic pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

/// The chromatic sequence in semitone order.
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Sharp-normalized display name, e.g. "G#".
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Index into the chromatic sequence (C = 0 .. B = 11).
    pub fn index(self) -> usize {
        match self {
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
            PitchClass::A => 9,
            PitchClass::ASharp => 10,
            PitchClass::B => 11,
        }
    }

    /// Resolve a root spelling (letter plus optional `#`/`b`) to a pitch class.
    ///
    /// Flat roots are mapped through a fixed table. The table keeps the legacy
    /// diagram naming, even where it is enharmonically off (Eb):
    /// Ab→G#, Bb→A#, Cb→B, Db→C#, Eb→F#, Fb→E, Gb→F#.
    ///
    /// Returns `None` for letters outside A-G and for the sharp spellings
    /// E# and B#, which do not name a pitch class in this scheme.
    pub fn from_spelling(letter: char, accidental: Option<char>) -> Option<PitchClass> {
        match accidental {
            None => match letter {
                'A' => Some(PitchClass::A),
                'B' => Some(PitchClass::B),
                'C' => Some(PitchClass::C),
                'D' => Some(PitchClass::D),
                'E' => Some(PitchClass::E),
                'F' => Some(PitchClass::F),
                'G' => Some(PitchClass::G),
                _ => None,
            },
            Some('#') => match letter {
                'A' => Some(PitchClass::ASharp),
                'C' => Some(PitchClass::CSharp),
                'D' => Some(PitchClass::DSharp),
                'F' => Some(PitchClass::FSharp),
                'G' => Some(PitchClass::GSharp),
                _ => None,
            },
            Some('b') => match letter {
                'A' => Some(PitchClass::GSharp),
                'B' => Some(PitchClass::ASharp),
                'C' => Some(PitchClass::B),
                'D' => Some(PitchClass::CSharp),
                'E' => Some(PitchClass::FSharp),
                'F' => Some(PitchClass::E),
                'G' => Some(PitchClass::FSharp),
                _ => None,
            },
            Some(_) => None,
        }
    }

    /// Shift by `semitones`, wrapping around the chromatic circle in both
    /// directions. Total for any integer offset.
    pub fn transposed_by(self, semitones: i32) -> PitchClass {
        let index = (self.index() as i32 + semitones).rem_euclid(12) as usize;
        CHROMATIC[index]
    }
}
