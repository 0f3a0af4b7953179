pub mod chord;
pub mod error;
pub mod html;
pub mod line;
pub mod pitch;
pub mod render;
pub mod tokenizer;

pub use chord::{match_chord, ChordMatch, ChordSymbol};
pub use error::SheetError;
pub use html::to_html;
pub use line::{is_tab_line, Line, Span};
pub use pitch::PitchClass;
pub use render::{
    base_chord, offset_menu, parse_song, render_lines, OffsetEntry, Song, SongMeta,
};
pub use tokenizer::{find_chords, tokenize, ChordPlausibility, ResidueFilter};

/// Parse a song source and render it to HTML at the given transposition
/// offset. This is the main entry point for the library.
pub fn render_html(source: &str, offset: i32) -> Result<String, SheetError> {
    let song = render::parse_song(source)?;
    html::to_html(&song, offset)
}
