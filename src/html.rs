//! HTML emission for rendered songs.
//!
//! Produces the markup the presentation layer serves: tab lines wrapped in
//! `tabsline` divs, chord lines in `chordline` divs with each chord in a
//! hoverable `chord` span carrying its original spelling in the `origchord`
//! attribute, a `chordname` span with the displayed (possibly transposed)
//! name, and the fingering diagram image. Line text passes through verbatim
//! (see `render::parse_song` for the escaping contract); generated attribute
//! values are escaped here.

use crate::chord::ChordSymbol;
use crate::error::SheetError;
use crate::line::{Line, Span};
use crate::render::{self, Song, MAX_OFFSET, MIN_OFFSET};

/// Render a song to an HTML fragment at the given transposition offset.
///
/// The offset must be within the range the selector offers; anything else is
/// a caller bug and is rejected with `OffsetOutOfRange`.
pub fn to_html(song: &Song, offset: i32) -> Result<String, SheetError> {
    if !(MIN_OFFSET..=MAX_OFFSET).contains(&offset) {
        return Err(SheetError::OffsetOutOfRange(offset));
    }

    let mut html = String::new();

    if let Some(title) = &song.meta.title {
        html.push_str(&format!(
            "<h1 id=\"song_title\">{}</h1>\n",
            escape_text(title)
        ));
    }
    if let Some(artist) = &song.meta.artist {
        html.push_str(&format!(
            "<h2 id=\"song_artist\">{}</h2>\n",
            escape_text(artist)
        ));
    }

    // no chords, no transposition selector
    if let Some(base) = render::base_chord(&song.lines) {
        html.push_str("<select id=\"semiton_change\">\n");
        for entry in render::offset_menu(base) {
            let selected = if entry.offset == offset {
                " selected=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "  <option value=\"{}\"{}>{}</option>\n",
                entry.offset,
                selected,
                escape_text(&entry.label)
            ));
        }
        html.push_str("</select>\n");
    }

    html.push_str("<div id=\"song_content\">");
    for line in &song.lines {
        match line {
            Line::Tab { text } => {
                html.push_str(&format!("<div class=\"tabsline\">{}</div>\n", text));
            }
            Line::Chord { spans, .. } => {
                html.push_str("<div class=\"chordline\">");
                for span in spans {
                    match span {
                        Span::Text(text) => html.push_str(text),
                        Span::Chord(chord) => html.push_str(&chord_span(chord, offset)),
                    }
                }
                html.push_str("</div>\n");
            }
            Line::Plain { text } => {
                html.push_str(text);
                html.push('\n');
            }
        }
    }
    html.push_str("</div>\n");

    Ok(html)
}

/// One chord token. The `origchord` attribute always keeps the original
/// spelling so the chord can be re-derived for any later offset; the
/// displayed name and diagram follow the current offset.
fn chord_span(chord: &ChordSymbol, offset: i32) -> String {
    let shown = chord.transposed(offset);
    format!(
        "<span class=\"chord\" origchord=\"{}\"><span class=\"chordname\">{}</span><img src=\"{}\"></span>",
        escape_attr(chord.spelling()),
        escape_text(shown.spelling()),
        escape_attr(&shown.diagram_path()),
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::parse_song;

    #[test]
    fn test_markup_shape() {
        let song = parse_song("Am  G\nlyrics below\ne|---0---2---3---0---|").unwrap();
        let html = to_html(&song, 0).unwrap();

        assert!(html.contains("<div id=\"song_content\">"));
        assert!(html.contains(
            "<span class=\"chord\" origchord=\"Am\"><span class=\"chordname\">Am</span>"
        ));
        assert!(html.contains("<img src=\"/static/chords/img/chords/Am.png\">"));
        assert!(html.contains("<div class=\"tabsline\">e|---0---2---3---0---|</div>"));
        assert!(html.contains("lyrics below\n"));
        assert!(!html.contains("<div class=\"chordline\"></div>"));
    }

    #[test]
    fn test_selector_present_with_selected_offset() {
        let song = parse_song("Am  G").unwrap();
        let html = to_html(&song, 2).unwrap();
        assert!(html.contains("<select id=\"semiton_change\">"));
        assert!(html.contains("<option value=\"2\" selected=\"selected\">+2 (Bm)</option>"));
        assert!(html.contains("<option value=\"0\">0 (Am)</option>"));
    }

    #[test]
    fn test_no_selector_without_chords() {
        let song = parse_song("just lyrics\nnothing else").unwrap();
        let html = to_html(&song, 0).unwrap();
        assert!(!html.contains("semiton_change"));
    }

    #[test]
    fn test_transposed_display_keeps_origchord() {
        let song = parse_song("Bbsus4  F").unwrap();
        let html = to_html(&song, 1).unwrap();
        // origchord keeps the flat spelling, display and diagram move up
        assert!(html.contains("origchord=\"Bbsus4\""));
        assert!(html.contains("<span class=\"chordname\">Bsus4</span>"));
        assert!(html.contains("/static/chords/img/chords/Bsus4.png"));
        assert!(html.contains("<span class=\"chordname\">F#</span>"));
        assert!(html.contains("/static/chords/img/chords/F%23.png"));
    }

    #[test]
    fn test_header_is_escaped() {
        let song = parse_song("---\ntitle: Q&A <live>\n---\nAm").unwrap();
        let html = to_html(&song, 0).unwrap();
        assert!(html.contains("<h1 id=\"song_title\">Q&amp;A &lt;live&gt;</h1>"));
    }

    #[test]
    fn test_out_of_range_offset_is_rejected() {
        let song = parse_song("Am").unwrap();
        assert!(matches!(
            to_html(&song, 7),
            Err(SheetError::OffsetOutOfRange(7))
        ));
        assert!(matches!(
            to_html(&song, -6),
            Err(SheetError::OffsetOutOfRange(-6))
        ));
    }
}
