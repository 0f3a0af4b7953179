//! Integration tests for the chordsheet library
//!
//! Tests the full pipeline from raw song text to classified lines, the
//! transposition menu and the HTML output.

use chordsheet::{base_chord, offset_menu, parse_song, render_html, Line, Span};

const SONG: &str = "---\n\
title: Test Song\n\
artist: Lorem Ipsum Band\n\
---\n\
\n\
e|-------0--------0--------0---------\n\
b|-----1---1-------1-----1---1-------\n\
a|---0---0---0-2-3-2-0--------3---3---------7---\n\
\n\
 Am    Bbsus4    Fb\n\
Some lyrics lorem ipsum\n\
lorem ipsum some other lyrics\n\
\n\
    G11        F#dim13\n\
lorem ipsum some other lyrics\n\
\n\
&lt;em&gt;Outro&lt;/em&gt;\n\
F#5 E5 D5\n";

#[test]
fn test_full_song_classification() {
    let song = parse_song(SONG).unwrap();
    assert_eq!(song.meta.title.as_deref(), Some("Test Song"));

    let kinds: Vec<&str> = song
        .lines
        .iter()
        .map(|line| match line {
            Line::Tab { .. } => "tab",
            Line::Chord { .. } => "chord",
            Line::Plain { .. } => "plain",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "tab", "tab", "tab", "plain", "chord", "plain", "plain", "plain", "chord", "plain",
            "plain", "plain", "chord",
        ]
    );
}

#[test]
fn test_chord_lines_round_trip() {
    let song = parse_song(SONG).unwrap();
    for line in &song.lines {
        if let Line::Chord { text, spans } = line {
            let rebuilt: String = spans
                .iter()
                .map(|span| match span {
                    Span::Text(t) => t.as_str(),
                    Span::Chord(c) => c.spelling(),
                })
                .collect();
            assert_eq!(&rebuilt, text);
        }
    }
}

#[test]
fn test_menu_from_first_chord() {
    let song = parse_song(SONG).unwrap();
    let base = base_chord(&song.lines).unwrap();
    assert_eq!(base.spelling(), "Am");

    let menu = offset_menu(base);
    assert_eq!(menu.len(), 12);
    assert_eq!(menu.first().unwrap().label, "+6 (D#m)");
    assert_eq!(menu.last().unwrap().label, "-5 (Em)");
    assert!(menu.iter().find(|e| e.offset == 0).unwrap().selected);
}

#[test]
fn test_html_output_at_identity() {
    let html = render_html(SONG, 0).unwrap();
    assert!(html.contains("<h1 id=\"song_title\">Test Song</h1>"));
    assert!(html.contains("<h2 id=\"song_artist\">Lorem Ipsum Band</h2>"));
    assert!(html.contains("<div class=\"tabsline\">"));
    assert!(html.contains("origchord=\"Bbsus4\""));
    // flat spelling shown untouched at offset 0, diagram keyed sharp
    assert!(html.contains("<span class=\"chordname\">Bbsus4</span>"));
    assert!(html.contains("/static/chords/img/chords/A%23sus4.png"));
    // restored emphasis markup passes through
    assert!(html.contains("<em>Outro</em>\n"));
}

#[test]
fn test_html_output_transposed() {
    let html = render_html(SONG, 2).unwrap();
    // Am -> Bm, Bbsus4 -> Csus4, Fb -> F# (flat table maps Fb to E)
    assert!(html.contains("<span class=\"chordname\">Bm</span>"));
    assert!(html.contains("<span class=\"chordname\">Csus4</span>"));
    assert!(html.contains("<span class=\"chordname\">F#</span>"));
    // original spellings stay available for re-derivation
    assert!(html.contains("origchord=\"Am\""));
    assert!(html.contains("origchord=\"Fb\""));
    assert!(html.contains("<option value=\"2\" selected=\"selected\">+2 (Bm)</option>"));
}

#[test]
fn test_prose_with_chord_shaped_words_stays_plain() {
    let song = parse_song("And I said to myself\nA Day in the life\n").unwrap();
    assert!(song.lines.iter().all(|l| matches!(l, Line::Plain { .. })));
    assert!(base_chord(&song.lines).is_none());
}

#[test]
fn test_empty_song() {
    let song = parse_song("").unwrap();
    assert!(song.lines.is_empty());
    let html = render_html("", 0).unwrap();
    assert!(!html.contains("semiton_change"));
    assert!(html.contains("<div id=\"song_content\"></div>"));
}

#[test]
fn test_song_structure_serializes_to_yaml() {
    let song = parse_song(SONG).unwrap();
    let yaml = serde_yaml::to_string(&song).unwrap();
    assert!(yaml.contains("title: Test Song"));
    assert!(yaml.contains("kind: chord"));
    assert!(yaml.contains("kind: tab"));
}
