use super::{format_label, render_json, render_text, FileReport};
use crate::config::Config;
use crate::document::analyse;

fn sample() -> FileReport {
    FileReport::new("notes.md", analyse("# A\nfoo bar\n## B\n# C\nbaz\n"))
}

#[test]
fn test_format_label() {
    assert_eq!(format_label("{count} words", 12), "12 words");
    assert_eq!(format_label("words: {count}", 0), "words: 0");
    assert_eq!(format_label("no placeholder", 3), "no placeholder");
}

#[test]
fn test_render_text() {
    let text = render_text(&sample(), &Config::default(), false);
    assert_eq!(
        text,
        "notes.md: 9 words\n  L1 # A  2 words\n  L3 ## B  0 words\n  L4 # C  1 words\n"
    );
}

#[test]
fn test_render_text_hides_empty_sections() {
    let cfg = Config {
        hide_empty: true,
        ..Config::default()
    };
    let text = render_text(&sample(), &cfg, false);
    assert!(!text.contains("## B"));
    assert!(text.contains("# C  1 words"));
}

#[test]
fn test_render_total_only() {
    let text = render_text(&sample(), &Config::default(), true);
    assert_eq!(text, "notes.md: 9 words\n");
}

#[test]
fn test_line_numbers_are_padded() {
    let mut doc = String::new();
    for i in 0..12 {
        doc.push_str(&format!("# H{i}\nword\n"));
    }
    let text = render_text(&FileReport::new("long.md", analyse(&doc)), &Config::default(), false);
    assert!(text.contains("  L1  # H0  1 words\n"));
    assert!(text.contains("  L23 # H11  1 words\n"));
}

#[test]
fn test_render_json() {
    let json = render_json(&[sample()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["path"], "notes.md");
    assert_eq!(value[0]["total_words"], 9);
    assert_eq!(value[0]["sections"][0]["title"], "A");
    assert_eq!(value[0]["sections"][0]["word_count"], 2);
    assert_eq!(value[0]["sections"][2]["line"], 3);
}
