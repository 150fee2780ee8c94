//! Tests for style descriptors and their validation.

use barline::{Error, FillerBuilder, FillerConfig, StyleSpec, DEFAULT_STYLE};

mod common;
use common::helpers::*;

#[test]
fn test_default_style_roles() {
    let style = StyleSpec::parse(DEFAULT_STYLE).expect("default style parses");
    let roles: Vec<&str> = vec![
        style.left().as_str(),
        style.fill().as_str(),
        style.tip(false).as_str(),
        style.empty().as_str(),
        style.right().as_str(),
        style.tip(true).as_str(),
        style.refill().as_str(),
    ];
    assert_eq!(roles, vec!["[", "=", ">", "-", "]", "<", "+"]);
}

#[test]
fn test_default_config_uses_default_style() {
    assert_eq!(FillerConfig::default().style, DEFAULT_STYLE);
}

#[test]
fn test_wide_style_widths_are_precomputed() {
    let style = StyleSpec::parse(WIDE_TIP_STYLE).expect("wide style parses");
    assert_eq!(style.tip(false).width(), 2);
    assert_eq!(style.tip(true).width(), 1);
    assert_eq!(style.empty().width(), 1);
    assert_eq!(style.ellipsis().width(), 1);
}

#[test]
fn test_malformed_styles_fail_at_build() {
    let cases = vec![
        ("", Error::EmptyStyle),
        ("[", Error::TooFewGlyphs { found: 1 }),
        ("[=>]", Error::TooFewGlyphs { found: 4 }),
        ("[=>-]<+**", Error::TooManyGlyphs { found: 9 }),
        (
            "[=>\u{1b}]",
            Error::InvalidGlyph {
                position: 3,
                glyph: "\u{1b}".to_string(),
            },
        ),
        (
            "[=>-]\u{FEFF}",
            Error::InvalidGlyph {
                position: 5,
                glyph: "\u{FEFF}".to_string(),
            },
        ),
        (
            "[\u{200B}>-]",
            Error::InvalidGlyph {
                position: 1,
                glyph: "\u{200B}".to_string(),
            },
        ),
    ];
    for (style, expected) in cases {
        assert_eq!(
            FillerBuilder::new().style(style).build().err(),
            Some(expected),
            "{style:?}"
        );
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(Error::EmptyStyle.to_string(), "Empty bar style");
    assert_eq!(
        Error::TooFewGlyphs { found: 3 }.to_string(),
        "Bar style has 3 glyphs, expected at least 5"
    );
    assert_eq!(
        Error::TooManyGlyphs { found: 8 }.to_string(),
        "Bar style has 8 glyphs, expected at most 7"
    );
}

#[test]
fn test_custom_style_renders_its_glyphs() {
    use barline::{Filler, ProgressState, RenderRequest};

    let filler = create_styled_filler(ASCII_STYLE);
    let line = filler.render(
        &ProgressState::new(4, 2),
        &RenderRequest::new(10).trim_space(true),
    );
    assert_eq!(line, "|###>....|");
}
