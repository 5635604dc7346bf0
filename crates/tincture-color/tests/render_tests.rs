//! Integration tests for rendering and CSS notation parsing.

use strum::IntoEnumIterator;
use tincture_color::{Color, ColorError, ColorKind, RenderMode, color_args};

fn translucent(args: Vec<tincture_color::ColorArg>, alpha: f64) -> Color {
    Color::builder(args).alpha(alpha).build().unwrap()
}

#[test]
fn test_render_by_kind() {
    assert_eq!(Color::new(color_args!["#FFF"]).unwrap().to_string(), "#ffffff");
    assert_eq!(Color::keyword("Linen").unwrap().to_string(), "linen");
    assert_eq!(Color::rgb(255, 128, 0).unwrap().to_string(), "rgb(255, 128, 0)");
    assert_eq!(
        Color::hsl(120, "100%", "25%").unwrap().to_string(),
        "hsl(120, 100%, 25%)"
    );
    assert_eq!(Color::transparent().to_string(), "transparent");
}

#[test]
fn test_render_each_mode_of_opaque_color() {
    let orange = Color::rgb(255, 128, 0).unwrap();
    assert_eq!(orange.render(Some(RenderMode::Hex)), "#ff8000");
    assert_eq!(orange.render(Some(RenderMode::Rgb)), "rgb(255, 128, 0)");
    assert_eq!(orange.render(Some(RenderMode::Rgba)), "rgba(255, 128, 0, 1)");
    assert_eq!(orange.render(Some(RenderMode::Hsl)), "hsl(30, 100%, 50%)");
    assert_eq!(orange.render(Some(RenderMode::Hsla)), "hsla(30, 100%, 50%, 1)");
    assert_eq!(orange.render(Some(RenderMode::Flat)), "#ff8000");
}

#[test]
fn test_keyword_mode_falls_back_to_hex() {
    let odd = Color::hex("#123456").unwrap();
    assert_eq!(odd.render(Some(RenderMode::Keyword)), "#123456");
    let white = Color::hex("#fff").unwrap();
    assert_eq!(white.render(Some(RenderMode::Keyword)), "white");
}

#[test]
fn test_translucent_always_shows_alpha() {
    let red = translucent(color_args![255, 0, 0], 0.5);
    for mode in [
        None,
        Some(RenderMode::Hex),
        Some(RenderMode::Rgb),
        Some(RenderMode::Rgba),
        Some(RenderMode::Keyword),
    ] {
        assert_eq!(red.render(mode), "rgba(255, 0, 0, 0.5)", "{mode:?}");
    }
    assert_eq!(red.render(Some(RenderMode::Hsl)), "hsla(0, 100%, 50%, 0.5)");
    assert_eq!(red.render(Some(RenderMode::Flat)), "#ff8080");
}

#[test]
fn test_translucent_hsl_kind_renders_hsla() {
    let green = Color::builder(color_args!["120deg", "100%", "25%"])
        .alpha(0.25)
        .build()
        .unwrap();
    assert_eq!(green.to_string(), "hsla(120, 100%, 25%, 0.25)");
}

#[test]
fn test_alpha_is_trimmed_to_three_decimals() {
    let color = translucent(color_args![0, 0, 0], 1.0 / 3.0);
    assert_eq!(color.to_string(), "rgba(0, 0, 0, 0.333)");
}

#[test]
fn test_render_mode_names() {
    let names: Vec<String> = RenderMode::iter().map(|mode| mode.to_string()).collect();
    assert_eq!(
        names,
        ["hex", "rgb", "rgba", "hsl", "hsla", "keyword", "flat"]
    );
    assert_eq!("ie".parse::<RenderMode>(), Ok(RenderMode::Flat));
    assert!("cmyk".parse::<RenderMode>().is_err());
}

#[test]
fn test_parse_simple_notations() {
    let white: Color = "#FFF".parse().unwrap();
    assert_eq!(white.kind(), ColorKind::Hex);
    assert_eq!(white, Color::WHITE);

    let linen: Color = "  linen ".parse().unwrap();
    assert_eq!(linen.kind(), ColorKind::Keyword);

    let clear: Color = "Transparent".parse().unwrap();
    assert!(clear.is_transparent());
}

#[test]
fn test_parse_rgb_functions() {
    let comma: Color = "rgb(255, 128, 0)".parse().unwrap();
    assert_eq!(comma.bytes(), [255, 128, 0]);
    assert_eq!(comma.kind(), ColorKind::Rgb);

    let spaced: Color = "rgb(100% 50% 0% / 50%)".parse().unwrap();
    assert_eq!(spaced.bytes(), [255, 128, 0]);
    assert_eq!(spaced.alpha(), 0.5);

    let legacy: Color = "rgba(0, 0, 255, 0.25)".parse().unwrap();
    assert_eq!(legacy.alpha(), 0.25);
    assert_eq!(legacy.to_string(), "rgba(0, 0, 255, 0.25)");
}

#[test]
fn test_parse_hsl_functions() {
    let green: Color = "hsl(120, 100%, 25%)".parse().unwrap();
    assert_eq!(green.kind(), ColorKind::Hsl);
    assert_eq!(green.bytes(), [0, 128, 0]);

    let bare: Color = "hsl(120deg 100 25)".parse().unwrap();
    assert_eq!(bare, green);

    let negative: Color = "hsl(-120, 100%, 50%)".parse().unwrap();
    assert_eq!(negative.bytes(), [0, 0, 255]);
}

#[test]
fn test_parse_range_errors_carry_channels() {
    let err = "rgb(0, 300, 0)".parse::<Color>().unwrap_err();
    assert!(matches!(err, ColorError::ByteRange { value: 300, .. }));
    assert!(err.to_string().contains("green"));

    let err = "rgba(0, 0, 0, 2)".parse::<Color>().unwrap_err();
    assert_eq!(err, ColorError::AlphaRange { value: 2.0 });
}

#[test]
fn test_parse_rejects_malformed_text() {
    for input in ["", "ggg", "rgb(1, 2, 3", "cmyk(0, 0, 0, 0)", "rgb(a, b, c)"] {
        assert!(
            matches!(
                input.parse::<Color>(),
                Err(ColorError::Unrecognized { .. })
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_ignores_surplus_arguments() {
    let color: Color = "rgb(1, 2, 3, 1, 99)".parse().unwrap();
    assert_eq!(color.bytes(), [1, 2, 3]);
    assert_eq!(color.alpha(), 1.0);
}

#[test]
fn test_rendered_output_parses_back() {
    let colors = [
        Color::keyword("rosybrown").unwrap(),
        Color::hex("#123456").unwrap(),
        Color::rgb(10, 20, 30).unwrap(),
        Color::hsl(200, "40%", "60%").unwrap(),
        translucent(color_args![12, 34, 56], 0.5),
    ];
    for color in colors {
        let text = color.to_string();
        let parsed: Color = text.parse().unwrap();
        assert!(parsed.matches(&color) || color.bytes() == parsed.bytes(), "{text}");
        assert_eq!(parsed.alpha(), color.alpha(), "{text}");
    }
}
