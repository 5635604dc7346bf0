//! Integration tests for color algebra and backgrounds.

use tincture_color::{
    COLDEST_HUE, Color, ColorError, ColorKind, DEFAULT_STEPS, RenderMode, color_args,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Compare hues on the circle, so 359.9999 matches 0.
fn assert_hues(colors: &[Color], expected: &[f64]) {
    let actual: Vec<f64> = colors.iter().map(|c| c.to_hsl().hue_degrees()).collect();
    for (hue, want) in actual.iter().zip(expected) {
        let diff = (hue - want).rem_euclid(360.0);
        assert!(diff < 1e-6 || diff > 360.0 - 1e-6, "{actual:?} != {expected:?}");
    }
}

fn translucent_red() -> Color {
    Color::builder(color_args![255, 0, 0])
        .alpha(0.5)
        .build()
        .unwrap()
}

#[test]
fn test_mix_black_and_white() {
    let gray = Color::BLACK.mix(&Color::WHITE, 0.5).unwrap();
    assert!(close(gray.r(), 0.5) && close(gray.g(), 0.5) && close(gray.b(), 0.5));
    assert_eq!(gray.render(Some(RenderMode::Flat)), "#808080");
    // rounds to 128, which is the gray keyword, so the kind survives
    assert_eq!(gray.kind(), ColorKind::Keyword);
    assert_eq!(gray.to_string(), "gray");
}

#[test]
fn test_mix_endpoints() {
    let red = Color::keyword("red").unwrap();
    let blue = Color::keyword("blue").unwrap();
    assert_eq!(red.mix(&blue, 0.0).unwrap(), red);
    assert_eq!(red.mix(&blue, 1.0).unwrap(), blue);
    assert_eq!(red.mix(&blue, 0.0).unwrap().kind(), ColorKind::Keyword);
}

#[test]
fn test_mix_rejects_bad_ratio() {
    assert!(matches!(
        Color::BLACK.mix(&Color::WHITE, 1.5),
        Err(ColorError::RatioRange { .. })
    ));
}

#[test]
fn test_mix_blends_alpha_and_leaves_operands() {
    let red = translucent_red();
    let white = Color::WHITE;
    let mixed = red.mix(&white, 0.5).unwrap();
    assert!(close(mixed.alpha(), 0.75));
    assert_eq!(red.alpha(), 0.5);
    assert_eq!(white.alpha(), 1.0);
}

#[test]
fn test_average_matches_even_mix() {
    let a = Color::hex("#102030").unwrap();
    let b = Color::hex("#f0e0d0").unwrap();
    assert_eq!(a.average(&b), a.mix(&b, 0.5).unwrap());
}

#[test]
fn test_layer_translucent_red_over_white() {
    let result = Color::WHITE.layer(&translucent_red());
    assert!(close(result.r(), 1.0));
    assert!(close(result.g(), 0.5));
    assert!(close(result.b(), 0.5));
    assert_eq!(result.alpha(), 1.0);
}

#[test]
fn test_layer_alpha_combines() {
    let base = Color::builder(color_args![0, 0, 255])
        .alpha(0.5)
        .build()
        .unwrap();
    let result = base.layer(&translucent_red());
    assert!(close(result.alpha(), 0.75));
    assert!(close(result.r(), 0.5));
    assert!(close(result.b(), 0.5));
}

#[test]
fn test_layer_opaque_top_wins() {
    let top = Color::keyword("lime").unwrap();
    let result = translucent_red().layer(&top);
    assert_eq!(result, Color::from_bytes([0, 255, 0]));
}

#[test]
fn test_flatten_uses_background() {
    let color = Color::builder(color_args![255, 0, 0])
        .alpha(0.5)
        .background("black")
        .build()
        .unwrap();
    let flat = color.flatten();
    assert_eq!(flat.alpha(), 1.0);
    assert_eq!(flat.bytes(), [128, 0, 0]);
    assert!(flat.has_background());
    assert_eq!(color.render(Some(RenderMode::Flat)), "#800000");
}

#[test]
fn test_flatten_opaque_is_unchanged() {
    let red = Color::keyword("red").unwrap();
    let flat = red.flatten();
    assert_eq!(flat, red);
    assert_eq!(flat.kind(), ColorKind::Keyword);
}

#[test]
fn test_step_endpoints_and_edges() {
    let black = Color::BLACK;
    let white = Color::WHITE;

    let steps = black.step(&white, DEFAULT_STEPS);
    assert_eq!(steps.len(), 10);
    assert_eq!(steps[0], black);
    assert_eq!(steps[9], white);
    assert!(close(steps[3].r(), 3.0 / 9.0));

    assert!(black.step(&white, 0).is_empty());
    assert_eq!(black.step(&white, 1), vec![black.clone()]);
    assert_eq!(black.step(&white, 2), vec![black, white]);
}

#[test]
fn test_lighten_and_darken() {
    let red = Color::keyword("red").unwrap();
    let light = red.lighten(20).unwrap();
    assert_eq!(light.kind(), ColorKind::Hsl);
    assert!(close(light.to_hsl().l, 0.7));
    assert_eq!(light.bytes(), [255, 102, 102]);

    let dark = red.darken("20%").unwrap();
    assert!(close(dark.to_hsl().l, 0.3));
    assert_eq!(dark.bytes(), [153, 0, 0]);

    // red is unchanged
    assert_eq!(red.kind(), ColorKind::Keyword);
}

#[test]
fn test_lightness_clamps() {
    let white = Color::WHITE.lighten(0.5).unwrap();
    assert_eq!(white.bytes(), [255, 255, 255]);
    let black = Color::BLACK.darken(50).unwrap();
    assert_eq!(black.bytes(), [0, 0, 0]);
}

#[test]
fn test_saturation_shifts() {
    let muted = Color::hsl("0deg", "50%", "50%").unwrap();
    let vivid = muted.saturate(20).unwrap();
    assert!(close(vivid.to_hsl().s, 0.7));
    assert_eq!(muted.brighten(20).unwrap(), vivid);

    let dull = muted.desaturate(100).unwrap();
    assert!(close(dull.to_hsl().s, 0.0));
    assert_eq!(muted.dull(100).unwrap(), dull);
}

#[test]
fn test_shift_rejects_bad_amount() {
    assert!(Color::WHITE.lighten(150).is_err());
    assert!(Color::WHITE.darken(1.5).is_err());
}

#[test]
fn test_shift_keeps_alpha_and_background() {
    let color = Color::builder(color_args![255, 0, 0])
        .alpha(0.5)
        .background("navy")
        .build()
        .unwrap()
        .darken(10)
        .unwrap();
    assert_eq!(color.alpha(), 0.5);
    assert!(color.has_background());
}

#[test]
fn test_rotate_and_compliment() {
    let red = Color::keyword("red").unwrap();
    assert_eq!(red.rotate(120).unwrap().bytes(), [0, 255, 0]);
    assert_eq!(red.rotate("240deg").unwrap().bytes(), [0, 0, 255]);
    assert_eq!(red.rotate(-120).unwrap().bytes(), [0, 0, 255]);
    assert_eq!(red.compliment().bytes(), [0, 255, 255]);
}

#[test]
fn test_rotate_rejects_symbols() {
    let red = Color::keyword("red").unwrap();
    assert!(matches!(
        red.rotate(tincture_color::ColorArg::symbol("left")),
        Err(ColorError::Unrecognized { .. })
    ));
}

#[test]
fn test_dial_and_triangulate() {
    let red = Color::keyword("red").unwrap();
    let wheel = red.dial(4, 0).unwrap();
    assert_eq!(wheel.len(), 4);
    assert_hues(&wheel, &[0.0, 90.0, 180.0, 270.0]);

    let triad = red.triangulate(30).unwrap();
    assert_hues(&triad, &[30.0, 150.0, 270.0]);

    assert!(red.dial(0, 0).unwrap().is_empty());
}

fn hue_of(degrees: i64) -> Color {
    Color::hsl(degrees, "100%", "50%").unwrap()
}

#[test]
fn test_warmer() {
    let degrees = |c: &Color| c.to_hsl().hue_degrees().round();

    assert_eq!(degrees(&hue_of(100).warmer(30).unwrap()), 70.0);
    // never past red
    assert_eq!(degrees(&hue_of(20).warmer(30).unwrap()), 0.0);
    // beyond blue it moves up toward 360
    assert_eq!(degrees(&hue_of(300).warmer(30).unwrap()), 330.0);
    assert_eq!(degrees(&hue_of(350).warmer(30).unwrap()), 0.0);
    // the reference hues are fixed points
    assert_eq!(degrees(&hue_of(0).warmer(30).unwrap()), 0.0);
    assert_eq!(degrees(&hue_of(240).warmer(30).unwrap()), 240.0);
}

#[test]
fn test_cooler() {
    let degrees = |c: &Color| c.to_hsl().hue_degrees().round();

    assert_eq!(degrees(&hue_of(100).cooler(30).unwrap()), 130.0);
    assert_eq!(degrees(&hue_of(230).cooler(30).unwrap()), 240.0);
    assert_eq!(degrees(&hue_of(300).cooler(30).unwrap()), 270.0);
    assert_eq!(degrees(&hue_of(250).cooler(30).unwrap()), 240.0);
    // red is a fixed point too
    assert_eq!(degrees(&hue_of(0).cooler(30).unwrap()), 0.0);
    assert_eq!(degrees(&hue_of(10).cooler(30).unwrap()), 40.0);
    assert!((hue_of(240).cooler(30).unwrap().to_hsl().h - COLDEST_HUE).abs() < 1e-9);
}

#[test]
fn test_consensus() {
    let colors = [
        Color::hsl(0, "100%", "40%").unwrap(),
        Color::hsl(120, "50%", "60%").unwrap(),
    ];
    let average = Color::consensus(&colors).unwrap();
    let hsl = average.to_hsl();
    assert_eq!(average.kind(), ColorKind::Hsl);
    assert!((hsl.hue_degrees() - 60.0).abs() < 1e-6);
    assert!(close(hsl.s, 0.75));
    assert!(close(hsl.l, 0.5));

    assert!(Color::consensus(&[]).is_none());
}

#[test]
fn test_contrast() {
    assert_eq!(Color::keyword("navy").unwrap().contrast(), Color::WHITE);
    assert_eq!(Color::keyword("lightyellow").unwrap().contrast(), Color::BLACK);
}

#[test]
fn test_assign_after_operation() {
    let mut accent = Color::keyword("blue").unwrap();
    let lighter = accent.lighten(10).unwrap();
    accent.assign(&lighter);
    assert_eq!(accent, lighter);
    assert_eq!(accent.kind(), ColorKind::Hsl);
}
