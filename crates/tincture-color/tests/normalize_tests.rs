//! Integration tests for the numeric normalizers.

use tincture_color::normalize::{
    byte_to_percentage, normalize_alpha, normalize_amount, normalize_byte, normalize_degrees,
    normalize_for_hsl, normalize_for_rgb, normalize_percentage, normalize_ratio,
    percentage_to_byte, ratio_to_byte, wrap_degrees,
};
use tincture_color::{ColorArg, ColorError};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_normalize_byte_bounds() {
    assert_eq!(normalize_byte(0), Ok(0.0));
    assert_eq!(normalize_byte(255), Ok(1.0));
    assert!(matches!(
        normalize_byte(256),
        Err(ColorError::ByteRange { value: 256, .. })
    ));
    assert!(matches!(
        normalize_byte(-1),
        Err(ColorError::ByteRange { value: -1, .. })
    ));
}

#[test]
fn test_normalize_percentage_shapes() {
    assert_eq!(normalize_percentage(&ColorArg::from("50%")), Ok(50.0));
    assert_eq!(normalize_percentage(&ColorArg::from("12.5%")), Ok(12.5));
    assert_eq!(normalize_percentage(&ColorArg::Int(100)), Ok(100.0));
    assert!(matches!(
        normalize_percentage(&ColorArg::Int(101)),
        Err(ColorError::PercentageRange { .. })
    ));
    assert!(matches!(
        normalize_percentage(&ColorArg::from("150%")),
        Err(ColorError::PercentageRange { .. })
    ));
    assert!(matches!(
        normalize_percentage(&ColorArg::from("half")),
        Err(ColorError::Unrecognized { .. })
    ));
}

#[test]
fn test_percentage_byte_conversions() {
    assert_eq!(percentage_to_byte(&ColorArg::from("100%")), Ok(255));
    assert_eq!(percentage_to_byte(&ColorArg::from("20%")), Ok(51));
    assert_eq!(percentage_to_byte(&ColorArg::Int(0)), Ok(0));
    assert_eq!(byte_to_percentage(255), Ok(100));
    assert_eq!(byte_to_percentage(128), Ok(50));
    assert!(byte_to_percentage(300).is_err());
}

#[test]
fn test_ratio_bounds_and_bytes() {
    assert_eq!(normalize_ratio(0.25), Ok(0.25));
    assert!(matches!(
        normalize_ratio(1.5),
        Err(ColorError::RatioRange { .. })
    ));
    assert!(normalize_ratio(-0.1).is_err());
    assert_eq!(ratio_to_byte(0.5), Ok(128));
    assert_eq!(ratio_to_byte(1.0), Ok(255));
}

#[test]
fn test_normalize_degrees_wraps_negative_integers() {
    let hue = normalize_degrees(&ColorArg::Int(-127)).unwrap().unwrap();
    assert!(close(hue, 233.0 / 360.0));
    assert_eq!(normalize_degrees(&ColorArg::Int(360)), Ok(Some(0.0)));
}

#[test]
fn test_normalize_degrees_shapes() {
    let quarter = |arg: ColorArg| normalize_degrees(&arg).unwrap().unwrap();
    assert!(close(quarter(ColorArg::from("90deg")), 0.25));
    assert!(close(quarter(ColorArg::from("90degrees")), 0.25));
    assert!(close(quarter(ColorArg::from("25%")), 0.25));
    assert!(close(quarter(ColorArg::Float(0.25)), 0.25));
    assert!(close(quarter(ColorArg::Float(450.0)), 0.25));

    assert_eq!(normalize_degrees(&ColorArg::from("42")), Ok(None));
    assert_eq!(normalize_degrees(&ColorArg::symbol("red")), Ok(None));
}

#[test]
fn test_normalize_degrees_rejects_non_finite_numbers() {
    for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert!(
            matches!(
                normalize_degrees(&ColorArg::Float(value)),
                Err(ColorError::Unrecognized { .. })
            ),
            "{value}"
        );
    }
    assert_eq!(normalize_degrees(&ColorArg::from("infdeg")), Ok(None));
    assert_eq!(normalize_degrees(&ColorArg::from("NaNdegrees")), Ok(None));
}

#[test]
fn test_negative_percentage_is_out_of_range() {
    assert_eq!(
        normalize_percentage(&ColorArg::from("-5%")),
        Err(ColorError::PercentageRange {
            value: -5.0,
            channel: None
        })
    );
    assert!(matches!(
        normalize_for_rgb(&ColorArg::from("-5%")),
        Err(ColorError::PercentageRange { .. })
    ));
}

#[test]
fn test_normalize_for_rgb() {
    assert_eq!(normalize_for_rgb(&ColorArg::from("50%")), Ok(Some(0.5)));
    assert_eq!(normalize_for_rgb(&ColorArg::from("10deg")), Ok(None));
    assert_eq!(normalize_for_rgb(&ColorArg::from("51")), Ok(Some(0.2)));
    assert_eq!(normalize_for_rgb(&ColorArg::Float(0.5)), Ok(Some(0.5)));
    assert_eq!(normalize_for_rgb(&ColorArg::Int(255)), Ok(Some(1.0)));
    assert_eq!(normalize_for_rgb(&ColorArg::symbol("red")), Ok(None));
    assert!(normalize_for_rgb(&ColorArg::Int(300)).is_err());
    assert!(normalize_for_rgb(&ColorArg::Float(2.0)).is_err());
}

#[test]
fn test_normalize_for_hsl_accepts_degrees() {
    let value = normalize_for_hsl(&ColorArg::from("90deg")).unwrap().unwrap();
    assert!(close(value, 0.25));
    assert_eq!(normalize_for_hsl(&ColorArg::from("40%")), Ok(Some(0.4)));
    assert_eq!(normalize_for_hsl(&ColorArg::Int(0)), Ok(Some(0.0)));
}

#[test]
fn test_normalize_alpha() {
    assert_eq!(normalize_alpha(&ColorArg::Int(50)), Ok(0.5));
    assert_eq!(normalize_alpha(&ColorArg::from("25%")), Ok(0.25));
    assert_eq!(normalize_alpha(&ColorArg::Float(0.75)), Ok(0.75));
    assert_eq!(
        normalize_alpha(&ColorArg::Float(1.5)),
        Err(ColorError::AlphaRange { value: 1.5 })
    );
    assert_eq!(
        normalize_alpha(&ColorArg::Int(150)),
        Err(ColorError::AlphaRange { value: 1.5 })
    );
}

#[test]
fn test_normalize_amount() {
    assert_eq!(normalize_amount(&ColorArg::Int(10)), Ok(0.1));
    assert_eq!(normalize_amount(&ColorArg::from("20%")), Ok(0.2));
    assert_eq!(normalize_amount(&ColorArg::Float(0.3)), Ok(0.3));
    assert!(normalize_amount(&ColorArg::Int(120)).is_err());
}

#[test]
fn test_wrap_degrees() {
    assert!(close(wrap_degrees(-90.0), 0.75));
    assert!(close(wrap_degrees(720.0), 0.0));
}
