//! Tests for the contrast evaluator's public API

use palette_contrast::{contrast_ratio, relative_luminance, ContrastResult, Error, Rgb};

const TOLERANCE: f64 = 1e-9;

fn sample_colors() -> Vec<Rgb> {
    let mut colors = Vec::new();
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(85) {
            for b in (0..=255).step_by(127) {
                colors.push(Rgb::new(r as u8, g as u8, b as u8));
            }
        }
    }
    colors
}

// ===================
// Properties
// ===================

#[test]
fn test_self_contrast_is_one() {
    for color in sample_colors() {
        assert!((contrast_ratio(color, color) - 1.0).abs() < TOLERANCE);
    }
}

#[test]
fn test_contrast_is_symmetric_and_bounded() {
    let colors = sample_colors();
    for &a in &colors {
        for &b in &colors {
            let ab = contrast_ratio(a, b);
            assert_eq!(ab, contrast_ratio(b, a));
            assert!((1.0..=21.0 + TOLERANCE).contains(&ab), "{a} / {b} = {ab}");
        }
    }
}

#[test]
fn test_luminance_is_bounded() {
    for color in sample_colors() {
        let l = relative_luminance(color);
        assert!((0.0..=1.0 + TOLERANCE).contains(&l), "{color} = {l}");
    }
}

#[test]
fn test_black_on_white_is_21() {
    assert!((contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 0.01);
    assert!(relative_luminance(Rgb::BLACK).abs() < TOLERANCE);
    assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < TOLERANCE);
}

// ===================
// Parsing
// ===================

#[test]
fn test_parse_hex_forms() {
    assert_eq!("#FF0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
    assert_eq!("ff0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
    assert_eq!(Rgb::from((255, 0, 0)), Rgb::new(255, 0, 0));
}

#[test]
fn test_parse_wrong_length_fails() {
    let err = "FF00".parse::<Rgb>().unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
    assert!(err.to_string().contains("FF00"));
}

// ===================
// Known pairs
// ===================

#[test]
fn test_error_red_on_black_terminal() {
    let result = Rgb::new(255, 0, 0).contrast_with(Rgb::BLACK);
    assert!((result.ratio - 5.25).abs() < 0.01);
    assert!(result.meets_aa);
    assert!(!result.meets_aaa);
}

#[test]
fn test_old_default_green_fails_aa_on_white() {
    let ratio = contrast_ratio(Rgb::new(0, 215, 0), Rgb::WHITE);
    assert!(ratio < 4.5, "ratio was {ratio}");
    assert!(!ContrastResult::new(ratio).meets_aa);
}
