//! Tests for blending, lightening and darkening.

use super::*;
use crate::convert::normalize;

const COLOURS: [&str; 6] = [
    "#00ADD8",
    "#B57EE514",
    "fff",
    "rgb(67,67,67)",
    "rgba(10, 20, 30, 0.5)",
    "#2566f2",
];

#[test]
fn blend_endpoints() {
    assert_eq!(blend("#00ADD8", 1.0, WHITE).unwrap(), "#00ADD8");
    assert_eq!(blend("#00ADD8", 0.0, WHITE).unwrap(), "#FFFFFF");
}

#[test]
fn blend_midpoint_truncates() {
    assert_eq!(blend("#00ADD8", 0.5, WHITE).unwrap(), "#7FD6EB");
}

#[test]
fn blend_known_values() {
    assert_eq!(blend("#00ADD8", 0.1, WHITE).unwrap(), "#E5F6FB");
    assert_eq!(blend("#00ADD8", 0.16, WHITE).unwrap(), "#D6F1F8");
    assert_eq!(blend("#B57EE5", 0.16, WHITE).unwrap(), "#F3EAFA");
    assert_eq!(blend("#B57EE514", 0.16, WHITE).unwrap(), "#F3EAFA");
    assert_eq!(blend("B57EE5", 0.16, WHITE).unwrap(), "#F3EAFA");
    assert_eq!(blend("rgb(67,67,67)", 0.16, WHITE).unwrap(), "#E0E0E0");
}

#[test]
fn blend_accepts_rgb_inputs() {
    assert_eq!(blend("rgba(255,255,255,0)", 0.5, WHITE).unwrap(), "#FFFFFF");
    assert_eq!(blend("rgb(255,255,255)", 0.5, WHITE).unwrap(), "#FFFFFF");
    assert_eq!(blend("rgb(0,0,0)", 0.5, "rgb(0,0,0)").unwrap(), "#000000");
}

#[test]
fn blend_against_channels() {
    assert_eq!(blend_channels("#00ADD8", 0.5, [100, 100, 100]).unwrap(), "#32889E");
    assert_eq!(blend_channels("#00ADD8", 0.5, [200, 200, 200]).unwrap(), "#64BAD0");
    assert_eq!(
        blend_channels("#00ADD8", 0.5, [255, 255, 255]).unwrap(),
        blend("#00ADD8", 0.5, WHITE).unwrap()
    );
}

#[test]
fn blend_endpoint_law() {
    for c in COLOURS {
        for d in COLOURS {
            assert_eq!(blend(c, 1.0, d).unwrap(), normalize(c).unwrap(), "{c} {d}");
            assert_eq!(blend(c, 0.0, d).unwrap(), normalize(d).unwrap(), "{c} {d}");
        }
    }
}

#[test]
fn blend_clamp_law() {
    for c in COLOURS {
        for p in [1.0001, 2.0, 12.0, f64::INFINITY] {
            assert_eq!(blend(c, p, BLACK), blend(c, 1.0, BLACK));
        }
        for p in [-0.0001, -12.0, f64::NEG_INFINITY] {
            assert_eq!(blend(c, p, BLACK), blend(c, 0.0, BLACK));
        }
    }
}

#[test]
fn blend_rejects_nan_percentage() {
    assert!(matches!(
        blend("#00ADD8", f64::NAN, WHITE),
        Err(ColourError::InvalidPercentage(_))
    ));
}

#[test]
fn blend_rejects_invalid_colours() {
    for bad in ["", "_", "1", "#12345", "rgb(w,w,w)"] {
        assert!(matches!(
            blend(bad, 0.5, WHITE),
            Err(ColourError::InvalidFormat(_))
        ));
        assert!(matches!(
            blend("#00ADD8", 0.5, bad),
            Err(ColourError::InvalidFormat(_))
        ));
    }
}

#[test]
fn blend_rejects_out_of_range_rgb() {
    assert!(matches!(
        blend("rgb(300,0,0)", 0.5, WHITE),
        Err(ColourError::InvalidRange { channel: "red", .. })
    ));
}

#[test]
fn darken_known_value() {
    assert_eq!(darken("#00ADD8", 0.3).unwrap(), "#003340");
}

#[test]
fn lighten_and_darken_match_blend() {
    for c in COLOURS {
        for p in [0.0, 0.25, 0.5, 0.9, 1.0, 3.0] {
            assert_eq!(lighten(c, p), blend(c, p, "#FFFFFF"));
            assert_eq!(darken(c, p), blend(c, p, "#000000"));
        }
    }
}

#[test]
fn clamp_percentage_bounds() {
    assert_eq!(clamp_percentage(0.3).unwrap(), 0.3);
    assert_eq!(clamp_percentage(7.0).unwrap(), 1.0);
    assert_eq!(clamp_percentage(-7.0).unwrap(), 0.0);
    assert!(clamp_percentage(f64::NAN).is_err());
}
