//! Reference chain built on `palette`
//!
//! `palette` derives its sRGB matrix from the primaries and uses the exact
//! CIE epsilon/kappa, so it agrees with colorchain to well under one deltaE
//! but not bit for bit. Every conversion here is unclamped, matching
//! colorchain, so saturated blues keep their full chroma.

use colorchain_core::{Lab, Lch, Srgb, Xyz};
use palette::convert::IntoColorUnclamped;
use palette::white_point::D65;

fn palette_srgb(rgb: Srgb) -> palette::Srgb<f64> {
    palette::Srgb::new(rgb.r, rgb.g, rgb.b)
}

/// sRGB → XYZ, rescaled to the 0-100 range
pub fn srgb_to_xyz(rgb: Srgb) -> Xyz {
    let xyz: palette::Xyz<D65, f64> = palette_srgb(rgb).into_color_unclamped();
    Xyz::new(xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0)
}

/// sRGB → CIELAB (D65)
pub fn srgb_to_lab(rgb: Srgb) -> Lab {
    let lab: palette::Lab<D65, f64> = palette_srgb(rgb).into_color_unclamped();
    Lab::new(lab.l, lab.a, lab.b)
}

/// sRGB → CIE LCH (D65), hue in [0, 360)
pub fn srgb_to_lch(rgb: Srgb) -> Lch {
    let lch: palette::Lch<D65, f64> = palette_srgb(rgb).into_color_unclamped();
    Lch::new(lch.l, lch.chroma, lch.hue.into_positive_degrees())
}

/// CIELAB (D65) → sRGB, unclamped
pub fn lab_to_srgb(lab: Lab) -> Srgb {
    let rgb: palette::Srgb<f64> =
        palette::Lab::<D65, f64>::new(lab.l, lab.a, lab.b).into_color_unclamped();
    Srgb::new(rgb.red, rgb.green, rgb.blue)
}
