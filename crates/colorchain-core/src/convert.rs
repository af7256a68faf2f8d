//! Pairwise conversion functions
//!
//! Every format is reachable from every other by walking the chain
//!
//! ```text
//! HEX ⇄ IRGB ⇄ SRGB ⇄ LRGB ⇄ XYZ ⇄ LAB ⇄ LCH
//! ```
//!
//! Adjacent pairs hold the math; the `srgb_*` shortcuts are plain
//! compositions. Everything except the hex codec is total: inputs outside the
//! nominal range produce outputs outside the nominal range, and callers
//! detect that with [`crate::clip`].

use crate::color::{D65, Irgb, Lab, Lch, LinearRgb, Srgb, Xyz, hex};
use crate::error::Result;
use crate::math::{LINEAR_SRGB_TO_XYZ, XYZ_TO_LINEAR_SRGB, srgb_gamma_decode, srgb_gamma_encode};

// ============================================================================
// Format adapters
// ============================================================================

/// Integer RGB (0-255) to float sRGB (0-1), exact division
#[inline]
pub fn irgb_to_srgb(rgb: Irgb) -> Srgb {
    Srgb::new(
        rgb.r as f64 / 255.0,
        rgb.g as f64 / 255.0,
        rgb.b as f64 / 255.0,
    )
}

/// Float sRGB (0-1) to integer RGB (0-255)
///
/// Rounds half away from zero and does not clamp.
#[inline]
pub fn srgb_to_irgb(rgb: Srgb) -> Irgb {
    Irgb::new(
        (rgb.r * 255.0).round() as i32,
        (rgb.g * 255.0).round() as i32,
        (rgb.b * 255.0).round() as i32,
    )
}

/// Parse `#RRGGBB` (either case) into integer RGB
pub fn hex_to_irgb(hex: &str) -> Result<Irgb> {
    hex::parse(hex)
}

/// Format integer RGB as uppercase `#RRGGBB`
pub fn irgb_to_hex(rgb: Irgb) -> Result<String> {
    hex::format(rgb)
}

/// Parse `#RRGGBB` straight to float sRGB
pub fn hex_to_srgb(hex: &str) -> Result<Srgb> {
    hex_to_irgb(hex).map(irgb_to_srgb)
}

/// Round float sRGB to integers and format as `#RRGGBB`
pub fn srgb_to_hex(rgb: Srgb) -> Result<String> {
    irgb_to_hex(srgb_to_irgb(rgb))
}

// ============================================================================
// Gamma codec
// ============================================================================

/// Remove sRGB gamma encoding channel by channel
#[inline]
pub fn srgb_to_lrgb(rgb: Srgb) -> LinearRgb {
    LinearRgb::from_array(rgb.to_array().map(srgb_gamma_decode))
}

/// Apply sRGB gamma encoding channel by channel
#[inline]
pub fn lrgb_to_srgb(rgb: LinearRgb) -> Srgb {
    Srgb::from_array(rgb.to_array().map(srgb_gamma_encode))
}

// ============================================================================
// Linear RGB ⇄ XYZ
// ============================================================================

/// Linear RGB to XYZ on the 0-100 scale
#[inline]
pub fn lrgb_to_xyz(rgb: LinearRgb) -> Xyz {
    Xyz::from_array(LINEAR_SRGB_TO_XYZ.scale(100.0).multiply_vec(rgb.to_array()))
}

/// XYZ on the 0-100 scale to linear RGB
#[inline]
pub fn xyz_to_lrgb(xyz: Xyz) -> LinearRgb {
    LinearRgb::from_array(XYZ_TO_LINEAR_SRGB.multiply_vec(xyz.scale(0.01).to_array()))
}

/// sRGB to XYZ via linear RGB
#[inline]
pub fn srgb_to_xyz(rgb: Srgb) -> Xyz {
    lrgb_to_xyz(srgb_to_lrgb(rgb))
}

/// XYZ to sRGB via linear RGB
#[inline]
pub fn xyz_to_srgb(xyz: Xyz) -> Srgb {
    lrgb_to_srgb(xyz_to_lrgb(xyz))
}

// ============================================================================
// XYZ ⇄ LAB
// ============================================================================

/// XYZ to CIELAB relative to D65/2°
#[inline]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    Lab::from_xyz_with_white(xyz, &D65)
}

/// CIELAB relative to D65/2° to XYZ
#[inline]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    lab.to_xyz_with_white(&D65)
}

/// sRGB to CIELAB via XYZ
#[inline]
pub fn srgb_to_lab(rgb: Srgb) -> Lab {
    xyz_to_lab(srgb_to_xyz(rgb))
}

/// CIELAB to sRGB via XYZ
#[inline]
pub fn lab_to_srgb(lab: Lab) -> Srgb {
    xyz_to_srgb(lab_to_xyz(lab))
}

// ============================================================================
// LAB ⇄ LCH
// ============================================================================

/// CIELAB to LCH
///
/// A positive `atan2(b, a)` is used as is; zero and negative angles map to
/// `360 - |angle|`. Hue therefore lies in (0, 360], with an angle of exactly
/// zero (for example `b == 0, a >= 0`) reported as 360 rather than 0.
#[inline]
pub fn lab_to_lch(lab: Lab) -> Lch {
    let angle = lab.b.atan2(lab.a);
    let h = if angle > 0.0 {
        angle.to_degrees()
    } else {
        360.0 - angle.abs().to_degrees()
    };

    Lch::new(lab.l, lab.chroma(), h)
}

/// LCH to CIELAB; any hue is accepted, including negatives and ≥ 360
#[inline]
pub fn lch_to_lab(lch: Lch) -> Lab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Lab::new(lch.l, cos * lch.c, sin * lch.c)
}

/// sRGB to LCH via CIELAB
#[inline]
pub fn srgb_to_lch(rgb: Srgb) -> Lch {
    lab_to_lch(srgb_to_lab(rgb))
}

/// LCH to sRGB via CIELAB
#[inline]
pub fn lch_to_srgb(lch: Lch) -> Srgb {
    lab_to_srgb(lch_to_lab(lch))
}
