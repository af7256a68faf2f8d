//! RGB Color Primitives
//!
//! Three flavors of RGB travel through the chain:
//! - [`Srgb`]: gamma-encoded floats, nominally 0.0-1.0 (the canonical pivot)
//! - [`LinearRgb`]: gamma-decoded floats, proportional to light intensity
//! - [`Irgb`]: gamma-encoded integers, nominally 0-255

use bytemuck::{Pod, Zeroable};

use crate::color::{Lab, Lch, Xyz};
use crate::convert;

/// Gamma-encoded sRGB color in floating point (0.0-1.0 nominal)
///
/// Out-of-range channels are representable so intermediate math can
/// overshoot; use [`crate::clip::srgb_clip`] to detect them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Srgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new sRGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create sRGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Remove gamma encoding
    #[inline]
    pub fn to_linear(self) -> LinearRgb {
        convert::srgb_to_lrgb(self)
    }

    /// Scale to integers, rounding half away from zero (no clamping)
    #[inline]
    pub fn to_irgb(self) -> Irgb {
        convert::srgb_to_irgb(self)
    }

    /// Convert to CIE XYZ (0-100 scale)
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        convert::srgb_to_xyz(self)
    }

    /// Convert to CIELAB (D65)
    #[inline]
    pub fn to_lab(self) -> Lab {
        convert::srgb_to_lab(self)
    }

    /// Convert to CIE LCH (D65)
    #[inline]
    pub fn to_lch(self) -> Lch {
        convert::srgb_to_lch(self)
    }

    /// Check if approximately equal to another sRGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl From<[f64; 3]> for Srgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Srgb> for [f64; 3] {
    fn from(rgb: Srgb) -> Self {
        rgb.to_array()
    }
}

/// Linear-light RGB (sRGB primaries, gamma removed)
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct LinearRgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new linear RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create linear RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply gamma encoding
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        convert::lrgb_to_srgb(self)
    }

    /// Convert to CIE XYZ (0-100 scale)
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        convert::lrgb_to_xyz(self)
    }

    /// Check if approximately equal to another linear RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for LinearRgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LinearRgb> for [f64; 3] {
    fn from(rgb: LinearRgb) -> Self {
        rgb.to_array()
    }
}

/// Gamma-encoded sRGB color as integers (0-255 nominal)
///
/// Channels are signed so that scaling an out-of-range [`Srgb`] keeps the
/// overshoot visible instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Irgb {
    /// Red component (0 to 255)
    pub r: i32,
    /// Green component (0 to 255)
    pub g: i32,
    /// Blue component (0 to 255)
    pub b: i32,
}

impl Irgb {
    /// Create a new integer RGB color
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Create integer RGB from an array
    #[inline]
    pub const fn from_array(arr: [i32; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit values (always in range)
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i32,
            g: g as i32,
            b: b as i32,
        }
    }

    /// Saturate every channel into 0-255
    #[inline]
    pub fn to_u8_saturating(&self) -> [u8; 3] {
        self.to_array().map(|c| c.clamp(0, 255) as u8)
    }

    /// Divide by 255
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        convert::irgb_to_srgb(self)
    }

    /// Format as `#RRGGBB`, failing if any channel is outside 0-255
    #[inline]
    pub fn to_hex(self) -> crate::Result<String> {
        convert::irgb_to_hex(self)
    }
}

impl From<[i32; 3]> for Irgb {
    fn from(arr: [i32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<[u8; 3]> for Irgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

impl From<Irgb> for [i32; 3] {
    fn from(rgb: Irgb) -> Self {
        rgb.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_srgb_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let rgb = Srgb::from_array(arr);
        assert_eq!(rgb.to_array(), arr);

        let rgb2: Srgb = arr.into();
        assert_eq!(rgb, rgb2);
    }

    #[test]
    fn test_linear_white_is_unit() {
        let white = Srgb::WHITE.to_linear();
        assert!(white.approx_eq(&LinearRgb::new(1.0, 1.0, 1.0), EPSILON));
        assert!((white.to_xyz().y - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_irgb_from_u8() {
        let rgb: Irgb = [255u8, 170, 0].into();
        assert_eq!(rgb, Irgb::new(255, 170, 0));
    }

    #[test]
    fn test_irgb_saturating() {
        let rgb = Irgb::new(-4, 128, 300);
        assert_eq!(rgb.to_u8_saturating(), [0, 128, 255]);
    }

    #[test]
    fn test_pod_layout() {
        let flat = [0.25, 0.5, 0.75];
        let rgb: &Srgb = bytemuck::cast_ref(&flat);
        assert_eq!(*rgb, Srgb::new(0.25, 0.5, 0.75));
    }
}
