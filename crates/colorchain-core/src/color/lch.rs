//! CIE LCH Color Space
//!
//! The polar form of CIELAB: lightness is shared, while the a*/b* plane is
//! re-expressed as chroma (radius) and hue (angle in degrees).

use bytemuck::{Pod, Zeroable};

use crate::color::{Lab, Srgb};
use crate::convert;

/// CIE LCH color coordinates (D65 reference white)
///
/// Hue produced by [`crate::convert::lab_to_lch`] lies in (0, 360]; a hue of
/// exactly zero radians is reported as 360.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Lch {
    /// Lightness (0 to 100), identical to CIELAB L*
    pub l: f64,
    /// Chroma, distance from the neutral axis (≥ 0)
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
}

impl Lch {
    /// Create a new LCH color
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Create LCH from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            c: arr[1],
            h: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Convert to Cartesian CIELAB
    #[inline]
    pub fn to_lab(self) -> Lab {
        convert::lch_to_lab(self)
    }

    /// Convert to sRGB (unclamped)
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        convert::lch_to_srgb(self)
    }

    /// Check if approximately equal to another LCH color
    ///
    /// Hues are compared on the circle, so 0 and 360 are equal.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let dh = (self.h - other.h).rem_euclid(360.0);
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && dh.min(360.0 - dh) < epsilon
    }
}

impl From<[f64; 3]> for Lch {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lch> for [f64; 3] {
    fn from(lch: Lch) -> Self {
        lch.to_array()
    }
}
