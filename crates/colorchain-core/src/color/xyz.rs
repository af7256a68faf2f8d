//! CIE XYZ Color Space
//!
//! XYZ is the device-independent hub between the RGB family and CIELAB.
//! Values use the 0-100 scale: sRGB white maps to Y = 100.

use bytemuck::{Pod, Zeroable};

use crate::color::{Lab, LinearRgb, Srgb};
use crate::convert;

/// CIE 1931 XYZ tristimulus values (0-100 scale, D65 white)
///
/// Nominal ranges for sRGB colors are X ∈ [0, ~95], Y ∈ [0, 100],
/// Z ∈ [0, ~109]. No valid range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert to linear RGB
    #[inline]
    pub fn to_linear_rgb(self) -> LinearRgb {
        convert::xyz_to_lrgb(self)
    }

    /// Convert to gamma-encoded sRGB
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        convert::xyz_to_srgb(self)
    }

    /// Convert to CIELAB (D65)
    #[inline]
    pub fn to_lab(self) -> Lab {
        convert::xyz_to_lab(self)
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}
