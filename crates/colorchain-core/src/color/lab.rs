//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually motivated color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The nonlinearity uses the classic CIE constants (0.008856 and 7.787)
//! rather than the exact rational 216/24389 and 841/108, and the inverse
//! tests the cubed value against the same threshold.

use bytemuck::{Pod, Zeroable};

use crate::color::{Lch, Srgb, WhitePoint, Xyz};
use crate::convert;

/// CIE linear/cube-root breakpoint, ≈ (6/29)³
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear segment, ≈ (29/6)² / 3
pub const KAPPA_SLOPE: f64 = 7.787;

/// Offset of the linear segment
pub const OFFSET: f64 = 16.0 / 116.0;

/// CIELAB color coordinates (D65 reference white)
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (unbounded, roughly ±128 for visible colors)
    pub a: f64,
    /// Blue-yellow axis (unbounded, roughly ±128 for visible colors)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ with a specific white point
    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ with a specific white point
    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.xyz.x,
            lab_f_inv(fy) * white.xyz.y,
            lab_f_inv(fz) * white.xyz.z,
        )
    }

    /// Convert to XYZ (D65)
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        convert::lab_to_xyz(self)
    }

    /// Convert to sRGB (unclamped)
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        convert::lab_to_srgb(self)
    }

    /// Convert to cylindrical LCH
    #[inline]
    pub fn to_lch(self) -> Lch {
        convert::lab_to_lch(self)
    }

    /// Chroma: distance from the neutral axis in the a*b* plane
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
pub(crate) fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
pub(crate) fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - OFFSET) / KAPPA_SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
