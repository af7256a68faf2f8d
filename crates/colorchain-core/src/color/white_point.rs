//! Reference white
//!
//! LAB is computed relative to CIE Standard Illuminant D65 with the 2°
//! standard observer, on the same 0-100 scale as [`Xyz`].

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// CIE XYZ coordinates (Y normalized to 100)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// CIE Standard Illuminant D65, 2° observer
pub const D65: WhitePoint = WhitePoint::new(95.057, 100.0, 108.883);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert_eq!(D65.xyz.x, 95.057);
        assert_eq!(D65.xyz.y, 100.0);
        assert_eq!(D65.xyz.z, 108.883);
    }

    #[test]
    fn test_white_is_lab_origin() {
        let lab = crate::color::Lab::from_xyz_with_white(D65.xyz, &D65);
        assert!((lab.l - 100.0).abs() < 1e-9);
        assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
    }
}
