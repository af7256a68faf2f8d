//! Range checks per format
//!
//! A clip check reports whether a color lies outside its format's valid
//! domain without altering it. Channels are checked in declaration order and
//! the first violation decides the result; bounds themselves are in range.
//! A NaN channel compares false against both bounds and never counts as a
//! violation.
//!
//! | Format | Checked channels | Range |
//! |---|---|---|
//! | sRGB, linear RGB | r, g, b | [0, 1] |
//! | integer RGB | r, g, b | [0, 255] |
//! | LAB | l, a, b | [0, 100] |
//! | LCH | l, c / h | [0, 100] / [0, 360] |
//! | XYZ | none | unsupported |

use crate::color::{Irgb, Lab, Lch, LinearRgb, Srgb, Xyz};

/// Which side of the valid range a channel fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipDirection {
    /// Above the upper bound
    High,
    /// Below the lower bound
    Low,
}

/// Result of a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clip {
    /// Every channel is inside its range
    Within,
    /// The first out-of-range channel, and on which side
    Clipped(ClipDirection),
}

impl Clip {
    /// True if any channel is out of range
    #[inline]
    pub const fn is_clipped(&self) -> bool {
        matches!(self, Clip::Clipped(_))
    }

    /// Direction of the first violation, if any
    #[inline]
    pub const fn direction(&self) -> Option<ClipDirection> {
        match self {
            Clip::Within => None,
            Clip::Clipped(dir) => Some(*dir),
        }
    }

    /// Check channels against `(min, max)` pairs in order
    fn check<T: PartialOrd + Copy>(channels: &[(T, T, T)]) -> Self {
        for &(value, min, max) in channels {
            if value > max {
                return Clip::Clipped(ClipDirection::High);
            } else if value < min {
                return Clip::Clipped(ClipDirection::Low);
            }
        }
        Clip::Within
    }
}

/// Check gamma-encoded sRGB against [0, 1]
pub fn srgb_clip(rgb: Srgb) -> Clip {
    Clip::check(&[(rgb.r, 0.0, 1.0), (rgb.g, 0.0, 1.0), (rgb.b, 0.0, 1.0)])
}

/// Check linear RGB against [0, 1]
pub fn lrgb_clip(rgb: LinearRgb) -> Clip {
    Clip::check(&[(rgb.r, 0.0, 1.0), (rgb.g, 0.0, 1.0), (rgb.b, 0.0, 1.0)])
}

/// Check integer RGB against [0, 255]
pub fn irgb_clip(rgb: Irgb) -> Clip {
    Clip::check(&[(rgb.r, 0, 255), (rgb.g, 0, 255), (rgb.b, 0, 255)])
}

/// Check every LAB axis against [0, 100]
///
/// The opponent axes are held to the same range as lightness, so any
/// negative a* or b* reports [`ClipDirection::Low`].
pub fn lab_clip(lab: Lab) -> Clip {
    Clip::check(&[(lab.l, 0.0, 100.0), (lab.a, 0.0, 100.0), (lab.b, 0.0, 100.0)])
}

/// Check LCH lightness and chroma against [0, 100], then hue against [0, 360]
pub fn lch_clip(lch: Lch) -> Clip {
    Clip::check(&[(lch.l, 0.0, 100.0), (lch.c, 0.0, 100.0), (lch.h, 0.0, 360.0)])
}

/// XYZ has no defined valid range; always `None`
pub fn xyz_clip(_xyz: Xyz) -> Option<Clip> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_first_violation_wins() {
        // Red is high before blue is low
        let clip = srgb_clip(Srgb::new(1.5, 0.5, -0.2));
        assert_eq!(clip, Clip::Clipped(ClipDirection::High));

        let clip = srgb_clip(Srgb::new(-0.1, 2.0, 0.5));
        assert_eq!(clip, Clip::Clipped(ClipDirection::Low));
    }

    #[test]
    fn test_srgb_bounds_inclusive() {
        assert_eq!(srgb_clip(Srgb::WHITE), Clip::Within);
        assert_eq!(srgb_clip(Srgb::BLACK), Clip::Within);
        assert!(!srgb_clip(Srgb::new(0.3, 0.6, 0.9)).is_clipped());
    }

    #[test]
    fn test_lrgb() {
        assert_eq!(
            lrgb_clip(LinearRgb::new(0.5, 1.0000001, 0.0)).direction(),
            Some(ClipDirection::High)
        );
        assert_eq!(lrgb_clip(LinearRgb::new(0.5, 0.5, 0.5)).direction(), None);
    }

    #[test]
    fn test_irgb() {
        assert_eq!(irgb_clip(Irgb::new(0, 255, 128)), Clip::Within);
        assert_eq!(irgb_clip(Irgb::new(0, 256, -1)), Clip::Clipped(ClipDirection::High));
        assert_eq!(irgb_clip(Irgb::new(10, 20, -1)), Clip::Clipped(ClipDirection::Low));
    }

    #[test]
    fn test_lab_checks_all_axes() {
        assert_eq!(lab_clip(Lab::new(50.0, 10.0, 20.0)), Clip::Within);
        assert_eq!(lab_clip(Lab::new(101.0, 0.0, 0.0)), Clip::Clipped(ClipDirection::High));
        assert_eq!(lab_clip(Lab::new(50.0, -5.0, 0.0)), Clip::Clipped(ClipDirection::Low));
        assert_eq!(lab_clip(Lab::new(50.0, 0.0, 120.0)), Clip::Clipped(ClipDirection::High));
    }

    #[test]
    fn test_lch_hue_range() {
        assert_eq!(lch_clip(Lch::new(50.0, 30.0, 360.0)), Clip::Within);
        assert_eq!(lch_clip(Lch::new(50.0, 30.0, 360.5)), Clip::Clipped(ClipDirection::High));
        assert_eq!(lch_clip(Lch::new(50.0, 30.0, -1.0)), Clip::Clipped(ClipDirection::Low));
        // Chroma is checked before hue
        assert_eq!(lch_clip(Lch::new(50.0, -1.0, 400.0)), Clip::Clipped(ClipDirection::Low));
    }

    #[test]
    fn test_nan_is_not_clipped() {
        assert_eq!(srgb_clip(Srgb::new(f64::NAN, 0.5, 0.5)), Clip::Within);
        assert_eq!(lab_clip(Lab::new(50.0, f64::NAN, 10.0)), Clip::Within);
        // A later violation is still found past the NaN channel
        assert_eq!(
            lch_clip(Lch::new(f64::NAN, 20.0, 400.0)),
            Clip::Clipped(ClipDirection::High)
        );
    }

    #[test]
    fn test_xyz_unsupported() {
        assert_eq!(xyz_clip(Xyz::new(-10.0, 500.0, 0.0)), None);
    }
}
