//! Canonical color
//!
//! [`Color`] stores a single sRGB triple and derives every other format on
//! demand. Setters normalize their input into sRGB and replace all three
//! channels together; a rejected input leaves the color untouched.
//!
//! ```
//! use colorchain_core::Color;
//! use colorchain_core::color::Lch;
//!
//! let mut color = Color::default();
//! assert_eq!(color.as_hex(), "#FFFFFF");
//!
//! // Chained use: write one format, read another
//! let hex = color.set_lch(Lch::new(50.0, 40.0, 30.0)).as_hex();
//! assert_eq!(hex.len(), 7);
//! ```
//!
//! The type is a plain value: share it across threads by copying, or guard
//! a shared instance with a lock when it is mutated.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::color::{Irgb, Lab, Lch, LinearRgb, Srgb, Xyz, hex};
use crate::convert;
use crate::error::{Error, Result};

/// A color held as gamma-encoded sRGB
///
/// Defaults to white `(1.0, 1.0, 1.0)`. Channels may sit outside [0, 1]
/// after writing from a wide-gamut LAB/LCH/XYZ value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Color {
    /// Create from sRGB channels
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    fn store(&mut self, rgb: Srgb) -> &mut Self {
        let Srgb { r, g, b } = rgb;
        *self = Self { r, g, b };
        self
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The stored sRGB channels
    #[inline]
    pub const fn as_srgb(&self) -> Srgb {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Integer RGB, rounded and saturated into 0-255
    #[inline]
    pub fn as_irgb(&self) -> Irgb {
        Irgb::from(convert::srgb_to_irgb(self.as_srgb()).to_u8_saturating())
    }

    /// Uppercase `#RRGGBB` of [`Color::as_irgb`]
    #[inline]
    pub fn as_hex(&self) -> String {
        hex::format_u8(convert::srgb_to_irgb(self.as_srgb()).to_u8_saturating())
    }

    /// Linear-light RGB
    #[inline]
    pub fn as_lrgb(&self) -> LinearRgb {
        convert::srgb_to_lrgb(self.as_srgb())
    }

    /// CIE XYZ on the 0-100 scale
    #[inline]
    pub fn as_xyz(&self) -> Xyz {
        convert::srgb_to_xyz(self.as_srgb())
    }

    /// CIELAB, D65/2°
    #[inline]
    pub fn as_lab(&self) -> Lab {
        convert::srgb_to_lab(self.as_srgb())
    }

    /// CIE LCH, D65/2°
    #[inline]
    pub fn as_lch(&self) -> Lch {
        convert::srgb_to_lch(self.as_srgb())
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Overwrite from sRGB
    pub fn set_srgb(&mut self, rgb: Srgb) -> &mut Self {
        trace!(format = "srgb", ?rgb, "set color");
        self.store(rgb)
    }

    /// Overwrite from integer RGB (divided by 255, not range checked)
    pub fn set_irgb(&mut self, rgb: Irgb) -> &mut Self {
        trace!(format = "irgb", ?rgb, "set color");
        self.store(convert::irgb_to_srgb(rgb))
    }

    /// Overwrite from `#RRGGBB`; malformed input leaves the color unchanged
    pub fn set_hex(&mut self, hex: &str) -> Result<&mut Self> {
        let rgb = convert::hex_to_srgb(hex)?;
        trace!(format = "hex", hex, "set color");
        Ok(self.store(rgb))
    }

    /// Overwrite from linear RGB
    pub fn set_lrgb(&mut self, rgb: LinearRgb) -> &mut Self {
        trace!(format = "lrgb", ?rgb, "set color");
        self.store(convert::lrgb_to_srgb(rgb))
    }

    /// Overwrite from CIE XYZ (0-100 scale)
    pub fn set_xyz(&mut self, xyz: Xyz) -> &mut Self {
        trace!(format = "xyz", ?xyz, "set color");
        self.store(convert::xyz_to_srgb(xyz))
    }

    /// Overwrite from CIELAB
    pub fn set_lab(&mut self, lab: Lab) -> &mut Self {
        trace!(format = "lab", ?lab, "set color");
        self.store(convert::lab_to_srgb(lab))
    }

    /// Overwrite from CIE LCH
    pub fn set_lch(&mut self, lch: Lch) -> &mut Self {
        trace!(format = "lch", ?lch, "set color");
        self.store(convert::lch_to_srgb(lch))
    }
}

impl From<Srgb> for Color {
    fn from(rgb: Srgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Irgb> for Color {
    fn from(rgb: Irgb) -> Self {
        convert::irgb_to_srgb(rgb).into()
    }
}

impl From<LinearRgb> for Color {
    fn from(rgb: LinearRgb) -> Self {
        convert::lrgb_to_srgb(rgb).into()
    }
}

impl From<Xyz> for Color {
    fn from(xyz: Xyz) -> Self {
        convert::xyz_to_srgb(xyz).into()
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        convert::lab_to_srgb(lab).into()
    }
}

impl From<Lch> for Color {
    fn from(lch: Lch) -> Self {
        convert::lch_to_srgb(lch).into()
    }
}

impl From<Color> for Srgb {
    fn from(color: Color) -> Self {
        color.as_srgb()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        convert::hex_to_srgb(s).map(Self::from)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}
