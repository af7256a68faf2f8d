//! Color value types
//!
//! One `Copy` type per format on the conversion chain
//! `HEX ⇄ IRGB ⇄ SRGB ⇄ LRGB ⇄ XYZ ⇄ LAB ⇄ LCH`:
//! - RGB primitives (gamma-encoded float and integer, linear)
//! - `#RRGGBB` hex codec
//! - CIE XYZ, CIELAB and CIE LCH
//! - The D65 reference white

pub mod hex;
pub mod lab;
pub mod lch;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use hex::hex_valid;
pub use lab::Lab;
pub use lch::Lch;
pub use rgb::{Irgb, LinearRgb, Srgb};
pub use white_point::{D65, WhitePoint};
pub use xyz::Xyz;
