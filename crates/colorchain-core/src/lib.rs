//! # colorchain - deterministic color conversions
//!
//! Converts color values between integer and float sRGB, `#RRGGBB` hex,
//! linear RGB, CIE XYZ, CIELAB and CIE LCH. All CIE math uses the D65
//! illuminant with the 2° standard observer.
//!
//! ## Structure
//!
//! Every conversion walks the chain
//!
//! ```text
//! HEX ⇄ IRGB ⇄ SRGB ⇄ LRGB ⇄ XYZ ⇄ LAB ⇄ LCH
//! ```
//!
//! - [`convert`]: one free function per adjacent pair plus `srgb_*` compositions
//! - [`clip`]: per-format range checks that report without altering
//! - [`Color`]: a mutable value holding sRGB, with `as_*`/`set_*` for every format
//! - [`batch`]: slice helpers for interleaved image buffers
//!
//! Scalar conversions are pure, allocation-free and never fail. Only the hex
//! codec returns [`Result`].
//!
//! ## Quick Start
//!
//! ```
//! use colorchain_core::color::{Irgb, Srgb};
//! use colorchain_core::convert;
//!
//! let hex = convert::irgb_to_hex(Irgb::new(255, 170, 0)).unwrap();
//! assert_eq!(hex, "#FFAA00");
//!
//! let lab = convert::srgb_to_lab(Srgb::WHITE);
//! assert!((lab.l - 100.0).abs() < 1e-6);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every value type and [`Color`]

pub mod batch;
pub mod canonical;
pub mod clip;
pub mod color;
pub mod convert;
pub mod error;
pub mod math;

pub use canonical::Color;
pub use clip::{Clip, ClipDirection};
pub use color::{Irgb, Lab, Lch, LinearRgb, Srgb, Xyz, hex_valid};
pub use error::{Channel, Error, Result};

/// Version of colorchain
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
