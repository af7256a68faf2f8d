//! Mathematical primitives for the conversion chain
//!
//! - sRGB transfer function (gamma codec)
//! - 3x3 matrix operations for linear RGB ↔ XYZ

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{LINEAR_SRGB_TO_XYZ, Matrix3x3, XYZ_TO_LINEAR_SRGB};
