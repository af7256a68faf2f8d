//! Slice conversions for image buffers
//!
//! Float color types are `#[repr(C)]` and [`bytemuck::Pod`], so an
//! interleaved `[f64]` buffer can be viewed as colors without copying.

use bytemuck::PodCastError;
use tracing::trace;

use crate::color::{Irgb, Lab, Lch, Srgb};
use crate::convert;
use crate::error::{Error, Result};

fn cast_error(len: usize, err: PodCastError) -> Error {
    trace!(len, ?err, "buffer is not a whole number of colors");
    Error::BufferSize {
        expected: len - len % 3 + 3,
        actual: len,
    }
}

/// View an interleaved `r, g, b, r, g, b, …` buffer as sRGB colors
///
/// Fails with [`Error::BufferSize`] unless the length is a multiple of 3.
pub fn srgb_slice(data: &[f64]) -> Result<&[Srgb]> {
    bytemuck::try_cast_slice(data).map_err(|e| cast_error(data.len(), e))
}

/// Mutable variant of [`srgb_slice`]
pub fn srgb_slice_mut(data: &mut [f64]) -> Result<&mut [Srgb]> {
    let len = data.len();
    bytemuck::try_cast_slice_mut(data).map_err(|e| cast_error(len, e))
}

/// Apply `f` element-wise from `src` into `dst`
///
/// Both slices must have the same length; on mismatch nothing is written.
pub fn convert_slice<S, D, F>(src: &[S], dst: &mut [D], f: F) -> Result<()>
where
    S: Copy,
    F: Fn(S) -> D,
{
    if src.len() != dst.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    trace!(count = src.len(), "converting slice");
    for (out, &inp) in dst.iter_mut().zip(src) {
        *out = f(inp);
    }
    Ok(())
}

/// sRGB → CIELAB over a slice
pub fn srgb_to_lab_slice(src: &[Srgb], dst: &mut [Lab]) -> Result<()> {
    convert_slice(src, dst, convert::srgb_to_lab)
}

/// CIELAB → sRGB over a slice
pub fn lab_to_srgb_slice(src: &[Lab], dst: &mut [Srgb]) -> Result<()> {
    convert_slice(src, dst, convert::lab_to_srgb)
}

/// sRGB → LCH over a slice
pub fn srgb_to_lch_slice(src: &[Srgb], dst: &mut [Lch]) -> Result<()> {
    convert_slice(src, dst, convert::srgb_to_lch)
}

/// LCH → sRGB over a slice
pub fn lch_to_srgb_slice(src: &[Lch], dst: &mut [Srgb]) -> Result<()> {
    convert_slice(src, dst, convert::lch_to_srgb)
}

/// Packed 8-bit RGB to sRGB
///
/// `src` must hold exactly `3 * dst.len()` bytes.
pub fn rgb8_to_srgb_slice(src: &[u8], dst: &mut [Srgb]) -> Result<()> {
    if src.len() != dst.len() * 3 {
        return Err(Error::BufferSize {
            expected: dst.len() * 3,
            actual: src.len(),
        });
    }

    for (chunk, out) in src.chunks_exact(3).zip(dst.iter_mut()) {
        *out = convert::irgb_to_srgb(Irgb::from_u8(chunk[0], chunk[1], chunk[2]));
    }
    Ok(())
}

/// sRGB to packed 8-bit RGB, rounding and saturating each channel
///
/// `dst` must hold exactly `3 * src.len()` bytes.
pub fn srgb_to_rgb8_slice(src: &[Srgb], dst: &mut [u8]) -> Result<()> {
    if dst.len() != src.len() * 3 {
        return Err(Error::BufferSize {
            expected: src.len() * 3,
            actual: dst.len(),
        });
    }

    for (&rgb, chunk) in src.iter().zip(dst.chunks_exact_mut(3)) {
        chunk.copy_from_slice(&convert::srgb_to_irgb(rgb).to_u8_saturating());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_slice_view() {
        let data = [1.0, 0.0, 0.0, 0.0, 0.5, 1.0];
        let colors = srgb_slice(&data).unwrap();
        assert_eq!(colors, &[Srgb::new(1.0, 0.0, 0.0), Srgb::new(0.0, 0.5, 1.0)]);
    }

    #[test]
    fn test_srgb_slice_bad_length() {
        let data = [1.0, 0.0, 0.0, 0.5];
        assert_eq!(
            srgb_slice(&data),
            Err(Error::BufferSize {
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn test_srgb_slice_mut_writes_through() {
        let mut data = [0.0; 3];
        srgb_slice_mut(&mut data).unwrap()[0] = Srgb::WHITE;
        assert_eq!(data, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_convert_slice_length_mismatch_writes_nothing() {
        let src = [Srgb::WHITE, Srgb::BLACK];
        let mut dst = [Lab::new(-1.0, -1.0, -1.0)];
        let err = srgb_to_lab_slice(&src, &mut dst).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(dst[0], Lab::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_lab_slice_roundtrip() {
        let src = [Srgb::new(0.1, 0.2, 0.3), Srgb::new(0.9, 0.8, 0.7)];
        let mut lab = [Lab::default(); 2];
        let mut back = [Srgb::default(); 2];

        srgb_to_lab_slice(&src, &mut lab).unwrap();
        lab_to_srgb_slice(&lab, &mut back).unwrap();

        for (a, b) in src.iter().zip(&back) {
            assert!(a.approx_eq(b, 1e-9), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_lch_slice_matches_scalar() {
        let src = [Srgb::new(0.4, 0.6, 0.2)];
        let mut lch = [Lch::default()];
        srgb_to_lch_slice(&src, &mut lch).unwrap();
        assert_eq!(lch[0], convert::srgb_to_lch(src[0]));

        let mut back = [Srgb::default()];
        lch_to_srgb_slice(&lch, &mut back).unwrap();
        assert!(back[0].approx_eq(&src[0], 1e-9));
    }

    #[test]
    fn test_rgb8_roundtrip() {
        let src = [0u8, 128, 255, 64, 192, 32];
        let mut rgb = [Srgb::default(); 2];
        let mut dst = [0u8; 6];

        rgb8_to_srgb_slice(&src, &mut rgb).unwrap();
        srgb_to_rgb8_slice(&rgb, &mut dst).unwrap();

        assert_eq!(src, dst);
    }

    #[test]
    fn test_rgb8_saturates() {
        let mut dst = [0u8; 3];
        srgb_to_rgb8_slice(&[Srgb::new(1.5, -0.5, 0.5)], &mut dst).unwrap();
        assert_eq!(dst, [255, 0, 128]);
    }

    #[test]
    fn test_rgb8_length_mismatch() {
        let mut rgb = [Srgb::default(); 2];
        assert!(rgb8_to_srgb_slice(&[0u8; 5], &mut rgb).is_err());
    }
}
