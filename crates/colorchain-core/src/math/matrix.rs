//! 3x3 Matrix operations for the linear RGB ↔ XYZ transform
//!
//! All operations use f64. The arithmetic methods are `const fn` so the
//! inverse sRGB matrix can be derived at compile time instead of being
//! transcribed with rounded coefficients.

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub const fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Calculate the determinant
    #[inline]
    pub const fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Calculate the inverse of this matrix
    ///
    /// Returns None if the matrix is singular (determinant ≈ 0)
    pub const fn inverse(&self) -> Option<Self> {
        let det = self.determinant();

        if det > -1e-14 && det < 1e-14 {
            return None;
        }

        let inv_det = 1.0 / det;
        let m = &self.m;

        // Adjugate divided by determinant
        Some(Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        })
    }

    /// Scale all elements by a scalar
    #[inline]
    pub const fn scale(&self, s: f64) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0] * s, m[0][1] * s, m[0][2] * s],
                [m[1][0] * s, m[1][1] * s, m[1][2] * s],
                [m[2][0] * s, m[2][1] * s, m[2][2] * s],
            ],
        }
    }
}

// ============================================================================
// sRGB primaries, D65 white point
// ============================================================================

/// Linear sRGB to XYZ matrix, unit scale
///
/// Four-decimal IEC 61966-2-1 coefficients. Rows sum to the D65 white.
pub const LINEAR_SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// XYZ to linear sRGB matrix, unit scale
///
/// Exact inverse of [`LINEAR_SRGB_TO_XYZ`].
pub const XYZ_TO_LINEAR_SRGB: Matrix3x3 = match LINEAR_SRGB_TO_XYZ.inverse() {
    Some(inv) => inv,
    None => panic!("sRGB matrix is singular"),
};
