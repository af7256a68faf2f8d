//! Color difference statistics
//!
//! Uses the CIE76 Euclidean distance in LAB. Both sides of every comparison
//! are produced from the same sRGB input, so differences stay small and the
//! simple metric is enough to bound them.

use colorchain_core::Lab;

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Every difference is below the JND threshold (deltaE < 1.0)
    pub fn is_imperceptible(&self) -> bool {
        self.max < 1.0
    }

    /// Every difference is below `limit`
    pub fn within(&self, limit: f64) -> bool {
        self.max < limit
    }
}

/// CIE76 difference between two LAB colors
pub fn delta_e_76(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Compare paired LAB values and summarize the differences
///
/// Returns `None` for empty input or mismatched lengths.
pub fn compare_lab(expected: &[Lab], actual: &[Lab]) -> Option<DeltaEStats> {
    if expected.is_empty() || expected.len() != actual.len() {
        return None;
    }

    let mut deltas: Vec<f64> = expected
        .iter()
        .zip(actual)
        .map(|(&e, &a)| delta_e_76(e, a))
        .collect();
    deltas.sort_by(f64::total_cmp);

    let count = deltas.len();
    let mean = deltas.iter().sum::<f64>() / count as f64;
    let max = deltas[count - 1];
    let p95 = deltas[((count as f64 * 0.95) as usize).min(count - 1)];

    Some(DeltaEStats {
        mean,
        max,
        p95,
        count,
    })
}
