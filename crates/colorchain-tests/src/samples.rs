//! Deterministic color samples
//!
//! Generates sRGB sample sets for parity and round-trip tests.

use colorchain_core::{Irgb, Srgb};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sample set kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSet {
    /// Uniform cube grid with this many steps per axis
    Grid(usize),
    /// Uniform random channels from a fixed seed
    Random(u64),
    /// Primaries, secondaries and a few mixes
    GamutCorners,
    /// Skin tones
    SkinTones,
    /// Neutral ramp from black to white
    Grays,
}

/// Generate sRGB samples for a set
///
/// `count` caps the number of colors for `Random` and `Grays`; the fixed
/// sets ignore it.
pub fn generate(set: SampleSet, count: usize) -> Vec<Srgb> {
    match set {
        SampleSet::Grid(steps) => {
            let steps = steps.max(2);
            let step = |i: usize| i as f64 / (steps - 1) as f64;
            let mut out = Vec::with_capacity(steps * steps * steps);
            for r in 0..steps {
                for g in 0..steps {
                    for b in 0..steps {
                        out.push(Srgb::new(step(r), step(g), step(b)));
                    }
                }
            }
            out
        }
        SampleSet::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Srgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
        SampleSet::GamutCorners => [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 128, 0],
            [128, 0, 255],
        ]
        .iter()
        .map(|&[r, g, b]| Irgb::from_u8(r, g, b).to_srgb())
        .collect(),
        SampleSet::SkinTones => [
            [255, 224, 189],
            [241, 194, 125],
            [224, 172, 105],
            [198, 134, 66],
            [141, 85, 36],
            [89, 47, 42],
        ]
        .iter()
        .map(|&[r, g, b]| Irgb::from_u8(r, g, b).to_srgb())
        .collect(),
        SampleSet::Grays => {
            let n = count.max(2);
            (0..n)
                .map(|i| {
                    let v = i as f64 / (n - 1) as f64;
                    Srgb::new(v, v, v)
                })
                .collect()
        }
    }
}

/// Random integer RGB with channels in 0..=255
pub fn random_irgb(seed: u64, count: usize) -> Vec<Irgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Irgb::new(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            )
        })
        .collect()
}
