//! Parity against the `palette` crate
//!
//! The two chains use slightly different matrices and white points, so
//! agreement is measured in deltaE rather than bit equality.

use colorchain_core::{Lab, Srgb, convert};
use colorchain_tests::reference;
use colorchain_tests::samples::{self, SampleSet};
use colorchain_tests::{DeltaEStats, compare_lab};

/// Comfortably below one JND
const MAX_DELTA_E: f64 = 0.5;

fn lab_stats(colors: &[Srgb]) -> anyhow::Result<DeltaEStats> {
    let ours: Vec<Lab> = colors.iter().map(|&c| convert::srgb_to_lab(c)).collect();
    let theirs: Vec<Lab> = colors.iter().map(|&c| reference::srgb_to_lab(c)).collect();
    compare_lab(&theirs, &ours).ok_or_else(|| anyhow::anyhow!("empty sample set"))
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn lab_parity_grid() -> anyhow::Result<()> {
    let colors = samples::generate(SampleSet::Grid(17), 0);
    let stats = lab_stats(&colors)?;
    eprintln!("grid: {stats:?}");
    assert!(stats.within(MAX_DELTA_E), "{stats:?}");
    assert!(stats.mean < 0.1, "{stats:?}");
    Ok(())
}

#[test]
fn lab_parity_random() -> anyhow::Result<()> {
    let colors = samples::generate(SampleSet::Random(0xC0FFEE), 2000);
    let stats = lab_stats(&colors)?;
    assert!(stats.within(MAX_DELTA_E), "{stats:?}");
    Ok(())
}

#[test]
fn lab_parity_named_sets() -> anyhow::Result<()> {
    for set in [SampleSet::GamutCorners, SampleSet::SkinTones, SampleSet::Grays] {
        let colors = samples::generate(set, 64);
        let stats = lab_stats(&colors)?;
        assert!(stats.within(MAX_DELTA_E), "{set:?}: {stats:?}");
    }
    Ok(())
}

#[test]
fn xyz_parity() {
    for rgb in samples::generate(SampleSet::Grid(9), 0) {
        let ours = convert::srgb_to_xyz(rgb);
        let theirs = reference::srgb_to_xyz(rgb);
        assert!(ours.approx_eq(&theirs, 0.05), "{rgb:?}: {ours:?} vs {theirs:?}");
    }
}

#[test]
fn lch_parity() {
    for rgb in samples::generate(SampleSet::Random(7), 500) {
        let ours = convert::srgb_to_lch(rgb);
        let theirs = reference::srgb_to_lch(rgb);

        assert!((ours.l - theirs.l).abs() < MAX_DELTA_E, "{rgb:?}");
        assert!((ours.c - theirs.c).abs() < MAX_DELTA_E, "{rgb:?}");
        // Hue is unstable near the neutral axis
        if theirs.c > 20.0 {
            assert!(hue_distance(ours.h, theirs.h) < 0.5, "{rgb:?}: {ours:?} vs {theirs:?}");
        }
    }
}

#[test]
fn lab_to_srgb_parity() {
    for rgb in samples::generate(SampleSet::Grid(9), 0) {
        let lab = reference::srgb_to_lab(rgb);
        let ours = convert::lab_to_srgb(lab);
        let theirs = reference::lab_to_srgb(lab);
        assert!(ours.approx_eq(&theirs, 2e-3), "{lab:?}: {ours:?} vs {theirs:?}");
    }
}
