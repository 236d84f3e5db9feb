// File: crates/spectrum-core/src/densify.rs
// Summary: Densification of a sparse mass list into a continuous integer-stepped axis.

use tracing::debug;

use crate::error::{Result, SpectrumError};

/// Distance between consecutive mass ticks.
pub const MASS_STEP: i64 = 1;

/// Largest axis the densifier will materialize (one `f64` per tick).
pub const MAX_AXIS_TICKS: usize = 10_000_000;

/// Continuous mass axis: tick `start + k` carries `intensities[k]`.
/// Contract: ticks run from floor(min mass) to floor(max mass) inclusive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DenseAxis {
    start: i64,
    intensities: Vec<f64>,
}

impl DenseAxis {
    pub fn len(&self) -> usize { self.intensities.len() }

    pub fn is_empty(&self) -> bool { self.intensities.is_empty() }

    pub fn min_mass(&self) -> Option<i64> {
        (!self.is_empty()).then_some(self.start)
    }

    pub fn max_mass(&self) -> Option<i64> {
        (!self.is_empty()).then(|| self.start + (self.len() as i64 - 1) * MASS_STEP)
    }

    pub fn intensities(&self) -> &[f64] { &self.intensities }

    pub fn masses(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len() as i64).map(move |k| self.start + k * MASS_STEP)
    }

    /// (mass, intensity) pairs in ascending mass order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.masses().zip(self.intensities.iter().copied())
    }

    pub fn get(&self, mass: i64) -> Option<f64> {
        let k = usize::try_from(mass.checked_sub(self.start)?).ok()?;
        self.intensities.get(k).copied()
    }

    /// Smallest and largest intensity on the axis (zero fills included).
    pub fn intensity_range(&self) -> Option<(f64, f64)> {
        let mut it = self.intensities.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Mass bucket a peak lands in; fractional masses share their integer part's tick.
#[inline]
pub fn mass_bucket(mass: f64) -> i64 {
    mass.floor() as i64
}

// `as i64` saturates; only buckets inside the i64 range are distinct ticks.
fn checked_bucket(mass: f64) -> Option<i64> {
    let b = mass.floor();
    (b >= i64::MIN as f64 && b < i64::MAX as f64).then_some(b as i64)
}

/// Build the dense axis from parallel columns. A bucket seen twice keeps the
/// later intensity; ticks without a peak get 0. Fails only when the mass
/// range needs more than [`MAX_AXIS_TICKS`] ticks or leaves the i64 range.
pub fn densify(masses: &[f64], intensities: &[f64]) -> Result<DenseAxis> {
    debug_assert_eq!(masses.len(), intensities.len(), "columns must be parallel");
    let Some((min, max)) = mass_range(masses) else {
        return Ok(DenseAxis::default());
    };

    let too_wide = SpectrumError::MassRangeTooWide { min, max };
    let (Some(start), Some(end)) = (checked_bucket(min), checked_bucket(max)) else {
        return Err(too_wide);
    };
    let len = end
        .checked_sub(start)
        .and_then(|d| (d / MASS_STEP).checked_add(1))
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n <= MAX_AXIS_TICKS)
        .ok_or(too_wide)?;

    let mut dense = vec![0.0; len];
    for (&m, &i) in masses.iter().zip(intensities) {
        // In range: start <= bucket(m) <= bucket(max), and that span fit above.
        dense[((mass_bucket(m) - start) / MASS_STEP) as usize] = i;
    }

    debug!(peaks = masses.len(), ticks = dense.len(), start, "densified mass axis");
    Ok(DenseAxis { start, intensities: dense })
}

fn mass_range(masses: &[f64]) -> Option<(f64, f64)> {
    let mut it = masses.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m))))
}
