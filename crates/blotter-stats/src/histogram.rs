// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Binning configuration. Pay is non-negative by construction, so the
/// domain floor is pinned at zero regardless of the sample minimum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistogramConfig {
    pub bin_count: usize,
    pub axis_cap: f64,
    pub ceiling_step: f64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_count: 20,
            axis_cap: 0.5,
            ceiling_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// Count normalized by sample size; the y-axis reads "fraction of
    /// population".
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub max_density: f64,
    /// Y-axis ceiling: the configured cap, grown to the next
    /// `ceiling_step` increment when the tallest bin exceeds it.
    pub axis_ceiling: f64,
}

/// Partition a sample into equal-width bins spanning `[0, max]`.
/// Returns `None` for an empty or degenerate (all-zero) sample.
#[must_use]
pub fn bucket_sample(sample: &[f64], config: &HistogramConfig) -> Option<Histogram> {
    if sample.is_empty() || config.bin_count == 0 {
        return None;
    }
    let max = sample.iter().copied().fold(f64::MIN, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return None;
    }

    let width = max / config.bin_count as f64;
    let mut counts = vec![0_usize; config.bin_count];
    for &value in sample {
        let index = ((value / width) as usize).min(config.bin_count - 1);
        counts[index] += 1;
    }

    let n = sample.len() as f64;
    let bins: Vec<HistogramBin> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            lower: width * i as f64,
            upper: width * (i + 1) as f64,
            count,
            density: count as f64 / n,
        })
        .collect();

    let max_density = bins.iter().map(|b| b.density).fold(0.0, f64::max);
    let axis_ceiling = if max_density > config.axis_cap {
        (max_density / config.ceiling_step).ceil() * config.ceiling_step
    } else {
        config.axis_cap
    };

    Some(Histogram {
        bins,
        max_density,
        axis_ceiling,
    })
}
