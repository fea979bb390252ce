// SPDX-License-Identifier: Apache-2.0

/// Fraction of the sample strictly below the target, times 100,
/// rounded to one decimal place. A target below every value is the
/// 0th percentile; above every value, the 100th.
#[must_use]
pub fn percentile(sample: &[f64], target: f64) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let below = sample.iter().filter(|v| **v < target).count();
    let raw = below as f64 / sample.len() as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
