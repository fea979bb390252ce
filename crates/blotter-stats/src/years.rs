// SPDX-License-Identifier: Apache-2.0

use crate::buckets::CohortBuckets;

/// Year stepping past either end of the valid-year list. Raised by the
/// cursor so UI guards (disabled prev/next controls) are provably
/// correct instead of silently desyncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    pub index: usize,
    pub len: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "year index {} out of range for {} valid years",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// Years offered for selection: the officer's own years, floored at
/// the most recent year the cohort population has regular-pay data
/// for. Officer data may extend past population data; those newer
/// years are excluded. Ascending, deduplicated.
#[must_use]
pub fn valid_years(officer_years: &[i32], buckets: &CohortBuckets) -> Vec<i32> {
    let Some(ceiling) = buckets.last_populated_year() else {
        return Vec::new();
    };
    let mut years: Vec<i32> = officer_years
        .iter()
        .copied()
        .filter(|y| *y <= ceiling)
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Bounds-checked navigation over an immutable sorted year list.
/// Starts at the most recent valid year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCursor {
    years: Vec<i32>,
    index: usize,
}

impl YearCursor {
    /// `None` when there is no valid year at all.
    #[must_use]
    pub fn new(years: Vec<i32>) -> Option<Self> {
        if years.is_empty() {
            return None;
        }
        let index = years.len() - 1;
        Some(Self { years, index })
    }

    #[must_use]
    pub fn current(&self) -> i32 {
        self.years[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.index + 1 < self.years.len()
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    /// Step to the next (more recent) valid year.
    pub fn next(&mut self) -> Result<usize, OutOfRangeError> {
        if !self.can_next() {
            return Err(OutOfRangeError {
                index: self.index + 1,
                len: self.years.len(),
            });
        }
        self.index += 1;
        Ok(self.index)
    }

    /// Step to the previous (older) valid year.
    pub fn prev(&mut self) -> Result<usize, OutOfRangeError> {
        if !self.can_prev() {
            return Err(OutOfRangeError {
                index: 0,
                len: self.years.len(),
            });
        }
        self.index -= 1;
        Ok(self.index)
    }
}
