// SPDX-License-Identifier: Apache-2.0

use crate::buckets::CohortBuckets;
use crate::histogram::{bucket_sample, Histogram, HistogramConfig};
use crate::percentile::percentile;
use crate::years::{valid_years, OutOfRangeError, YearCursor};
use blotter_model::{PayCategory, PayYearRecord};
use std::collections::BTreeMap;

/// The officer's own position in the displayed distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileMarker {
    pub value: f64,
    pub percentile: f64,
}

/// Explicit caption shown instead of a marker when the officer
/// received no pay in the selected category that year. Never silently
/// omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPayCaption {
    pub year: i32,
    pub category: PayCategory,
}

impl std::fmt::Display for NoPayCaption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No {} pay received in {}",
            self.category.label().to_lowercase(),
            self.year
        )
    }
}

/// Everything a histogram rendering needs for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub year: i32,
    pub category: PayCategory,
    pub cohort_only: bool,
    pub histogram: Histogram,
    pub marker: Option<PercentileMarker>,
    pub caption: Option<NoPayCaption>,
}

/// What the profile page should render for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionView {
    /// No usable population buckets: a blank, sized placeholder, not
    /// an error.
    Placeholder,
    Chart(ChartData),
}

/// Interactive state over one officer's pay against a cohort
/// population: selected year (bounds-checked stepping), category, and
/// cohort filtering. Percentiles are recomputed on every selection
/// change, never cached across them.
#[derive(Debug, Clone)]
pub struct DistributionAnalyzer {
    buckets: CohortBuckets,
    officer: BTreeMap<i32, BTreeMap<PayCategory, f64>>,
    cursor: Option<YearCursor>,
    category: PayCategory,
    cohort_only: bool,
    config: HistogramConfig,
}

impl DistributionAnalyzer {
    /// Partition the population around the officer's cohort rank and
    /// window the selectable years. The default selection is the most
    /// recent valid year and total pay, cohort filtering on.
    #[must_use]
    pub fn new(
        population: &[PayYearRecord],
        officer_rows: &[PayYearRecord],
        cohort_rank: &str,
        config: HistogramConfig,
    ) -> Self {
        let buckets = CohortBuckets::partition(population, cohort_rank);
        let mut officer: BTreeMap<i32, BTreeMap<PayCategory, f64>> = BTreeMap::new();
        for row in officer_rows {
            let by_category = officer.entry(row.year).or_default();
            for category in PayCategory::ALL {
                by_category.insert(category, row.category_amount(category));
            }
        }
        let officer_years: Vec<i32> = officer.keys().copied().collect();
        let cursor = YearCursor::new(valid_years(&officer_years, &buckets));
        if cursor.is_none() {
            tracing::debug!(cohort_rank, "no usable cohort buckets; placeholder view");
        }
        Self {
            buckets,
            officer,
            cursor,
            category: PayCategory::Total,
            cohort_only: true,
            config,
        }
    }

    #[must_use]
    pub fn selected_year(&self) -> Option<i32> {
        self.cursor.as_ref().map(YearCursor::current)
    }

    #[must_use]
    pub fn selected_category(&self) -> PayCategory {
        self.category
    }

    #[must_use]
    pub fn cohort_only(&self) -> bool {
        self.cohort_only
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        self.cursor.as_ref().map_or(&[], YearCursor::years)
    }

    pub fn set_category(&mut self, category: PayCategory) {
        self.category = category;
    }

    pub fn set_cohort_only(&mut self, cohort_only: bool) {
        self.cohort_only = cohort_only;
    }

    /// Disabled-control signals for the year stepper.
    #[must_use]
    pub fn can_next_year(&self) -> bool {
        self.cursor.as_ref().is_some_and(YearCursor::can_next)
    }

    #[must_use]
    pub fn can_prev_year(&self) -> bool {
        self.cursor.as_ref().is_some_and(YearCursor::can_prev)
    }

    /// Step to the next valid year; out-of-bounds fails loudly.
    pub fn next_year(&mut self) -> Result<usize, OutOfRangeError> {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.next(),
            None => Err(OutOfRangeError { index: 0, len: 0 }),
        }
    }

    /// Step to the previous valid year; out-of-bounds fails loudly.
    pub fn prev_year(&mut self) -> Result<usize, OutOfRangeError> {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.prev(),
            None => Err(OutOfRangeError { index: 0, len: 0 }),
        }
    }

    /// Build the view for the current selection.
    #[must_use]
    pub fn view(&self) -> DistributionView {
        let Some(cursor) = &self.cursor else {
            return DistributionView::Placeholder;
        };
        let year = cursor.current();
        let sample = self.buckets.sample(year, self.category, self.cohort_only);
        let Some(histogram) = bucket_sample(&sample, &self.config) else {
            return DistributionView::Placeholder;
        };

        let own = self
            .officer
            .get(&year)
            .and_then(|c| c.get(&self.category))
            .copied()
            .unwrap_or(0.0);
        let (marker, caption) = if own == 0.0 {
            (
                None,
                Some(NoPayCaption {
                    year,
                    category: self.category,
                }),
            )
        } else {
            (
                Some(PercentileMarker {
                    value: own,
                    percentile: percentile(&sample, own),
                }),
                None,
            )
        };

        DistributionView::Chart(ChartData {
            year,
            category: self.category,
            cohort_only: self.cohort_only,
            histogram,
            marker,
            caption,
        })
    }
}
