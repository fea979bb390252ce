// SPDX-License-Identifier: Apache-2.0

use blotter_model::{PayCategory, PayYearRecord};
use std::collections::BTreeMap;

/// Ordered pay values per category for one year.
pub type CategoryBuckets = BTreeMap<PayCategory, Vec<f64>>;

/// Population pay values split into the cohort partition ("same rank")
/// and everyone else, keyed year then category. Built fresh per
/// population query and never mutated afterwards; a re-query produces
/// a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortBuckets {
    pub matching: BTreeMap<i32, CategoryBuckets>,
    pub rest: BTreeMap<i32, CategoryBuckets>,
}

impl CohortBuckets {
    /// Partition every population row into exactly one side by cohort
    /// rank. A value joins its (year, category) bucket only when
    /// non-zero: an officer with zero pay in a category that year does
    /// not appear in that category's distribution.
    #[must_use]
    pub fn partition(population: &[PayYearRecord], cohort_rank: &str) -> Self {
        let mut out = Self::default();
        for row in population {
            let side = if row.rank.as_deref() == Some(cohort_rank) {
                &mut out.matching
            } else {
                &mut out.rest
            };
            push_row(side, row);
        }
        out
    }

    /// The displayed sample: the cohort bucket alone when cohort
    /// filtering is on, the whole population when it is off.
    #[must_use]
    pub fn sample(&self, year: i32, category: PayCategory, cohort_only: bool) -> Vec<f64> {
        let mut sample = bucket_values(&self.matching, year, category);
        if !cohort_only {
            sample.extend(bucket_values(&self.rest, year, category));
        }
        sample
    }

    /// Whether the cohort partition has regular-pay data for a year.
    /// Drives the valid-year window.
    #[must_use]
    pub fn has_regular_data(&self, year: i32) -> bool {
        self.matching
            .get(&year)
            .and_then(|c| c.get(&PayCategory::Regular))
            .is_some_and(|v| !v.is_empty())
    }

    /// Most recent year with regular-pay data in the cohort partition.
    #[must_use]
    pub fn last_populated_year(&self) -> Option<i32> {
        self.matching
            .keys()
            .rev()
            .copied()
            .find(|year| self.has_regular_data(*year))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty() && self.rest.is_empty()
    }
}

fn push_row(side: &mut BTreeMap<i32, CategoryBuckets>, row: &PayYearRecord) {
    let categories = side.entry(row.year).or_default();
    for category in PayCategory::ALL {
        let amount = row.category_amount(category);
        if amount != 0.0 {
            categories.entry(category).or_default().push(amount);
        }
    }
}

fn bucket_values(
    side: &BTreeMap<i32, CategoryBuckets>,
    year: i32,
    category: PayCategory,
) -> Vec<f64> {
    side.get(&year)
        .and_then(|c| c.get(&category))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod buckets_tests {
    use super::CohortBuckets;
    use blotter_model::{PayCategory, PayYearRecord};

    fn pay_row(id: i64, year: i32, rank: &str, regular: f64, detail: f64) -> PayYearRecord {
        PayYearRecord {
            id,
            employee_id: Some(id),
            name: Some(format!("Officer {id}")),
            rank: Some(rank.to_string()),
            year,
            total_pay: regular + detail,
            regular_pay: regular,
            detail_pay: detail,
            overtime_pay: 0.0,
            retro_pay: 0.0,
            injured_pay: 0.0,
            quinn_pay: 0.0,
            other_pay: 0.0,
        }
    }

    #[test]
    fn every_row_lands_on_exactly_one_side() {
        let population = vec![
            pay_row(1, 2023, "Sergeant", 90_000.0, 10_000.0),
            pay_row(2, 2023, "Patrol", 70_000.0, 0.0),
            pay_row(3, 2023, "Sergeant", 95_000.0, 0.0),
        ];
        let buckets = CohortBuckets::partition(&population, "Sergeant");
        let matching = buckets.sample(2023, PayCategory::Regular, true);
        assert_eq!(matching, vec![90_000.0, 95_000.0]);
        let all = buckets.sample(2023, PayCategory::Regular, false);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn zero_values_never_join_a_bucket() {
        let population = vec![
            pay_row(1, 2023, "Patrol", 70_000.0, 0.0),
            pay_row(2, 2023, "Patrol", 72_000.0, 5_000.0),
        ];
        let buckets = CohortBuckets::partition(&population, "Patrol");
        let detail = buckets.sample(2023, PayCategory::Detail, true);
        assert_eq!(
            detail,
            vec![5_000.0],
            "zero detail pay is excluded from the distribution"
        );
    }

    #[test]
    fn last_populated_year_skips_empty_regular_buckets() {
        let population = vec![
            pay_row(1, 2021, "Patrol", 70_000.0, 0.0),
            // 2022 exists upstream for another rank only.
            pay_row(2, 2022, "Sergeant", 88_000.0, 0.0),
        ];
        let buckets = CohortBuckets::partition(&population, "Patrol");
        assert_eq!(buckets.last_populated_year(), Some(2021));
        assert!(!buckets.has_regular_data(2022));
    }

    #[test]
    fn empty_population_is_empty() {
        let buckets = CohortBuckets::partition(&[], "Patrol");
        assert!(buckets.is_empty());
        assert_eq!(buckets.last_populated_year(), None);
    }
}
