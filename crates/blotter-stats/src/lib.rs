// SPDX-License-Identifier: Apache-2.0

//! Distribution analyzer for officer pay: cohort-partitioned
//! population buckets, histogram binning, percentile rank, and
//! bounds-checked year stepping. Everything here is pure computation
//! over data the collaborators fetched.

#![forbid(unsafe_code)]

pub mod analyzer;
pub mod buckets;
pub mod histogram;
pub mod percentile;
pub mod years;

pub const CRATE_NAME: &str = "blotter-stats";

pub use analyzer::{ChartData, DistributionAnalyzer, DistributionView, NoPayCaption, PercentileMarker};
pub use buckets::{CategoryBuckets, CohortBuckets};
pub use histogram::{bucket_sample, Histogram, HistogramBin, HistogramConfig};
pub use percentile::percentile;
pub use years::{valid_years, OutOfRangeError, YearCursor};
