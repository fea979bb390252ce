// SPDX-License-Identifier: Apache-2.0

//! Grid controller: one logical dataset presented as an interactive,
//! paginated table. Two mutually exclusive operating modes are chosen
//! at construction: client-side (whole dataset resident, paging and
//! filtering are array operations) and server-side (one page resident,
//! every state change issues one backend query).

#![forbid(unsafe_code)]

pub mod controller;
pub mod fake_fetch;
pub mod fetch;
pub mod limits;
pub mod state;
pub mod translate;

pub const CRATE_NAME: &str = "blotter-grid";

pub use controller::{EmptyState, ExportSelection, GridController};
pub use fake_fetch::FakeFetcher;
pub use fetch::{FetchError, FetchErrorCode, PageRequest, PageResponse, RecordFetcher};
pub use limits::GridLimits;
pub use state::{GridViewState, PaginationState, SortDirection, SortSpec};
pub use translate::{order_token, remote_filters, FilterScalar, NATURAL_ORDER};

#[cfg(test)]
mod controller_tests;
