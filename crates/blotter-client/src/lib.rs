// SPDX-License-Identifier: Apache-2.0

//! Collaborators around the grid and analyzer: the GraphQL page
//! fetcher, the payroll population source, and the CSV export writer.
//! This crate owns all network I/O; the core crates stay pure.

#![forbid(unsafe_code)]

pub mod export;
pub mod graphql;
pub mod population;

pub const CRATE_NAME: &str = "blotter-client";

pub use export::{write_csv, ExportError};
pub use graphql::{
    assign_missing_ids, table_query, ClientError, ClientErrorCode, GraphQlClient, TableFetcher,
};
pub use population::{GraphQlPopulationSource, PopulationSource};
