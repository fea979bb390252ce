// SPDX-License-Identifier: Apache-2.0

//! Record shapes, column metadata, and pay categories shared by every
//! blotter crate. This crate is the single source of truth for what a
//! row of each table looks like on the wire.

#![forbid(unsafe_code)]

pub mod columns;
pub mod pay;
pub mod record;
pub mod value;

pub const CRATE_NAME: &str = "blotter-model";

pub use columns::{columns_for, CellFormat, ColumnKind, ColumnSpec, TableId};
pub use pay::PayCategory;
pub use record::{DetailRecord, GridRecord, IaCaseRecord, PayYearRecord, TableRecord};
pub use value::FieldValue;
