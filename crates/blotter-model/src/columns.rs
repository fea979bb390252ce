// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Tables served by the records API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TableId {
    Details,
    IaCases,
    Payroll,
}

impl TableId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::IaCases => "ia_cases",
            Self::Payroll => "payroll",
        }
    }
}

/// Declared value type of a column. Drives filter coercion and sort
/// behavior; dates are ISO-8601 strings on the wire so they order
/// lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Bool,
}

/// Rendering hint for a cell, consumed by the export collaborator and
/// any presentation layer. Not interpreted by the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    Currency,
    Hours,
}

/// Static descriptor for one grid column. `field` is the camelCase
/// identifier the API uses; the grid treats the descriptor list as
/// read-only configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub format: CellFormat,
    pub hidden: bool,
    pub flex: u8,
}

impl ColumnSpec {
    const fn new(field: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self {
            field,
            label,
            kind,
            format: CellFormat::Plain,
            hidden: false,
            flex: 1,
        }
    }

    const fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    const fn flex(mut self, flex: u8) -> Self {
        self.flex = flex;
        self
    }
}

const DETAIL_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("trackingNo", "Tracking #", ColumnKind::Number).hidden(),
    ColumnSpec::new("officerName", "Officer", ColumnKind::Text).flex(2),
    ColumnSpec::new("rank", "Rank", ColumnKind::Text),
    ColumnSpec::new("badgeNo", "Badge #", ColumnKind::Number),
    ColumnSpec::new("customerName", "Customer", ColumnKind::Text).flex(2),
    ColumnSpec::new("startDate", "Start", ColumnKind::Date),
    ColumnSpec::new("endDate", "End", ColumnKind::Date).hidden(),
    ColumnSpec::new("hoursWorked", "Hours", ColumnKind::Number).format(CellFormat::Hours),
    ColumnSpec::new("payRate", "Rate", ColumnKind::Number)
        .format(CellFormat::Currency)
        .hidden(),
    ColumnSpec::new("payAmount", "Pay", ColumnKind::Number).format(CellFormat::Currency),
];

const IA_CASE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("caseNo", "Case #", ColumnKind::Text),
    ColumnSpec::new("officerName", "Officer", ColumnKind::Text).flex(2),
    ColumnSpec::new("rank", "Rank", ColumnKind::Text).hidden(),
    ColumnSpec::new("incidentType", "Incident Type", ColumnKind::Text).flex(2),
    ColumnSpec::new("receivedDate", "Received", ColumnKind::Date),
    ColumnSpec::new("allegation", "Allegation", ColumnKind::Text).flex(2),
    ColumnSpec::new("finding", "Finding", ColumnKind::Text),
    ColumnSpec::new("actionTaken", "Action Taken", ColumnKind::Text).hidden(),
];

const PAYROLL_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("employeeId", "Employee ID", ColumnKind::Number).hidden(),
    ColumnSpec::new("name", "Name", ColumnKind::Text).flex(2),
    ColumnSpec::new("rank", "Rank", ColumnKind::Text),
    ColumnSpec::new("year", "Year", ColumnKind::Number),
    ColumnSpec::new("totalPay", "Total", ColumnKind::Number).format(CellFormat::Currency),
    ColumnSpec::new("regularPay", "Regular", ColumnKind::Number).format(CellFormat::Currency),
    ColumnSpec::new("detailPay", "Detail", ColumnKind::Number).format(CellFormat::Currency),
    ColumnSpec::new("overtimePay", "Overtime", ColumnKind::Number).format(CellFormat::Currency),
    ColumnSpec::new("retroPay", "Retro", ColumnKind::Number)
        .format(CellFormat::Currency)
        .hidden(),
    ColumnSpec::new("injuredPay", "Injured", ColumnKind::Number)
        .format(CellFormat::Currency)
        .hidden(),
    ColumnSpec::new("quinnPay", "Quinn", ColumnKind::Number)
        .format(CellFormat::Currency)
        .hidden(),
    ColumnSpec::new("otherPay", "Other", ColumnKind::Number)
        .format(CellFormat::Currency)
        .hidden(),
];

/// Column configuration for a table. Ordered as rendered.
#[must_use]
pub fn columns_for(table: TableId) -> &'static [ColumnSpec] {
    match table {
        TableId::Details => DETAIL_COLUMNS,
        TableId::IaCases => IA_CASE_COLUMNS,
        TableId::Payroll => PAYROLL_COLUMNS,
    }
}

/// Look up one column of a table by wire field name.
#[must_use]
pub fn column_spec(table: TableId, field: &str) -> Option<&'static ColumnSpec> {
    columns_for(table).iter().find(|c| c.field == field)
}
