// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Earnings categories reported per officer-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayCategory {
    Total,
    Regular,
    Detail,
    Overtime,
    Retro,
    Injured,
    Quinn,
    Other,
}

impl PayCategory {
    pub const ALL: [Self; 8] = [
        Self::Total,
        Self::Regular,
        Self::Detail,
        Self::Overtime,
        Self::Retro,
        Self::Injured,
        Self::Quinn,
        Self::Other,
    ];

    /// Wire field name on payroll records.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Total => "totalPay",
            Self::Regular => "regularPay",
            Self::Detail => "detailPay",
            Self::Overtime => "overtimePay",
            Self::Retro => "retroPay",
            Self::Injured => "injuredPay",
            Self::Quinn => "quinnPay",
            Self::Other => "otherPay",
        }
    }

    /// Human label for selection controls and captions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Regular => "Regular",
            Self::Detail => "Detail",
            Self::Overtime => "Overtime",
            Self::Retro => "Retro",
            Self::Injured => "Injured",
            Self::Quinn => "Quinn",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.field_name() == field)
    }
}
