// SPDX-License-Identifier: Apache-2.0

use crate::pay::PayCategory;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// Row contract every table record satisfies. The grid is generic over
/// this trait; it never assumes a concrete shape.
pub trait GridRecord {
    /// Unique identity of the row. Sources without a natural id get a
    /// sequential 1-based one assigned by the fetching collaborator.
    fn record_id(&self) -> i64;

    /// Cell value by wire field name. Unknown fields are `Null`, never
    /// an error: upstream data is known to be incomplete for historical
    /// records.
    fn field(&self, name: &str) -> FieldValue;

    /// Overwrite the identity. Only the fetching collaborator calls
    /// this, to assign sequential ids to sources that lack one.
    fn set_record_id(&mut self, id: i64);
}

/// One paid detail shift worked by an officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub tracking_no: Option<i64>,
    #[serde(default)]
    pub officer_name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub badge_no: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub hours_worked: Option<f64>,
    #[serde(default)]
    pub pay_rate: Option<f64>,
    #[serde(default)]
    pub pay_amount: Option<f64>,
}

impl GridRecord for DetailRecord {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn set_record_id(&mut self, id: i64) {
        self.id = id;
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "trackingNo" => self.tracking_no.into(),
            "officerName" => self.officer_name.clone().into(),
            "rank" => self.rank.clone().into(),
            "badgeNo" => self.badge_no.into(),
            "customerName" => self.customer_name.clone().into(),
            "startDate" => self.start_date.clone().into(),
            "endDate" => self.end_date.clone().into(),
            "hoursWorked" => self.hours_worked.into(),
            "payRate" => self.pay_rate.into(),
            "payAmount" => self.pay_amount.into(),
            _ => FieldValue::Null,
        }
    }
}

/// One internal-affairs allegation against an officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IaCaseRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub case_no: Option<String>,
    #[serde(default)]
    pub officer_name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub incident_type: Option<String>,
    #[serde(default)]
    pub received_date: Option<String>,
    #[serde(default)]
    pub allegation: Option<String>,
    #[serde(default)]
    pub finding: Option<String>,
    #[serde(default)]
    pub action_taken: Option<String>,
}

impl GridRecord for IaCaseRecord {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn set_record_id(&mut self, id: i64) {
        self.id = id;
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "caseNo" => self.case_no.clone().into(),
            "officerName" => self.officer_name.clone().into(),
            "rank" => self.rank.clone().into(),
            "incidentType" => self.incident_type.clone().into(),
            "receivedDate" => self.received_date.clone().into(),
            "allegation" => self.allegation.clone().into(),
            "finding" => self.finding.clone().into(),
            "actionTaken" => self.action_taken.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

/// One officer-year of earnings. Pay fields default to zero because
/// older years are missing categories entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayYearRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub total_pay: f64,
    #[serde(default)]
    pub regular_pay: f64,
    #[serde(default)]
    pub detail_pay: f64,
    #[serde(default)]
    pub overtime_pay: f64,
    #[serde(default)]
    pub retro_pay: f64,
    #[serde(default)]
    pub injured_pay: f64,
    #[serde(default)]
    pub quinn_pay: f64,
    #[serde(default)]
    pub other_pay: f64,
}

impl PayYearRecord {
    /// Amount earned in one category this year.
    #[must_use]
    pub fn category_amount(&self, category: PayCategory) -> f64 {
        match category {
            PayCategory::Total => self.total_pay,
            PayCategory::Regular => self.regular_pay,
            PayCategory::Detail => self.detail_pay,
            PayCategory::Overtime => self.overtime_pay,
            PayCategory::Retro => self.retro_pay,
            PayCategory::Injured => self.injured_pay,
            PayCategory::Quinn => self.quinn_pay,
            PayCategory::Other => self.other_pay,
        }
    }
}

impl GridRecord for PayYearRecord {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn set_record_id(&mut self, id: i64) {
        self.id = id;
    }

    fn field(&self, name: &str) -> FieldValue {
        if let Some(category) = PayCategory::parse_field(name) {
            return FieldValue::Float(self.category_amount(category));
        }
        match name {
            "id" => FieldValue::Int(self.id),
            "employeeId" => self.employee_id.into(),
            "name" => self.name.clone().into(),
            "rank" => self.rank.clone().into(),
            "year" => FieldValue::Int(i64::from(self.year)),
            _ => FieldValue::Null,
        }
    }
}

/// Table-generic record for call sites that handle any table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableRecord {
    Detail(DetailRecord),
    IaCase(IaCaseRecord),
    PayYear(PayYearRecord),
}

impl GridRecord for TableRecord {
    fn record_id(&self) -> i64 {
        match self {
            Self::Detail(r) => r.record_id(),
            Self::IaCase(r) => r.record_id(),
            Self::PayYear(r) => r.record_id(),
        }
    }

    fn set_record_id(&mut self, id: i64) {
        match self {
            Self::Detail(r) => r.set_record_id(id),
            Self::IaCase(r) => r.set_record_id(id),
            Self::PayYear(r) => r.set_record_id(id),
        }
    }

    fn field(&self, name: &str) -> FieldValue {
        match self {
            Self::Detail(r) => r.field(name),
            Self::IaCase(r) => r.field(name),
            Self::PayYear(r) => r.field(name),
        }
    }
}
