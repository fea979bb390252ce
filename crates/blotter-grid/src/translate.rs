// SPDX-License-Identifier: Apache-2.0

use crate::state::{SortDirection, SortSpec};
use blotter_model::{ColumnKind, ColumnSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel order token meaning "no explicit sort; backend default
/// ordering applies".
pub const NATURAL_ORDER: &str = "NATURAL";

/// Backend-shaped filter value. Numeric columns coerce to integers
/// where the input parses; everything else travels as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterScalar {
    Int(i64),
    Text(String),
}

/// Translate the UI filter map into the backend filter object.
///
/// Entries with empty values are dropped. For `Number` columns the
/// value is parsed as an integer; unparseable input is preserved as
/// the raw string rather than silently dropped, so the backend sees
/// exactly what the user typed.
#[must_use]
pub fn remote_filters(
    filters: &BTreeMap<String, String>,
    columns: &[ColumnSpec],
) -> BTreeMap<String, FilterScalar> {
    let mut out = BTreeMap::new();
    for (field, raw) in filters {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        let kind = columns
            .iter()
            .find(|c| c.field == field.as_str())
            .map(|c| c.kind);
        let scalar = match kind {
            Some(ColumnKind::Number) => value
                .parse::<i64>()
                .map_or_else(|_| FilterScalar::Text(value.to_string()), FilterScalar::Int),
            _ => FilterScalar::Text(value.to_string()),
        };
        out.insert(field.clone(), scalar);
    }
    out
}

/// Derive the backend order token from the active sort.
///
/// `detailPay` descending becomes `DETAIL_PAY_DESC`; no sort becomes
/// the `NATURAL` sentinel.
#[must_use]
pub fn order_token(sort: Option<&SortSpec>) -> String {
    let Some(sort) = sort else {
        return NATURAL_ORDER.to_string();
    };
    let mut token = String::with_capacity(sort.field.len() + 6);
    for c in sort.field.chars() {
        if c.is_ascii_uppercase() {
            token.push('_');
            token.push(c);
        } else {
            token.push(c.to_ascii_uppercase());
        }
    }
    token.push_str(match sort.direction {
        SortDirection::Asc => "_ASC",
        SortDirection::Desc => "_DESC",
    });
    token
}
