// SPDX-License-Identifier: Apache-2.0

use crate::limits::GridLimits;
use blotter_model::ColumnSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Current paging window. `page` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
}

impl PaginationState {
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page * self.page_size
    }
}

/// Per-instance view state. Visibility persists for the instance's
/// lifetime; pagination, sort, and filters change only on explicit
/// calls. Never shared across instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewState {
    pub column_visibility: BTreeMap<String, bool>,
    pub pagination: PaginationState,
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, String>,
}

impl GridViewState {
    /// Seed visibility from the descriptor list's hide flags.
    #[must_use]
    pub fn new(columns: &[ColumnSpec], limits: &GridLimits) -> Self {
        let column_visibility = columns
            .iter()
            .map(|c| (c.field.to_string(), !c.hidden))
            .collect();
        Self {
            column_visibility,
            pagination: PaginationState {
                page: 0,
                page_size: limits.default_page_size,
            },
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    /// Flip one column. Unknown fields become visible, matching the
    /// seeded default for columns added to the configuration later.
    pub fn toggle_column(&mut self, field: &str) {
        let entry = self
            .column_visibility
            .entry(field.to_string())
            .or_insert(true);
        *entry = !*entry;
    }

    #[must_use]
    pub fn is_visible(&self, field: &str) -> bool {
        self.column_visibility.get(field).copied().unwrap_or(true)
    }

    /// Sort clicks cycle asc, then desc, then back to natural order.
    /// Clicking a different field starts a fresh ascending sort.
    pub fn cycle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(s) if s.field == field => match s.direction {
                SortDirection::Asc => Some(SortSpec {
                    field: s.field,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(SortSpec {
                field: field.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    /// Set or clear one filter entry. Empty input clears.
    pub fn set_filter(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), value.to_string());
        }
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filters.values().any(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod state_tests {
    use super::{GridViewState, SortDirection};
    use crate::limits::GridLimits;
    use blotter_model::{columns_for, TableId};

    fn details_state() -> GridViewState {
        GridViewState::new(columns_for(TableId::Details), &GridLimits::default())
    }

    #[test]
    fn visibility_seeds_from_hide_flags() {
        let state = details_state();
        assert!(state.is_visible("officerName"));
        assert!(!state.is_visible("trackingNo"), "hidden by default");
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut state = details_state();
        let before = state.column_visibility.clone();
        state.toggle_column("rank");
        state.toggle_column("rank");
        assert_eq!(state.column_visibility, before);
    }

    #[test]
    fn sort_cycles_asc_desc_clear() {
        let mut state = details_state();
        state.cycle_sort("payAmount");
        assert_eq!(
            state.sort.as_ref().map(|s| s.direction),
            Some(SortDirection::Asc)
        );
        state.cycle_sort("payAmount");
        assert_eq!(
            state.sort.as_ref().map(|s| s.direction),
            Some(SortDirection::Desc)
        );
        state.cycle_sort("payAmount");
        assert!(state.sort.is_none());
    }

    #[test]
    fn sorting_a_new_field_restarts_ascending() {
        let mut state = details_state();
        state.cycle_sort("payAmount");
        state.cycle_sort("rank");
        let sort = state.sort.expect("sort present");
        assert_eq!(sort.field, "rank");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn empty_filter_input_clears_the_entry() {
        let mut state = details_state();
        state.set_filter("rank", "Sergeant");
        assert!(state.has_active_filters());
        state.set_filter("rank", "");
        assert!(!state.has_active_filters());
    }
}
