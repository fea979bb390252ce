// SPDX-License-Identifier: Apache-2.0

use crate::fetch::{FetchError, PageRequest, PageResponse, RecordFetcher};
use crate::limits::GridLimits;
use crate::state::{GridViewState, SortDirection};
use crate::translate::{order_token, remote_filters};
use blotter_model::{ColumnKind, ColumnSpec, GridRecord};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Why the grid has nothing to show. The two conditions render
/// distinct messaging and must never be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Zero rows exist upstream for this entity.
    NoRecords,
    /// Rows exist, but the active filters match none of them.
    NoMatches,
}

/// Export row/column sets resolved under the selection precedence
/// rule. File production belongs to the export collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSelection {
    pub row_ids: Vec<i64>,
    pub all_columns: bool,
    pub columns: Vec<ColumnSpec>,
}

enum Mode<R> {
    Client { all_rows: Vec<R> },
    Server { fetcher: Arc<dyn RecordFetcher<R>> },
}

/// One logical dataset as an interactive paginated table.
///
/// The operating mode is fixed at construction. In client mode the
/// whole record set is resident and paging, sorting, and filtering are
/// in-memory operations. In server mode only the current page is
/// resident and every state-changing interaction issues exactly one
/// backend query, tagged with a sequence number so a response that
/// arrives after a newer dispatch is discarded instead of regressing
/// the displayed state.
pub struct GridController<R> {
    columns: &'static [ColumnSpec],
    limits: GridLimits,
    view: GridViewState,
    mode: Mode<R>,
    page_rows: Vec<R>,
    total_count: u64,
    loading: bool,
    dispatch_seq: u64,
    selected: BTreeSet<i64>,
    last_error: Option<FetchError>,
}

impl<R: GridRecord> GridController<R> {
    /// Client-side mode: the full record set is already resident.
    #[must_use]
    pub fn client(all_rows: Vec<R>, columns: &'static [ColumnSpec], limits: GridLimits) -> Self {
        let view = GridViewState::new(columns, &limits);
        let total = all_rows.len() as u64;
        Self {
            columns,
            limits,
            view,
            mode: Mode::Client { all_rows },
            page_rows: Vec::new(),
            total_count: total,
            loading: false,
            dispatch_seq: 0,
            selected: BTreeSet::new(),
            last_error: None,
        }
    }

    /// Server-side mode: only the current page is resident. Call
    /// [`refresh`](Self::refresh) once after construction to load the
    /// first page.
    #[must_use]
    pub fn server(
        fetcher: Arc<dyn RecordFetcher<R>>,
        columns: &'static [ColumnSpec],
        limits: GridLimits,
    ) -> Self {
        let view = GridViewState::new(columns, &limits);
        Self {
            columns,
            limits,
            view,
            mode: Mode::Server { fetcher },
            page_rows: Vec::new(),
            total_count: 0,
            loading: false,
            dispatch_seq: 0,
            selected: BTreeSet::new(),
            last_error: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &GridViewState {
        &self.view
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Row count after filtering: the in-memory match count in client
    /// mode, the backend's filtered total in server mode.
    #[must_use]
    pub fn filtered_count(&self) -> u64 {
        match &self.mode {
            Mode::Client { all_rows } => self.client_filtered(all_rows).len() as u64,
            Mode::Server { .. } => self.total_count,
        }
    }

    /// Error of the most recent failed fetch, until a later fetch
    /// succeeds. The caller renders the banner; the controller has
    /// already recovered.
    #[must_use]
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Columns currently visible, in configuration order.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<ColumnSpec> {
        self.columns
            .iter()
            .filter(|c| self.view.is_visible(c.field))
            .copied()
            .collect()
    }

    /// Purely local in both modes; never triggers a refetch.
    pub fn toggle_column(&mut self, field: &str) {
        self.view.toggle_column(field);
    }

    /// Rows of the current page, in display order.
    #[must_use]
    pub fn current_rows(&self) -> Vec<&R> {
        match &self.mode {
            Mode::Server { .. } => self.page_rows.iter().collect(),
            Mode::Client { all_rows } => {
                let mut rows = self.client_filtered(all_rows);
                self.client_sort(&mut rows);
                let start = self.view.pagination.offset().min(rows.len());
                let end = (start + self.view.pagination.page_size).min(rows.len());
                rows[start..end].to_vec()
            }
        }
    }

    /// Record behind a rendered row, for the caller's row-click hook.
    /// The controller never navigates.
    #[must_use]
    pub fn record_at(&self, row_index: usize) -> Option<&R> {
        self.current_rows().get(row_index).copied()
    }

    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.loading {
            return None;
        }
        match &self.mode {
            Mode::Client { all_rows } => {
                if all_rows.is_empty() {
                    Some(EmptyState::NoRecords)
                } else if self.client_filtered(all_rows).is_empty() {
                    Some(EmptyState::NoMatches)
                } else {
                    None
                }
            }
            Mode::Server { .. } => {
                if self.total_count > 0 || !self.page_rows.is_empty() {
                    None
                } else if self.view.has_active_filters() {
                    Some(EmptyState::NoMatches)
                } else {
                    Some(EmptyState::NoRecords)
                }
            }
        }
    }

    pub fn toggle_selected(&mut self, record_id: i64) {
        if !self.selected.remove(&record_id) {
            self.selected.insert(record_id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Resolve the export sets. Explicitly selected rows win;
    /// otherwise exactly the currently visible page is exported, not
    /// the whole dataset. `all_columns` bypasses the visibility
    /// filter.
    #[must_use]
    pub fn export_selection(&self, all_columns: bool) -> ExportSelection {
        let row_ids = if self.selected.is_empty() {
            self.current_rows().iter().map(|r| r.record_id()).collect()
        } else {
            self.selected.iter().copied().collect()
        };
        let columns = if all_columns {
            self.columns.to_vec()
        } else {
            self.visible_columns()
        };
        ExportSelection {
            row_ids,
            all_columns,
            columns,
        }
    }

    /// Jump to a page. Server mode issues one fetch.
    pub async fn set_page(&mut self, page: usize) {
        self.view.pagination.page = page;
        self.refresh().await;
    }

    /// Change the page size and rewind to the first page. Server mode
    /// issues one fetch.
    pub async fn set_page_size(&mut self, page_size: usize) {
        self.view.pagination.page_size = self.limits.clamp_page_size(page_size);
        self.view.pagination.page = 0;
        self.refresh().await;
    }

    /// Cycle the sort on one column. Server mode issues one fetch.
    pub async fn cycle_sort(&mut self, field: &str) {
        self.view.cycle_sort(field);
        self.refresh().await;
    }

    /// Edit one filter entry and rewind to the first page. Server mode
    /// issues one fetch.
    pub async fn set_filter(&mut self, field: &str, value: &str) {
        self.view.set_filter(field, value);
        self.view.pagination.page = 0;
        self.refresh().await;
    }

    /// Translate the current view state into a backend page query.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            offset: self.view.pagination.offset(),
            limit: self.view.pagination.page_size,
            order_by: vec![order_token(self.view.sort.as_ref())],
            filters: remote_filters(&self.view.filters, self.columns),
        }
    }

    /// Issue one backend query for the current state. No-op in client
    /// mode. The previously displayed rows stay in place until the
    /// response lands, so the layout never collapses mid-flight.
    pub async fn refresh(&mut self) {
        let fetcher = match &self.mode {
            Mode::Client { .. } => return,
            Mode::Server { fetcher } => Arc::clone(fetcher),
        };
        let request = self.page_request();
        let seq = self.begin_dispatch();
        tracing::debug!(
            seq,
            offset = request.offset,
            limit = request.limit,
            "grid page fetch dispatched"
        );
        match fetcher.fetch_page(&request).await {
            Ok(response) => self.apply_page(seq, response),
            Err(err) => self.fail_page(seq, err),
        }
    }

    /// Reserve the next dispatch sequence number and enter loading.
    /// Exposed for drivers that run fetches concurrently themselves.
    pub fn begin_dispatch(&mut self) -> u64 {
        self.dispatch_seq += 1;
        self.loading = true;
        self.dispatch_seq
    }

    /// Apply a completed page response. A response whose sequence
    /// number predates the latest dispatch is stale and is discarded.
    pub fn apply_page(&mut self, seq: u64, response: PageResponse<R>) {
        if seq != self.dispatch_seq {
            tracing::warn!(seq, latest = self.dispatch_seq, "stale page response discarded");
            return;
        }
        self.loading = false;
        self.last_error = None;
        self.total_count = response.total_count;
        self.page_rows = response.nodes;
    }

    /// Record a failed fetch. Loading clears and the grid shows zero
    /// rows; it never hangs in a perpetual loading state.
    pub fn fail_page(&mut self, seq: u64, err: FetchError) {
        if seq != self.dispatch_seq {
            tracing::warn!(seq, latest = self.dispatch_seq, "stale page failure discarded");
            return;
        }
        tracing::warn!(seq, error = %err, "grid page fetch failed");
        self.loading = false;
        self.page_rows.clear();
        self.total_count = 0;
        self.last_error = Some(err);
    }

    fn column_kind(&self, field: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.kind)
    }

    /// Equality for numeric columns, case-insensitive substring for
    /// everything else. Unparseable numeric input falls back to the
    /// substring rule so the user still sees something sensible.
    fn client_filtered<'a>(&self, all_rows: &'a [R]) -> Vec<&'a R> {
        all_rows
            .iter()
            .filter(|row| {
                self.view.filters.iter().all(|(field, raw)| {
                    let needle = raw.trim();
                    if needle.is_empty() {
                        return true;
                    }
                    let value = row.field(field);
                    match (self.column_kind(field), needle.parse::<f64>()) {
                        (Some(ColumnKind::Number), Ok(wanted)) => {
                            value.as_f64().is_some_and(|v| v == wanted)
                        }
                        _ => value.contains_ci(needle),
                    }
                })
            })
            .collect()
    }

    fn client_sort<'a>(&self, rows: &mut [&'a R]) {
        let Some(sort) = &self.view.sort else {
            return;
        };
        rows.sort_by(|a, b| {
            let ordering = a.field(&sort.field).cmp_for_sort(&b.field(&sort.field));
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}
