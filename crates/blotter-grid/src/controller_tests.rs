use crate::controller::{EmptyState, GridController};
use crate::fake_fetch::FakeFetcher;
use crate::fetch::{FetchError, FetchErrorCode, PageResponse, RecordFetcher};
use crate::limits::GridLimits;
use crate::translate::FilterScalar;
use blotter_model::{columns_for, DetailRecord, GridRecord, TableId};
use std::sync::Arc;

fn detail(id: i64, officer: &str, rank: &str, pay: f64) -> DetailRecord {
    DetailRecord {
        id,
        tracking_no: Some(10_000 + id),
        officer_name: Some(officer.to_string()),
        rank: Some(rank.to_string()),
        badge_no: Some(id * 7),
        customer_name: Some("Verizon".to_string()),
        start_date: Some("2023-06-01".to_string()),
        end_date: None,
        hours_worked: Some(8.0),
        pay_rate: Some(pay / 8.0),
        pay_amount: Some(pay),
    }
}

fn hundred_rows() -> Vec<DetailRecord> {
    (1..=100)
        .map(|i| {
            let rank = if i % 3 == 0 { "Sergeant" } else { "Patrol" };
            detail(i, &format!("Officer {i:03}"), rank, 400.0 + i as f64)
        })
        .collect()
}

fn client_grid() -> GridController<DetailRecord> {
    GridController::client(
        hundred_rows(),
        columns_for(TableId::Details),
        GridLimits::default(),
    )
}

fn server_grid(fake: &Arc<FakeFetcher<DetailRecord>>) -> GridController<DetailRecord> {
    let fetcher: Arc<dyn RecordFetcher<DetailRecord>> = fake.clone();
    GridController::server(fetcher, columns_for(TableId::Details), GridLimits::default())
}

#[test]
fn client_mode_pages_without_fetching() {
    let grid = client_grid();
    let rows = grid.current_rows();
    assert_eq!(rows.len(), 25, "first page is one page-size worth");
    assert_eq!(rows[0].record_id(), 1);
}

#[tokio::test]
async fn client_mode_page_two_slices_the_window() {
    let mut grid = client_grid();
    grid.set_page(2).await;
    let rows = grid.current_rows();
    assert_eq!(rows[0].record_id(), 51);
    assert_eq!(rows.len(), 25);
}

#[tokio::test]
async fn client_text_filter_is_substring_and_case_insensitive() {
    let mut grid = client_grid();
    grid.set_filter("rank", "serge").await;
    assert_eq!(grid.filtered_count(), 33, "every third row is a sergeant");
    assert!(grid
        .current_rows()
        .iter()
        .all(|r| r.rank.as_deref() == Some("Sergeant")));
}

#[tokio::test]
async fn client_numeric_filter_is_equality() {
    let mut grid = client_grid();
    grid.set_filter("payAmount", "442").await;
    assert_eq!(grid.filtered_count(), 1);
    assert_eq!(grid.current_rows()[0].record_id(), 42);
}

#[tokio::test]
async fn client_sort_desc_orders_by_field_value() {
    let mut grid = client_grid();
    grid.cycle_sort("payAmount").await;
    grid.cycle_sort("payAmount").await;
    let rows = grid.current_rows();
    assert_eq!(rows[0].record_id(), 100, "largest pay first under desc");
}

#[test]
fn structurally_empty_dataset_reports_no_records() {
    let grid: GridController<DetailRecord> = GridController::client(
        Vec::new(),
        columns_for(TableId::Details),
        GridLimits::default(),
    );
    assert_eq!(grid.empty_state(), Some(EmptyState::NoRecords));
}

#[tokio::test]
async fn filtered_to_nothing_reports_no_matches() {
    let mut grid = client_grid();
    grid.set_filter("officerName", "zzz-nobody").await;
    assert_eq!(grid.empty_state(), Some(EmptyState::NoMatches));
}

#[tokio::test]
async fn server_interactions_issue_exactly_one_fetch_each() {
    let fake = Arc::new(FakeFetcher::new());
    for _ in 0..4 {
        fake.push_page(vec![detail(1, "Officer 001", "Patrol", 500.0)], 1)
            .await;
    }
    let mut grid = server_grid(&fake);

    grid.refresh().await;
    assert_eq!(fake.call_count(), 1);
    grid.set_page(3).await;
    assert_eq!(fake.call_count(), 2);
    grid.set_filter("rank", "Patrol").await;
    assert_eq!(fake.call_count(), 3);
    grid.cycle_sort("payAmount").await;
    assert_eq!(fake.call_count(), 4);

    let requests = fake.requests.lock().await;
    assert_eq!(requests[1].offset, 75, "page 3 at size 25");
    assert_eq!(requests[1].limit, 25);
    assert_eq!(requests[2].offset, 0, "filter change rewinds to page 0");
    assert_eq!(
        requests[2].filters.get("rank"),
        Some(&FilterScalar::Text("Patrol".to_string()))
    );
    assert_eq!(requests[3].order_by, vec!["PAY_AMOUNT_ASC".to_string()]);
}

#[tokio::test]
async fn column_toggle_never_fetches() {
    let fake = Arc::new(FakeFetcher::new());
    fake.push_page(Vec::new(), 0).await;
    let mut grid = server_grid(&fake);
    grid.refresh().await;
    grid.toggle_column("rank");
    grid.toggle_column("trackingNo");
    assert_eq!(fake.call_count(), 1, "visibility is purely local");
}

#[tokio::test]
async fn server_response_replaces_rows_and_total() {
    let fake = Arc::new(FakeFetcher::new());
    fake.push_page(vec![detail(9, "Officer 009", "Patrol", 480.0)], 73)
        .await;
    let mut grid = server_grid(&fake);
    grid.refresh().await;
    assert!(!grid.is_loading());
    assert_eq!(grid.total_count(), 73);
    assert_eq!(grid.current_rows().len(), 1);
}

#[tokio::test]
async fn failed_fetch_clears_loading_and_shows_zero_rows() {
    let fake = Arc::new(FakeFetcher::new());
    fake.push_error(FetchError::new(FetchErrorCode::Network, "boom"))
        .await;
    let mut grid = server_grid(&fake);
    grid.refresh().await;
    assert!(!grid.is_loading(), "never hangs in loading");
    assert_eq!(grid.total_count(), 0);
    assert!(grid.current_rows().is_empty());
    assert_eq!(
        grid.last_error().map(|e| e.code),
        Some(FetchErrorCode::Network)
    );
}

#[tokio::test]
async fn in_flight_fetch_keeps_previous_rows_visible() {
    let fake = Arc::new(FakeFetcher::new());
    fake.push_page(vec![detail(1, "Officer 001", "Patrol", 500.0)], 50)
        .await;
    let mut grid = server_grid(&fake);
    grid.refresh().await;

    let seq = grid.begin_dispatch();
    assert!(grid.is_loading());
    assert_eq!(grid.current_rows().len(), 1, "old rows stay during flight");
    assert_eq!(grid.empty_state(), None, "no empty message mid-flight");
    grid.apply_page(
        seq,
        PageResponse {
            nodes: Vec::new(),
            total_count: 0,
        },
    );
    assert!(!grid.is_loading());
}

#[tokio::test]
async fn stale_response_is_discarded() {
    let fake = Arc::new(FakeFetcher::new());
    let mut grid = server_grid(&fake);

    let old_seq = grid.begin_dispatch();
    let new_seq = grid.begin_dispatch();

    grid.apply_page(
        new_seq,
        PageResponse {
            nodes: vec![detail(2, "Officer 002", "Patrol", 410.0)],
            total_count: 1,
        },
    );
    grid.apply_page(
        old_seq,
        PageResponse {
            nodes: vec![detail(1, "Officer 001", "Patrol", 400.0)],
            total_count: 99,
        },
    );

    assert_eq!(grid.total_count(), 1, "older response must not regress state");
    assert_eq!(grid.current_rows()[0].record_id(), 2);
}

#[tokio::test]
async fn stale_failure_does_not_clobber_newer_result() {
    let fake = Arc::new(FakeFetcher::new());
    let mut grid = server_grid(&fake);

    let old_seq = grid.begin_dispatch();
    let new_seq = grid.begin_dispatch();
    grid.apply_page(
        new_seq,
        PageResponse {
            nodes: vec![detail(5, "Officer 005", "Patrol", 450.0)],
            total_count: 5,
        },
    );
    grid.fail_page(old_seq, FetchError::new(FetchErrorCode::Network, "late"));

    assert_eq!(grid.total_count(), 5);
    assert!(grid.last_error().is_none());
}

#[test]
fn export_prefers_explicit_selection() {
    let mut grid = client_grid();
    for id in 1..=10 {
        grid.toggle_selected(id);
    }
    let export = grid.export_selection(false);
    assert_eq!(export.row_ids, (1..=10).collect::<Vec<_>>());
    assert!(!export.all_columns);
    assert!(
        export.columns.iter().all(|c| !c.hidden),
        "default visibility exports only shown columns"
    );
}

#[test]
fn export_without_selection_takes_current_page_only() {
    let grid = client_grid();
    let export = grid.export_selection(false);
    assert_eq!(export.row_ids.len(), 25, "page, not whole dataset");
    assert_eq!(export.row_ids[0], 1);
}

#[test]
fn export_all_columns_bypasses_visibility() {
    let mut grid = client_grid();
    grid.toggle_column("officerName");
    let export = grid.export_selection(true);
    assert_eq!(
        export.columns.len(),
        columns_for(TableId::Details).len(),
        "hidden and toggled-off columns included"
    );
}

#[test]
fn selection_toggle_round_trips() {
    let mut grid = client_grid();
    grid.toggle_selected(4);
    grid.toggle_selected(4);
    assert_eq!(grid.selected_count(), 0);
}
