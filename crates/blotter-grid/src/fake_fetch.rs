// SPDX-License-Identifier: Apache-2.0

use crate::fetch::{FetchError, FetchErrorCode, PageRequest, PageResponse, RecordFetcher};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Scripted fetcher for tests and offline development. Responses are
/// consumed in push order; every request is recorded for assertion.
#[derive(Default)]
pub struct FakeFetcher<R> {
    responses: Mutex<VecDeque<Result<PageResponse<R>, FetchError>>>,
    pub requests: Mutex<Vec<PageRequest>>,
    pub calls: AtomicU64,
}

impl<R> FakeFetcher<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicU64::new(0),
        }
    }

    pub async fn push_page(&self, nodes: Vec<R>, total_count: u64) {
        self.responses
            .lock()
            .await
            .push_back(Ok(PageResponse { nodes, total_count }));
    }

    pub async fn push_error(&self, err: FetchError) {
        self.responses.lock().await.push_back(Err(err));
    }

    #[must_use]
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> RecordFetcher<R> for FakeFetcher<R> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>, FetchError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.requests.lock().await.push(request.clone());
        self.responses.lock().await.pop_front().unwrap_or_else(|| {
            Err(FetchError::new(
                FetchErrorCode::Backend,
                "fake fetcher has no scripted response left",
            ))
        })
    }
}
