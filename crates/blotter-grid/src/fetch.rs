// SPDX-License-Identifier: Apache-2.0

use crate::translate::FilterScalar;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchErrorCode {
    Network,
    Decode,
    Backend,
}

impl FetchErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network_error",
            Self::Decode => "decode_error",
            Self::Backend => "backend_error",
        }
    }
}

/// Failure of one remote page query. Recovered locally by the
/// controller; surfaced to the caller for banner display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub code: FetchErrorCode,
    pub message: String,
}

impl FetchError {
    #[must_use]
    pub fn new(code: FetchErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for FetchError {}

/// One backend page query: `offset = page * page_size`,
/// `limit = page_size`, a single order token, and the translated
/// filter object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    pub order_by: Vec<String>,
    pub filters: BTreeMap<String, FilterScalar>,
}

/// One page of records plus the filtered total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<R> {
    pub nodes: Vec<R>,
    pub total_count: u64,
}

/// Remote query collaborator. Injected at construction so the
/// controller is testable with a fake.
#[async_trait]
pub trait RecordFetcher<R>: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>, FetchError>;
}
