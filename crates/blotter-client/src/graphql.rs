// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use blotter_grid::{FetchError, FetchErrorCode, PageRequest, PageResponse, RecordFetcher};
use blotter_model::{GridRecord, TableId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientErrorCode {
    Network,
    Decode,
    Backend,
}

impl ClientErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network_error",
            Self::Decode => "decode_error",
            Self::Backend => "backend_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub code: ClientErrorCode,
    pub message: String,
}

impl ClientError {
    #[must_use]
    pub fn new(code: ClientErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        let code = match err.code {
            ClientErrorCode::Network => FetchErrorCode::Network,
            ClientErrorCode::Decode => FetchErrorCode::Decode,
            ClientErrorCode::Backend => FetchErrorCode::Backend,
        };
        Self::new(code, err.message)
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    offset: usize,
    limit: usize,
    order_by: &'a [String],
    filters: &'a BTreeMap<String, blotter_grid::FilterScalar>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "R: serde::Deserialize<'de>"))]
pub(crate) struct Envelope<R> {
    // A failed query ships `"data": null` alongside `errors`.
    #[serde(default)]
    data: Option<BTreeMap<String, Connection<R>>>,
    #[serde(default)]
    errors: Vec<WireError>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Connection<R> {
    nodes: Vec<R>,
    total_count: u64,
}

/// Root field and selection set for one table's connection query.
#[must_use]
pub const fn table_query(table: TableId) -> (&'static str, &'static str) {
    match table {
        TableId::Details => (
            "details",
            "query Details($offset: Int!, $limit: Int!, $orderBy: [DetailOrder!], $filters: DetailFilters) {\n  details(offset: $offset, limit: $limit, orderBy: $orderBy, filters: $filters) {\n    nodes { id trackingNo officerName rank badgeNo customerName startDate endDate hoursWorked payRate payAmount }\n    totalCount\n  }\n}",
        ),
        TableId::IaCases => (
            "iaCases",
            "query IaCases($offset: Int!, $limit: Int!, $orderBy: [IaCaseOrder!], $filters: IaCaseFilters) {\n  iaCases(offset: $offset, limit: $limit, orderBy: $orderBy, filters: $filters) {\n    nodes { id caseNo officerName rank incidentType receivedDate allegation finding actionTaken }\n    totalCount\n  }\n}",
        ),
        TableId::Payroll => (
            "employeeYears",
            "query EmployeeYears($offset: Int!, $limit: Int!, $orderBy: [EmployeeYearOrder!], $filters: EmployeeYearFilters) {\n  employeeYears(offset: $offset, limit: $limit, orderBy: $orderBy, filters: $filters) {\n    nodes { id employeeId name rank year totalPay regularPay detailPay overtimePay retroPay injuredPay quinnPay otherPay }\n    totalCount\n  }\n}",
        ),
        // `TableId` is `#[non_exhaustive]` in another crate, so a
        // wildcard is required even though every current variant is
        // handled above.
        _ => panic!("unhandled TableId variant"),
    }
}

/// Thin GraphQL transport. One instance is shared by every fetcher;
/// construction is explicit so tests can substitute fakes at the
/// trait seam instead.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphQlClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// POST one connection query and decode `{nodes, totalCount}`
    /// under `key`.
    pub async fn fetch_connection<R: DeserializeOwned>(
        &self,
        query: &str,
        key: &str,
        request: &PageRequest,
    ) -> Result<(Vec<R>, u64), ClientError> {
        let body = GraphQlRequest {
            query,
            variables: Variables {
                offset: request.offset,
                limit: request.limit,
                order_by: &request.order_by,
                filters: &request.filters,
            },
        };
        tracing::debug!(key, offset = request.offset, limit = request.limit, "graphql query");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorCode::Network, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                ClientErrorCode::Backend,
                format!("graphql endpoint returned {status}"),
            ));
        }
        let envelope: Envelope<R> = response
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorCode::Decode, e.to_string()))?;
        decode_envelope(envelope, key)
    }

    /// POST an arbitrary GraphQL body and decode the whole response.
    /// For queries that do not fit the connection shape above.
    pub(crate) async fn post_raw<T: DeserializeOwned>(
        &self,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorCode::Network, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                ClientErrorCode::Backend,
                format!("graphql endpoint returned {status}"),
            ));
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorCode::Decode, e.to_string()))
    }
}

pub(crate) fn decode_envelope<R>(
    envelope: Envelope<R>,
    key: &str,
) -> Result<(Vec<R>, u64), ClientError> {
    if let Some(err) = envelope.errors.first() {
        return Err(ClientError::new(
            ClientErrorCode::Backend,
            err.message.clone(),
        ));
    }
    let connection = envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .find(|(k, _)| k == key);
    match connection {
        Some((_, c)) => Ok((c.nodes, c.total_count)),
        None => Err(ClientError::new(
            ClientErrorCode::Decode,
            format!("response missing connection key {key}"),
        )),
    }
}

/// Sources without a natural id decode to `id == 0`; give those rows
/// sequential 1-based ids anchored at the page offset, honoring the
/// model invariant that the grid never mints identity itself.
pub fn assign_missing_ids<R: GridRecord>(nodes: &mut [R], offset: usize) {
    for (index, node) in nodes.iter_mut().enumerate() {
        if node.record_id() == 0 {
            node.set_record_id((offset + index + 1) as i64);
        }
    }
}

/// `RecordFetcher` for one table over a shared GraphQL transport.
pub struct TableFetcher<R> {
    client: Arc<GraphQlClient>,
    key: &'static str,
    query: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> TableFetcher<R> {
    #[must_use]
    pub fn new(client: Arc<GraphQlClient>, table: TableId) -> Self {
        let (key, query) = table_query(table);
        Self {
            client,
            key,
            query,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R> RecordFetcher<R> for TableFetcher<R>
where
    R: GridRecord + DeserializeOwned + Send + Sync,
{
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>, FetchError> {
        let (mut nodes, total_count) = self
            .client
            .fetch_connection::<R>(self.query, self.key, request)
            .await
            .map_err(FetchError::from)?;
        assign_missing_ids(&mut nodes, request.offset);
        Ok(PageResponse { nodes, total_count })
    }
}

#[cfg(test)]
mod graphql_tests {
    use super::{assign_missing_ids, decode_envelope, ClientErrorCode, Envelope};
    use blotter_model::DetailRecord;

    #[test]
    fn envelope_decodes_nodes_and_total() {
        let raw = r#"{
            "data": {
                "details": {
                    "nodes": [{"id": 3, "officerName": "Doe, Jane"}],
                    "totalCount": 812
                }
            }
        }"#;
        let envelope: Envelope<DetailRecord> = serde_json::from_str(raw).expect("decode");
        let (nodes, total) = decode_envelope(envelope, "details").expect("connection");
        assert_eq!(total, 812);
        assert_eq!(nodes[0].id, 3);
        assert_eq!(nodes[0].officer_name.as_deref(), Some("Doe, Jane"));
    }

    #[test]
    fn backend_errors_surface_as_backend_code() {
        let raw = r#"{"data": null, "errors": [{"message": "boom"}]}"#;
        let envelope: Envelope<DetailRecord> = serde_json::from_str(raw).expect("decode");
        let err = decode_envelope(envelope, "details").expect_err("backend error");
        assert_eq!(err.code, ClientErrorCode::Backend);
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn missing_connection_key_is_a_decode_error() {
        let raw = r#"{"data": {"other": {"nodes": [], "totalCount": 0}}}"#;
        let envelope: Envelope<DetailRecord> = serde_json::from_str(raw).expect("decode");
        let err = decode_envelope(envelope, "details").expect_err("missing key");
        assert_eq!(err.code, ClientErrorCode::Decode);
    }

    #[test]
    fn id_less_rows_get_sequential_ids_from_the_page_offset() {
        let raw = r#"{
            "data": {
                "details": {
                    "nodes": [{"officerName": "A"}, {"officerName": "B"}],
                    "totalCount": 2
                }
            }
        }"#;
        let envelope: Envelope<DetailRecord> = serde_json::from_str(raw).expect("decode");
        let (mut nodes, _) = decode_envelope(envelope, "details").expect("connection");
        assign_missing_ids(&mut nodes, 50);
        assert_eq!(nodes[0].id, 51, "1-based from the page offset");
        assert_eq!(nodes[1].id, 52);
    }
}
