// SPDX-License-Identifier: Apache-2.0

use crate::graphql::{decode_envelope, ClientError, ClientErrorCode, Envelope, GraphQlClient};
use async_trait::async_trait;
use blotter_model::PayYearRecord;
use serde_json::json;
use std::sync::Arc;

/// Supplies the analyzer with pay populations and one officer's own
/// rows. Injected so profile pages are testable without a backend.
#[async_trait]
pub trait PopulationSource: Send + Sync {
    /// Every officer-year row across the department. Missing pay
    /// fields decode as zero; the analyzer's bucket rule drops them.
    async fn fetch_population(&self) -> Result<Vec<PayYearRecord>, ClientError>;

    /// One officer's own pay rows, all years on record.
    async fn fetch_officer(&self, employee_id: i64) -> Result<Vec<PayYearRecord>, ClientError>;
}

const PAY_FIELDS: &str = "id employeeId name rank year totalPay regularPay detailPay overtimePay retroPay injuredPay quinnPay otherPay";

pub struct GraphQlPopulationSource {
    client: Arc<GraphQlClient>,
}

impl GraphQlPopulationSource {
    #[must_use]
    pub fn new(client: Arc<GraphQlClient>) -> Self {
        Self { client }
    }

    async fn run(
        &self,
        query: String,
        key: &str,
        variables: serde_json::Value,
    ) -> Result<Vec<PayYearRecord>, ClientError> {
        let envelope: Envelope<PayYearRecord> = self
            .client
            .post_raw(&json!({ "query": query, "variables": variables }))
            .await?;
        decode_envelope(envelope, key).map(|(nodes, _)| nodes)
    }
}

#[async_trait]
impl PopulationSource for GraphQlPopulationSource {
    async fn fetch_population(&self) -> Result<Vec<PayYearRecord>, ClientError> {
        let query = format!(
            "query PayPopulation {{\n  employeeYears(offset: 0, limit: 1000000, orderBy: [NATURAL]) {{\n    nodes {{ {PAY_FIELDS} }}\n    totalCount\n  }}\n}}"
        );
        self.run(query, "employeeYears", serde_json::Value::Null)
            .await
    }

    async fn fetch_officer(&self, employee_id: i64) -> Result<Vec<PayYearRecord>, ClientError> {
        if employee_id <= 0 {
            return Err(ClientError::new(
                ClientErrorCode::Decode,
                format!("invalid employee id {employee_id}"),
            ));
        }
        let query = format!(
            "query OfficerPay($employeeId: Int!) {{\n  officerYears(employeeId: $employeeId) {{\n    nodes {{ {PAY_FIELDS} }}\n    totalCount\n  }}\n}}"
        );
        self.run(query, "officerYears", json!({ "employeeId": employee_id }))
            .await
    }
}
