/*
[INPUT]:  Dispute identifiers, filters, new disputes and resolutions
[OUTPUT]: Dispute records and paginated listings
[POS]:    Resource layer - /disputes endpoints
[UPDATE]: When dispute endpoints change
*/

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{
    CreateDispute, Dispute, DisputeListParams, DisputeResolution, Paginated, ResolveDispute,
};

#[derive(Debug, Clone)]
pub struct DisputesClient {
    api: ApiClient,
}

impl DisputesClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /disputes?status={status}&page={page}&limit={limit}
    pub async fn list(&self, params: &DisputeListParams) -> Result<Paginated<Dispute>> {
        let options = RequestOptions::with_query(params)?;
        self.api.get("/disputes", Some(&options)).await
    }

    /// GET /disputes/{id}
    pub async fn get_by_id(&self, id: &str) -> Result<Dispute> {
        self.api.get(&format!("/disputes/{id}"), None).await
    }

    /// POST /disputes
    pub async fn create(&self, dispute: &CreateDispute) -> Result<Dispute> {
        self.api.post("/disputes", Some(dispute), None).await
    }

    /// Disputes raised by the current user
    ///
    /// GET /disputes/mine
    pub async fn get_mine(&self) -> Result<Vec<Dispute>> {
        self.api.get("/disputes/mine", None).await
    }

    /// POST /disputes/{id}/resolve
    pub async fn resolve(
        &self,
        id: &str,
        resolution: DisputeResolution,
        note: Option<&str>,
    ) -> Result<Dispute> {
        let body = ResolveDispute {
            resolution,
            note: note.map(str::to_string),
        };
        self.api
            .post(&format!("/disputes/{id}/resolve"), Some(&body), None)
            .await
    }
}
