/*
[INPUT]:  Clip identifiers, filters and submissions
[OUTPUT]: Clip records, engagement stats and paginated listings
[POS]:    Resource layer - /clips endpoints
[UPDATE]: When clip endpoints change
*/

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{
    Clip, ClipListParams, ClipStats, ClipStatus, Paginated, SubmitClip, UpdateClipStatus,
};

#[derive(Debug, Clone)]
pub struct ClipsClient {
    api: ApiClient,
}

impl ClipsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// List clips, optionally filtered by campaign, user, status or platform
    ///
    /// GET /clips
    pub async fn list(&self, params: &ClipListParams) -> Result<Paginated<Clip>> {
        let options = RequestOptions::with_query(params)?;
        self.api.get("/clips", Some(&options)).await
    }

    /// GET /clips/{id}
    pub async fn get_by_id(&self, id: &str) -> Result<Clip> {
        self.api.get(&format!("/clips/{id}"), None).await
    }

    /// POST /clips
    pub async fn submit(&self, clip: &SubmitClip) -> Result<Clip> {
        self.api.post("/clips", Some(clip), None).await
    }

    /// GET /clips/{id}/stats
    pub async fn get_stats(&self, id: &str) -> Result<ClipStats> {
        self.api.get(&format!("/clips/{id}/stats"), None).await
    }

    /// GET /clips/{id}/stats/history
    pub async fn get_stats_history(&self, id: &str) -> Result<Vec<ClipStats>> {
        self.api
            .get(&format!("/clips/{id}/stats/history"), None)
            .await
    }

    /// Approve, reject or flag a clip
    ///
    /// PATCH /clips/{id}/status
    pub async fn update_status(
        &self,
        id: &str,
        status: ClipStatus,
        reason: Option<&str>,
    ) -> Result<Clip> {
        let body = UpdateClipStatus {
            status,
            reason: reason.map(str::to_string),
        };
        self.api
            .patch(&format!("/clips/{id}/status"), Some(&body), None)
            .await
    }
}
