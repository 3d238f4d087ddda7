/*
[INPUT]:  Campaign identifiers, filters and payloads
[OUTPUT]: Campaign records, participants and paginated listings
[POS]:    Resource layer - /campaigns endpoints
[UPDATE]: When campaign endpoints change
*/

use serde::de::IgnoredAny;

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{
    Campaign, CampaignListParams, CampaignParticipant, CampaignStatus, CreateCampaign, Paginated,
    UpdateCampaign, UpdateCampaignStatus,
};

#[derive(Debug, Clone)]
pub struct CampaignsClient {
    api: ApiClient,
}

impl CampaignsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// List campaigns
    ///
    /// GET /campaigns?status={status}&page={page}&limit={limit}
    pub async fn list(&self, params: &CampaignListParams) -> Result<Paginated<Campaign>> {
        let options = RequestOptions::with_query(params)?;
        self.api.get("/campaigns", Some(&options)).await
    }

    /// GET /campaigns/{id}
    pub async fn get_by_id(&self, id: &str) -> Result<Campaign> {
        self.api.get(&format!("/campaigns/{id}"), None).await
    }

    /// POST /campaigns
    pub async fn create(&self, campaign: &CreateCampaign) -> Result<Campaign> {
        self.api.post("/campaigns", Some(campaign), None).await
    }

    /// Partially update a campaign; unset fields are not sent
    ///
    /// PATCH /campaigns/{id}
    pub async fn update(&self, id: &str, changes: &UpdateCampaign) -> Result<Campaign> {
        self.api
            .patch(&format!("/campaigns/{id}"), Some(changes), None)
            .await
    }

    /// POST /campaigns/{id}/join
    pub async fn join(&self, id: &str) -> Result<CampaignParticipant> {
        self.api
            .post(&format!("/campaigns/{id}/join"), None::<&()>, None)
            .await
    }

    /// POST /campaigns/{id}/leave
    pub async fn leave(&self, id: &str) -> Result<()> {
        self.api
            .post::<IgnoredAny, ()>(&format!("/campaigns/{id}/leave"), None, None)
            .await?;
        Ok(())
    }

    /// GET /campaigns/{id}/participants
    pub async fn get_participants(&self, id: &str) -> Result<Vec<CampaignParticipant>> {
        self.api
            .get(&format!("/campaigns/{id}/participants"), None)
            .await
    }

    /// PATCH /campaigns/{id}/status
    pub async fn update_status(&self, id: &str, status: CampaignStatus) -> Result<Campaign> {
        let body = UpdateCampaignStatus { status };
        self.api
            .patch(&format!("/campaigns/{id}/status"), Some(&body), None)
            .await
    }
}
