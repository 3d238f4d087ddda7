/*
[INPUT]:  Studio identifiers, slugs, payloads and ratings
[OUTPUT]: Studio records, members, invites and ratings
[POS]:    Resource layer - /studios endpoints
[UPDATE]: When studio endpoints change
*/

use serde::de::IgnoredAny;

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{
    CreateStudio, RateStudio, Studio, StudioInvite, StudioListParams, StudioMember, StudioRating,
    UpdateStudio,
};

#[derive(Debug, Clone)]
pub struct StudiosClient {
    api: ApiClient,
}

impl StudiosClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /studios?search={search}&page={page}&limit={limit}
    pub async fn list(&self, params: &StudioListParams) -> Result<Vec<Studio>> {
        let options = RequestOptions::with_query(params)?;
        self.api.get("/studios", Some(&options)).await
    }

    /// GET /studios/{slug}
    pub async fn get_by_slug(&self, slug: &str) -> Result<Studio> {
        self.api.get(&format!("/studios/{slug}"), None).await
    }

    /// POST /studios
    pub async fn create(&self, studio: &CreateStudio) -> Result<Studio> {
        self.api.post("/studios", Some(studio), None).await
    }

    /// PATCH /studios/{id}
    pub async fn update(&self, id: &str, changes: &UpdateStudio) -> Result<Studio> {
        self.api
            .patch(&format!("/studios/{id}"), Some(changes), None)
            .await
    }

    /// DELETE /studios/{id}
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/studios/{id}"), None)
            .await?;
        Ok(())
    }

    /// GET /studios/{id}/members
    pub async fn get_members(&self, id: &str) -> Result<Vec<StudioMember>> {
        self.api.get(&format!("/studios/{id}/members"), None).await
    }

    /// POST /studios/{id}/join
    pub async fn join(&self, id: &str) -> Result<StudioMember> {
        self.api
            .post(&format!("/studios/{id}/join"), None::<&()>, None)
            .await
    }

    /// POST /studios/{id}/leave
    pub async fn leave(&self, id: &str) -> Result<()> {
        self.api
            .post::<IgnoredAny, ()>(&format!("/studios/{id}/leave"), None, None)
            .await?;
        Ok(())
    }

    /// POST /studios/{id}/rate
    pub async fn rate(&self, id: &str, rating: u8, comment: Option<&str>) -> Result<StudioRating> {
        let body = RateStudio {
            rating,
            comment: comment.map(str::to_string),
        };
        self.api
            .post(&format!("/studios/{id}/rate"), Some(&body), None)
            .await
    }

    /// GET /studios/{id}/invites
    pub async fn get_invites(&self, id: &str) -> Result<Vec<StudioInvite>> {
        self.api.get(&format!("/studios/{id}/invites"), None).await
    }
}
