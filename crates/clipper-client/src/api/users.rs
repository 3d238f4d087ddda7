/*
[INPUT]:  User identifiers, profile changes and referral codes
[OUTPUT]: User records, profiles and referral data
[POS]:    Resource layer - /users endpoints
[UPDATE]: When user endpoints change
*/

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{
    ApplyReferral, ReferralCode, ReferralStats, UpdateProfile, UpdateUser, User, UserProfile,
    UserSearchParams,
};

#[derive(Debug, Clone)]
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /users/me
    pub async fn get_me(&self) -> Result<User> {
        self.api.get("/users/me", None).await
    }

    /// PATCH /users/me
    pub async fn update_me(&self, changes: &UpdateUser) -> Result<User> {
        self.api.patch("/users/me", Some(changes), None).await
    }

    /// GET /users/me/profile
    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.api.get("/users/me/profile", None).await
    }

    /// PATCH /users/me/profile
    pub async fn update_profile(&self, changes: &UpdateProfile) -> Result<UserProfile> {
        self.api.patch("/users/me/profile", Some(changes), None).await
    }

    /// GET /users/{id}
    pub async fn get_by_id(&self, id: &str) -> Result<User> {
        self.api.get(&format!("/users/{id}"), None).await
    }

    /// GET /users/username/{username}
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        self.api
            .get(&format!("/users/username/{username}"), None)
            .await
    }

    /// GET /users/search?q={query}&limit={limit}
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<User>> {
        let params = UserSearchParams {
            q: query.to_string(),
            limit,
        };
        let options = RequestOptions::with_query(&params)?;
        self.api.get("/users/search", Some(&options)).await
    }

    /// GET /users/me/referrals
    pub async fn get_referral_stats(&self) -> Result<ReferralStats> {
        self.api.get("/users/me/referrals", None).await
    }

    /// POST /users/me/referral-code
    pub async fn generate_referral_code(&self) -> Result<ReferralCode> {
        self.api
            .post("/users/me/referral-code", None::<&()>, None)
            .await
    }

    /// Redeem someone else's referral code for the current user
    ///
    /// POST /users/me/referral
    pub async fn apply_referral(&self, code: &str) -> Result<User> {
        let body = ApplyReferral {
            code: code.to_string(),
        };
        self.api.post("/users/me/referral", Some(&body), None).await
    }
}
