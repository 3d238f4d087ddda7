/*
[INPUT]:  A single ClientConfig
[OUTPUT]: All resource clients sharing one request pipeline
[POS]:    Crate facade - entry point for most callers
[UPDATE]: When adding or removing resource families
*/

use crate::api::{
    BalanceClient, CampaignsClient, ClipsClient, DisputesClient, NotificationsClient,
    StudiosClient, UsersClient,
};
use crate::http::{ApiClient, ClientConfig, Result};

/// Bundle of every resource client over one shared pipeline
#[derive(Debug, Clone)]
pub struct ClipperClient {
    api: ApiClient,
    campaigns: CampaignsClient,
    clips: ClipsClient,
    users: UsersClient,
    notifications: NotificationsClient,
    balance: BalanceClient,
    studios: StudiosClient,
    disputes: DisputesClient,
}

impl ClipperClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self {
            campaigns: CampaignsClient::with_api(api.clone()),
            clips: ClipsClient::with_api(api.clone()),
            users: UsersClient::with_api(api.clone()),
            notifications: NotificationsClient::with_api(api.clone()),
            balance: BalanceClient::with_api(api.clone()),
            studios: StudiosClient::with_api(api.clone()),
            disputes: DisputesClient::with_api(api.clone()),
            api,
        }
    }

    /// The underlying pipeline, for endpoints not covered by a resource client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn campaigns(&self) -> &CampaignsClient {
        &self.campaigns
    }

    pub fn clips(&self) -> &ClipsClient {
        &self.clips
    }

    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    pub fn notifications(&self) -> &NotificationsClient {
        &self.notifications
    }

    pub fn balance(&self) -> &BalanceClient {
        &self.balance
    }

    pub fn studios(&self) -> &StudiosClient {
        &self.studios
    }

    pub fn disputes(&self) -> &DisputesClient {
        &self.disputes
    }
}
