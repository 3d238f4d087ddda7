/*
[INPUT]:  Notification identifiers and list filters
[OUTPUT]: Paginated notifications, unread count, read/delete acknowledgements
[POS]:    Resource layer - /notifications endpoints
[UPDATE]: When notification endpoints change
*/

use serde::de::IgnoredAny;

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{Notification, NotificationListParams, Paginated, UnreadCount};

#[derive(Debug, Clone)]
pub struct NotificationsClient {
    api: ApiClient,
}

impl NotificationsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /notifications?page={page}&limit={limit}&unreadOnly={unread_only}
    pub async fn list(&self, params: &NotificationListParams) -> Result<Paginated<Notification>> {
        let options = RequestOptions::with_query(params)?;
        self.api.get("/notifications", Some(&options)).await
    }

    /// GET /notifications/unread-count
    pub async fn get_unread_count(&self) -> Result<UnreadCount> {
        self.api.get("/notifications/unread-count", None).await
    }

    /// Mark one notification as read, or every notification when `id` is `None`
    ///
    /// PATCH /notifications/{id}/read
    /// PATCH /notifications/read
    pub async fn mark_as_read(&self, id: Option<&str>) -> Result<()> {
        let path = match id {
            Some(id) => format!("/notifications/{id}/read"),
            None => "/notifications/read".to_string(),
        };
        self.api
            .patch::<IgnoredAny, ()>(&path, None, None)
            .await?;
        Ok(())
    }

    /// PATCH /notifications/read-all
    pub async fn mark_all_as_read(&self) -> Result<()> {
        self.api
            .patch::<IgnoredAny, ()>("/notifications/read-all", None, None)
            .await?;
        Ok(())
    }

    /// DELETE /notifications/{id}
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/notifications/{id}"), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::api_for;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_mark_as_read_with_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/notifications/ntf_1/read"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotificationsClient::with_api(api_for(&server));
        client.mark_as_read(Some("ntf_1")).await.expect("mark failed");
    }

    #[tokio::test]
    async fn test_mark_as_read_without_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/notifications/read"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotificationsClient::with_api(api_for(&server));
        client.mark_as_read(None).await.expect("mark failed");
    }

    #[tokio::test]
    async fn test_unread_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications/unread-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 3 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotificationsClient::with_api(api_for(&server));
        let unread = client.get_unread_count().await.expect("count failed");
        assert_eq!(unread.count, 3);
    }

    #[tokio::test]
    async fn test_list_unread_only_and_remove() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .and(query_param("unreadOnly", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "ntf_1", "message": "New payout", "read": false }],
                "total": 1,
                "page": 1,
                "limit": 20,
                "totalPages": 1
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/notifications/ntf_1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotificationsClient::with_api(api_for(&server));
        let page = client
            .list(&NotificationListParams {
                unread_only: Some(true),
                ..Default::default()
            })
            .await
            .expect("list failed");
        assert_eq!(page.data[0].id, "ntf_1");
        client.remove("ntf_1").await.expect("remove failed");
    }

    #[tokio::test]
    async fn test_mark_all_as_read() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/notifications/read-all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "updated": 4 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotificationsClient::with_api(api_for(&server));
        client.mark_all_as_read().await.expect("mark all failed");
    }
}
