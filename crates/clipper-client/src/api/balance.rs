/*
[INPUT]:  Transaction filters and payout requests
[OUTPUT]: Balance snapshot, paginated transactions, payout records
[POS]:    Resource layer - /balance endpoints
[UPDATE]: When balance endpoints change
*/

use crate::http::{ApiClient, ClientConfig, RequestOptions, Result};
use crate::types::{Balance, Paginated, Payout, PayoutRequest, Transaction, TransactionListParams};

#[derive(Debug, Clone)]
pub struct BalanceClient {
    api: ApiClient,
}

impl BalanceClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(ApiClient::new(config)?))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /balance
    pub async fn get_balance(&self) -> Result<Balance> {
        self.api.get("/balance", None).await
    }

    /// GET /balance/transactions?type={kind}&page={page}&limit={limit}
    pub async fn get_transactions(
        &self,
        params: &TransactionListParams,
    ) -> Result<Paginated<Transaction>> {
        let options = RequestOptions::with_query(params)?;
        self.api.get("/balance/transactions", Some(&options)).await
    }

    /// POST /balance/payout
    pub async fn request_payout(&self, request: &PayoutRequest) -> Result<Payout> {
        self.api.post("/balance/payout", Some(request), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::api_for;
    use crate::http::ErrorCode;
    use crate::types::{PayoutMethod, PayoutStatus, TransactionType};
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_balance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/balance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available": 120.5,
                "pending": 30,
                "currency": "USD"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BalanceClient::with_api(api_for(&server));
        let balance = client.get_balance().await.expect("balance failed");
        assert_eq!(balance.available, Decimal::new(1205, 1));
        assert_eq!(balance.pending, Decimal::new(30, 0));
    }

    #[tokio::test]
    async fn test_get_transactions_by_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/balance/transactions"))
            .and(query_param("type", "payout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "txn_1", "type": "payout", "amount": -50 }],
                "total": 1,
                "page": 1,
                "limit": 20,
                "totalPages": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BalanceClient::with_api(api_for(&server));
        let page = client
            .get_transactions(&TransactionListParams {
                kind: Some(TransactionType::Payout),
                ..Default::default()
            })
            .await
            .expect("transactions failed");
        assert_eq!(page.data[0].kind, TransactionType::Payout);
        assert_eq!(page.data[0].amount, Decimal::new(-50, 0));
    }

    #[tokio::test]
    async fn test_request_payout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/balance/payout"))
            .and(body_json(json!({ "amount": 75.0, "method": "paypal" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "pay_1",
                "amount": 75,
                "method": "paypal",
                "status": "pending"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BalanceClient::with_api(api_for(&server));
        let payout = client
            .request_payout(&PayoutRequest {
                amount: Decimal::new(75, 0),
                method: PayoutMethod::Paypal,
                destination: None,
            })
            .await
            .expect("payout failed");
        assert_eq!(payout.status, PayoutStatus::Pending);
    }

    #[tokio::test]
    async fn test_payout_validation_error_details() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/balance/payout"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Amount below minimum payout",
                    "details": { "amount": "must be at least 10" }
                }
            })))
            .mount(&server)
            .await;

        let client = BalanceClient::with_api(api_for(&server));
        let err = client
            .request_payout(&PayoutRequest {
                amount: Decimal::new(5, 0),
                method: PayoutMethod::Crypto,
                destination: Some("0xabc".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.status, 400);
        assert_eq!(err.details, Some(json!({ "amount": "must be at least 10" })));
    }
}
