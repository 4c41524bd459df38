//! Service and HTTP-mapping tests against mock gateways.

#[cfg(test)]
pub(crate) mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    use gateway_types::{
        Balance, CheckoutGateway, CollectGateway, CollectRequest, CollectSession, CollectStatus,
        CollectStatusReport, CreatePaymentRequest, Currency, DomainError, GatewayError, Payment,
        PaymentError, PaymentId, PaymentStatus,
    };

    use crate::inbound::HttpServer;
    use crate::service::{CollectService, PaymentService};

    /// Canned behavior for the mock gateways.
    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed,
        NotFound,
        Expired,
        Upstream(u16),
        Network,
    }

    fn sample_payment(status: PaymentStatus) -> Payment {
        Payment::new(
            PaymentId::new("pay_123"),
            dec!(10.00),
            Currency::USD,
            status,
            "https://pay.whish.money/p/pay_123",
            "ord-1",
            Utc::now(),
            None,
        )
        .unwrap()
    }

    fn fail(behavior: Behavior) -> PaymentError {
        match behavior {
            Behavior::Succeed => unreachable!(),
            Behavior::NotFound => DomainError::PaymentNotFound("pay_123".into()).into(),
            Behavior::Expired => DomainError::PaymentExpired("pay_123".into()).into(),
            Behavior::Upstream(status) => GatewayError::Api {
                status,
                code: Some("UPSTREAM".into()),
                message: "upstream rejected".into(),
                details: None,
            }
            .into(),
            Behavior::Network => GatewayError::Network {
                message: "connection refused".into(),
            }
            .into(),
        }
    }

    struct MockCheckoutGateway {
        behavior: Behavior,
    }

    #[async_trait::async_trait]
    impl CheckoutGateway for MockCheckoutGateway {
        async fn balance(&self) -> Result<Balance, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(Balance::new(dec!(100), dec!(20), "LBP", Utc::now())),
                other => Err(fail(other)),
            }
        }

        async fn create_payment(
            &self,
            _req: CreatePaymentRequest,
        ) -> Result<Payment, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(sample_payment(PaymentStatus::Pending)),
                other => Err(fail(other)),
            }
        }

        async fn payment_status(&self, _id: &PaymentId) -> Result<Payment, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(sample_payment(PaymentStatus::Completed)),
                other => Err(fail(other)),
            }
        }

        async fn cancel_payment(&self, _id: &PaymentId) -> Result<bool, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(true),
                other => Err(fail(other)),
            }
        }
    }

    struct MockCollectGateway {
        behavior: Behavior,
    }

    #[async_trait::async_trait]
    impl CollectGateway for MockCollectGateway {
        async fn balance(&self) -> Result<Balance, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(Balance::new(dec!(1500), dec!(0), "LBP", Utc::now())),
                other => Err(fail(other)),
            }
        }

        async fn create_payment(
            &self,
            req: CollectRequest,
        ) -> Result<CollectSession, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(CollectSession {
                    collect_url: "https://pay/x".into(),
                    external_id: req.external_id,
                }),
                other => Err(fail(other)),
            }
        }

        async fn collect_status(
            &self,
            external_id: i64,
            currency: Currency,
        ) -> Result<CollectStatusReport, PaymentError> {
            match self.behavior {
                Behavior::Succeed => Ok(CollectStatusReport {
                    collect_status: CollectStatus::Success,
                    payer_phone_number: "+96170123456".into(),
                    external_id,
                    currency,
                }),
                other => Err(fail(other)),
            }
        }
    }

    fn checkout_router(behavior: Behavior) -> axum::Router {
        HttpServer::checkout(PaymentService::new(MockCheckoutGateway { behavior })).router()
    }

    fn collect_router(behavior: Behavior) -> axum::Router {
        HttpServer::collect(CollectService::new(MockCollectGateway { behavior })).router()
    }

    fn valid_collect_request() -> CollectRequest {
        CollectRequest {
            amount: dec!(10),
            currency: Currency::USD,
            invoice: "order #42".into(),
            external_id: 42,
            success_callback_url: "https://shop/cb/ok".into(),
            failure_callback_url: "https://shop/cb/fail".into(),
            success_redirect_url: "https://shop/ok".into(),
            failure_redirect_url: "https://shop/fail".into(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Service validation
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_checkout_rejects_non_positive_amount() {
        let service = PaymentService::new(MockCheckoutGateway {
            behavior: Behavior::Succeed,
        });
        let req = CreatePaymentRequest {
            amount: dec!(0),
            currency: Currency::USD,
            description: None,
            merchant_reference: None,
            customer_email: None,
            customer_phone: None,
            redirect_url: None,
            webhook_url: None,
            expires_in_minutes: None,
        };
        let result = service.create_payment(req).await;
        assert!(matches!(
            result,
            Err(PaymentError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_collect_rejects_empty_callback_url() {
        let service = CollectService::new(MockCollectGateway {
            behavior: Behavior::Succeed,
        });
        let mut req = valid_collect_request();
        req.failure_redirect_url = "".into();
        let result = service.create_payment(req).await;
        assert!(matches!(
            result,
            Err(PaymentError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_collect_passthrough_on_valid_request() {
        let service = CollectService::new(MockCollectGateway {
            behavior: Behavior::Succeed,
        });
        let session = service.create_payment(valid_collect_request()).await.unwrap();
        assert_eq!(session.collect_url, "https://pay/x");
        assert_eq!(session.external_id, 42);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // HTTP status mapping
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let app = checkout_router(Behavior::NotFound);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/pay_123/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "PAYMENT_NOT_FOUND");
        assert_eq!(json["statusCode"], 404);
    }

    #[tokio::test]
    async fn test_expired_maps_to_410() {
        let app = checkout_router(Behavior::Expired);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/pay_123/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GONE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "PAYMENT_EXPIRED");
    }

    #[tokio::test]
    async fn test_upstream_4xx_passes_through() {
        let app = checkout_router(Behavior::Upstream(422));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/balance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"], "UPSTREAM");
    }

    #[tokio::test]
    async fn test_upstream_5xx_collapses_to_502() {
        let app = checkout_router(Behavior::Upstream(503));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/balance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_network_failure_collapses_to_502() {
        let app = collect_router(Behavior::Network);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/balance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"], "NETWORK_ERROR");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Happy paths through the router
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_collect_payment_returns_201() {
        let app = collect_router(Behavior::Succeed);
        let body = serde_json::to_string(&valid_collect_request()).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/payments")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["collect_url"], "https://pay/x");
        assert_eq!(json["external_id"], 42);
    }

    #[tokio::test]
    async fn test_collect_status_query_round_trip() {
        let app = collect_router(Behavior::Succeed);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/42/status?currency=USD")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["collect_status"], "success");
        assert_eq!(json["external_id"], 42);
        assert_eq!(json["currency"], "USD");
    }

    #[tokio::test]
    async fn test_balance_exposes_derived_total() {
        let app = checkout_router(Behavior::Succeed);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payments/balance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        // Decimal serializes as a string on our API surface
        let json = body_json(response).await;
        assert_eq!(json["total"], "120");
    }

    #[tokio::test]
    async fn test_webhook_stub_acknowledges() {
        let app = checkout_router(Behavior::Succeed);
        let payload = serde_json::json!({
            "paymentId": "pay_123",
            "status": "completed",
            "amount": 10.0,
            "currency": "USD",
            "timestamp": "2024-01-01T00:00:00Z"
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/webhooks/payment")
                    .header("Content-Type", "application/json")
                    .header("x-whish-signature", "sig-abc")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["received"], true);
    }
}
