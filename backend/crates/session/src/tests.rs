//! Gateway and router tests

#[cfg(test)]
mod gateway_tests {
    use std::time::Duration;
    use tokio::time::Instant;

    use crate::application::{CallScope, GatewayConfig, SessionGateway};
    use crate::domain::entity::registration::RegistrationPayload;
    use crate::error::GatewayError;

    fn instant_gateway() -> SessionGateway {
        SessionGateway::demo(GatewayConfig::instant())
    }

    fn payload(email: &str, password: &str) -> RegistrationPayload {
        RegistrationPayload {
            name: "John Doe".to_string(),
            tax_id: "not-a-cpf".to_string(),
            birth_date: "1990-01-01".to_string(),
            phone: "(11) 99999-9999".to_string(),
            insurance: Some("Plano Saúde XYZ".to_string()),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_known_accounts_land_on_their_dashboard() {
        let gateway = instant_gateway();
        let cases = [
            ("paciente@vida.com", "/dashboard/patient"),
            ("medico@vida.com", "/dashboard/professional"),
            ("admin@vida.com", "/dashboard/admin"),
        ];
        for (email, route) in cases {
            let resolved = gateway.authenticate(email, "anything").await.unwrap();
            assert_eq!(resolved.as_str(), route);
        }
    }

    #[tokio::test]
    async fn test_unknown_email_is_rejected() {
        let gateway = instant_gateway();
        for email in ["nope@x.com", "", "not an email", "paciente@vida.com.br"] {
            assert_eq!(
                gateway.authenticate(email, "anything").await,
                Err(GatewayError::InvalidCredentials),
                "{email}"
            );
        }
    }

    #[tokio::test]
    async fn test_empty_password_is_rejected() {
        let err = instant_gateway()
            .authenticate("paciente@vida.com", "")
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_lookup_ignores_case() {
        let gateway = instant_gateway();
        let upper = gateway.authenticate("ADMIN@VIDA.COM", "x").await.unwrap();
        let lower = gateway.authenticate("admin@vida.com", "x").await.unwrap();
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn test_authenticate_is_idempotent() {
        let gateway = instant_gateway();
        let first = gateway.authenticate("medico@vida.com", "pw").await;
        let second = gateway.authenticate("medico@vida.com", "pw").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_registration_checks_only_credentials() {
        let gateway = instant_gateway();
        assert_eq!(gateway.register_patient(payload("a@b.com", "p")).await, Ok(()));
        assert_eq!(
            gateway.register_patient(payload("", "p")).await,
            Err(GatewayError::InvalidRegistrationData)
        );
        assert_eq!(
            gateway.register_patient(payload("a@b.com", "")).await,
            Err(GatewayError::InvalidRegistrationData)
        );
    }

    #[tokio::test]
    async fn test_registration_does_not_create_accounts() {
        let gateway = instant_gateway();
        gateway
            .register_patient(payload("new@vida.com", "pw"))
            .await
            .unwrap();
        assert_eq!(
            gateway.authenticate("new@vida.com", "pw").await,
            Err(GatewayError::InvalidCredentials)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_simulated_latency() {
        let gateway = SessionGateway::demo(GatewayConfig::default());
        let start = Instant::now();
        gateway.authenticate("admin@vida.com", "x").await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1100), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_also_waits() {
        let gateway = SessionGateway::demo(GatewayConfig::default());
        let start = Instant::now();
        gateway.register_patient(payload("", "")).await.unwrap_err();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_run_concurrently() {
        let gateway = SessionGateway::demo(GatewayConfig::default());
        let start = Instant::now();
        let (a, b, c) = tokio::join!(
            gateway.authenticate("paciente@vida.com", "x"),
            gateway.authenticate("medico@vida.com", "x"),
            gateway.authenticate("nope@x.com", "x"),
        );
        assert_eq!(a.unwrap().as_str(), "/dashboard/patient");
        assert_eq!(b.unwrap().as_str(), "/dashboard/professional");
        assert_eq!(c, Err(GatewayError::InvalidCredentials));
        assert!(start.elapsed() < Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disposing_scope_discards_pending_login() {
        let gateway = SessionGateway::demo(GatewayConfig::default());
        let scope = CallScope::new();

        let pending = {
            let gateway = gateway.clone();
            let scope = scope.clone();
            tokio::spawn(async move {
                gateway
                    .authenticate_within(&scope, "admin@vida.com", "x")
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(500)).await;
        scope.dispose();

        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disposing_scope_discards_pending_registration() {
        let gateway = SessionGateway::demo(GatewayConfig::default());
        let scope = CallScope::new();

        let pending = {
            let gateway = gateway.clone();
            let scope = scope.clone();
            tokio::spawn(async move {
                gateway
                    .register_patient_within(&scope, payload("a@b.com", "p"))
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        scope.dispose();

        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_live_scope_delivers_rejection() {
        let scope = CallScope::new();
        let outcome = instant_gateway()
            .authenticate_within(&scope, "nope@x.com", "x")
            .await;
        assert_eq!(outcome, Some(Err(GatewayError::InvalidCredentials)));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::GatewayConfig;
    use crate::presentation::router::session_router;

    fn app() -> Router {
        session_router(GatewayConfig::instant())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn registration(password: &str, confirm: &str, email: &str) -> Value {
        json!({
            "name": "Matheus Jao",
            "taxId": "12345678900",
            "birthDate": "1990-01-01",
            "phone": "11999999999",
            "insurance": "",
            "email": email,
            "password": password,
            "confirmPassword": confirm,
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let (status, body) = send(post_json(
            "/session/login",
            json!({ "email": "Paciente@Vida.com", "password": "123" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["route"], "/dashboard/patient");
        assert_eq!(body["role"], "patient");
    }

    #[tokio::test]
    async fn test_login_failure_is_problem_json() {
        let (status, body) = send(post_json(
            "/session/login",
            json!({ "email": "medico@vida.com", "password": "" }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], 401);
        assert_eq!(body["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_malformed_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/session/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{oops"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_register_success() {
        let (status, body) = send(post_json(
            "/session/register",
            registration("pw", "pw", "paciente@vida.com"),
        ))
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["loginRoute"], "/login");
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let (status, body) = send(post_json(
            "/session/register",
            registration("pw", "other", "paciente@vida.com"),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Passwords do not match");
    }

    #[tokio::test]
    async fn test_register_missing_email() {
        let (status, body) =
            send(post_json("/session/register", registration("pw", "pw", ""))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid registration data");
    }

    #[tokio::test]
    async fn test_dashboard_per_role() {
        let (status, body) = send(get("/dashboard/professional")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "professional");
        assert_eq!(body["todaysAppointments"].as_array().unwrap().len(), 3);
        assert_eq!(body["pendingConfirmations"], 1);

        let (status, body) = send(get("/dashboard/admin")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["beds"]["total"], 80);
        assert_eq!(body["beds"]["occupancyPercent"], 81);
    }

    #[tokio::test]
    async fn test_unknown_dashboard() {
        let (status, body) = send(get("/dashboard/nurse")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Unknown dashboard: nurse");
    }

    #[tokio::test]
    async fn test_route_table() {
        let (status, body) = send(get("/session/routes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["login"], "/login");
        assert_eq!(body["dashboards"][0]["landing"], "/dashboard/patient");
        assert_eq!(body["dashboards"][2]["sections"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_resolve_section_with_id() {
        let (status, body) =
            send(get("/session/resolve?path=/dashboard/professional/receita/7")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match"]["kind"], "section");
        assert_eq!(body["match"]["section"], "receita");
        assert_eq!(body["match"]["id"], "7");
        assert_eq!(body["role"], "professional");
        assert!(body["redirect"].is_null());
    }

    #[tokio::test]
    async fn test_resolve_ignores_case_of_static_segments() {
        let (status, body) = send(get("/session/resolve?path=/DASHBOARD/ADMIN")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match"]["kind"], "landing");
        assert_eq!(body["role"], "admin");

        let (_, body) = send(get("/session/resolve?path=/Login")).await;
        assert_eq!(body["match"]["kind"], "login");
        assert!(body["redirect"].is_null());
    }

    #[tokio::test]
    async fn test_resolve_unknown_redirects_to_login() {
        let (_, body) = send(get("/session/resolve?path=/somewhere")).await;
        assert_eq!(body["match"]["kind"], "fallback");
        assert_eq!(body["redirect"], "/login");
        assert!(body["role"].is_null());
    }
}
