//! Remote session endpoint integration tests
//!
//! A wiremock server stands in for the external auth service.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use rolegate::auth::{AccessGate, IdentityProvider, RemoteSessionProvider, RoleClaim};
    use rolegate::config::{GateConfig, RemoteProviderConfig};
    use rolegate::{GateError, RequestContext, Role};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SESSION_PATH: &str = "/api/auth/session";

    fn provider(server: &MockServer, timeout_ms: u64) -> RemoteSessionProvider {
        assert_ok!(RemoteSessionProvider::new(&RemoteProviderConfig {
            endpoint: format!("{}{}", server.uri(), SESSION_PATH),
            timeout_ms,
        }))
    }

    fn ctx() -> RequestContext {
        RequestContext::new("/dashboard/history")
            .with_request_id("remote-req-1")
            .with_cookie_header("session=opaque-cookie; theme=dark")
    }

    async fn mount(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(SESSION_PATH))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_signed_in_session_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SESSION_PATH))
            .and(header("cookie", "session=opaque-cookie; theme=dark"))
            .and(header("x-request-id", "remote-req-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": "staff-9", "role": "STAFF" },
                "expires": "2030-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await).unwrap();
        assert_eq!(session.subject, "staff-9");
        assert_eq!(session.role(), Some(Role::Staff));
        assert!(session.expires_at.is_some());
    }

    #[tokio::test]
    async fn test_extra_user_fields_do_not_hide_session() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "id": "owner-1",
                    "name": "Ada",
                    "email": "ada@example.com",
                    "image": null,
                    "role": "OWNER"
                },
                "expires": "2030-01-01T00:00:00Z"
            })),
        )
        .await;

        let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await).unwrap();
        assert_eq!(session.subject, "owner-1");
        assert_eq!(session.role(), Some(Role::Owner));

        let gate = AccessGate::new(Arc::new(provider(&server, 2000)), GateConfig::default());
        let allowed = assert_ok!(gate.require_role(&ctx(), &[Role::Owner]).await);
        assert_eq!(allowed.subject, "owner-1");
    }

    #[tokio::test]
    async fn test_email_used_when_id_missing() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "user": { "name": "Bo", "email": "bo@example.com", "role": "STAFF" }
            })),
        )
        .await;

        let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await).unwrap();
        assert_eq!(session.subject, "bo@example.com");
    }

    #[tokio::test]
    async fn test_user_without_identifier_is_provider_error() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "user": { "name": "Anon", "role": "STAFF" }
            })),
        )
        .await;

        let err = assert_err!(provider(&server, 2000).get_session(&ctx()).await);
        assert!(matches!(err, GateError::IdentityProvider(_)));
    }

    #[tokio::test]
    async fn test_authorization_header_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SESSION_PATH))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "sub": "driver-3", "role": "driver" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = RequestContext::new("/").with_authorization("Bearer abc");
        let session = assert_ok!(provider(&server, 2000).get_session(&ctx).await).unwrap();
        assert_eq!(session.subject, "driver-3");
        assert_eq!(session.role(), Some(Role::Driver));
    }

    #[tokio::test]
    async fn test_empty_object_is_no_session() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

        let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await);
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_null_body_is_no_session() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(200).set_body_string("null")).await;

        let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await);
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_status_is_no_session() {
        for status in [401, 403, 204] {
            let server = MockServer::start().await;
            mount(&server, ResponseTemplate::new(status)).await;

            let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await);
            assert!(session.is_none(), "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_server_error_is_provider_error() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(503)).await;

        let err = assert_err!(provider(&server, 2000).get_session(&ctx()).await);
        assert!(matches!(err, GateError::IdentityProvider(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_provider_error() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

        let err = assert_err!(provider(&server, 2000).get_session(&ctx()).await);
        assert!(matches!(err, GateError::IdentityProvider(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_provider_error() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({ "user": { "id": "o", "role": "OWNER" } }))
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let err = assert_err!(provider(&server, 50).get_session(&ctx()).await);
        assert!(matches!(err, GateError::IdentityProvider(_)));
    }

    #[tokio::test]
    async fn test_unknown_role_tag_is_kept_unrecognized() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({ "user": { "id": "u-5", "role": "DISPATCHER" } })),
        )
        .await;

        let session = assert_ok!(provider(&server, 2000).get_session(&ctx()).await).unwrap();
        assert_eq!(session.role, RoleClaim::Unrecognized("DISPATCHER".to_string()));
    }

    #[tokio::test]
    async fn test_gate_fails_closed_on_endpoint_outage() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(500)).await;

        let gate = AccessGate::new(Arc::new(provider(&server, 2000)), GateConfig::default());
        let err = assert_err!(gate.require_role(&ctx(), &[Role::Owner]).await);

        assert!(matches!(err, GateError::Unauthenticated { .. }));
        assert_eq!(
            err.redirect_location(),
            Some("/signin?callbackUrl=%2Fdashboard%2Fhistory")
        );
    }
}
