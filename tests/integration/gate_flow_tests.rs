//! Access gate integration tests
//!
//! Gate decisions as seen by a page: session handed back, or a redirect
//! error raised before anything renders.

#[cfg(test)]
mod tests {
    use crate::common::StaticProvider;
    use crate::{assert_err, assert_ok};
    use rolegate::auth::{AccessGate, RoleClaim};
    use rolegate::config::GateConfig;
    use rolegate::{GateError, RequestContext, Role};
    use std::sync::Arc;

    fn gate(provider: &Arc<StaticProvider>) -> AccessGate {
        AccessGate::new(provider.clone(), GateConfig::default())
    }

    fn page(path: &str) -> RequestContext {
        RequestContext::new(path).with_request_id("it-req")
    }

    // ==================== Core scenarios ====================

    /// STAFF on an OWNER-only page goes to the forbidden page
    #[tokio::test]
    async fn test_staff_on_owner_page_is_forbidden() {
        let provider = Arc::new(StaticProvider::signed_in("staff-1", Role::Staff));
        let err = assert_err!(
            gate(&provider)
                .require_role(&page("/dashboard/audit-log"), &[Role::Owner])
                .await
        );

        assert!(matches!(err, GateError::Forbidden { .. }));
        assert_eq!(err.redirect_location(), Some("/forbidden"));
        assert_eq!(provider.calls(), 1);
    }

    /// No session on an OWNER/STAFF page goes to sign-in
    #[tokio::test]
    async fn test_no_session_goes_to_sign_in() {
        let provider = Arc::new(StaticProvider::signed_out());
        let err = assert_err!(
            gate(&provider)
                .require_role(&page("/dashboard/driver-review"), &[Role::Owner, Role::Staff])
                .await
        );

        assert!(matches!(err, GateError::Unauthenticated { .. }));
        assert_eq!(
            err.redirect_location(),
            Some("/signin?callbackUrl=%2Fdashboard%2Fdriver-review")
        );
    }

    /// OWNER on an OWNER-only page proceeds with the session
    #[tokio::test]
    async fn test_owner_on_owner_page_is_allowed() {
        let provider = Arc::new(StaticProvider::signed_in("owner-1", Role::Owner));
        let session = assert_ok!(
            gate(&provider)
                .require_role(&page("/dashboard/audit-log"), &[Role::Owner])
                .await
        );

        assert_eq!(session.subject, "owner-1");
        assert_eq!(session.role(), Some(Role::Owner));
    }

    /// OWNER on an OWNER/STAFF page proceeds
    #[tokio::test]
    async fn test_owner_on_shared_page_is_allowed() {
        let provider = Arc::new(StaticProvider::signed_in("owner-1", Role::Owner));
        let session = assert_ok!(
            gate(&provider)
                .require_role(&page("/dashboard/driver-review"), &[Role::Owner, Role::Staff])
                .await
        );
        assert_eq!(session.role(), Some(Role::Owner));
    }

    /// A provider failure is handled exactly like no session
    #[tokio::test]
    async fn test_provider_failure_goes_to_sign_in() {
        let provider = Arc::new(StaticProvider::failing("connection refused"));
        let err = assert_err!(
            gate(&provider)
                .require_role(&page("/dashboard/history"), &Role::ALL)
                .await
        );
        assert!(matches!(err, GateError::Unauthenticated { .. }));
    }

    // ==================== Edge cases ====================

    #[tokio::test]
    async fn test_empty_role_list_fails_without_lookup() {
        let provider = Arc::new(StaticProvider::signed_in("owner-1", Role::Owner));
        let err = assert_err!(gate(&provider).require_role(&page("/x"), &[]).await);

        assert!(matches!(err, GateError::EmptyRequirement));
        assert!(!err.is_redirect());
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_unrecognized_role_is_forbidden_everywhere() {
        let provider = Arc::new(StaticProvider::signed_in(
            "u-1",
            RoleClaim::Unrecognized("SUPERVISOR".to_string()),
        ));
        let err = assert_err!(
            gate(&provider)
                .require_role(&page("/dashboard/history"), &Role::ALL)
                .await
        );
        assert!(matches!(err, GateError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_repeated_checks_are_identical_and_uncached() {
        let provider = Arc::new(StaticProvider::signed_in("driver-1", Role::Driver));
        let gate = gate(&provider);
        let ctx = page("/dashboard/audit-log");

        let first = assert_err!(gate.require_role(&ctx, &[Role::Owner]).await);
        let second = assert_err!(gate.require_role(&ctx, &[Role::Owner]).await);

        assert_eq!(first.redirect_location(), second.redirect_location());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_external_sign_in_url_keeps_its_query() {
        let provider = Arc::new(StaticProvider::signed_out());
        let config = GateConfig {
            sign_in_path: "https://login.example.com/start?tenant=fleet".to_string(),
            forbidden_path: "/".to_string(),
            return_to_param: Some("next".to_string()),
        };
        let gate = AccessGate::new(provider.clone(), config);
        let ctx = page("/dashboard/history").with_query("week=12");

        let err = assert_err!(gate.require_role(&ctx, &[Role::Driver]).await);
        assert_eq!(
            err.redirect_location(),
            Some("https://login.example.com/start?tenant=fleet&next=%2Fdashboard%2Fhistory%3Fweek%3D12")
        );
    }

    #[tokio::test]
    async fn test_forbidden_destination_carries_no_parameters() {
        let provider = Arc::new(StaticProvider::signed_in("staff-1", Role::Staff));
        let ctx = page("/dashboard/audit-log").with_query("from=2024-01-01");

        let err = assert_err!(gate(&provider).require_role(&ctx, &[Role::Owner]).await);
        assert_eq!(err.redirect_location(), Some("/forbidden"));
    }
}
