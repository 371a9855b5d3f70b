//! Dashboard route integration tests
//!
//! Requests go through the full application: request ID, tracing, the
//! handler-level gate on audit log and driver review, and the scope
//! middleware on history.

#[cfg(test)]
mod tests {
    use crate::common::{SessionFactory, jwt_app_state};
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CACHE_CONTROL, LOCATION};
    use actix_web::{test, web};
    use rolegate::Role;
    use rolegate::server::create_app;

    const AUDIT_LOG: &str = "/dashboard/audit-log";
    const DRIVER_REVIEW: &str = "/dashboard/driver-review";
    const HISTORY: &str = "/dashboard/history";

    /// (page, role) pairs that may render
    fn allowed(page: &str, role: Role) -> bool {
        match page {
            AUDIT_LOG => role == Role::Owner,
            DRIVER_REVIEW => matches!(role, Role::Owner | Role::Staff),
            HISTORY => true,
            _ => false,
        }
    }

    #[actix_web::test]
    async fn test_role_matrix() {
        let app = test::init_service(create_app(web::Data::new(jwt_app_state()))).await;

        for page in [AUDIT_LOG, DRIVER_REVIEW, HISTORY] {
            for role in Role::ALL {
                let req = test::TestRequest::get()
                    .uri(page)
                    .insert_header(("cookie", SessionFactory::cookie("user-1", role)))
                    .to_request();
                let resp = test::call_service(&app, req).await;

                if allowed(page, role) {
                    assert_eq!(resp.status(), StatusCode::OK, "{} as {}", page, role);
                    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
                    assert!(body.contains("user-1"), "{} as {}", page, role);
                    assert!(body.contains(role.as_str()), "{} as {}", page, role);
                } else {
                    assert_eq!(
                        resp.status(),
                        StatusCode::TEMPORARY_REDIRECT,
                        "{} as {}",
                        page,
                        role
                    );
                    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/forbidden");
                }
            }
        }
    }

    #[actix_web::test]
    async fn test_anonymous_requests_go_to_sign_in() {
        let app = test::init_service(create_app(web::Data::new(jwt_app_state()))).await;

        for page in [AUDIT_LOG, DRIVER_REVIEW, HISTORY] {
            let req = test::TestRequest::get().uri(page).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{}", page);
            let expected = format!("/signin?callbackUrl={}", page.replace('/', "%2F"));
            assert_eq!(resp.headers().get(LOCATION).unwrap(), expected.as_str());
            assert_eq!(resp.headers().get(CACHE_CONTROL).unwrap(), "no-store");

            let body = test::read_body(resp).await;
            assert!(body.is_empty(), "{} leaked a body on denial", page);
        }
    }

    #[actix_web::test]
    async fn test_tampered_token_is_treated_as_signed_out() {
        let app = test::init_service(create_app(web::Data::new(jwt_app_state()))).await;
        let mut token = SessionFactory::token("owner-1", Role::Owner);
        token.push('x');

        let req = test::TestRequest::get()
            .uri(AUDIT_LOG)
            .insert_header(("cookie", format!("session={}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap();
        assert!(location.starts_with("/signin?"));
    }

    #[actix_web::test]
    async fn test_bearer_header_ignored_by_default() {
        let app = test::init_service(create_app(web::Data::new(jwt_app_state()))).await;

        let req = test::TestRequest::get()
            .uri(HISTORY)
            .insert_header((
                "authorization",
                format!("Bearer {}", SessionFactory::token("driver-1", Role::Driver)),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[actix_web::test]
    async fn test_callback_keeps_query_string() {
        let app = test::init_service(create_app(web::Data::new(jwt_app_state()))).await;

        let req = test::TestRequest::get()
            .uri("/dashboard/history?week=12&driver=7")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers().get(LOCATION).unwrap(),
            "/signin?callbackUrl=%2Fdashboard%2Fhistory%3Fweek%3D12%26driver%3D7"
        );
    }

    #[actix_web::test]
    async fn test_gated_pages_are_not_cacheable() {
        let app = test::init_service(create_app(web::Data::new(jwt_app_state()))).await;

        let req = test::TestRequest::get()
            .uri(HISTORY)
            .insert_header(("cookie", SessionFactory::cookie("staff-1", Role::Staff)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(CACHE_CONTROL).unwrap(),
            "private, no-store"
        );
    }
}
