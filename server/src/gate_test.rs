use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

const NOW: i64 = 1_700_000_000;

fn token(exp: i64) -> String {
    let claims = session::Claims {
        sub: "a1".to_owned(),
        role: session::Role::Admin,
        exp,
        iat: None,
        email: None,
        name: None,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-secret")).unwrap()
}

// =============================================================================
// gate_decision — pure
// =============================================================================

#[test]
fn public_pages_pass_without_any_cookie() {
    assert_eq!(gate_decision("/", None, false, NOW), GateOutcome::Pass);
    assert_eq!(gate_decision("/jobs/j1", None, false, NOW), GateOutcome::Pass);
    assert_eq!(gate_decision("/market", None, false, NOW), GateOutcome::Pass);
}

#[test]
fn admin_pages_without_a_cookie_redirect_to_admin_login() {
    assert_eq!(gate_decision("/admin", None, false, NOW), GateOutcome::RedirectAdminLogin);
    assert_eq!(gate_decision("/admin/users", None, false, NOW), GateOutcome::RedirectAdminLogin);
}

#[test]
fn the_admin_login_page_itself_is_never_gated() {
    assert_eq!(gate_decision("/admin/login", None, false, NOW), GateOutcome::Pass);
}

#[test]
fn a_valid_admin_credential_passes_the_gate() {
    let tok = token(NOW + 3600);
    assert_eq!(gate_decision("/admin/users", Some(&tok), false, NOW), GateOutcome::Pass);
}

#[test]
fn expired_and_garbage_admin_credentials_redirect() {
    let expired = token(NOW - 3600);
    assert_eq!(gate_decision("/admin", Some(&expired), false, NOW), GateOutcome::RedirectAdminLogin);
    assert_eq!(gate_decision("/admin", Some("undefined"), false, NOW), GateOutcome::RedirectAdminLogin);
    assert_eq!(gate_decision("/admin", Some("not.a.jwt"), false, NOW), GateOutcome::RedirectAdminLogin);
}

#[test]
fn admin_prefix_matching_does_not_catch_lookalike_paths() {
    assert_eq!(gate_decision("/administrivia", None, false, NOW), GateOutcome::Pass);
}

#[test]
fn maintenance_flag_redirects_public_pages_only() {
    assert_eq!(gate_decision("/", None, true, NOW), GateOutcome::RedirectMaintenance);
    assert_eq!(gate_decision("/jobs/j1", None, true, NOW), GateOutcome::RedirectMaintenance);
    assert_eq!(gate_decision("/maintenance", None, true, NOW), GateOutcome::Pass);

    let tok = token(NOW + 3600);
    assert_eq!(gate_decision("/admin", Some(&tok), true, NOW), GateOutcome::Pass);
}

#[test]
fn api_and_asset_traffic_is_never_gated() {
    assert_eq!(gate_decision("/api/jobs", None, true, NOW), GateOutcome::Pass);
    assert_eq!(gate_decision("/api/admin/users", None, false, NOW), GateOutcome::Pass);
    assert_eq!(gate_decision("/pkg/gigboard.wasm", None, true, NOW), GateOutcome::Pass);
    assert_eq!(gate_decision("/healthz", None, true, NOW), GateOutcome::Pass);
}

// =============================================================================
// gate middleware — end to end over a stub router
// =============================================================================

mod middleware {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt as _;

    fn stub_app() -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/admin", get(|| async { "back office" }))
            .route("/admin/login", get(|| async { "admin login" }))
            .route("/maintenance", get(|| async { "maintenance" }))
            .layer(axum::middleware::from_fn(gate))
    }

    fn request(path: &str, cookies: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(cookie) = cookies {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn admin_without_cookie_is_redirected_to_login() {
        let resp = stub_app().oneshot(request("/admin", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/admin/login");
    }

    #[tokio::test]
    async fn admin_with_valid_cookie_is_served() {
        // The middleware reads the real clock, so the token must actually
        // be in the future.
        let exp = time::OffsetDateTime::now_utc().unix_timestamp() + 3600;
        let cookie = format!("admin_token={}", token(exp));
        let resp = stub_app().oneshot(request("/admin", Some(&cookie))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn maintenance_cookie_redirects_the_public_site() {
        let resp = stub_app()
            .oneshot(request("/", Some("maintenance_mode=on")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/maintenance");
    }

    #[tokio::test]
    async fn maintenance_off_serves_the_public_site() {
        let resp = stub_app()
            .oneshot(request("/", Some("maintenance_mode=off")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
