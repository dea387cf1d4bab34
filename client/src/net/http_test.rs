use super::*;

#[test]
fn admin_paths_use_the_admin_cookie() {
    assert_eq!(bearer_cookie_for("/api/admin"), session::ADMIN_TOKEN_COOKIE);
    assert_eq!(bearer_cookie_for("/api/admin/users"), session::ADMIN_TOKEN_COOKIE);
}

#[test]
fn non_admin_paths_use_the_session_cookie() {
    for path in ["/api/jobs", "/api/users/me", "/api/marketplace/orders", "/api/administrators"] {
        assert_eq!(bearer_cookie_for(path), session::SESSION_TOKEN_COOKIE, "wrong cookie for {path}");
    }
}

#[test]
fn no_stored_credential_means_no_authorization_header() {
    assert_eq!(bearer_value(None), None);
}

#[test]
fn placeholder_credentials_mean_no_authorization_header() {
    for raw in ["", "undefined", "null", "  "] {
        assert_eq!(bearer_value(Some(raw.to_owned())), None, "sent header for {raw:?}");
    }
}

#[test]
fn stored_credential_becomes_a_bearer_header() {
    assert_eq!(bearer_value(Some("abc.def.ghi".to_owned())).as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(error_for_status(401, ""), ApiError::Unauthorized);
}

#[test]
fn status_404_maps_to_not_found() {
    assert_eq!(error_for_status(404, r#"{"message":"nope"}"#), ApiError::NotFound);
}

#[test]
fn other_4xx_carries_the_backend_message() {
    let err = error_for_status(422, r#"{"message":"title is required"}"#);
    assert_eq!(err, ApiError::Rejected("title is required".to_owned()));
}

#[test]
fn other_4xx_falls_back_to_a_generic_message() {
    let err = error_for_status(400, "not json at all");
    assert_eq!(err, ApiError::Rejected("request rejected (400)".to_owned()));
}

#[test]
fn error_key_is_accepted_as_a_message_source() {
    let err = error_for_status(403, r#"{"error":"account is blocked"}"#);
    assert_eq!(err, ApiError::Rejected("account is blocked".to_owned()));
}

#[test]
fn status_5xx_maps_to_server() {
    assert_eq!(error_for_status(500, ""), ApiError::Server(500));
    assert_eq!(error_for_status(503, r#"{"message":"down"}"#), ApiError::Server(503));
}

#[test]
fn backoff_doubles_per_attempt() {
    assert_eq!(backoff_delay_ms(0), 250);
    assert_eq!(backoff_delay_ms(1), 500);
}

#[test]
fn get_retry_budget_is_bounded() {
    assert_eq!(MAX_GET_RETRIES, 2);
}
