use super::*;

#[test]
fn token_is_found_in_every_known_spelling() {
    let flat = serde_json::json!({ "token": "t-flat" });
    let nested = serde_json::json!({ "data": { "token": "t-nested" } });
    let camel = serde_json::json!({ "accessToken": "t-camel" });

    assert_eq!(extract_token(&flat).as_deref(), Some("t-flat"));
    assert_eq!(extract_token(&nested).as_deref(), Some("t-nested"));
    assert_eq!(extract_token(&camel).as_deref(), Some("t-camel"));
}

#[test]
fn flat_token_wins_over_nested() {
    let both = serde_json::json!({ "token": "t-flat", "data": { "token": "t-nested" } });
    assert_eq!(extract_token(&both).as_deref(), Some("t-flat"));
}

#[test]
fn missing_and_placeholder_tokens_yield_none() {
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "user": { "id": "u1" } }),
        serde_json::json!({ "token": "undefined" }),
        serde_json::json!({ "token": "null" }),
        serde_json::json!({ "token": "" }),
        serde_json::json!({ "token": 42 }),
    ] {
        assert_eq!(extract_token(&body), None, "extracted from {body}");
    }
}

#[test]
fn profile_is_found_under_role_keys() {
    let body = serde_json::json!({
        "token": "abc",
        "admin": { "id": "a1", "name": "Root" }
    });
    let principal = extract_profile(&body, Role::Admin).expect("profile should parse");
    assert_eq!(principal.id, "a1");
    assert_eq!(principal.role, Role::Admin);
}

#[test]
fn embedded_role_field_is_not_overwritten() {
    let body = serde_json::json!({
        "user": { "id": "u1", "name": "Person", "role": "company" }
    });
    let principal = extract_profile(&body, Role::User).unwrap();
    assert_eq!(principal.role, Role::Company);
}

#[test]
fn profile_absent_yields_none() {
    let body = serde_json::json!({ "token": "abc" });
    assert_eq!(extract_profile(&body, Role::User), None);
}

#[test]
fn rejection_messages_classify_into_recovery_kinds() {
    assert_eq!(classify_rejection("Please verify your email first"), LoginError::UnverifiedEmail);
    assert_eq!(classify_rejection("Email not VERIFIED"), LoginError::UnverifiedEmail);
    assert_eq!(classify_rejection("Your account has been blocked"), LoginError::BlockedAccount);
    assert_eq!(classify_rejection("Account suspended by admin"), LoginError::BlockedAccount);
    assert_eq!(classify_rejection("Invalid credentials"), LoginError::InvalidCredentials);
    assert_eq!(classify_rejection(""), LoginError::InvalidCredentials);
}

#[test]
fn unauthorized_maps_to_invalid_credentials() {
    assert_eq!(map_login_error(ApiError::Unauthorized), LoginError::InvalidCredentials);
}

#[test]
fn transport_failures_pass_through_unclassified() {
    let err = map_login_error(ApiError::Server(502));
    assert_eq!(err, LoginError::Api(ApiError::Server(502)));
}

#[test]
fn each_role_has_its_own_profile_endpoint() {
    assert_eq!(principal_endpoint(Role::User), "/api/users/me");
    assert_eq!(principal_endpoint(Role::Company), "/api/company/profile");
    assert_eq!(principal_endpoint(Role::Admin), "/api/admin/me");
}
