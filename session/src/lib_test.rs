use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

fn issue(role: Role, exp: i64) -> String {
    let claims = Claims {
        sub: "id-123".to_owned(),
        role,
        exp,
        iat: Some(exp - 3600),
        email: Some("person@example.com".to_owned()),
        name: Some("Person".to_owned()),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-owned-secret"))
        .expect("encoding should succeed")
}

#[test]
fn decode_claims_round_trips_without_the_signing_key() {
    let token = issue(Role::Company, 2_000_000_000);
    let claims = decode_claims(&token).expect("decode should succeed");
    assert_eq!(claims.sub, "id-123");
    assert_eq!(claims.role, Role::Company);
    assert_eq!(claims.exp, 2_000_000_000);
    assert_eq!(claims.email.as_deref(), Some("person@example.com"));
}

#[test]
fn decode_claims_rejects_non_token_strings() {
    for raw in ["", "garbage", "a.b", "one.two.three.four"] {
        assert!(matches!(decode_claims(raw), Err(CredentialError::Malformed(_))), "accepted {raw:?}");
    }
}

#[test]
fn decode_claims_rejects_payload_missing_role() {
    #[derive(serde::Serialize)]
    struct NoRole {
        sub: String,
        exp: i64,
    }
    let stripped = NoRole { sub: "id".to_owned(), exp: 2_000_000_000 };
    let token = encode(&Header::default(), &stripped, &EncodingKey::from_secret(b"k")).unwrap();
    assert!(matches!(decode_claims(&token), Err(CredentialError::Malformed(_))));
}

#[test]
fn evaluate_accepts_unexpired_credentials() {
    let token = issue(Role::User, 1_000_000);
    let claims = evaluate(&token, 999_999).expect("unexpired token should pass");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn evaluate_rejects_expired_credentials_with_both_clocks() {
    let token = issue(Role::User, 1_000_000);
    match evaluate(&token, 1_003_600) {
        Err(CredentialError::Expired { expired_at, now }) => {
            assert_eq!(expired_at, 1_000_000);
            assert_eq!(now, 1_003_600);
        }
        other => panic!("expected Expired, got {other:?}"),
    }
}

#[test]
fn evaluate_treats_exp_equal_to_now_as_expired() {
    let token = issue(Role::Admin, 1_000_000);
    assert!(matches!(evaluate(&token, 1_000_000), Err(CredentialError::Expired { .. })));
}

#[test]
fn placeholder_values_are_detected() {
    for raw in ["", "  ", "undefined", "null", " null "] {
        assert!(is_placeholder(raw), "missed {raw:?}");
    }
    assert!(!is_placeholder("eyJ.real.token"));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Company).unwrap(), "\"company\"");
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}
