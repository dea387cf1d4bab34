use super::*;

#[test]
fn plausible_emails_pass() {
    for raw in ["a@b.co", "person@example.com", "  padded@mail.example.org  "] {
        assert!(looks_like_email(raw), "rejected {raw:?}");
    }
}

#[test]
fn implausible_emails_fail() {
    for raw in ["", "plain", "@example.com", "a@", "a@nodot", "a@@b.co", "a@.com", "a@b."] {
        assert!(!looks_like_email(raw), "accepted {raw:?}");
    }
}

#[test]
fn credentials_require_email_then_password() {
    assert!(validate_credentials("not-an-email", "pw").is_err());
    assert!(validate_credentials("a@b.co", "   ").is_err());
    assert!(validate_credentials("a@b.co", "pw").is_ok());
}

#[test]
fn job_draft_requires_all_fields() {
    assert!(validate_job_draft("", "Remote", "desc").is_err());
    assert!(validate_job_draft("Title", " ", "desc").is_err());
    assert!(validate_job_draft("Title", "Remote", "").is_err());
    assert!(validate_job_draft("Title", "Remote", "desc").is_ok());
}

#[test]
fn service_draft_rejects_non_positive_prices() {
    for price in ["", "abc", "0", "-5"] {
        assert!(validate_service_draft("Logo design", price, "desc").is_err(), "accepted {price:?}");
    }
    assert!(validate_service_draft("Logo design", "49.50", "desc").is_ok());
}
