use super::*;

#[test]
fn principal_aliases_logo_into_company_logo() {
    let from_logo: Principal = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Acme",
        "role": "company",
        "logo": "https://cdn.example.com/acme.png"
    }))
    .unwrap();
    assert_eq!(from_logo.company_logo.as_deref(), Some("https://cdn.example.com/acme.png"));

    let from_camel: Principal = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Acme",
        "role": "company",
        "companyLogo": "https://cdn.example.com/acme2.png"
    }))
    .unwrap();
    assert_eq!(from_camel.company_logo.as_deref(), Some("https://cdn.example.com/acme2.png"));
}

#[test]
fn principal_defaults_optional_fields() {
    let p: Principal = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Person",
        "role": "user"
    }))
    .unwrap();
    assert!(!p.verified);
    assert_eq!(p.email, None);
    assert_eq!(p.company_logo, None);
}

#[test]
fn order_notification_accepts_float_counts() {
    let n: OrderNotification = serde_json::from_value(serde_json::json!({
        "order_id": "o1",
        "unread": 3.0
    }))
    .unwrap();
    assert_eq!(n.unread, 3);
}

#[test]
fn order_notification_rejects_fractional_counts() {
    let result: Result<OrderNotification, _> = serde_json::from_value(serde_json::json!({
        "order_id": "o1",
        "unread": 3.5
    }));
    assert!(result.is_err());
}

#[test]
fn application_status_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&ApplicationStatus::Shortlisted).unwrap(), "\"shortlisted\"");
    let parsed: ApplicationStatus = serde_json::from_str("\"accepted\"").unwrap();
    assert_eq!(parsed, ApplicationStatus::Accepted);
}

#[test]
fn order_status_uses_snake_case_wire_names() {
    assert_eq!(serde_json::to_string(&OrderStatus::InProgress).unwrap(), "\"in_progress\"");
    let parsed: OrderStatus = serde_json::from_str("\"disputed\"").unwrap();
    assert_eq!(parsed, OrderStatus::Disputed);
}

#[test]
fn job_tolerates_missing_optional_fields() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": "j1",
        "title": "Rust Engineer"
    }))
    .unwrap();
    assert_eq!(job.company_name, "");
    assert_eq!(job.salary_range, None);
}

#[test]
fn admin_stats_accepts_float_counters() {
    let stats: AdminStats = serde_json::from_value(serde_json::json!({
        "users": 1200.0,
        "companies": 80,
        "jobs": 341.0,
        "orders": 55,
        "open_disputes": 2
    }))
    .unwrap();
    assert_eq!(stats.users, 1200);
    assert_eq!(stats.jobs, 341);
}
