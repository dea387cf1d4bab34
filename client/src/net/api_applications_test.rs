use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(job_applications_endpoint("j1"), "/api/jobs/j1/applications");
    assert_eq!(application_endpoint("a9"), "/api/applications/a9");
}

#[test]
fn status_body_serializes_wire_name() {
    let body = StatusBody { status: ApplicationStatus::Shortlisted };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "status": "shortlisted" }));
}
