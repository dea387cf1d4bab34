use super::*;

#[test]
fn job_endpoint_formats_expected_path() {
    assert_eq!(job_endpoint("j42"), "/api/jobs/j42");
}
