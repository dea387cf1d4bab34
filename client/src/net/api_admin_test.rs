use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(user_action_endpoint("u7", "block"), "/api/admin/users/u7/block");
    assert_eq!(user_action_endpoint("u7", "unblock"), "/api/admin/users/u7/unblock");
    assert_eq!(job_endpoint("j3"), "/api/admin/jobs/j3");
}
