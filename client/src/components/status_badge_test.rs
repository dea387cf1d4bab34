use super::*;

#[test]
fn every_application_status_has_a_label_and_class() {
    let all = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];
    for status in all {
        assert!(!application_label(status).is_empty());
        assert!(application_class(status).starts_with("badge--"));
    }
}

#[test]
fn every_order_status_has_a_label_and_class() {
    let all = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Disputed,
        OrderStatus::Cancelled,
    ];
    for status in all {
        assert!(!order_label(status).is_empty());
        assert!(order_class(status).starts_with("badge--"));
    }
}

#[test]
fn terminal_good_states_render_success() {
    assert_eq!(application_class(ApplicationStatus::Accepted), "badge--success");
    assert_eq!(order_class(OrderStatus::Completed), "badge--success");
}
