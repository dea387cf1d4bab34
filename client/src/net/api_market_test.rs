use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(service_endpoint("s1"), "/api/marketplace/services/s1");
    assert_eq!(order_endpoint("o1"), "/api/marketplace/orders/o1");
    assert_eq!(order_action_endpoint("o1", "accept"), "/api/marketplace/orders/o1/accept");
    assert_eq!(order_action_endpoint("o1", "deliver"), "/api/marketplace/orders/o1/deliver");
}
