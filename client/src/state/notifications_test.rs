use super::*;
use crate::net::types::OrderNotification;

fn counts() -> NotificationsState {
    NotificationsState {
        per_order: vec![
            OrderNotification { order_id: "o1".to_owned(), unread: 2 },
            OrderNotification { order_id: "o2".to_owned(), unread: 0 },
            OrderNotification { order_id: "o3".to_owned(), unread: 5 },
        ],
        loading: false,
        error: None,
    }
}

#[test]
fn unread_total_sums_all_orders() {
    assert_eq!(counts().unread_total(), 7);
    assert_eq!(NotificationsState::default().unread_total(), 0);
}

#[test]
fn unread_for_finds_the_order_or_zero() {
    let state = counts();
    assert_eq!(state.unread_for("o3"), 5);
    assert_eq!(state.unread_for("missing"), 0);
}
