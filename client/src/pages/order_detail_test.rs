use super::*;

#[test]
fn seller_starts_pending_orders() {
    assert_eq!(available_actions(Role::Company, OrderStatus::Pending), vec![OrderAction::Start]);
}

#[test]
fn seller_delivers_in_progress_orders() {
    assert_eq!(available_actions(Role::Company, OrderStatus::InProgress), vec![OrderAction::Deliver]);
}

#[test]
fn buyer_can_cancel_only_while_pending() {
    assert_eq!(available_actions(Role::User, OrderStatus::Pending), vec![OrderAction::Cancel]);
    assert!(available_actions(Role::User, OrderStatus::InProgress).is_empty());
}

#[test]
fn buyer_resolves_a_delivery() {
    assert_eq!(
        available_actions(Role::User, OrderStatus::Delivered),
        vec![OrderAction::Accept, OrderAction::Dispute]
    );
}

#[test]
fn terminal_states_offer_no_actions() {
    for status in [OrderStatus::Completed, OrderStatus::Disputed, OrderStatus::Cancelled] {
        assert!(available_actions(Role::User, status).is_empty(), "buyer action in {status:?}");
        assert!(available_actions(Role::Company, status).is_empty(), "seller action in {status:?}");
    }
}

#[test]
fn admins_take_no_order_actions() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Completed,
    ] {
        assert!(available_actions(Role::Admin, status).is_empty());
    }
}

#[test]
fn every_action_has_a_label() {
    for action in [
        OrderAction::Start,
        OrderAction::Deliver,
        OrderAction::Accept,
        OrderAction::Dispute,
        OrderAction::Cancel,
    ] {
        assert!(!action.label().is_empty());
    }
}
