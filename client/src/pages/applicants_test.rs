use super::*;

#[test]
fn pending_applications_offer_review_shortlist_reject() {
    let moves: Vec<_> = available_transitions(ApplicationStatus::Pending).iter().map(|&(s, _)| s).collect();
    assert_eq!(
        moves,
        vec![ApplicationStatus::Reviewed, ApplicationStatus::Shortlisted, ApplicationStatus::Rejected]
    );
}

#[test]
fn shortlisted_applications_can_be_accepted() {
    let moves: Vec<_> =
        available_transitions(ApplicationStatus::Shortlisted).iter().map(|&(s, _)| s).collect();
    assert!(moves.contains(&ApplicationStatus::Accepted));
}

#[test]
fn terminal_statuses_offer_no_moves() {
    assert!(available_transitions(ApplicationStatus::Accepted).is_empty());
    assert!(available_transitions(ApplicationStatus::Rejected).is_empty());
}

#[test]
fn no_transition_skips_straight_from_pending_to_accepted() {
    let moves: Vec<_> = available_transitions(ApplicationStatus::Pending).iter().map(|&(s, _)| s).collect();
    assert!(!moves.contains(&ApplicationStatus::Accepted));
}
