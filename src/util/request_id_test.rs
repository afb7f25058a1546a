use super::*;

#[test]
fn only_latest_ticket_settles() {
    let mut fetches = LatestOnly::default();
    let first = fetches.begin();
    let second = fetches.begin();
    assert!(!fetches.settle(first));
    assert!(fetches.settle(second));
}

#[test]
fn ticket_settles_once() {
    let mut saves = LatestOnly::default();
    let id = saves.begin();
    assert!(saves.settle(id));
    assert!(!saves.settle(id));
}

#[test]
fn teardown_drops_pending_request() {
    let mut fetches = LatestOnly::default();
    assert!(!fetches.drop_pending());

    let id = fetches.begin();
    assert!(fetches.drop_pending());
    assert!(!fetches.drop_pending());
    assert!(!fetches.settle(id));
}

#[test]
fn tickets_stay_unique_after_teardown() {
    let mut fetches = LatestOnly::default();
    let old = fetches.begin();
    fetches.drop_pending();
    let new = fetches.begin();
    assert_ne!(old, new);
    assert!(!fetches.settle(old));
    assert!(fetches.settle(new));
}
