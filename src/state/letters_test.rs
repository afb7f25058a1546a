use super::*;
use crate::net::fake::letter;
use crate::state::notice::NoticeKind;

fn three_letters() -> Vec<Letter> {
    vec![letter("a", "One", "u-1"), letter("b", "Two", "u-1"), letter("c", "Three", "u-1")]
}

#[test]
fn confirm_returns_pending_id_once() {
    let mut confirm = DeleteConfirm::default();
    assert_eq!(confirm.confirm(), None);

    confirm.open("b");
    assert!(confirm.is_open());
    assert_eq!(confirm.confirm().as_deref(), Some("b"));
    assert_eq!(confirm.confirm(), None);

    confirm.close();
    assert!(!confirm.is_open());
}

#[test]
fn apply_delete_success_removes_only_target() {
    let mut letters = three_letters();
    let notice = apply_delete(&mut letters, "b", Ok(()));
    assert_eq!(letters.len(), 2);
    assert!(letters.iter().all(|l| l.id != "b"));
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[test]
fn apply_delete_failure_keeps_list() {
    let mut letters = three_letters();
    let notice = apply_delete(&mut letters, "b", Err(ApiError::Status { status: 500 }));
    assert_eq!(letters.len(), 3);
    assert_eq!(notice, Notice::error(DELETE_FAILED));
}

#[test]
fn synced_count_counts_drive_ids() {
    let mut letters = three_letters();
    letters[0].google_drive_id = Some("drive-1".to_owned());
    assert_eq!(synced_count(&letters), 1);
}
