use super::*;
use crate::net::fake::{letter, user};

fn seeded() -> AdminState {
    let mut synced = letter("l-2", "Quarterly report", "u-2");
    synced.google_drive_id = Some("drive-2".to_owned());
    synced.updated_at = None;
    AdminState {
        users: vec![user("u-1", "Ada")],
        letters: vec![letter("l-1", "Hello", "u-1"), synced],
        loading: false,
        ..AdminState::default()
    }
}

#[test]
fn rows_resolve_owner_and_format_dates() {
    let rows = admin_rows(&seeded());
    assert_eq!(
        rows[0],
        AdminRow {
            id: "l-1".to_owned(),
            title: "Hello".to_owned(),
            owner: "Ada".to_owned(),
            created: "2024-01-01".to_owned(),
            updated: "2024-01-02".to_owned(),
            synced: false,
        }
    );
    assert_eq!(rows[1].owner, "Unknown User");
    assert_eq!(rows[1].updated, "—");
    assert!(rows[1].synced);
}

#[test]
fn rows_follow_search() {
    let mut state = seeded();
    state.search = "ADA".to_owned();
    let rows = admin_rows(&state);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "l-1");
}
