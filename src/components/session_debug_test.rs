use super::*;
use crate::net::fake::token;
use crate::net::types::{Role, SessionUser};

const NOW: u64 = 1_700_000_000;

fn row<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
    rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str()).unwrap()
}

#[test]
fn rows_for_fresh_session_without_token() {
    let rows = debug_rows(&SessionState::default(), None, NOW);
    assert_eq!(row(&rows, "Phase"), "init");
    assert_eq!(row(&rows, "Authenticated"), "false");
    assert_eq!(row(&rows, "User"), "none");
    assert_eq!(row(&rows, "Stored token"), "none");
    assert!(rows.iter().all(|(l, _)| *l != "Claims"));
}

#[test]
fn rows_describe_user_and_expired_claims() {
    let session = SessionState {
        phase: SessionPhase::Ready,
        user: Some(SessionUser {
            id: "u-1".to_owned(),
            name: "Ada".to_owned(),
            role: Role::Admin,
            email: None,
            avatar: None,
        }),
        ..SessionState::default()
    };
    let stored = token(&serde_json::json!({ "id": "u-1", "name": "Ada", "role": "admin", "exp": NOW - 5 }));
    let rows = debug_rows(&session, Some(&stored), NOW);
    assert_eq!(row(&rows, "Phase"), "ready");
    assert_eq!(row(&rows, "User"), "Ada (u-1, admin)");
    assert_eq!(row(&rows, "Claims"), format!("Ada (admin), exp {} [expired]", NOW - 5));
}

#[test]
fn rows_report_undecodable_token() {
    let rows = debug_rows(&SessionState::default(), Some("not-a-jwt"), NOW);
    assert_eq!(row(&rows, "Stored token"), "not-a-jwt…");
    assert!(row(&rows, "Claims").starts_with("error: "));
}
