use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_admin_and_user() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
}

#[test]
fn role_unknown_falls_back_to_user() {
    assert_eq!(serde_json::from_str::<Role>("\"editor\"").unwrap(), Role::User);
}

#[test]
fn role_as_str_matches_wire_name() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(serde_json::to_value(Role::User).unwrap(), Role::User.as_str());
}

// =============================================================
// SessionUser / AuthCheck
// =============================================================

#[test]
fn auth_check_parses_backend_shape() {
    let body = serde_json::json!({
        "isAuthenticated": true,
        "user": { "id": "u-1", "name": "Ada", "role": "admin", "email": "ada@example.com" }
    });
    let check: AuthCheck = serde_json::from_value(body).unwrap();
    assert!(check.is_authenticated);
    let user = check.user.unwrap();
    assert_eq!(user.id, "u-1");
    assert!(user.is_admin());
    assert_eq!(user.avatar, None);
}

#[test]
fn session_user_accepts_mongo_id() {
    let user: SessionUser = serde_json::from_value(serde_json::json!({ "_id": "u-9", "name": "Bo" })).unwrap();
    assert_eq!(user.id, "u-9");
    assert_eq!(user.role, Role::User);
}

#[test]
fn auth_check_without_user_is_allowed() {
    let check: AuthCheck = serde_json::from_value(serde_json::json!({ "isAuthenticated": false })).unwrap();
    assert!(!check.is_authenticated);
    assert!(check.user.is_none());
}

// =============================================================
// Letter
// =============================================================

#[test]
fn letter_maps_backend_field_names() {
    let body = serde_json::json!({
        "_id": "l-1",
        "title": "Cover letter",
        "content": "<p>Hi</p>",
        "user": "u-1",
        "googleDriveId": "drive-42",
        "createdAt": "2024-03-01T10:00:00.000Z",
        "updatedAt": "2024-03-02T11:30:00.000Z"
    });
    let letter: Letter = serde_json::from_value(body).unwrap();
    assert_eq!(letter.id, "l-1");
    assert_eq!(letter.owner_id, "u-1");
    assert!(letter.is_synced());
    assert_eq!(letter.updated_at.as_deref(), Some("2024-03-02T11:30:00.000Z"));
}

#[test]
fn letter_without_drive_id_is_local_only() {
    let letter: Letter = serde_json::from_value(serde_json::json!({ "_id": "l-2", "title": "Draft" })).unwrap();
    assert!(!letter.is_synced());
    assert_eq!(letter.content, "");

    let blank: Letter =
        serde_json::from_value(serde_json::json!({ "_id": "l-3", "title": "Draft", "googleDriveId": "" })).unwrap();
    assert!(!blank.is_synced());
}

// =============================================================
// LetterPayload / SaveResponse
// =============================================================

#[test]
fn letter_payload_serializes_camel_case() {
    let payload = LetterPayload { title: "Draft".to_owned(), content: String::new(), save_to_google_drive: false };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "title": "Draft", "content": "", "saveToGoogleDrive": false })
    );
}

#[test]
fn save_response_prefers_top_level_id() {
    let resp: SaveResponse =
        serde_json::from_value(serde_json::json!({ "_id": "top", "letter": { "_id": "nested" } })).unwrap();
    assert_eq!(resp.letter_id(), Some("top"));
}

#[test]
fn save_response_falls_back_to_nested_letter_id() {
    let resp: SaveResponse = serde_json::from_value(serde_json::json!({
        "letter": { "_id": "nested", "title": "x" },
        "warning": "Letter saved but Google Drive upload failed"
    }))
    .unwrap();
    assert_eq!(resp.letter_id(), Some("nested"));
    assert_eq!(resp.warning(), Some("Letter saved but Google Drive upload failed"));
}

#[test]
fn save_response_ignores_blank_warning() {
    let resp: SaveResponse = serde_json::from_value(serde_json::json!({ "_id": "a", "warning": "  " })).unwrap();
    assert_eq!(resp.warning(), None);
    assert_eq!(SaveResponse::default().letter_id(), None);
}
