use super::*;

#[test]
fn excerpt_keeps_short_content_and_flattens_whitespace() {
    assert_eq!(excerpt("Dear Sam,\n\n  thanks!", 40), "Dear Sam, thanks!");
    assert_eq!(excerpt("", 40), "");
}

#[test]
fn excerpt_truncates_on_char_boundary_with_ellipsis() {
    assert_eq!(excerpt("héllo wörld", 6), "héllo…");
    assert_eq!(excerpt("abcdefgh", 4), "abcd…");
}

fn letter(updated_at: Option<&str>, created_at: Option<&str>) -> Letter {
    Letter {
        id: "l-1".into(),
        title: "Hello".into(),
        content: String::new(),
        owner_id: "u-1".into(),
        google_drive_id: None,
        created_at: created_at.map(str::to_owned),
        updated_at: updated_at.map(str::to_owned),
    }
}

#[test]
fn updated_label_prefers_update_time() {
    let l = letter(Some("2024-03-05T10:00:00Z"), Some("2024-01-01T00:00:00Z"));
    assert_eq!(updated_label(&l), "Updated 2024-03-05");
}

#[test]
fn updated_label_falls_back_to_creation_time() {
    assert_eq!(updated_label(&letter(None, Some("2024-01-01T00:00:00Z"))), "Updated 2024-01-01");
    assert_eq!(updated_label(&letter(None, None)), "Updated —");
}
