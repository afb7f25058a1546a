use super::*;

#[test]
fn constructors_set_kind_and_message() {
    assert_eq!(Notice::success("saved"), Notice { kind: NoticeKind::Success, message: "saved".into() });
    assert_eq!(Notice::warning("drive").kind, NoticeKind::Warning);
    assert_eq!(Notice::error("nope").message, "nope");
}

#[test]
fn css_modifier_matches_stylesheet_classes() {
    assert_eq!(NoticeKind::Success.css_modifier(), "success");
    assert_eq!(NoticeKind::Warning.css_modifier(), "warning");
    assert_eq!(NoticeKind::Error.css_modifier(), "error");
}
