use super::*;

#[test]
fn callback_token_trims_and_requires_value() {
    assert_eq!(callback_token(Some(" a.b.c ".to_owned())), Some("a.b.c".to_owned()));
    assert_eq!(callback_token(Some("   ".to_owned())), None);
    assert_eq!(callback_token(None), None);
}

#[test]
fn navigation_after_login_replaces_history() {
    assert!(replace_history().replace);
}
