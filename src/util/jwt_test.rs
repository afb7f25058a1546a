use super::*;

fn encode_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[test]
fn decode_claims_reads_identity_and_expiry() {
    let token = encode_token(&serde_json::json!({
        "id": "u-1",
        "name": "Ada",
        "role": "admin",
        "avatar": "https://example.com/a.png",
        "exp": 1_900_000_000_u64
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.id, "u-1");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.exp, Some(1_900_000_000));
    assert_eq!(claims.to_user().avatar.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn decode_claims_accepts_sub_as_id() {
    let token = encode_token(&serde_json::json!({ "sub": "u-2", "name": "Bo", "exp": 10 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.id, "u-2");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("not-a-token"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a..c"), Err(TokenError::Malformed));
}

#[test]
fn decode_claims_rejects_bad_base64() {
    assert!(matches!(decode_claims("aaa.!!!.ccc"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_claims_tolerates_missing_name_and_expiry() {
    let token = encode_token(&serde_json::json!({ "id": "u-1" }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.name, "");
    assert_eq!(claims.exp, None);
    assert!(!claims.is_expired(u64::MAX));
}

#[test]
fn decode_claims_rejects_payload_without_id() {
    let token = encode_token(&serde_json::json!({ "name": "Ada", "exp": 10 }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn is_expired_is_strict() {
    let token = encode_token(&serde_json::json!({ "id": "u", "name": "n", "exp": 100 }));
    let claims = decode_claims(&token).unwrap();
    assert!(!claims.is_expired(99));
    assert!(!claims.is_expired(100));
    assert!(claims.is_expired(101));
}
