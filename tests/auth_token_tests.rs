//! Authentication primitive tests
//!
//! Token issuance/verification and password hashing, exercised through the
//! library crate the way the login and middleware paths use them.

use roster_server::auth::{
    generate_access_token, hash_password, verify_password, verify_token, JwtError,
};

const SECRET: &str = "test-secret-key";
const TEST_COST: u32 = 4;

// ============================================================================
// Token round trip
// ============================================================================

#[test]
fn test_token_subject_round_trip() {
    let token = generate_access_token("jane.doe@example.com", SECRET, 1800).unwrap();
    let claims = verify_token(&token, SECRET).unwrap();

    assert_eq!(claims.sub, "jane.doe@example.com");
    assert_eq!(claims.exp - claims.iat, 1800);
}

#[test]
fn test_token_rejected_with_other_secret() {
    let token = generate_access_token("jane.doe@example.com", SECRET, 1800).unwrap();
    assert!(verify_token(&token, "another-secret").is_err());
}

#[test]
fn test_expired_token_reports_expiry() {
    // Default validation leeway is 60 seconds, so expire well past it
    let token = generate_access_token("jane.doe@example.com", SECRET, -120).unwrap();
    assert!(matches!(
        verify_token(&token, SECRET),
        Err(JwtError::TokenExpired)
    ));
}

#[test]
fn test_garbage_token_rejected() {
    assert!(matches!(
        verify_token("not-a-jwt", SECRET),
        Err(JwtError::DecodingFailed(_))
    ));
}

// ============================================================================
// Password hashing, as used by login and seeding
// ============================================================================

#[test]
fn test_login_password_check() {
    let hash = hash_password("chocolate", TEST_COST).unwrap();

    assert!(verify_password("chocolate", &hash).unwrap());
    assert!(!verify_password("vanilla", &hash).unwrap());
}

#[test]
fn test_seeded_hashes_differ_per_user() {
    // Two seeded users with the same generator password still get distinct hashes
    let first = hash_password("chocolate", TEST_COST).unwrap();
    let second = hash_password("chocolate", TEST_COST).unwrap();
    assert_ne!(first, second);
}
