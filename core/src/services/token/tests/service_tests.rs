//! Unit tests for token issuance and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::{Claims, TokenType, BEARER_TOKEN_TYPE};
use crate::errors::TokenError;
use crate::services::token::{TokenService, TokenServiceConfig};

const TEST_ACCESS_SECRET: &str = "unit-test-access-secret-0123456789-0123456789";
const TEST_REFRESH_SECRET: &str = "unit-test-refresh-secret-9876543210-9876543210";
const TEST_ISSUER: &str = "authgate-test";

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_secret: TEST_ACCESS_SECRET.to_string(),
        refresh_secret: TEST_REFRESH_SECRET.to_string(),
        access_token_expiry: Duration::minutes(15),
        refresh_token_expiry: Duration::days(7),
        issuer: TEST_ISSUER.to_string(),
    }
}

fn create_test_service() -> TokenService {
    TokenService::new(test_config()).expect("Failed to create token service")
}

fn admin_roles() -> Vec<String> {
    vec!["admin".to_string()]
}

#[test]
fn test_construction_fails_without_secrets() {
    let mut config = test_config();
    config.access_secret = String::new();
    assert_eq!(
        TokenService::new(config).err(),
        Some(TokenError::MissingSecret { which: "access" })
    );

    let mut config = test_config();
    config.refresh_secret = String::new();
    assert_eq!(
        TokenService::new(config).err(),
        Some(TokenError::MissingSecret { which: "refresh" })
    );
}

#[test]
fn test_issue_pair_shape() {
    let service = create_test_service();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);
    assert_eq!(pair.token_type, BEARER_TOKEN_TYPE);
    assert_eq!(
        pair.refresh_expires_at - pair.access_expires_at,
        Duration::days(7) - Duration::minutes(15)
    );

    // Compact serialization: header.payload.signature
    assert_eq!(pair.access_token.matches('.').count(), 2);
}

#[test]
fn test_issued_access_token_round_trips() {
    let service = create_test_service();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    let claims = service.validate_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.roles, admin_roles());
    assert_eq!(claims.token_type, TokenType::Access);
    assert_eq!(claims.iss, TEST_ISSUER);
}

#[test]
fn test_issued_refresh_token_round_trips() {
    let service = create_test_service();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    let claims = service.validate_refresh_token(&pair.refresh_token).unwrap();
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.token_type, TokenType::Refresh);
}

#[test]
fn test_cross_type_validation_is_rejected() {
    let service = create_test_service();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    // Both tokens are well formed and signed, but each channel must reject
    // the other type.
    assert_eq!(
        service.validate_access_token(&pair.refresh_token),
        Err(TokenError::Invalid)
    );
    assert_eq!(
        service.validate_refresh_token(&pair.access_token),
        Err(TokenError::Invalid)
    );
}

#[test]
fn test_type_check_holds_even_with_shared_secret() {
    // Defense in depth: with one secret reused for both types, the embedded
    // token_type still separates the channels.
    let mut config = test_config();
    config.refresh_secret = config.access_secret.clone();
    let service = TokenService::new(config).unwrap();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    assert_eq!(
        service.validate_access_token(&pair.refresh_token),
        Err(TokenError::Invalid)
    );
    assert!(service.validate_refresh_token(&pair.refresh_token).is_ok());
}

#[test]
fn test_expired_access_token() {
    let service = create_test_service();
    let issued = Utc::now() - Duration::minutes(16);
    let pair = service
        .issue_pair_at("u1", "a@b.com", admin_roles(), issued)
        .unwrap();

    assert_eq!(
        service.validate_access_token(&pair.access_token),
        Err(TokenError::Expired)
    );

    // The refresh token from the same pair is still well within its 7 days.
    let claims = service.validate_refresh_token(&pair.refresh_token).unwrap();
    assert_eq!(claims.roles, admin_roles());
}

#[test]
fn test_token_not_yet_valid() {
    let service = create_test_service();
    let claims = Claims::new(
        "u1",
        "a@b.com",
        admin_roles(),
        TokenType::Access,
        TEST_ISSUER,
        Utc::now() + Duration::minutes(5),
        Duration::minutes(15),
    );
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_ACCESS_SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        service.validate_access_token(&token),
        Err(TokenError::NotYetValid)
    );
}

#[test]
fn test_wrong_secret_is_rejected() {
    let service = create_test_service();

    let mut other_config = test_config();
    other_config.access_secret = "a-completely-different-access-secret-000000".to_string();
    let other_service = TokenService::new(other_config).unwrap();

    let pair = other_service
        .issue_pair("u1", "a@b.com", admin_roles())
        .unwrap();
    assert_eq!(
        service.validate_access_token(&pair.access_token),
        Err(TokenError::Invalid)
    );
}

#[test]
fn test_wrong_issuer_is_rejected() {
    let service = create_test_service();
    let claims = Claims::new(
        "u1",
        "a@b.com",
        admin_roles(),
        TokenType::Access,
        "some-other-issuer",
        Utc::now(),
        Duration::minutes(15),
    );
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_ACCESS_SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        service.validate_access_token(&token),
        Err(TokenError::Invalid)
    );
}

#[test]
fn test_algorithm_confusion_is_rejected() {
    let service = create_test_service();
    let claims = Claims::new(
        "u1",
        "a@b.com",
        admin_roles(),
        TokenType::Access,
        TEST_ISSUER,
        Utc::now(),
        Duration::minutes(15),
    );
    // Signed with the right secret but the wrong algorithm family member;
    // the pinned validation must refuse it.
    let token = encode(
        &Header::new(Algorithm::HS384),
        &claims,
        &EncodingKey::from_secret(TEST_ACCESS_SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        service.validate_access_token(&token),
        Err(TokenError::Invalid)
    );
}

#[test]
fn test_tampered_token_is_rejected() {
    let service = create_test_service();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    let mut tampered = pair.access_token.clone();
    tampered.pop();
    assert_eq!(
        service.validate_access_token(&tampered),
        Err(TokenError::Invalid)
    );

    assert_eq!(
        service.validate_access_token("not-a-jwt"),
        Err(TokenError::Invalid)
    );
}

#[test]
fn test_pair_tokens_have_distinct_ids() {
    let service = create_test_service();
    let pair = service.issue_pair("u1", "a@b.com", admin_roles()).unwrap();

    let access = service.validate_access_token(&pair.access_token).unwrap();
    let refresh = service.validate_refresh_token(&pair.refresh_token).unwrap();
    assert_ne!(access.jti, refresh.jti);
}

#[test]
fn test_role_order_is_preserved() {
    let service = create_test_service();
    let roles = vec![
        "editor".to_string(),
        "admin".to_string(),
        "auditor".to_string(),
    ];
    let pair = service.issue_pair("u1", "a@b.com", roles.clone()).unwrap();

    let claims = service.validate_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.roles, roles);
}
