//! Unit tests for token service

use chrono::{Duration, Utc};

use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, ErrorKind, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};
use kk_shared::{JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};

const SECRET: &str = "test-secret-for-kasi-konnect";

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(SECRET)).unwrap()
}

fn user(role: Role) -> User {
    User::new(
        "nomsa@example.co.za".to_string(),
        "Nomsa".to_string(),
        role,
        "hash".to_string(),
    )
}

#[test]
fn test_verify_returns_issued_identity() {
    let service = service();
    for role in Role::ALL {
        let user = user(role);
        let claims = service.verify(&service.issue(&user).unwrap()).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_default_lifetime_is_seven_days() {
    let service = service();
    let claims = service.verify(&service.issue(&user(Role::Client)).unwrap()).unwrap();
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[test]
fn test_expired_token_fails() {
    let service = service();
    let issued_long_ago = Utc::now() - Duration::days(8);
    let token = service.issue_at(&user(Role::Client), issued_long_ago).unwrap();

    let err = service.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn test_expiry_is_strict() {
    let service =
        TokenService::new(TokenServiceConfig::new(SECRET).with_lifetime(Duration::seconds(60)))
            .unwrap();
    // exp lands two seconds in the past; any leeway would accept it
    let token = service
        .issue_at(&user(Role::Client), Utc::now() - Duration::seconds(62))
        .unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_future_token_is_not_yet_valid() {
    let service = service();
    let token = service
        .issue_at(&user(Role::Client), Utc::now() + Duration::hours(1))
        .unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenNotYetValid))
    ));
}

#[test]
fn test_any_altered_payload_byte_fails() {
    let service = service();
    let token = service.issue(&user(Role::Freelancer)).unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);

    let payload = parts[1];
    for (index, original) in payload.char_indices() {
        let replacement = if original == 'A' { 'B' } else { 'A' };
        let mut tampered_payload = payload.to_string();
        tampered_payload.replace_range(index..index + 1, &replacement.to_string());
        let tampered = format!("{}.{}.{}", parts[0], tampered_payload, parts[2]);

        let err = service.verify(&tampered).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized, "byte {index} accepted");
    }
}

#[test]
fn test_role_escalation_by_reencoding_fails() {
    let service = service();
    let token = service.issue(&user(Role::Freelancer)).unwrap();
    let escalated = token.replace(
        token.split('.').nth(1).unwrap(),
        &service
            .issue(&user(Role::MunicipalWorker))
            .unwrap()
            .split('.')
            .nth(1)
            .unwrap()
            .to_string(),
    );

    // header.payload of one token with the signature of another
    assert!(matches!(
        service.verify(&escalated),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_token_signed_with_other_secret_fails() {
    let other = TokenService::new(TokenServiceConfig::new("another-secret")).unwrap();
    let token = other.issue(&user(Role::Client)).unwrap();

    assert!(matches!(
        service().verify(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_wrong_audience_fails() {
    let mut config = TokenServiceConfig::new(SECRET);
    config.audience = "some-other-api".to_string();
    let foreign = TokenService::new(config).unwrap();
    let token = foreign.issue(&user(Role::Client)).unwrap();

    assert!(matches!(
        service().verify(&token),
        Err(DomainError::Token(TokenError::InvalidClaims))
    ));
}

#[test]
fn test_garbage_is_invalid_format() {
    for token in ["", "not-a-token", "a.b.c"] {
        assert!(matches!(
            service().verify(token),
            Err(DomainError::Token(TokenError::InvalidTokenFormat))
        ));
    }
}

#[test]
fn test_empty_secret_is_rejected() {
    assert!(matches!(
        TokenService::new(TokenServiceConfig::new("")),
        Err(DomainError::Internal { .. })
    ));
}

#[test]
fn test_lifetime_is_bounded() {
    let longest = TokenServiceConfig::new(SECRET)
        .with_lifetime(Duration::seconds(MAX_TOKEN_EXPIRY_SECONDS));
    let service = TokenService::new(longest).unwrap();
    let claims = service.verify(&service.issue(&user(Role::Client)).unwrap()).unwrap();
    assert_eq!(claims.exp - claims.iat, MAX_TOKEN_EXPIRY_SECONDS);

    let too_long = TokenServiceConfig::new(SECRET)
        .with_lifetime(Duration::seconds(MAX_TOKEN_EXPIRY_SECONDS + 1));
    assert!(matches!(
        TokenService::new(too_long),
        Err(DomainError::Internal { .. })
    ));
}

#[test]
fn test_oversized_configured_expiry_is_rejected() {
    for expiry in [i64::MAX, i64::MIN, 0] {
        let config = TokenServiceConfig::from(&JwtConfig::new(SECRET).with_expiry_seconds(expiry));
        assert!(matches!(
            TokenService::new(config),
            Err(DomainError::Internal { .. })
        ));
    }
}
