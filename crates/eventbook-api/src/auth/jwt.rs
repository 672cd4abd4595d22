// JWT issuing and validation (HS256)
//
// Claims carry the caller's identity and single role; the token itself is
// the only session state, validated on every request.

use anyhow::{Context, Result};
use chrono::Utc;
use eventbook_core::UserRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::AuthConfig;

/// Identity claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Login identifier
    pub email: String,
    /// Display name
    pub name: String,
    /// The account's single role
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a signed token for a verified identity
pub fn issue_token(
    config: &AuthConfig,
    user_id: Uuid,
    email: &str,
    name: &str,
    role: UserRole,
) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        name: name.to_string(),
        role,
        iat: now.timestamp(),
        exp: (now + chrono::Duration::from_std(config.token_lifetime)?).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .context("failed to sign token")
}

/// Validate signature and expiry, returning the claims
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_lifetime: Duration::from_secs(3600),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let id = Uuid::now_v7();
        let token =
            issue_token(&config, id, "vendor@example.com", "Ada Lovelace", UserRole::Vendor)
                .unwrap();

        let claims = decode_token(&token, &config.jwt_secret).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "vendor@example.com");
        assert_eq!(claims.name, "Ada Lovelace");
        assert_eq!(claims.role, UserRole::Vendor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token =
            issue_token(&config, Uuid::now_v7(), "a@b.com", "A B", UserRole::User).unwrap();

        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::now_v7(),
            email: "a@b.com".to_string(),
            name: "A B".to_string(),
            role: UserRole::User,
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(decode_token(&token, &config.jwt_secret).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = test_config();
        let token =
            issue_token(&config, Uuid::now_v7(), "a@b.com", "A B", UserRole::User).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(decode_token(&tampered, &config.jwt_secret).is_err());
    }
}
