//! JWT verification for the callable surface.
//!
//! Session issuance lives with the account platform; this service only
//! verifies bearer tokens minted there. HS256 with a shared secret.

use anyhow::{Context, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by platform-issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Profile id of the caller.
    pub sub: String,
    /// Expiry, unix seconds.
    pub exp: i64,
    /// Caller role (e.g. "HOSPITAL", "DOCTOR", "ADMIN").
    #[serde(default)]
    pub role: String,
}

/// Token verification service.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Verify a token and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .context("Invalid or expired token")?;
        Ok(data.claims)
    }

    /// Mint a token. Used by tests and local tooling; production tokens
    /// come from the account platform with the same secret.
    pub fn create_token(&self, sub: &str, role: &str, exp: i64) -> Result<String> {
        let claims = Claims {
            sub: sub.to_string(),
            exp,
            role: role.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key).context("Failed to sign token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn roundtrips_valid_token() {
        let service = JwtService::new("test_secret");
        let token = service
            .create_token("hosp1", "HOSPITAL", Utc::now().timestamp() + 3600)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "hosp1");
        assert_eq!(claims.role, "HOSPITAL");
    }

    #[test]
    fn rejects_expired_token() {
        let service = JwtService::new("test_secret");
        let token = service
            .create_token("hosp1", "HOSPITAL", Utc::now().timestamp() - 3600)
            .unwrap();
        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = JwtService::new("other_secret");
        let token = issuer
            .create_token("hosp1", "HOSPITAL", Utc::now().timestamp() + 3600)
            .unwrap();
        let service = JwtService::new("test_secret");
        assert!(service.verify_token(&token).is_err());
    }
}
