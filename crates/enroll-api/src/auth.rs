//! JWT authentication.
//!
//! Token issuance (login, password verification) belongs to the
//! identity provider; this module only mints tokens for that provider
//! to hand out and verifies the ones presented back.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const SECRET: &[u8] = b"enroll-portal-secret-key-change-in-production";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub is_admin: bool,
    pub exp: usize,
}

pub fn create_token(username: &str, is_admin: bool) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(8))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_string(),
        is_admin,
        exp: expiration,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET))
}

pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(SECRET),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_claims() {
        let token = create_token("admin", true).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.is_admin);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("not-a-token").is_err());
    }
}
