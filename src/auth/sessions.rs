/**
 * Session Tokens and Cookies
 *
 * This module issues and verifies the JWT session tokens and builds the
 * cookie strings that carry them. A session lives for one day; the cookie
 * Max-Age and the token expiry always use the same constant so the two
 * cannot drift apart.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// How long a session lasts, in seconds (one day)
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Account id carried by the token, `None` if the subject is malformed
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Get JWT secret from environment
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "xfgram-dev-secret-change-in-production".to_string()
    })
}

/// Create a session token for an account
///
/// # Arguments
/// * `user_id` - Account ID (UUID)
///
/// # Returns
/// Signed JWT string, valid for [`SESSION_TTL_SECS`]
pub fn create_token(user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + SESSION_TTL_SECS,
        iat: now,
    };

    let secret = jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// # Arguments
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims, or an error for bad signatures and expired tokens
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Build the `Set-Cookie` value that installs a session
///
/// HttpOnly keeps the token away from scripts; SameSite=Strict keeps the
/// cookie off cross-site requests.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Max-Age={SESSION_TTL_SECS}; Path=/; HttpOnly; SameSite=Strict"
    )
}

/// Build the `Set-Cookie` value that clears the session cookie
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; HttpOnly; SameSite=Strict")
}

/// Pull the session token out of a `Cookie` request header value
///
/// # Arguments
/// * `header` - Raw header value, e.g. `"theme=dark; token=abc"`
///
/// # Returns
/// The token string, or `None` if the cookie is absent
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let user_id = Uuid::new_v4();
        let result = create_token(user_id);
        assert!(result.is_ok());
        let token = result.unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id(), Some(user_id));
    }

    #[test]
    fn test_token_lives_one_day() {
        let token = create_token(Uuid::new_v4()).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = verify_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        // Well past the default validation leeway
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 600,
            iat: now - 600 - SESSION_TTL_SECS,
        };
        let key = EncodingKey::from_secret(jwt_secret().as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let result = verify_token(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123");
        assert!(cookie.starts_with("token=abc123;"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_clear_session_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.starts_with("token=;"));
    }

    #[test]
    fn test_token_from_cookie_header() {
        assert_eq!(token_from_cookie_header("token=abc"), Some("abc"));
        assert_eq!(
            token_from_cookie_header("theme=dark; token=abc; lang=en"),
            Some("abc")
        );
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header("token="), None);
        assert_eq!(token_from_cookie_header(""), None);
    }
}
