//! HS256 session-token issue and validation.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session-token lifetime in seconds (14 days, matching the cookie Max-Age).
pub const SESSION_EXP: u64 = 1_209_600;

/// Identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user_id: Uuid,
    pub session_exp: u64,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing,
}

/// JWT claims carried by the session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (UUID string).
    pub sub: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a session token for a user id, expiring [`SESSION_EXP`] seconds
/// from now.
pub fn issue_session_token(user_id: Uuid, secret: &str) -> Result<String, SessionError> {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp: now_secs() + SESSION_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| SessionError::Signing)
}

/// Decode and validate a session-cookie value, returning the parsed identity.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway of 60s tolerates clock skew.
pub fn validate_session_token(cookie_value: &str, secret: &str) -> Result<SessionInfo, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        cookie_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionError::Malformed)?;

    Ok(SessionInfo {
        user_id,
        session_exp: data.claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    fn make_token(sub: &str, exp: u64) -> String {
        let claims = SessionClaims {
            sub: sub.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600
    }

    #[test]
    fn should_round_trip_issue_and_validate() {
        let user_id = Uuid::new_v4();
        let token = issue_session_token(user_id, TEST_SECRET).unwrap();
        let info = validate_session_token(&token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, user_id);
        assert!(info.session_exp > now_secs());
    }

    #[test]
    fn should_reject_expired_token() {
        let token = make_token(&Uuid::new_v4().to_string(), 1_000_000);
        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, SessionError::Expired));
    }

    #[test]
    fn should_reject_wrong_secret() {
        let token = make_token(&Uuid::new_v4().to_string(), future_exp());
        let err = validate_session_token(&token, "wrong-secret").unwrap_err();
        assert!(matches!(err, SessionError::InvalidSignature));
    }

    #[test]
    fn should_reject_malformed_token() {
        let err = validate_session_token("not-a-jwt", TEST_SECRET).unwrap_err();
        assert!(matches!(err, SessionError::Malformed));
    }

    #[test]
    fn should_reject_non_uuid_subject() {
        let token = make_token("not-a-uuid", future_exp());
        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, SessionError::Malformed));
    }
}
