//! Argon2 password hashing and the account password strength policy.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Errors returned by [`hash_password`].
#[derive(Debug, thiserror::Error)]
#[error("failed to hash password")]
pub struct HashError;

/// Hash a plaintext password into a PHC string (`$argon2id$...`).
pub fn hash_password(plain: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| HashError)
}

/// Verify a plaintext password against a stored PHC string.
///
/// Returns `false` for both wrong passwords and unparseable stored hashes;
/// a caller cannot distinguish the two, which keeps login errors uniform.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Minimum password length accepted by [`check_strength`].
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a candidate password against the strength policy.
///
/// Returns one message per violated rule; empty means acceptable.
pub fn check_strength(username: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if password.len() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LEN} characters."
        ));
    }
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        errors.push("This password is entirely numeric.".to_string());
    }
    if !username.is_empty() && password.eq_ignore_ascii_case(username) {
        errors.push("The password is too similar to the username.".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_a_freshly_hashed_password() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse battery", &hash));
    }

    #[test]
    fn should_reject_wrong_password() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn should_reject_unparseable_stored_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn should_produce_distinct_hashes_for_same_password() {
        let a = hash_password("jshdwwdws").unwrap();
        let b = hash_password("jshdwwdws").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn should_accept_a_reasonable_password() {
        assert!(check_strength("newuser", "jshdwwdws").is_empty());
    }

    #[test]
    fn should_reject_short_password() {
        let errors = check_strength("newuser", "abc12");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("too short"));
    }

    #[test]
    fn should_reject_entirely_numeric_password() {
        let errors = check_strength("newuser", "12345678901");
        assert_eq!(errors, vec!["This password is entirely numeric."]);
    }

    #[test]
    fn should_reject_password_equal_to_username() {
        let errors = check_strength("BruceWayne", "brucewayne");
        assert_eq!(errors, vec!["The password is too similar to the username."]);
    }

    #[test]
    fn should_report_multiple_violations() {
        let errors = check_strength("bob", "1234");
        assert_eq!(errors.len(), 2);
    }
}
