use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a password using Argon2 with a fresh random salt.
pub fn hash_password(password: &[u8]) -> color_eyre::Result<String> {
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password)?.to_string();
    Ok(password_hash)
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &[u8], hash: &str) -> color_eyre::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;
    let verified = Argon2::default()
        .verify_password(password, &parsed_hash)
        .is_ok();
    Ok(verified)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password(b"hunter2").expect("hashing failed");
        assert!(verify_password(b"hunter2", &hash).expect("verify failed"));
        assert!(!verify_password(b"hunter3", &hash).expect("verify failed"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password(b"same-password").expect("hashing failed");
        let b = hash_password(b"same-password").expect("hashing failed");
        assert_ne!(a, b);
    }
}
