use crate::api::auth::error::AuthError;
use crate::api::auth::interfaces::AuthClaims;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Mints a signed, time-bound bearer token embedding the account id.
pub fn create_token(jwt_secret: &str, user_id: i32, ttl_days: i64) -> Result<String, AuthError> {
    let exp = (Utc::now() + Duration::days(ttl_days)).timestamp();
    let claims = AuthClaims { sub: user_id, exp };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

/// Validates signature and expiry; no storage is touched.
pub fn decode_token(token: &str, jwt_secret: &str) -> Result<AuthClaims, AuthError> {
    decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::{create_token, decode_token};
    use crate::api::auth::error::AuthError;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_roundtrip_carries_the_user_id() {
        let token = create_token(SECRET, 42, 30).expect("token creation failed");
        let claims = decode_token(&token, SECRET).expect("decode failed");
        assert_eq!(claims.sub, 42);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = create_token(SECRET, 42, -1).expect("token creation failed");
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(SECRET, 42, 30).expect("token creation failed");
        assert!(matches!(
            decode_token(&token, "other-secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            decode_token("not-a-jwt", SECRET),
            Err(AuthError::InvalidToken)
        ));
    }
}
