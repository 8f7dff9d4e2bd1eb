use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use crate::entities::token::Claims;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone, Debug)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::hours(config.jwt_expiration_hours),
        }
    }

    pub fn create_jwt(&self, user_id: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.expiration).timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|e| {
                tracing::error!("Failed to sign JWT: {}", e);
                AuthError::TokenCreation
            })
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(
            token,
            &self.keys.decoding,
            &validation
        )
        .map_err(AuthError::from)
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, user_id: i64) -> Result<String, AuthError> {
        self.create_jwt(user_id)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{tests::config_for, AppEnvironment};

    fn service() -> JwtService {
        JwtService::new(&config_for(AppEnvironment::Testing))
    }

    #[test]
    fn token_round_trips_user_id_with_24h_expiry() {
        let jwt = service();
        let token = jwt.create_jwt(42).unwrap();

        let claims = jwt.decode_jwt(&token).unwrap().claims;
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = service();
        let past = (Utc::now() - Duration::hours(2)).timestamp() as usize;
        let claims = Claims { sub: "1".into(), exp: past, iat: past - 60 };
        let token = encode(&Header::new(JWT_ALGORITHM), &claims, &jwt.keys.encoding).unwrap();

        assert_eq!(jwt.decode_jwt(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let mut other = config_for(AppEnvironment::Testing);
        other.jwt_secret = "a_completely_different_secret_for_signing_0987654321".into();
        let forged = JwtService::new(&other).create_jwt(1).unwrap();

        assert_eq!(service().decode_jwt(&forged).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(service().decode_jwt("admin-token").unwrap_err(), AuthError::InvalidToken);
    }
}
