use jsonwebtoken::TokenData;
use crate::{entities::token::Claims, errors::AuthError};

#[cfg_attr(test, mockall::automock)]
pub trait TokenServiceRepository: Send + Sync {
    /// Creates a signed, time-limited token for the user
    fn create_jwt(&self, user_id: i64) -> Result<String, AuthError>;

    /// Verifies signature and expiry and returns the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;
}
