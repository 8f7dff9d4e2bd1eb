use crate::errors::PasswordError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Length policy for newly chosen passwords, counted in characters.
pub fn validate_new_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort(MIN_PASSWORD_LENGTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_passwords_shorter_than_minimum() {
        assert_eq!(validate_new_password("12345"), Err(PasswordError::TooShort(6)));
        assert!(validate_new_password("123456").is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(validate_new_password("ééééé").is_err());
        assert!(validate_new_password("éééééé").is_ok());
    }
}
