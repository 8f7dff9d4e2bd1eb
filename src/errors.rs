use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use jsonwebtoken::errors::{ErrorKind, Error as JwtError};
use derive_more::Display;

/// Request-level failures. Every variant carries the short message sent to the caller
/// as `{"error": message}`; internal detail belongs in the logs, not here.
#[derive(Debug, Display, PartialEq)]
pub enum AppError {
    #[display("{_0}")]
    BadRequest(String),

    #[display("{_0}")]
    Unauthorized(String),

    #[display("{_0}")]
    Forbidden(String),

    #[display("{_0}")]
    NotFound(String),

    /// Store constraint violation. Rendered as 400.
    #[display("{_0}")]
    Conflict(String),

    #[display("{_0}")]
    InternalError(String),
}

impl AppError {
    pub fn authentication_required() -> Self {
        AppError::Unauthorized("Authentication required".to_string())
    }

    pub fn admin_required() -> Self {
        AppError::Forbidden("Admin access required".to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(e) if e.is_unique_violation() => {
                AppError::Conflict("Database conflict occurred".into())
            }
            sqlx::Error::Database(e) if e.is_foreign_key_violation() || e.is_check_violation() => {
                AppError::Conflict("Constraint violation".into())
            }
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => {
                tracing::error!("Database error: {}", err);
                AppError::InternalError("Database error".into())
            }
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooShort(_) => AppError::BadRequest(err.to_string()),
            _ => {
                tracing::error!("{}", err);
                AppError::InternalError("Password processing failed".into())
            }
        }
    }
}

#[derive(Debug, Display, PartialEq)]
pub enum AuthError {
    #[display("Invalid token")]
    InvalidToken,

    #[display("Invalid credentials")]
    WrongCredentials,

    #[display("Login failed")]
    TokenCreation,

    #[display("Token has expired")]
    TokenExpired,

    #[display("Email and password are required")]
    MissingCredentials,

    #[display("Login failed")]
    Storage,
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::WrongCredentials => StatusCode::UNAUTHORIZED,
            AuthError::TokenCreation => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AuthError {
    fn from(_: validator::ValidationErrors) -> Self {
        AuthError::MissingCredentials
    }
}

#[derive(Debug, Display, PartialEq)]
pub enum PasswordError {
    #[display("Invalid password parameters: {_0}")]
    InvalidParameters(String),

    #[display("Password hashing failed: {_0}")]
    HashingError(String),

    #[display("Invalid password hash format: {_0}")]
    InvalidHashFormat(String),

    #[display("Password verification failed: {_0}")]
    VerificationError(String),

    #[display("New password must be at least {_0} characters long")]
    TooShort(usize),
}
