use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl UserInsert {
    pub fn admin(email: &str, name: &str, password_hash: String) -> Self {
        UserInsert {
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            role: Role::Admin,
            created_at: Utc::now(),
        }
    }
}

/// Identity attached to a request by the authenticator. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: CurrentUser,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(required, length(min = 1))]
    pub current_password: Option<String>,

    #[validate(required, length(min = 1))]
    pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let missing: LoginUser = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert!(missing.validate().is_err());

        let empty: LoginUser = serde_json::from_str(r#"{"email":"a@b.c","password":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let ok: LoginUser = serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn change_password_uses_camel_case_keys() {
        let request: ChangePasswordRequest =
            serde_json::from_str(r#"{"currentPassword":"old","newPassword":"brand-new"}"#).unwrap();

        assert_eq!(request.current_password.as_deref(), Some("old"));
        assert_eq!(request.new_password.as_deref(), Some("brand-new"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn current_user_serializes_lowercase_role_without_hash() {
        let user = User {
            id: 7,
            email: "admin@example.com".into(),
            name: "Admin".into(),
            password_hash: "$argon2id$secret".into(),
            role: Role::Admin,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(CurrentUser::from(user)).unwrap();
        assert_eq!(json, serde_json::json!({
            "id": 7,
            "email": "admin@example.com",
            "name": "Admin",
            "role": "admin"
        }));
    }
}
