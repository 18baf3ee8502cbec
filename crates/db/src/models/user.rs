//! User account model and DTOs.

use agritrace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A full row from the `users` table, including the password hash.
///
/// Never serialized; use [`UserInfo`] for responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub sex: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Public view of a user account. The password hash is never selected.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub sex: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            sex: user.sex,
            name: user.name,
            phone: user.phone,
        }
    }
}

/// Registration / login payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Insert payload; the password is already hashed.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    pub password_hash: String,
}

/// Full replacement of a user's profile fields. The password is changed
/// separately.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(range(min = 1, message = "User id must be positive"))]
    pub id: DbId,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    pub sex: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Password change payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub username: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}
