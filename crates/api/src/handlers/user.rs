//! Account handlers. Everything except register and login requires a
//! Bearer token; the caller is taken from [`AuthUser`].

use agritrace_core::error::CoreError;
use agritrace_core::types::DbId;
use agritrace_db::models::user::{ChangePassword, Credentials, UpdateUser, UserInfo};
use axum::extract::{FromRef, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::services::{CrudService, UserService};
use crate::state::AppState;

/// Response body for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Profile fields the caller may replace on their own account.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub username: String,
    pub sex: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// POST /user/register
pub async fn register(
    State(users): State<UserService>,
    AppJson(input): AppJson<Credentials>,
) -> AppResult<Json<ApiResponse<DbId>>> {
    let id = users.create(&input).await?;
    Ok(Json(ApiResponse::with_message(id, "Registered")))
}

/// POST /user/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<Credentials>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let users = UserService::from_ref(&state);
    let user = users.authenticate(&input).await?;

    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| CoreError::Internal(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(ApiResponse::ok(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_secs(),
        user,
    })))
}

/// POST /user/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(auth: AuthUser) -> AppResult<Json<ApiResponse<()>>> {
    tracing::info!(user_id = auth.user_id, username = %auth.username, "User logged out");
    Ok(Json(ApiResponse::message("Logged out")))
}

/// GET /user/userInfo
pub async fn user_info(
    State(users): State<UserService>,
    auth: AuthUser,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let user = users.get(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /user/update
pub async fn update_profile(
    State(users): State<UserService>,
    auth: AuthUser,
    AppJson(input): AppJson<ProfileRequest>,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let update = UpdateUser {
        id: auth.user_id,
        username: input.username,
        sex: input.sex,
        name: input.name,
        phone: input.phone,
    };
    users.update(&update).await?;

    let user = users.get(auth.user_id).await?;
    Ok(Json(ApiResponse::with_message(user, "Profile updated")))
}

/// PUT /user/editPassword
pub async fn edit_password(
    State(users): State<UserService>,
    auth: AuthUser,
    AppJson(input): AppJson<ChangePassword>,
) -> AppResult<Json<ApiResponse<()>>> {
    users.change_password(auth.user_id, &input).await?;
    Ok(Json(ApiResponse::message("Password changed")))
}
