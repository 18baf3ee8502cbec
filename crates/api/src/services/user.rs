//! User accounts: registration, login, profile and password changes.

use agritrace_core::error::{CoreError, CoreResult};
use agritrace_core::pagination::{PageQuery, PageResult};
use agritrace_core::types::DbId;
use agritrace_db::models::user::{
    ChangePassword, Credentials, NewUser, UpdateUser, UserFilter, UserInfo,
};
use agritrace_db::repositories::UserRepo;
use agritrace_db::store::Schema;
use agritrace_db::DbPool;
use async_trait::async_trait;

use super::{storage_error, validate_input, CrudService};
use crate::auth::password::{hash_password, verify_password};

/// Message for a username collision on registration or profile update.
pub const USERNAME_TAKEN: &str = "Username is already taken";

/// Message for any failed login. Does not reveal which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

const UNIQUE_USERNAME_CONSTRAINT: &str = "uq_users_username";

#[derive(Clone)]
pub struct UserService {
    pool: DbPool,
}

impl UserService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check a username/password pair, returning the account on success.
    pub async fn authenticate(&self, credentials: &Credentials) -> CoreResult<UserInfo> {
        validate_input(credentials)?;

        let user = UserRepo::find_by_username(&self.pool, &credentials.username)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "look up"))?
            .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

        let valid = verify_password(&credentials.password, &user.password_hash)
            .map_err(|e| CoreError::Internal(format!("Password verification failed: {e}")))?;
        if !valid {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        Ok(user.into())
    }

    /// Change the password of `user_id` after checking the old one.
    pub async fn change_password(&self, user_id: DbId, input: &ChangePassword) -> CoreResult<()> {
        validate_input(input)?;
        if input.new_password != input.confirm_password {
            return Err(CoreError::Validation(
                "New password and confirmation do not match".into(),
            ));
        }

        let user = UserRepo::find_credentials(&self.pool, user_id)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "look up"))?
            .ok_or_else(|| CoreError::not_found(UserInfo::ENTITY, user_id))?;

        let valid = verify_password(&input.old_password, &user.password_hash)
            .map_err(|e| CoreError::Internal(format!("Password verification failed: {e}")))?;
        if !valid {
            return Err(CoreError::Validation("Old password is incorrect".into()));
        }

        let hash = hash_password(&input.new_password)
            .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))?;
        let updated = UserRepo::update_password(&self.pool, user_id, &hash)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "update password of"))?;
        if !updated {
            return Err(CoreError::not_found(UserInfo::ENTITY, user_id));
        }

        tracing::info!(user_id, "Password changed");
        Ok(())
    }

    async fn ensure_username_free(&self, username: &str, except: Option<DbId>) -> CoreResult<()> {
        let taken = UserRepo::username_taken(&self.pool, username, except)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "check username of"))?;
        if taken {
            Err(CoreError::Conflict(USERNAME_TAKEN.into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CrudService for UserService {
    type Record = UserInfo;
    type Create = Credentials;
    type Update = UpdateUser;
    type Filter = UserFilter;

    /// Register a new account.
    async fn create(&self, input: &Credentials) -> CoreResult<DbId> {
        validate_input(input)?;
        self.ensure_username_free(&input.username, None).await?;

        let password_hash = hash_password(&input.password)
            .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))?;
        let new_user = NewUser {
            username: input.username.clone(),
            password_hash,
        };

        // A concurrent registration can still hit the unique constraint.
        let id = UserRepo::create(&self.pool, &new_user)
            .await
            .map_err(|err| username_conflict_or(err, "create"))?;

        tracing::info!(user_id = id, username = %input.username, "User registered");
        Ok(id)
    }

    /// Replace profile fields. Blank optional fields are stored as NULL.
    async fn update(&self, input: &UpdateUser) -> CoreResult<()> {
        validate_input(input)?;
        if !UserRepo::exists(&self.pool, input.id)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "look up"))?
        {
            return Err(CoreError::not_found(UserInfo::ENTITY, input.id));
        }
        self.ensure_username_free(&input.username, Some(input.id))
            .await?;

        let normalized = UpdateUser {
            id: input.id,
            username: input.username.clone(),
            sex: blank_to_none(input.sex.as_deref()),
            name: blank_to_none(input.name.as_deref()),
            phone: blank_to_none(input.phone.as_deref()),
        };
        let updated = UserRepo::replace(&self.pool, &normalized)
            .await
            .map_err(|err| username_conflict_or(err, "update"))?;
        if !updated {
            return Err(CoreError::not_found(UserInfo::ENTITY, input.id));
        }

        tracing::info!(user_id = input.id, "Profile updated");
        Ok(())
    }

    async fn delete(&self, id: DbId) -> CoreResult<()> {
        let deleted = UserRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "delete"))?;
        if !deleted {
            return Err(CoreError::not_found(UserInfo::ENTITY, id));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn get(&self, id: DbId) -> CoreResult<UserInfo> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "load"))?
            .ok_or_else(|| CoreError::not_found(UserInfo::ENTITY, id))
    }

    async fn list(&self, filter: &UserFilter) -> CoreResult<Vec<UserInfo>> {
        UserRepo::list(&self.pool, filter)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "list"))
    }

    async fn page(&self, query: &PageQuery<UserFilter>) -> CoreResult<PageResult<UserInfo>> {
        let pagination = query.pagination();
        let (records, total) = UserRepo::page(&self.pool, &query.filter, pagination)
            .await
            .map_err(storage_error(UserInfo::ENTITY, "page"))?;
        Ok(PageResult::new(records, total, pagination))
    }
}

/// Map a unique-username violation to a conflict and anything else to a
/// logged internal error.
fn username_conflict_or(err: sqlx::Error, operation: &'static str) -> CoreError {
    let duplicate = matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some(UNIQUE_USERNAME_CONSTRAINT)
    );
    if duplicate {
        CoreError::Conflict(USERNAME_TAKEN.into())
    } else {
        storage_error(UserInfo::ENTITY, operation)(err)
    }
}

fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
