//! Repository for the `users` table.
//!
//! Generic reads go through [`UserInfo`], which never selects the password
//! hash. Credential checks use [`User`] via the dedicated lookups below.

use agritrace_core::types::DbId;
use sqlx::{PgPool, QueryBuilder};

use crate::models::user::{NewUser, UpdateUser, User, UserFilter, UserInfo};
use crate::store::{Builder, Conditions, Persist, Repo, Schema};

/// Full column list including the password hash.
const CREDENTIAL_COLUMNS: &str = "id, username, password_hash, sex, name, phone";

pub type UserRepo = Repo<UserInfo>;

impl Schema for UserInfo {
    type Filter = UserFilter;

    const ENTITY: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, sex, name, phone";
    const FROM: &'static str = "users";
    const ID_COLUMN: &'static str = "id";

    fn push_filters(filter: &UserFilter, conditions: &mut Conditions<'_>) {
        conditions.contains("username", filter.username.as_deref());
        conditions.contains("name", filter.name.as_deref());
        conditions.contains("phone", filter.phone.as_deref());
    }
}

impl Persist for UserInfo {
    type Create = NewUser;
    type Update = UpdateUser;

    fn insert(input: &NewUser) -> Builder {
        let mut query = QueryBuilder::new("INSERT INTO users (username, password_hash) ");
        query.push_values([input], |mut row, u| {
            row.push_bind(u.username.clone())
                .push_bind(u.password_hash.clone());
        });
        query
    }

    fn replace(input: &UpdateUser) -> Builder {
        let mut query = QueryBuilder::new("UPDATE users SET ");
        query
            .separated(", ")
            .push("username = ")
            .push_bind_unseparated(input.username.clone())
            .push("sex = ")
            .push_bind_unseparated(input.sex.clone())
            .push("name = ")
            .push_bind_unseparated(input.name.clone())
            .push("phone = ")
            .push_bind_unseparated(input.phone.clone());
        query
    }

    fn update_id(input: &UpdateUser) -> DbId {
        input.id
    }
}

impl UserRepo {
    /// Find a user (with password hash) by exact username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {CREDENTIAL_COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user (with password hash) by id.
    pub async fn find_credentials(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {CREDENTIAL_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `username` belongs to any user other than `except`.
    pub async fn username_taken(
        pool: &PgPool,
        username: &str,
        except: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(username)
        .bind(except)
        .fetch_one(pool)
        .await
    }

    /// Replace a user's password hash. Returns `true` if the user exists.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
