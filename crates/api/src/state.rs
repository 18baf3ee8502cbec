use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::ServerConfig;
use crate::services::{EntityService, TraceResolver, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and config are reference counted).
/// Services are built from it per request through [`FromRef`], so handlers
/// can extract `State<CompanyService>` and friends directly.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: agritrace_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl<S> FromRef<AppState> for EntityService<S> {
    fn from_ref(state: &AppState) -> Self {
        EntityService::new(state.pool.clone())
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        UserService::new(state.pool.clone())
    }
}

impl FromRef<AppState> for TraceResolver {
    fn from_ref(state: &AppState) -> Self {
        TraceResolver::new(state.pool.clone())
    }
}
