/// User API routes
use crate::{
    error::{Result, ServerError},
    middleware::UserPayload,
    state::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use roster_core::{NewUser, User};

/// Routes mounted under `/api/user`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/createUser", post(create_user))
        .route("/getUsers", get(list_users))
}

/// POST /api/user/createUser - Store a new user
///
/// `created_at` is always server time.
pub async fn create_user(
    State(app_state): State<AppState>,
    UserPayload(input): UserPayload,
) -> Result<Json<User>> {
    let record = NewUser::stamped(input, Utc::now());

    let user = app_state
        .store
        .insert_user(record)
        .await
        .map_err(ServerError::Write)?;

    tracing::info!(id = %user.id, "Created user");

    Ok(Json(user))
}

/// GET /api/user/getUsers - List every stored user
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state
        .store
        .list_users()
        .await
        .map_err(ServerError::Read)?;

    Ok(Json(users))
}
