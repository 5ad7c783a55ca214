// src/presentation/http/controllers/users.rs
use crate::application::commands::users::{CreateUserCommand, LoginCommand};
use crate::application::dto::{Page, UserDto};
use crate::application::queries::users::ListUsersQuery;
use crate::domain::user::UserId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

/// Fields are `Option` so a missing field maps to a 400 validation error
/// instead of a body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: Option<i64>,
    pub password: Option<String>,
}

fn default_size() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let name = payload
        .name
        .ok_or_else(|| HttpError::bad_request("name is required"))?;

    state
        .services
        .user_commands
        .create_user(CreateUserCommand { name })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(UserId::from(user_id))
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::not_found(format!("no user with id {user_id}")))
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            page: params.page,
            size: params.size,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_user(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .remove_user(UserId::from(user_id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<UserDto>> {
    let user_id = payload
        .user_id
        .ok_or_else(|| HttpError::bad_request("userId is required"))?;
    let password = payload
        .password
        .ok_or_else(|| HttpError::bad_request("password is required"))?;

    let authenticated = state
        .services
        .user_commands
        .login(LoginCommand {
            user_id: UserId::from(user_id),
            password,
        })
        .await
        .into_http()?;

    if !authenticated {
        return Err(HttpError::unauthorized("invalid credentials"));
    }

    // The credential matched but the user row itself may be gone (orphaned
    // credential after a delete); that also reads as a failed login.
    state
        .services
        .user_queries
        .get_user(UserId::from(user_id))
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::unauthorized("invalid credentials"))
}
