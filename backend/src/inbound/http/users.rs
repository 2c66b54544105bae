//! Users API handlers.
//!
//! ```text
//! POST /api/users {"name":"Ada","email":"ada@example.com"}
//! GET /api/users/{id}
//! GET /api/users/{userId}/receipts
//! ```

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::receipts::ReceiptResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, Position, parse_email, parse_id, parse_name, require,
};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const ID_PARAM: FieldName = FieldName::new("id");
const USER_ID_PARAM: FieldName = FieldName::new("userId");

/// Request body for `POST /api/users`.
///
/// Example JSON:
/// `{"name":"Ada Lovelace","email":"ada@example.com"}`
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Stored user as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

fn parse_create_user_request(payload: CreateUserRequest) -> Result<NewUser, Error> {
    let position = Position::single();
    let name = require(payload.name, NAME, position)?;
    let email = require(payload.email, EMAIL, position)?;
    Ok(NewUser {
        name: parse_name(name, NAME, position)?,
        email: parse_email(email, EMAIL)?,
    })
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

/// Register a user.
///
/// Emails are unique ignoring case; a second registration with the same
/// address is a conflict.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let draft = parse_create_user_request(payload.into_inner())?;
    let user = state.users.create(draft).await?;
    info!(user_id = %user.id(), "user created");
    Ok(web::Json(UserResponse::from(user)))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id: UserId = parse_id(&path, ID_PARAM)?;
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(web::Json(UserResponse::from(user)))
}

/// List receipts filed against a user, oldest first.
///
/// An unknown user simply has no receipts.
#[utoipa::path(
    get,
    path = "/api/users/{userId}/receipts",
    params(("userId" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Receipts for the user", body = [ReceiptResponse]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserReceipts"
)]
#[get("/users/{user_id}/receipts")]
pub async fn list_user_receipts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ReceiptResponse>>> {
    let user_id: UserId = parse_id(&path, USER_ID_PARAM)?;
    let receipts = state.receipts.list_by_user(user_id).await?;
    Ok(web::Json(
        receipts.into_iter().map(ReceiptResponse::from).collect(),
    ))
}
