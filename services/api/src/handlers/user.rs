use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emlak_auth_types::identity::Identity;
use emlak_domain::role::Role;

use crate::domain::types::{User, UserPatch};
use crate::error::ApiError;
use crate::handlers::form::MultipartForm;
use crate::handlers::require_admin;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdatePasswordInput, UpdatePasswordUseCase, UpdateUserUseCase, UploadUserImageUseCase,
};

// ── Response shape ───────────────────────────────────────────────────────────

/// Account shaped for output — the password hash never leaves the server.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub image: String,
    pub phonenumber: i64,
    pub role: Role,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            surname: user.surname,
            email: user.email,
            image: user.image,
            phonenumber: user.phonenumber,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /user ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phonenumber: i64,
}

pub async fn create_user(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&identity)?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            name: body.name,
            surname: body.surname,
            email: body.email,
            phonenumber: body.phonenumber,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn list_users(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /user/{id} ───────────────────────────────────────────────────────────

pub async fn get_user(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user.into()))
}

// ── PUT /user/{id} ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<i64>,
}

pub async fn update_user(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            user_id,
            UserPatch {
                name: body.name,
                surname: body.surname,
                email: body.email,
                phonenumber: body.phonenumber,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── PATCH /user/{id}/password ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

pub async fn update_password(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdatePasswordUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            user_id,
            UpdatePasswordInput {
                old_password: body.old_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /user/{id}/upload-image ────────────────────────────────────────────

pub async fn upload_user_image(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, ApiError> {
    let mut form = MultipartForm::read(&mut multipart, &["image"]).await?;
    let file = form
        .files
        .pop()
        .ok_or_else(|| ApiError::InvalidInput("no image file provided".to_owned()))?;

    let usecase = UploadUserImageUseCase {
        repo: state.user_repo(),
        store: state.storage.clone(),
    };
    let user = usecase.execute(user_id, file).await?;
    Ok(Json(user.into()))
}

// ── DELETE /user/{id} ────────────────────────────────────────────────────────

pub async fn delete_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_admin(&identity)?;
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
