use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emlak_auth_types::identity::Identity;

use crate::domain::repository::MailerPort;
use crate::domain::types::Message;
use crate::error::ApiError;
use crate::handlers::require_admin;
use crate::state::AppState;
use crate::usecase::message::{
    CreateMessageInput, CreateMessageUseCase, DeleteMessageUseCase, GetMessageUseCase,
    ListMessagesUseCase, MarkMessageReadUseCase,
};

// ── Response shape ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub isread: bool,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            name: message.name,
            surname: message.surname,
            email: message.email,
            phone: message.phone,
            message: message.message,
            isread: message.isread,
            created_at: message.created_at,
        }
    }
}

// ── POST /messages ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMessageRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Public contact-form submission. The office notification mail is
/// fire-and-forget — a mail failure never fails the submission.
pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateMessageUseCase {
        repo: state.message_repo(),
    };
    let message = usecase
        .execute(CreateMessageInput {
            name: body.name,
            surname: body.surname,
            email: body.email,
            phone: body.phone,
            message: body.message,
        })
        .await?;

    let mailer = state.mailer.clone();
    let notification = message.clone();
    tokio::spawn(async move {
        if let Err(e) = mailer.send_contact_mail(&notification).await {
            tracing::warn!(error = %e, "contact notification mail failed");
        }
    });

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

// ── GET /messages ────────────────────────────────────────────────────────────

pub async fn list_messages(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let usecase = ListMessagesUseCase {
        repo: state.message_repo(),
    };
    let messages = usecase.execute().await?;
    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}

// ── GET /messages/{id} ───────────────────────────────────────────────────────

pub async fn get_message(
    _identity: Identity,
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = GetMessageUseCase {
        repo: state.message_repo(),
    };
    let message = usecase.execute(message_id).await?;
    Ok(Json(message.into()))
}

// ── PATCH /messages/{id} ─────────────────────────────────────────────────────

pub async fn mark_message_read(
    _identity: Identity,
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = MarkMessageReadUseCase {
        repo: state.message_repo(),
    };
    let message = usecase.execute(message_id).await?;
    Ok(Json(message.into()))
}

// ── DELETE /messages/{id} ────────────────────────────────────────────────────

pub async fn delete_message(
    identity: Identity,
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_admin(&identity)?;
    let usecase = DeleteMessageUseCase {
        repo: state.message_repo(),
    };
    usecase.execute(message_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
