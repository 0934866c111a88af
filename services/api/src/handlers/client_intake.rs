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
use crate::domain::types::{ClientIntake, ClientIntakePatch};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::client_intake::{
    CreateClientIntakeInput, CreateClientIntakeUseCase, DeleteClientIntakeUseCase,
    GetClientIntakeUseCase, ListClientIntakesUseCase, UpdateClientIntakeUseCase,
};

// ── Response shape ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIntakeResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub description: String,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ClientIntake> for ClientIntakeResponse {
    fn from(intake: ClientIntake) -> Self {
        Self {
            id: intake.id.to_string(),
            name: intake.name,
            phone: intake.phone,
            description: intake.description,
            created_at: intake.created_at,
        }
    }
}

// ── POST /client-intake ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateClientIntakeRequest {
    pub name: String,
    pub phone: String,
    pub description: String,
}

pub async fn create_client_intake(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateClientIntakeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateClientIntakeUseCase {
        repo: state.client_intake_repo(),
    };
    let intake = usecase
        .execute(CreateClientIntakeInput {
            name: body.name,
            phone: body.phone,
            description: body.description,
        })
        .await?;

    let mailer = state.mailer.clone();
    let notification = intake.clone();
    tokio::spawn(async move {
        if let Err(e) = mailer.send_client_intake_mail(&notification).await {
            tracing::warn!(error = %e, "client intake notification mail failed");
        }
    });

    Ok((StatusCode::CREATED, Json(ClientIntakeResponse::from(intake))))
}

// ── GET /client-intake ───────────────────────────────────────────────────────

pub async fn list_client_intakes(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientIntakeResponse>>, ApiError> {
    let usecase = ListClientIntakesUseCase {
        repo: state.client_intake_repo(),
    };
    let intakes = usecase.execute().await?;
    Ok(Json(
        intakes.into_iter().map(ClientIntakeResponse::from).collect(),
    ))
}

// ── GET /client-intake/{id} ──────────────────────────────────────────────────

pub async fn get_client_intake(
    _identity: Identity,
    State(state): State<AppState>,
    Path(intake_id): Path<Uuid>,
) -> Result<Json<ClientIntakeResponse>, ApiError> {
    let usecase = GetClientIntakeUseCase {
        repo: state.client_intake_repo(),
    };
    let intake = usecase.execute(intake_id).await?;
    Ok(Json(intake.into()))
}

// ── PATCH /client-intake/{id} ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateClientIntakeRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
}

pub async fn update_client_intake(
    _identity: Identity,
    State(state): State<AppState>,
    Path(intake_id): Path<Uuid>,
    Json(body): Json<UpdateClientIntakeRequest>,
) -> Result<Json<ClientIntakeResponse>, ApiError> {
    let usecase = UpdateClientIntakeUseCase {
        repo: state.client_intake_repo(),
    };
    let intake = usecase
        .execute(
            intake_id,
            ClientIntakePatch {
                name: body.name,
                phone: body.phone,
                description: body.description,
            },
        )
        .await?;
    Ok(Json(intake.into()))
}

// ── DELETE /client-intake/{id} ───────────────────────────────────────────────

pub async fn delete_client_intake(
    _identity: Identity,
    State(state): State<AppState>,
    Path(intake_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteClientIntakeUseCase {
        repo: state.client_intake_repo(),
    };
    usecase.execute(intake_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
