use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emlak_auth_types::identity::Identity;

use crate::domain::types::FeatureOption;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::feature_option::{
    CreateFeatureOptionInput, CreateFeatureOptionUseCase, DeleteFeatureOptionUseCase,
    GetFeatureOptionUseCase, ListFeatureOptionsUseCase, UpdateFeatureOptionInput,
    UpdateFeatureOptionUseCase, group_by_category,
};

// ── Response shape ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOptionResponse {
    pub id: String,
    pub category: String,
    pub value: String,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<FeatureOption> for FeatureOptionResponse {
    fn from(option: FeatureOption) -> Self {
        Self {
            id: option.id.to_string(),
            category: option.category,
            value: option.value,
            created_at: option.created_at,
            updated_at: option.updated_at,
        }
    }
}

// ── POST /feature-options ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateFeatureOptionRequest {
    pub category: String,
    pub value: String,
}

pub async fn create_feature_option(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateFeatureOptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateFeatureOptionUseCase {
        repo: state.feature_option_repo(),
    };
    let option = usecase
        .execute(CreateFeatureOptionInput {
            category: body.category,
            value: body.value,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(FeatureOptionResponse::from(option))))
}

// ── GET /feature-options ─────────────────────────────────────────────────────

/// Public taxonomy listing grouped by category for the search form.
pub async fn grouped_feature_options(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, ApiError> {
    let usecase = ListFeatureOptionsUseCase {
        repo: state.feature_option_repo(),
    };
    let options = usecase.execute().await?;
    Ok(Json(group_by_category(options)))
}

// ── GET /feature-options/findall ─────────────────────────────────────────────

pub async fn list_feature_options(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<FeatureOptionResponse>>, ApiError> {
    let usecase = ListFeatureOptionsUseCase {
        repo: state.feature_option_repo(),
    };
    let options = usecase.execute().await?;
    Ok(Json(
        options
            .into_iter()
            .map(FeatureOptionResponse::from)
            .collect(),
    ))
}

// ── GET /feature-options/{id} ────────────────────────────────────────────────

pub async fn get_feature_option(
    _identity: Identity,
    State(state): State<AppState>,
    Path(option_id): Path<Uuid>,
) -> Result<Json<FeatureOptionResponse>, ApiError> {
    let usecase = GetFeatureOptionUseCase {
        repo: state.feature_option_repo(),
    };
    let option = usecase.execute(option_id).await?;
    Ok(Json(option.into()))
}

// ── PUT /feature-options/{id} ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateFeatureOptionRequest {
    pub category: Option<String>,
    pub value: Option<String>,
}

pub async fn update_feature_option(
    _identity: Identity,
    State(state): State<AppState>,
    Path(option_id): Path<Uuid>,
    Json(body): Json<UpdateFeatureOptionRequest>,
) -> Result<Json<FeatureOptionResponse>, ApiError> {
    let usecase = UpdateFeatureOptionUseCase {
        repo: state.feature_option_repo(),
    };
    let option = usecase
        .execute(
            option_id,
            UpdateFeatureOptionInput {
                category: body.category,
                value: body.value,
            },
        )
        .await?;
    Ok(Json(option.into()))
}

// ── DELETE /feature-options/{id} ─────────────────────────────────────────────

pub async fn delete_feature_option(
    _identity: Identity,
    State(state): State<AppState>,
    Path(option_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteFeatureOptionUseCase {
        repo: state.feature_option_repo(),
    };
    usecase.execute(option_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
