use axum::{Json, extract::State};
use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::track_view::{MonthViewsUseCase, RecordViewUseCase, YearViewsUseCase};

// ── POST /track-view ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TrackViewResponse {
    pub id: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub views: i64,
}

/// Public view tracking: one call, one increment of today's counter. No
/// caller deduplication.
pub async fn record_view(
    State(state): State<AppState>,
) -> Result<Json<TrackViewResponse>, ApiError> {
    let usecase = RecordViewUseCase {
        repo: state.track_view_repo(),
    };
    let track = usecase.execute(Utc::now().date_naive()).await?;
    Ok(Json(TrackViewResponse {
        id: track.id.to_string(),
        date: track.date.format("%Y-%m-%d").to_string(),
        views: track.views,
    }))
}

// ── GET /track-view ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MonthViewsResponse {
    pub month: String,
    pub views: i64,
}

pub async fn year_views(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthViewsResponse>>, ApiError> {
    let usecase = YearViewsUseCase {
        repo: state.track_view_repo(),
    };
    let series = usecase.execute(Utc::now().year()).await?;
    Ok(Json(
        series
            .into_iter()
            .map(|b| MonthViewsResponse {
                month: b.month,
                views: b.total,
            })
            .collect(),
    ))
}

// ── GET /track-view/month ────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotalResponse {
    pub total_views: i64,
}

pub async fn month_views(
    State(state): State<AppState>,
) -> Result<Json<MonthTotalResponse>, ApiError> {
    let now = Utc::now();
    let usecase = MonthViewsUseCase {
        repo: state.track_view_repo(),
    };
    let total_views = usecase.execute(now.year(), now.month()).await?;
    Ok(Json(MonthTotalResponse { total_views }))
}
