use chrono::NaiveDate;

use emlak_domain::series::{MonthTotal, zero_filled_year};

use crate::domain::repository::TrackViewRepository;
use crate::domain::types::TrackView;
use crate::error::ApiError;

// ── RecordView ───────────────────────────────────────────────────────────────

pub struct RecordViewUseCase<R: TrackViewRepository> {
    pub repo: R,
}

impl<R: TrackViewRepository> RecordViewUseCase<R> {
    /// Record one page view for `date`. The counter bump is a single atomic
    /// upsert — concurrent calls never produce a second row for the day.
    pub async fn execute(&self, date: NaiveDate) -> Result<TrackView, ApiError> {
        self.repo.increment(date).await
    }
}

// ── YearViews ────────────────────────────────────────────────────────────────

pub struct YearViewsUseCase<R: TrackViewRepository> {
    pub repo: R,
}

impl<R: TrackViewRepository> YearViewsUseCase<R> {
    /// Views per month of `year`: always 12 ordered buckets.
    pub async fn execute(&self, year: i32) -> Result<Vec<MonthTotal>, ApiError> {
        let rows = self.repo.monthly_views(year).await?;
        Ok(zero_filled_year(year, &rows))
    }
}

// ── MonthViews ───────────────────────────────────────────────────────────────

pub struct MonthViewsUseCase<R: TrackViewRepository> {
    pub repo: R,
}

impl<R: TrackViewRepository> MonthViewsUseCase<R> {
    pub async fn execute(&self, year: i32, month: u32) -> Result<i64, ApiError> {
        self.repo.month_total(year, month).await
    }
}
