use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::FeatureOptionRepository;
use crate::domain::types::FeatureOption;
use crate::error::ApiError;

/// Group taxonomy entries by category for the public listing form,
/// preserving insertion order of values within a category.
pub fn group_by_category(options: Vec<FeatureOption>) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for option in options {
        grouped.entry(option.category).or_default().push(option.value);
    }
    grouped
}

// ── CreateFeatureOption ──────────────────────────────────────────────────────

pub struct CreateFeatureOptionInput {
    pub category: String,
    pub value: String,
}

pub struct CreateFeatureOptionUseCase<R: FeatureOptionRepository> {
    pub repo: R,
}

impl<R: FeatureOptionRepository> CreateFeatureOptionUseCase<R> {
    /// Create a taxonomy entry; an existing (category, value) pair is a
    /// conflict, checked before the insert.
    pub async fn execute(&self, input: CreateFeatureOptionInput) -> Result<FeatureOption, ApiError> {
        if self
            .repo
            .find_by_pair(&input.category, &input.value)
            .await?
            .is_some()
        {
            return Err(ApiError::FeatureOptionAlreadyExists);
        }
        let now = Utc::now();
        let option = FeatureOption {
            id: Uuid::now_v7(),
            category: input.category,
            value: input.value,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&option).await?;
        Ok(option)
    }
}

// ── ListFeatureOptions / GetFeatureOption ────────────────────────────────────

pub struct ListFeatureOptionsUseCase<R: FeatureOptionRepository> {
    pub repo: R,
}

impl<R: FeatureOptionRepository> ListFeatureOptionsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<FeatureOption>, ApiError> {
        self.repo.list().await
    }
}

pub struct GetFeatureOptionUseCase<R: FeatureOptionRepository> {
    pub repo: R,
}

impl<R: FeatureOptionRepository> GetFeatureOptionUseCase<R> {
    pub async fn execute(&self, option_id: Uuid) -> Result<FeatureOption, ApiError> {
        self.repo
            .find_by_id(option_id)
            .await?
            .ok_or(ApiError::FeatureOptionNotFound)
    }
}

// ── UpdateFeatureOption ──────────────────────────────────────────────────────

pub struct UpdateFeatureOptionInput {
    pub category: Option<String>,
    pub value: Option<String>,
}

pub struct UpdateFeatureOptionUseCase<R: FeatureOptionRepository> {
    pub repo: R,
}

impl<R: FeatureOptionRepository> UpdateFeatureOptionUseCase<R> {
    /// Partial update. When either field changes, the resulting pair must
    /// not collide with a different entry (the record itself is excluded).
    pub async fn execute(
        &self,
        option_id: Uuid,
        input: UpdateFeatureOptionInput,
    ) -> Result<FeatureOption, ApiError> {
        let existing = self
            .repo
            .find_by_id(option_id)
            .await?
            .ok_or(ApiError::FeatureOptionNotFound)?;

        if input.category.is_some() || input.value.is_some() {
            let category = input.category.as_deref().unwrap_or(&existing.category);
            let value = input.value.as_deref().unwrap_or(&existing.value);
            if let Some(duplicate) = self.repo.find_by_pair(category, value).await? {
                if duplicate.id != option_id {
                    return Err(ApiError::FeatureOptionAlreadyExists);
                }
            }
        }

        self.repo
            .update(option_id, input.category.as_deref(), input.value.as_deref())
            .await?;
        self.repo
            .find_by_id(option_id)
            .await?
            .ok_or(ApiError::FeatureOptionNotFound)
    }
}

// ── DeleteFeatureOption ──────────────────────────────────────────────────────

pub struct DeleteFeatureOptionUseCase<R: FeatureOptionRepository> {
    pub repo: R,
}

impl<R: FeatureOptionRepository> DeleteFeatureOptionUseCase<R> {
    pub async fn execute(&self, option_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.repo.delete(option_id).await?;
        if !deleted {
            return Err(ApiError::FeatureOptionNotFound);
        }
        Ok(())
    }
}
