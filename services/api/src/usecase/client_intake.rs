use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ClientIntakeRepository;
use crate::domain::types::{ClientIntake, ClientIntakePatch};
use crate::error::ApiError;

// ── CreateClientIntake ───────────────────────────────────────────────────────

pub struct CreateClientIntakeInput {
    pub name: String,
    pub phone: String,
    pub description: String,
}

pub struct CreateClientIntakeUseCase<R: ClientIntakeRepository> {
    pub repo: R,
}

impl<R: ClientIntakeRepository> CreateClientIntakeUseCase<R> {
    pub async fn execute(&self, input: CreateClientIntakeInput) -> Result<ClientIntake, ApiError> {
        let intake = ClientIntake {
            id: Uuid::now_v7(),
            name: input.name,
            phone: input.phone,
            description: input.description,
            created_at: Utc::now(),
        };
        self.repo.create(&intake).await?;
        Ok(intake)
    }
}

// ── ListClientIntakes / GetClientIntake ──────────────────────────────────────

pub struct ListClientIntakesUseCase<R: ClientIntakeRepository> {
    pub repo: R,
}

impl<R: ClientIntakeRepository> ListClientIntakesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<ClientIntake>, ApiError> {
        self.repo.list().await
    }
}

pub struct GetClientIntakeUseCase<R: ClientIntakeRepository> {
    pub repo: R,
}

impl<R: ClientIntakeRepository> GetClientIntakeUseCase<R> {
    pub async fn execute(&self, intake_id: Uuid) -> Result<ClientIntake, ApiError> {
        self.repo
            .find_by_id(intake_id)
            .await?
            .ok_or(ApiError::ClientIntakeNotFound)
    }
}

// ── UpdateClientIntake ───────────────────────────────────────────────────────

pub struct UpdateClientIntakeUseCase<R: ClientIntakeRepository> {
    pub repo: R,
}

impl<R: ClientIntakeRepository> UpdateClientIntakeUseCase<R> {
    pub async fn execute(
        &self,
        intake_id: Uuid,
        patch: ClientIntakePatch,
    ) -> Result<ClientIntake, ApiError> {
        self.repo
            .find_by_id(intake_id)
            .await?
            .ok_or(ApiError::ClientIntakeNotFound)?;
        if !patch.is_empty() {
            self.repo.update(intake_id, &patch).await?;
        }
        self.repo
            .find_by_id(intake_id)
            .await?
            .ok_or(ApiError::ClientIntakeNotFound)
    }
}

// ── DeleteClientIntake ───────────────────────────────────────────────────────

pub struct DeleteClientIntakeUseCase<R: ClientIntakeRepository> {
    pub repo: R,
}

impl<R: ClientIntakeRepository> DeleteClientIntakeUseCase<R> {
    pub async fn execute(&self, intake_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.repo.delete(intake_id).await?;
        if !deleted {
            return Err(ApiError::ClientIntakeNotFound);
        }
        Ok(())
    }
}
