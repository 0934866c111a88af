use chrono::Utc;
use uuid::Uuid;

use emlak_domain::role::Role;

use crate::domain::repository::{ImageStorePort, UserRepository};
use crate::domain::types::{ImageUpload, User, UserPatch};
use crate::error::ApiError;

/// Initial password for accounts created by an admin, kept from the legacy
/// system. Holders are expected to change it via the password endpoint.
pub const DEFAULT_PASSWORD: &str = "123456";

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phonenumber: i64,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    /// Create a member account with the default password. Role is fixed to
    /// member at creation; elevation is a manual operation.
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailAlreadyExists);
        }
        let password_hash = bcrypt::hash(DEFAULT_PASSWORD, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::Internal(e.into()))?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            surname: input.surname,
            email: input.email,
            image: String::new(),
            phonenumber: input.phonenumber,
            password_hash,
            role: Role::Member,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser / ListUsers ──────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, patch: UserPatch) -> Result<User, ApiError> {
        if patch.is_empty() {
            return Err(ApiError::InvalidInput("no fields to update".to_owned()));
        }
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        self.repo.update_profile(user_id, &patch).await?;
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── UpdatePassword ───────────────────────────────────────────────────────────

pub struct UpdatePasswordInput {
    pub old_password: String,
    pub new_password: String,
}

pub struct UpdatePasswordUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdatePasswordUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, input: UpdatePasswordInput) -> Result<(), ApiError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let old_matches = bcrypt::verify(&input.old_password, &user.password_hash)
            .map_err(|e| ApiError::Internal(e.into()))?;
        if !old_matches {
            return Err(ApiError::WrongPassword);
        }

        let password_hash = bcrypt::hash(&input.new_password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::Internal(e.into()))?;
        self.repo.update_password(user_id, &password_hash).await
    }
}

// ── UploadUserImage ──────────────────────────────────────────────────────────

pub struct UploadUserImageUseCase<R: UserRepository, S: ImageStorePort> {
    pub repo: R,
    pub store: S,
}

impl<R: UserRepository, S: ImageStorePort> UploadUserImageUseCase<R, S> {
    /// Upload an avatar (no watermark) and store its public URL.
    pub async fn execute(&self, user_id: Uuid, file: ImageUpload) -> Result<User, ApiError> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let image_url = self.store.upload_image(&file, false).await?;
        self.repo.update_image(user_id, &image_url).await?;
        user.image = image_url;
        Ok(user)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.repo.delete(user_id).await?;
        if !deleted {
            return Err(ApiError::UserNotFound);
        }
        Ok(())
    }
}
