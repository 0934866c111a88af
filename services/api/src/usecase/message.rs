use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::MessageRepository;
use crate::domain::types::Message;
use crate::error::ApiError;

// ── CreateMessage ────────────────────────────────────────────────────────────

pub struct CreateMessageInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

pub struct CreateMessageUseCase<R: MessageRepository> {
    pub repo: R,
}

impl<R: MessageRepository> CreateMessageUseCase<R> {
    pub async fn execute(&self, input: CreateMessageInput) -> Result<Message, ApiError> {
        let message = Message {
            id: Uuid::now_v7(),
            name: input.name,
            surname: input.surname,
            email: input.email,
            phone: input.phone,
            message: input.message,
            isread: false,
            created_at: Utc::now(),
        };
        self.repo.create(&message).await?;
        Ok(message)
    }
}

// ── ListMessages / GetMessage ────────────────────────────────────────────────

pub struct ListMessagesUseCase<R: MessageRepository> {
    pub repo: R,
}

impl<R: MessageRepository> ListMessagesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Message>, ApiError> {
        self.repo.list().await
    }
}

pub struct GetMessageUseCase<R: MessageRepository> {
    pub repo: R,
}

impl<R: MessageRepository> GetMessageUseCase<R> {
    pub async fn execute(&self, message_id: Uuid) -> Result<Message, ApiError> {
        self.repo
            .find_by_id(message_id)
            .await?
            .ok_or(ApiError::MessageNotFound)
    }
}

// ── MarkMessageRead ──────────────────────────────────────────────────────────

pub struct MarkMessageReadUseCase<R: MessageRepository> {
    pub repo: R,
}

impl<R: MessageRepository> MarkMessageReadUseCase<R> {
    pub async fn execute(&self, message_id: Uuid) -> Result<Message, ApiError> {
        let mut message = self
            .repo
            .find_by_id(message_id)
            .await?
            .ok_or(ApiError::MessageNotFound)?;
        self.repo.mark_read(message_id).await?;
        message.isread = true;
        Ok(message)
    }
}

// ── DeleteMessage ────────────────────────────────────────────────────────────

pub struct DeleteMessageUseCase<R: MessageRepository> {
    pub repo: R,
}

impl<R: MessageRepository> DeleteMessageUseCase<R> {
    pub async fn execute(&self, message_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.repo.delete(message_id).await?;
        if !deleted {
            return Err(ApiError::MessageNotFound);
        }
        Ok(())
    }
}
