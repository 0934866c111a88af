use uuid::Uuid;

use emlak_api::error::ApiError;
use emlak_api::usecase::message::{
    CreateMessageInput, CreateMessageUseCase, DeleteMessageUseCase, MarkMessageReadUseCase,
};

use crate::helpers::{MockMessageRepo, test_message};

#[tokio::test]
async fn new_messages_start_unread() {
    let usecase = CreateMessageUseCase {
        repo: MockMessageRepo::empty(),
    };
    let message = usecase
        .execute(CreateMessageInput {
            name: "Mehmet".to_owned(),
            surname: "Demir".to_owned(),
            email: "mehmet@example.com".to_owned(),
            phone: "05321112233".to_owned(),
            message: "İlan hala satılık mı?".to_owned(),
        })
        .await
        .unwrap();
    assert!(!message.isread);
}

#[tokio::test]
async fn marking_read_flips_the_flag_and_persists() {
    let existing = test_message();
    let usecase = MarkMessageReadUseCase {
        repo: MockMessageRepo::with(vec![existing.clone()]),
    };

    let updated = usecase.execute(existing.id).await.unwrap();
    assert!(updated.isread);
    let stored = usecase.repo.messages.lock().unwrap()[0].clone();
    assert!(stored.isread);
}

#[tokio::test]
async fn marking_an_unknown_message_is_not_found() {
    let usecase = MarkMessageReadUseCase {
        repo: MockMessageRepo::empty(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ApiError::MessageNotFound)));
}

#[tokio::test]
async fn deleting_an_unknown_message_is_not_found() {
    let usecase = DeleteMessageUseCase {
        repo: MockMessageRepo::empty(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ApiError::MessageNotFound)));
}
