use emlak_api::error::ApiError;
use emlak_api::usecase::feature_option::{
    CreateFeatureOptionInput, CreateFeatureOptionUseCase, GetFeatureOptionUseCase,
    UpdateFeatureOptionInput, UpdateFeatureOptionUseCase,
};
use uuid::Uuid;

use crate::helpers::{MockFeatureOptionRepo, test_feature_option};

fn create_input(category: &str, value: &str) -> CreateFeatureOptionInput {
    CreateFeatureOptionInput {
        category: category.to_owned(),
        value: value.to_owned(),
    }
}

#[tokio::test]
async fn creating_the_same_pair_twice_conflicts() {
    let usecase = CreateFeatureOptionUseCase {
        repo: MockFeatureOptionRepo::empty(),
    };

    usecase
        .execute(create_input("Isıtma", "Doğalgaz"))
        .await
        .unwrap();
    let second = usecase.execute(create_input("Isıtma", "Doğalgaz")).await;
    assert!(matches!(
        second,
        Err(ApiError::FeatureOptionAlreadyExists)
    ));
}

#[tokio::test]
async fn the_same_value_under_another_category_is_allowed() {
    let usecase = CreateFeatureOptionUseCase {
        repo: MockFeatureOptionRepo::with(vec![test_feature_option("Isıtma", "Doğalgaz")]),
    };
    let result = usecase.execute(create_input("Altyapı", "Doğalgaz")).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn updating_into_an_existing_pair_conflicts() {
    let existing = test_feature_option("Isıtma", "Doğalgaz");
    let other = test_feature_option("Isıtma", "Soba");
    let usecase = UpdateFeatureOptionUseCase {
        repo: MockFeatureOptionRepo::with(vec![existing, other.clone()]),
    };

    let result = usecase
        .execute(
            other.id,
            UpdateFeatureOptionInput {
                category: None,
                value: Some("Doğalgaz".to_owned()),
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(ApiError::FeatureOptionAlreadyExists)
    ));
}

#[tokio::test]
async fn updating_a_record_to_its_own_pair_is_not_a_conflict() {
    let existing = test_feature_option("Isıtma", "Doğalgaz");
    let usecase = UpdateFeatureOptionUseCase {
        repo: MockFeatureOptionRepo::with(vec![existing.clone()]),
    };

    let updated = usecase
        .execute(
            existing.id,
            UpdateFeatureOptionInput {
                category: None,
                value: Some("Doğalgaz".to_owned()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.value, "Doğalgaz");
}

#[tokio::test]
async fn updating_an_unknown_record_is_not_found() {
    let usecase = UpdateFeatureOptionUseCase {
        repo: MockFeatureOptionRepo::empty(),
    };
    let result = usecase
        .execute(
            Uuid::now_v7(),
            UpdateFeatureOptionInput {
                category: Some("Isıtma".to_owned()),
                value: None,
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::FeatureOptionNotFound)));
}

#[tokio::test]
async fn getting_an_unknown_record_is_not_found() {
    let usecase = GetFeatureOptionUseCase {
        repo: MockFeatureOptionRepo::empty(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ApiError::FeatureOptionNotFound)));
}
