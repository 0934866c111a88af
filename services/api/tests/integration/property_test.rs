use std::collections::BTreeMap;

use uuid::Uuid;

use emlak_api::domain::types::{GeoPoint, Location, PropertyPatch};
use emlak_api::error::ApiError;
use emlak_api::usecase::property::{
    CreatePropertyInput, CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase,
    ListPropertiesUseCase, SetPropertyOwnerUseCase, UpdatePropertyInput, UpdatePropertyUseCase,
    YearListingsUseCase,
};
use emlak_domain::role::Role;

use crate::helpers::{MockPropertyRepo, MockUserRepo, test_property, test_user};

fn create_input() -> CreatePropertyInput {
    let fixture = test_property("Moda'da deniz manzaralı 3+1");
    CreatePropertyInput {
        title: fixture.title,
        description: fixture.description,
        price: fixture.price,
        gross: fixture.gross,
        net: fixture.net,
        number_of_room: fixture.number_of_room,
        building_age: fixture.building_age,
        floor: fixture.floor,
        number_of_floors: fixture.number_of_floors,
        heating: fixture.heating,
        number_of_bathrooms: fixture.number_of_bathrooms,
        kitchen: fixture.kitchen,
        balcony: fixture.balcony,
        lift: fixture.lift,
        parking: fixture.parking,
        furnished: fixture.furnished,
        availability: fixture.availability,
        dues: fixture.dues,
        eligible_for_loan: fixture.eligible_for_loan,
        title_deed_status: fixture.title_deed_status,
        images: fixture.images,
        location: fixture.location,
        property_type: fixture.property_type,
        listing_type: fixture.listing_type,
        sub_type: fixture.sub_type,
        selected_features: fixture.selected_features,
        user_id: None,
    }
}

#[tokio::test]
async fn created_listing_round_trips_through_get() {
    let repo = MockPropertyRepo::empty();
    let created = CreatePropertyUseCase { repo }
        .execute(create_input())
        .await
        .unwrap();

    let usecase = GetPropertyUseCase {
        repo: MockPropertyRepo::with(vec![created.clone()]),
        users: MockUserRepo::empty(),
    };
    let fetched = usecase.execute(created.id).await.unwrap().property;

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.price, created.price);
    assert_eq!(fetched.location, created.location);
    assert_eq!(fetched.images, created.images);
    assert_eq!(fetched.selected_features, created.selected_features);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn partial_update_touches_only_the_supplied_field() {
    let existing = test_property("Fiyatı düşecek ilan");
    let usecase = UpdatePropertyUseCase {
        repo: MockPropertyRepo::with(vec![existing.clone()]),
    };

    let updated = usecase
        .execute(
            existing.id,
            UpdatePropertyInput {
                patch: PropertyPatch {
                    price: Some(3_900_000),
                    ..Default::default()
                },
                kept_images: None,
                new_images: vec![],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 3_900_000);
    assert_eq!(updated.title, existing.title);
    assert_eq!(updated.description, existing.description);
    assert_eq!(updated.images, existing.images);
    assert_eq!(updated.location, existing.location);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at >= existing.updated_at);
}

#[tokio::test]
async fn update_replaces_location_when_supplied() {
    let existing = test_property("Taşınan ilan");
    let usecase = UpdatePropertyUseCase {
        repo: MockPropertyRepo::with(vec![existing.clone()]),
    };

    let new_location = Location {
        city: "İzmir".to_owned(),
        district: "Karşıyaka".to_owned(),
        neighborhood: "Bostanlı".to_owned(),
        geo: GeoPoint::new(27.09, 38.47),
    };
    let updated = usecase
        .execute(
            existing.id,
            UpdatePropertyInput {
                patch: PropertyPatch {
                    location: Some(new_location.clone()),
                    ..Default::default()
                },
                kept_images: None,
                new_images: vec![],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.location, new_location);
    assert_eq!(updated.title, existing.title);
}

#[tokio::test]
async fn update_merges_kept_and_new_images() {
    let mut existing = test_property("Fotoğrafları yenilenen ilan");
    existing.images = vec!["a.jpg".to_owned(), "b.jpg".to_owned()];
    let usecase = UpdatePropertyUseCase {
        repo: MockPropertyRepo::with(vec![existing.clone()]),
    };

    let updated = usecase
        .execute(
            existing.id,
            UpdatePropertyInput {
                patch: PropertyPatch::default(),
                kept_images: Some(vec!["b.jpg".to_owned()]),
                new_images: vec!["c.jpg".to_owned()],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.images, vec!["b.jpg".to_owned(), "c.jpg".to_owned()]);
}

#[tokio::test]
async fn updating_an_unknown_listing_is_not_found() {
    let usecase = UpdatePropertyUseCase {
        repo: MockPropertyRepo::empty(),
    };
    let result = usecase
        .execute(
            Uuid::now_v7(),
            UpdatePropertyInput {
                patch: PropertyPatch::default(),
                kept_images: None,
                new_images: vec![],
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::PropertyNotFound)));
}

#[tokio::test]
async fn deleting_an_unknown_listing_is_not_found() {
    let usecase = DeletePropertyUseCase {
        repo: MockPropertyRepo::empty(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ApiError::PropertyNotFound)));
}

#[tokio::test]
async fn deleted_listing_is_gone_on_subsequent_get() {
    let existing = test_property("Satılan ilan");
    let repo = MockPropertyRepo::with(vec![existing.clone()]);

    DeletePropertyUseCase { repo }
        .execute(existing.id)
        .await
        .unwrap();

    let usecase = GetPropertyUseCase {
        repo: MockPropertyRepo::empty(),
        users: MockUserRepo::empty(),
    };
    let result = usecase.execute(existing.id).await;
    assert!(matches!(result, Err(ApiError::PropertyNotFound)));
}

#[tokio::test]
async fn listing_enrichment_distinguishes_missing_owner_from_no_owner() {
    let owner = test_user("owner@example.com", Role::Member);

    let mut owned = test_property("Sahipli ilan");
    owned.user_id = Some(owner.id);
    let mut orphaned = test_property("Sahibi silinmiş ilan");
    orphaned.user_id = Some(Uuid::now_v7());
    let unowned = test_property("Sahipsiz ilan");

    let usecase = ListPropertiesUseCase {
        repo: MockPropertyRepo::with(vec![owned.clone(), orphaned.clone(), unowned.clone()]),
        users: MockUserRepo::with(vec![owner.clone()]),
    };
    let listings = usecase.execute().await.unwrap();

    let find = |id: Uuid| listings.iter().find(|l| l.property.id == id).unwrap();
    let resolved = find(owned.id).owner.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(resolved.id, owner.id);
    assert!(find(orphaned.id).owner.as_ref().unwrap().is_none());
    assert!(find(unowned.id).owner.is_none());
}

#[tokio::test]
async fn reassigning_the_owner_updates_the_listing() {
    let existing = test_property("Devredilen ilan");
    let new_owner = Uuid::now_v7();
    let usecase = SetPropertyOwnerUseCase {
        repo: MockPropertyRepo::with(vec![existing.clone()]),
    };
    let updated = usecase.execute(existing.id, new_owner).await.unwrap();
    assert_eq!(updated.user_id, Some(new_owner));
}

#[tokio::test]
async fn year_listings_always_cover_twelve_months() {
    let usecase = YearListingsUseCase {
        repo: MockPropertyRepo::with_monthly(vec![
            ("2026-02".to_owned(), 3),
            ("2026-07".to_owned(), 1),
        ]),
    };
    let series = usecase.execute(2026).await.unwrap();

    assert_eq!(series.len(), 12);
    assert_eq!(series[0].month, "2026-01");
    assert_eq!(series[0].total, 0);
    assert_eq!(series[1].total, 3);
    assert_eq!(series[6].total, 1);
    assert_eq!(series[11].month, "2026-12");
}

#[tokio::test]
async fn empty_selected_features_are_preserved_as_empty() {
    let mut input = create_input();
    input.selected_features = BTreeMap::new();
    let created = CreatePropertyUseCase {
        repo: MockPropertyRepo::empty(),
    }
    .execute(input)
    .await
    .unwrap();
    assert!(created.selected_features.is_empty());
}
