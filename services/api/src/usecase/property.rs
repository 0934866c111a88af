use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use emlak_domain::series::{MonthTotal, zero_filled_year};

use crate::domain::repository::{PropertyRepository, UserRepository};
use crate::domain::types::{
    KindCounts, Location, Property, PropertyFilter, PropertyPatch, SelectedFeatures, User,
};
use crate::error::ApiError;

/// A listing paired with its owner for response shaping.
///
/// `owner` is `None` when the listing has no owner reference, and
/// `Some(None)` when the reference points at a deleted account — the wire
/// contract distinguishes an absent `user` field from `user: null`.
pub struct PropertyWithOwner {
    pub property: Property,
    pub owner: Option<Option<User>>,
}

/// Resolve owners for a batch of listings with a single account lookup.
pub async fn attach_owners<U: UserRepository>(
    users: &U,
    properties: Vec<Property>,
) -> Result<Vec<PropertyWithOwner>, ApiError> {
    let mut ids: Vec<Uuid> = properties.iter().filter_map(|p| p.user_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let owners: HashMap<Uuid, User> = if ids.is_empty() {
        HashMap::new()
    } else {
        users
            .list_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect()
    };

    Ok(properties
        .into_iter()
        .map(|property| {
            let owner = property.user_id.map(|id| owners.get(&id).cloned());
            PropertyWithOwner { property, owner }
        })
        .collect())
}

// ── CreateProperty ───────────────────────────────────────────────────────────

pub struct CreatePropertyInput {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub gross: i32,
    pub net: i32,
    pub number_of_room: String,
    pub building_age: i32,
    pub floor: i32,
    pub number_of_floors: i32,
    pub heating: String,
    pub number_of_bathrooms: i32,
    pub kitchen: String,
    pub balcony: i32,
    pub lift: String,
    pub parking: String,
    pub furnished: String,
    pub availability: String,
    pub dues: i64,
    pub eligible_for_loan: String,
    pub title_deed_status: String,
    pub images: Vec<String>,
    pub location: Location,
    pub property_type: String,
    pub listing_type: String,
    pub sub_type: Option<String>,
    pub selected_features: SelectedFeatures,
    pub user_id: Option<Uuid>,
}

pub struct CreatePropertyUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> CreatePropertyUseCase<P> {
    pub async fn execute(&self, input: CreatePropertyInput) -> Result<Property, ApiError> {
        let now = Utc::now();
        let property = Property {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            price: input.price,
            gross: input.gross,
            net: input.net,
            number_of_room: input.number_of_room,
            building_age: input.building_age,
            floor: input.floor,
            number_of_floors: input.number_of_floors,
            heating: input.heating,
            number_of_bathrooms: input.number_of_bathrooms,
            kitchen: input.kitchen,
            balcony: input.balcony,
            lift: input.lift,
            parking: input.parking,
            furnished: input.furnished,
            availability: input.availability,
            dues: input.dues,
            eligible_for_loan: input.eligible_for_loan,
            title_deed_status: input.title_deed_status,
            images: input.images,
            location: input.location,
            property_type: input.property_type,
            listing_type: input.listing_type,
            sub_type: input.sub_type,
            selected_features: input.selected_features,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&property).await?;
        Ok(property)
    }
}

// ── GetProperty (owner-enriched) ─────────────────────────────────────────────

pub struct GetPropertyUseCase<P: PropertyRepository, U: UserRepository> {
    pub repo: P,
    pub users: U,
}

impl<P: PropertyRepository, U: UserRepository> GetPropertyUseCase<P, U> {
    pub async fn execute(&self, property_id: Uuid) -> Result<PropertyWithOwner, ApiError> {
        let property = self
            .repo
            .find_by_id(property_id)
            .await?
            .ok_or(ApiError::PropertyNotFound)?;

        let owner = match property.user_id {
            Some(user_id) => Some(self.users.find_by_id(user_id).await?),
            None => None,
        };
        Ok(PropertyWithOwner { property, owner })
    }
}

// ── ListProperties (owner-enriched) / QueryProperties (plain) ────────────────

pub struct ListPropertiesUseCase<P: PropertyRepository, U: UserRepository> {
    pub repo: P,
    pub users: U,
}

impl<P: PropertyRepository, U: UserRepository> ListPropertiesUseCase<P, U> {
    pub async fn execute(&self) -> Result<Vec<PropertyWithOwner>, ApiError> {
        let properties = self.repo.list(&PropertyFilter::default()).await?;
        attach_owners(&self.users, properties).await
    }
}

pub struct QueryPropertiesUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> QueryPropertiesUseCase<P> {
    pub async fn execute(&self, filter: PropertyFilter) -> Result<Vec<Property>, ApiError> {
        self.repo.list(&filter).await
    }
}

// ── NearbyProperties ─────────────────────────────────────────────────────────

pub struct NearbyPropertiesUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> NearbyPropertiesUseCase<P> {
    pub async fn execute(
        &self,
        lon: f64,
        lat: f64,
        distance: f64,
    ) -> Result<Vec<Property>, ApiError> {
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(ApiError::InvalidInput("invalid coordinates".to_owned()));
        }
        if distance <= 0.0 || !distance.is_finite() {
            return Err(ApiError::InvalidInput("invalid distance".to_owned()));
        }
        self.repo.list_near(lon, lat, distance).await
    }
}

// ── RecentProperties ─────────────────────────────────────────────────────────

/// The landing page shows the six newest listings.
pub const RECENT_LISTINGS: u64 = 6;

pub struct RecentPropertiesUseCase<P: PropertyRepository, U: UserRepository> {
    pub repo: P,
    pub users: U,
}

impl<P: PropertyRepository, U: UserRepository> RecentPropertiesUseCase<P, U> {
    pub async fn execute(&self) -> Result<Vec<PropertyWithOwner>, ApiError> {
        let properties = self.repo.list_recent(RECENT_LISTINGS).await?;
        attach_owners(&self.users, properties).await
    }
}

// ── CountProperties ──────────────────────────────────────────────────────────

pub struct CountPropertiesUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> CountPropertiesUseCase<P> {
    pub async fn execute(&self) -> Result<u64, ApiError> {
        self.repo.count().await
    }
}

// ── YearListings ─────────────────────────────────────────────────────────────

pub struct YearListingsUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> YearListingsUseCase<P> {
    /// Listings created per month of `year`: always 12 ordered buckets.
    pub async fn execute(&self, year: i32) -> Result<Vec<MonthTotal>, ApiError> {
        let rows = self.repo.monthly_created(year).await?;
        Ok(zero_filled_year(year, &rows))
    }
}

// ── PieChart ─────────────────────────────────────────────────────────────────

/// One slice of the listing-type share chart. Names and colors are the
/// legacy dashboard constants.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Turn raw kind counts into percentage slices. An empty store yields
/// all-zero slices rather than dividing by zero.
pub fn pie_slices(counts: &KindCounts) -> Vec<PieSlice> {
    let share = |count: i64| {
        if counts.total == 0 {
            0.0
        } else {
            (count as f64 / counts.total as f64) * 100.0
        }
    };
    vec![
        PieSlice {
            name: "Daire",
            value: share(counts.daire),
            color: "#0088FE",
        },
        PieSlice {
            name: "Villa",
            value: share(counts.villa),
            color: "#00C49F",
        },
        PieSlice {
            name: "Dükkan",
            value: share(counts.dukkan),
            color: "#FFBB28",
        },
        PieSlice {
            name: "Arsa",
            value: share(counts.arsa),
            color: "#FF8042",
        },
    ]
}

pub struct PieChartUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> PieChartUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<PieSlice>, ApiError> {
        let counts = self.repo.count_by_kind().await?;
        Ok(pie_slices(&counts))
    }
}

// ── UpdateProperty ───────────────────────────────────────────────────────────

pub struct UpdatePropertyInput {
    pub patch: PropertyPatch,
    /// URLs of existing images the client chose to keep; `None` means the
    /// image list was not part of the update.
    pub kept_images: Option<Vec<String>>,
    /// Freshly uploaded image URLs to append.
    pub new_images: Vec<String>,
}

/// Compute the final image list for a partial update.
///
/// - Neither kept nor new supplied: the list is untouched.
/// - Kept supplied: it replaces the current list, new uploads appended.
/// - Only new uploads: appended to the current list.
pub fn merged_images(
    current: &[String],
    kept: Option<Vec<String>>,
    new: Vec<String>,
) -> Option<Vec<String>> {
    match (kept, new.is_empty()) {
        (None, true) => None,
        (None, false) => {
            let mut all = current.to_vec();
            all.extend(new);
            Some(all)
        }
        (Some(mut kept), _) => {
            kept.extend(new);
            Some(kept)
        }
    }
}

pub struct UpdatePropertyUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> UpdatePropertyUseCase<P> {
    pub async fn execute(
        &self,
        property_id: Uuid,
        input: UpdatePropertyInput,
    ) -> Result<Property, ApiError> {
        let existing = self
            .repo
            .find_by_id(property_id)
            .await?
            .ok_or(ApiError::PropertyNotFound)?;

        let mut patch = input.patch;
        patch.images = merged_images(&existing.images, input.kept_images, input.new_images);

        self.repo.update(property_id, &patch).await?;
        self.repo
            .find_by_id(property_id)
            .await?
            .ok_or(ApiError::PropertyNotFound)
    }
}

// ── SetPropertyOwner ─────────────────────────────────────────────────────────

pub struct SetPropertyOwnerUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> SetPropertyOwnerUseCase<P> {
    pub async fn execute(&self, property_id: Uuid, user_id: Uuid) -> Result<Property, ApiError> {
        self.repo
            .find_by_id(property_id)
            .await?
            .ok_or(ApiError::PropertyNotFound)?;
        self.repo.set_owner(property_id, user_id).await?;
        self.repo
            .find_by_id(property_id)
            .await?
            .ok_or(ApiError::PropertyNotFound)
    }
}

// ── DeleteProperty ───────────────────────────────────────────────────────────

pub struct DeletePropertyUseCase<P: PropertyRepository> {
    pub repo: P,
}

impl<P: PropertyRepository> DeletePropertyUseCase<P> {
    pub async fn execute(&self, property_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.repo.delete(property_id).await?;
        if !deleted {
            return Err(ApiError::PropertyNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_slices_are_all_zero_for_empty_store() {
        let slices = pie_slices(&KindCounts::default());
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.value == 0.0));
    }

    #[test]
    fn pie_slices_are_percentages_of_total() {
        let counts = KindCounts {
            total: 8,
            daire: 4,
            villa: 2,
            dukkan: 1,
            arsa: 1,
        };
        let slices = pie_slices(&counts);
        assert_eq!(slices[0].name, "Daire");
        assert_eq!(slices[0].value, 50.0);
        assert_eq!(slices[1].value, 25.0);
        assert_eq!(slices[2].value, 12.5);
        assert_eq!(slices[3].value, 12.5);
    }

    #[test]
    fn merged_images_untouched_when_nothing_supplied() {
        let current = vec!["a.jpg".to_owned()];
        assert_eq!(merged_images(&current, None, vec![]), None);
    }

    #[test]
    fn merged_images_appends_new_uploads_to_current() {
        let current = vec!["a.jpg".to_owned()];
        let merged = merged_images(&current, None, vec!["b.jpg".to_owned()]).unwrap();
        assert_eq!(merged, vec!["a.jpg".to_owned(), "b.jpg".to_owned()]);
    }

    #[test]
    fn merged_images_kept_list_replaces_current() {
        let current = vec!["a.jpg".to_owned(), "b.jpg".to_owned()];
        let merged = merged_images(
            &current,
            Some(vec!["b.jpg".to_owned()]),
            vec!["c.jpg".to_owned()],
        )
        .unwrap();
        assert_eq!(merged, vec!["b.jpg".to_owned(), "c.jpg".to_owned()]);
    }

    #[test]
    fn merged_images_empty_kept_list_clears() {
        let current = vec!["a.jpg".to_owned()];
        let merged = merged_images(&current, Some(vec![]), vec![]).unwrap();
        assert!(merged.is_empty());
    }
}
