use crate::domain::listing::{ListingView, OwnerContact};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerContactDto {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

impl From<OwnerContact> for OwnerContactDto {
    fn from(owner: OwnerContact) -> Self {
        Self {
            first_name: owner.first_name.into(),
            last_name: owner.last_name.into(),
            phone_number: owner.phone_number.into(),
            email: owner.email.into(),
        }
    }
}

/// Category or location reference embedded in a listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TermRefDto {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub flat_size: i32,
    pub room: i32,
    pub bath: i32,
    pub kitchen: i32,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub descriptions: Vec<String>,
    pub available: bool,
    pub category: TermRefDto,
    pub location: TermRefDto,
    pub owner: OwnerContactDto,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ListingView> for ListingDto {
    fn from(view: ListingView) -> Self {
        let ListingView {
            listing,
            owner,
            category_title,
            location_title,
        } = view;
        Self {
            id: listing.id.into(),
            title: listing.title.into_inner(),
            slug: listing.slug.into_inner(),
            flat_size: listing.layout.flat_size,
            room: listing.layout.room,
            bath: listing.layout.bath,
            kitchen: listing.layout.kitchen,
            images: listing.images.to_strings(),
            features: listing.features.into_inner(),
            descriptions: listing.descriptions.into_inner(),
            available: listing.available,
            category: TermRefDto {
                id: listing.category_id.into(),
                title: category_title,
            },
            location: TermRefDto {
                id: listing.location_id.into(),
                title: location_title,
            },
            owner: owner.into(),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}
