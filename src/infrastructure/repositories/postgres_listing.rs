// src/infrastructure/repositories/postgres_listing.rs
use super::{error::map_listing_write, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{
    Listing, ListingContactRepository, ListingDescriptions, ListingFeatures, ListingFilter,
    ListingId, ListingImages, ListingLayout, ListingReadRepository, ListingTitle, ListingUpdate,
    ListingView, ListingWriteRepository, NewListing, OwnerContact,
};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{CategoryId, LocationId};
use crate::domain::user::{Email, PersonName, PhoneNumber, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LISTING_COLUMNS: &str = "id, owner_id, category_id, location_id, title, slug, flat_size, \
     room, bath, kitchen, images, features, descriptions, available, created_at, updated_at";

const VIEW_SELECT: &str = "SELECT l.id, l.owner_id, l.category_id, l.location_id, l.title, \
     l.slug, l.flat_size, l.room, l.bath, l.kitchen, l.images, l.features, l.descriptions, \
     l.available, l.created_at, l.updated_at, \
     u.first_name AS owner_first_name, u.last_name AS owner_last_name, \
     u.phone_number AS owner_phone_number, u.email AS owner_email, \
     c.title AS category_title, loc.title AS location_title \
     FROM listings l \
     JOIN users u ON u.id = l.owner_id \
     JOIN categories c ON c.id = l.category_id \
     JOIN locations loc ON loc.id = l.location_id";

const VIEW_COUNT: &str = "SELECT COUNT(1) FROM listings l \
     JOIN categories c ON c.id = l.category_id \
     JOIN locations loc ON loc.id = l.location_id";

const NEWEST_FIRST: &str = " ORDER BY l.created_at DESC, l.id DESC";

#[derive(Debug, FromRow)]
struct ListingRow {
    id: i64,
    owner_id: i64,
    category_id: i64,
    location_id: i64,
    title: String,
    slug: String,
    flat_size: i32,
    room: i32,
    bath: i32,
    kitchen: i32,
    images: Vec<String>,
    features: Vec<String>,
    descriptions: Vec<String>,
    available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        Ok(Listing {
            id: ListingId::new(row.id)?,
            owner_id: UserId::new(row.owner_id)?,
            category_id: CategoryId::new(row.category_id)?,
            location_id: LocationId::new(row.location_id)?,
            title: ListingTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            layout: ListingLayout::new(row.flat_size, row.room, row.bath, row.kitchen)?,
            images: ListingImages::new(row.images)?,
            features: ListingFeatures::new(row.features)?,
            descriptions: ListingDescriptions::new(row.descriptions)?,
            available: row.available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ListingViewRow {
    #[sqlx(flatten)]
    listing: ListingRow,
    owner_first_name: String,
    owner_last_name: String,
    owner_phone_number: String,
    owner_email: String,
    category_title: String,
    location_title: String,
}

impl TryFrom<ListingViewRow> for ListingView {
    type Error = DomainError;

    fn try_from(row: ListingViewRow) -> Result<Self, Self::Error> {
        Ok(ListingView {
            listing: Listing::try_from(row.listing)?,
            owner: OwnerContact {
                first_name: PersonName::new(row.owner_first_name)?,
                last_name: PersonName::new(row.owner_last_name)?,
                phone_number: PhoneNumber::new(row.owner_phone_number)?,
                email: Email::new(row.owner_email)?,
            },
            category_title: row.category_title,
            location_title: row.location_title,
        })
    }
}

fn into_views(rows: Vec<ListingViewRow>) -> DomainResult<Vec<ListingView>> {
    rows.into_iter().map(ListingView::try_from).collect()
}

/// `%term%` with LIKE metacharacters escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ListingFilter) {
    if filter.is_unfiltered() {
        return;
    }
    let mut has_where = false;
    let mut clause = |builder: &mut QueryBuilder<'a, Postgres>| {
        builder.push(if has_where { " AND " } else { " WHERE " });
        has_where = true;
    };

    if let Some(category_id) = filter.category_id {
        clause(builder);
        builder.push("l.category_id = ");
        builder.push_bind(i64::from(category_id));
    }
    if let Some(category) = filter.category_title.as_deref() {
        clause(builder);
        builder.push("c.title ILIKE ");
        builder.push_bind(contains_pattern(category));
    }
    if let Some(location) = filter.location_title.as_deref() {
        clause(builder);
        builder.push("loc.title ILIKE ");
        builder.push_bind(contains_pattern(location));
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[derive(Clone)]
pub struct PostgresListingWriteRepository {
    pool: PgPool,
}

impl PostgresListingWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingWriteRepository for PostgresListingWriteRepository {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        let NewListing {
            owner_id,
            category_id,
            location_id,
            title,
            slug,
            layout,
            images,
            features,
            descriptions,
            available,
            created_at,
            updated_at,
        } = listing;
        let slug = slug.into_inner();

        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "INSERT INTO listings (owner_id, category_id, location_id, title, slug, flat_size,
                 room, bath, kitchen, images, features, descriptions, available, created_at,
                 updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {LISTING_COLUMNS}"
        ))
        .bind(i64::from(owner_id))
        .bind(i64::from(category_id))
        .bind(i64::from(location_id))
        .bind(title.into_inner())
        .bind(&slug)
        .bind(layout.flat_size)
        .bind(layout.room)
        .bind(layout.bath)
        .bind(layout.kitchen)
        .bind(images.to_strings())
        .bind(features.into_inner())
        .bind(descriptions.into_inner())
        .bind(available)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_listing_write(err, Some(&slug)))?;

        Listing::try_from(row)
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        let ListingUpdate {
            id,
            category_id,
            location_id,
            title,
            slug,
            layout,
            images,
            features,
            descriptions,
            available,
            updated_at,
        } = update;
        let slug = slug.map(Slug::into_inner);

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE listings SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(location_id) = location_id {
            builder.push(", location_id = ");
            builder.push_bind(i64::from(location_id));
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug.clone() {
            builder.push(", slug = ");
            builder.push_bind(slug);
        }
        if let Some(layout) = layout {
            builder.push(", flat_size = ");
            builder.push_bind(layout.flat_size);
            builder.push(", room = ");
            builder.push_bind(layout.room);
            builder.push(", bath = ");
            builder.push_bind(layout.bath);
            builder.push(", kitchen = ");
            builder.push_bind(layout.kitchen);
        }
        if let Some(images) = images {
            builder.push(", images = ");
            builder.push_bind(images.to_strings());
        }
        if let Some(features) = features {
            builder.push(", features = ");
            builder.push_bind(features.into_inner());
        }
        if let Some(descriptions) = descriptions {
            builder.push(", descriptions = ");
            builder.push_bind(descriptions.into_inner());
        }
        if let Some(available) = available {
            builder.push(", available = ");
            builder.push_bind(available);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(LISTING_COLUMNS);

        let row = builder
            .build_query_as::<ListingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_listing_write(err, slug.as_deref()))?
            .ok_or_else(|| DomainError::NotFound("listing not found".into()))?;

        Listing::try_from(row)
    }

    async fn delete(&self, id: ListingId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("listing not found".into()));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresListingReadRepository {
    pool: PgPool,
}

impl PostgresListingReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingReadRepository for PostgresListingReadRepository {
    async fn find_by_id(&self, id: ListingId) -> DomainResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Listing::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ListingView>> {
        let row = sqlx::query_as::<_, ListingViewRow>(&format!("{VIEW_SELECT} WHERE l.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ListingView::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &Slug, excluding: Option<ListingId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM listings WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(excluding.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn latest(&self, limit: u64) -> DomainResult<Vec<ListingView>> {
        let rows = sqlx::query_as::<_, ListingViewRow>(&format!(
            "{VIEW_SELECT}{NEWEST_FIRST} LIMIT $1"
        ))
        .bind(to_i64(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_views(rows)
    }

    async fn count(&self, filter: &ListingFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(VIEW_COUNT);
        apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        filter: &ListingFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ListingView>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(VIEW_SELECT);
        apply_filter(&mut builder, filter);
        builder.push(NEWEST_FIRST);
        builder.push(" LIMIT ");
        builder.push_bind(to_i64(limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));

        let rows = builder
            .build_query_as::<ListingViewRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_views(rows)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<ListingView>> {
        let rows = sqlx::query_as::<_, ListingViewRow>(&format!(
            "{VIEW_SELECT} WHERE l.owner_id = $1{NEWEST_FIRST}"
        ))
        .bind(i64::from(owner_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_views(rows)
    }

    async fn list_contacted_by(&self, renter_id: UserId) -> DomainResult<Vec<ListingView>> {
        let rows = sqlx::query_as::<_, ListingViewRow>(&format!(
            "{VIEW_SELECT} JOIN listing_contacts lc ON lc.listing_id = l.id \
             WHERE lc.renter_id = $1{NEWEST_FIRST}"
        ))
        .bind(i64::from(renter_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_views(rows)
    }
}

#[derive(Clone)]
pub struct PostgresListingContactRepository {
    pool: PgPool,
}

impl PostgresListingContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingContactRepository for PostgresListingContactRepository {
    async fn exists(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM listing_contacts WHERE listing_id = $1 AND renter_id = $2
             )",
        )
        .bind(i64::from(listing_id))
        .bind(i64::from(renter_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn add(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO listing_contacts (listing_id, renter_id) VALUES ($1, $2)
             ON CONFLICT (listing_id, renter_id) DO NOTHING",
        )
        .bind(i64::from(listing_id))
        .bind(i64::from(renter_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() == 1)
    }

    async fn remove(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM listing_contacts WHERE listing_id = $1 AND renter_id = $2")
                .bind(i64::from(listing_id))
                .bind(i64::from(renter_id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(result.rows_affected() == 1)
    }
}
