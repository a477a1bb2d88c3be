// src/infrastructure/repositories/postgres_taxonomy.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryRepository, Location, LocationId, LocationRepository,
    NewCategory, NewLocation, TermTitle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Categories and locations share a table shape.
#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Copy)]
enum TermTable {
    Categories,
    Locations,
}

impl TermTable {
    fn name(self) -> &'static str {
        match self {
            TermTable::Categories => "categories",
            TermTable::Locations => "locations",
        }
    }

    fn missing(self) -> DomainError {
        match self {
            TermTable::Categories => DomainError::NotFound("category not found".into()),
            TermTable::Locations => DomainError::NotFound("location not found".into()),
        }
    }
}

async fn insert_term(
    pool: &PgPool,
    table: TermTable,
    title: TermTitle,
    slug: Slug,
    created_at: DateTime<Utc>,
) -> DomainResult<TermRow> {
    sqlx::query_as::<_, TermRow>(&format!(
        "INSERT INTO {} (title, slug, created_at) VALUES ($1, $2, $3)
         RETURNING id, title, slug, created_at",
        table.name()
    ))
    .bind(String::from(title))
    .bind(slug.into_inner())
    .bind(created_at)
    .fetch_one(pool)
    .await
    .map_err(map_sqlx)
}

async fn rename_term(
    pool: &PgPool,
    table: TermTable,
    id: i64,
    title: TermTitle,
    slug: Slug,
) -> DomainResult<TermRow> {
    sqlx::query_as::<_, TermRow>(&format!(
        "UPDATE {} SET title = $1, slug = $2 WHERE id = $3
         RETURNING id, title, slug, created_at",
        table.name()
    ))
    .bind(String::from(title))
    .bind(slug.into_inner())
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?
    .ok_or_else(|| table.missing())
}

async fn find_term(pool: &PgPool, table: TermTable, id: i64) -> DomainResult<Option<TermRow>> {
    sqlx::query_as::<_, TermRow>(&format!(
        "SELECT id, title, slug, created_at FROM {} WHERE id = $1",
        table.name()
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)
}

async fn list_terms(pool: &PgPool, table: TermTable) -> DomainResult<Vec<TermRow>> {
    sqlx::query_as::<_, TermRow>(&format!(
        "SELECT id, title, slug, created_at FROM {} ORDER BY title ASC, id ASC",
        table.name()
    ))
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)
}

impl TryFrom<TermRow> for Category {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            title: TermTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<TermRow> for Location {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Location {
            id: LocationId::new(row.id)?,
            title: TermTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = insert_term(
            &self.pool,
            TermTable::Categories,
            category.title,
            category.slug,
            category.created_at,
        )
        .await?;
        Category::try_from(row)
    }

    async fn rename(&self, id: CategoryId, title: TermTitle, slug: Slug) -> DomainResult<Category> {
        let row = rename_term(&self.pool, TermTable::Categories, id.into(), title, slug).await?;
        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        find_term(&self.pool, TermTable::Categories, id.into())
            .await?
            .map(Category::try_from)
            .transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        list_terms(&self.pool, TermTable::Categories)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }
}

#[derive(Clone)]
pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl PostgresLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    async fn insert(&self, location: NewLocation) -> DomainResult<Location> {
        let row = insert_term(
            &self.pool,
            TermTable::Locations,
            location.title,
            location.slug,
            location.created_at,
        )
        .await?;
        Location::try_from(row)
    }

    async fn rename(&self, id: LocationId, title: TermTitle, slug: Slug) -> DomainResult<Location> {
        let row = rename_term(&self.pool, TermTable::Locations, id.into(), title, slug).await?;
        Location::try_from(row)
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        find_term(&self.pool, TermTable::Locations, id.into())
            .await?
            .map(Location::try_from)
            .transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Location>> {
        list_terms(&self.pool, TermTable::Locations)
            .await?
            .into_iter()
            .map(Location::try_from)
            .collect()
    }
}
