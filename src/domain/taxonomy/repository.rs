use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    entity::{Category, Location, NewCategory, NewLocation},
    value_objects::{CategoryId, LocationId, TermTitle},
};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn rename(&self, id: CategoryId, title: TermTitle, slug: Slug) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn insert(&self, location: NewLocation) -> DomainResult<Location>;
    async fn rename(&self, id: LocationId, title: TermTitle, slug: Slug) -> DomainResult<Location>;
    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>>;
    async fn list(&self) -> DomainResult<Vec<Location>>;
}
