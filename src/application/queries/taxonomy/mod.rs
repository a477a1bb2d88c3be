use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, LocationDto},
        error::ApplicationResult,
    },
    domain::taxonomy::{CategoryRepository, LocationRepository},
};

pub struct TaxonomyQueryService {
    category_repo: Arc<dyn CategoryRepository>,
    location_repo: Arc<dyn LocationRepository>,
}

impl TaxonomyQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        location_repo: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            category_repo,
            location_repo,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_locations(&self) -> ApplicationResult<Vec<LocationDto>> {
        let locations = self.location_repo.list().await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }
}
