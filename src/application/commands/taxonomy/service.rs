use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::taxonomy::{CategoryRepository, LocationRepository};

pub struct CreateTermCommand {
    pub title: String,
}

pub struct RenameTermCommand {
    pub id: i64,
    pub title: String,
}

/// Admin-only maintenance of categories and locations.
pub struct TaxonomyCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) location_repo: Arc<dyn LocationRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TaxonomyCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        location_repo: Arc<dyn LocationRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            location_repo,
            slugger,
            clock,
        }
    }
}
