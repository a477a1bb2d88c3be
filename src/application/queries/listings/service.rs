use std::sync::Arc;

use crate::{
    application::{
        dto::{ListingDto, Page, PageRequest, PageWindow},
        error::ApplicationResult,
    },
    domain::listing::{ListingFilter, ListingReadRepository},
};

pub struct ListingQueryService {
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
}

impl ListingQueryService {
    pub fn new(read_repo: Arc<dyn ListingReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) async fn paginate(
        &self,
        filter: ListingFilter,
        request: PageRequest,
    ) -> ApplicationResult<Page<ListingDto>> {
        let total = self.read_repo.count(&filter).await?;
        let window = PageWindow::resolve(request, total)?;
        let records = self
            .read_repo
            .list(&filter, window.offset(), window.limit())
            .await?;
        Ok(window.into_page(records).map(ListingDto::from))
    }
}
