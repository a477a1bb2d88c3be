// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            contact::ContactFormService, listings::ListingCommandService,
            taxonomy::TaxonomyCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            image_store::ImageStore,
            mailer::Mailer,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            listings::ListingQueryService, taxonomy::TaxonomyQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        listing::{
            ListingContactRepository, ListingReadRepository, ListingWriteRepository,
            services::ListingSlugService,
        },
        taxonomy::{CategoryRepository, LocationRepository},
        user::UserRepository,
    },
};

pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub listing_write: Arc<dyn ListingWriteRepository>,
    pub listing_read: Arc<dyn ListingReadRepository>,
    pub listing_contacts: Arc<dyn ListingContactRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub locations: Arc<dyn LocationRepository>,
}

pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub mailer: Arc<dyn Mailer>,
    pub image_store: Arc<dyn ImageStore>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    /// Absolute origin used in activation links.
    pub public_base_url: String,
    pub contact_inbox: String,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub listing_commands: Arc<ListingCommandService>,
    pub listing_queries: Arc<ListingQueryService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    pub contact_form: Arc<ContactFormService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports, settings: ApplicationSettings) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.mailer),
            Arc::clone(&ports.clock),
            settings.public_base_url,
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.clock),
        ));

        let slug_service = Arc::new(ListingSlugService::new(
            Arc::clone(&repos.listing_read),
            Arc::clone(&ports.slugger),
        ));

        let listing_commands = Arc::new(ListingCommandService::new(
            Arc::clone(&repos.listing_write),
            Arc::clone(&repos.listing_read),
            Arc::clone(&repos.listing_contacts),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.locations),
            slug_service,
            Arc::clone(&ports.mailer),
            Arc::clone(&ports.image_store),
            Arc::clone(&ports.clock),
        ));
        let listing_queries = Arc::new(ListingQueryService::new(Arc::clone(&repos.listing_read)));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.locations),
            Arc::clone(&ports.slugger),
            Arc::clone(&ports.clock),
        ));
        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.locations),
        ));

        let contact_form = Arc::new(ContactFormService::new(
            Arc::clone(&ports.mailer),
            settings.contact_inbox,
        ));

        Self {
            user_commands,
            user_queries,
            listing_commands,
            listing_queries,
            taxonomy_commands,
            taxonomy_queries,
            contact_form,
            token_manager: ports.token_manager,
        }
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }

    /// Authenticate a bearer token and require the given capability.
    pub async fn authenticate_and_authorize(
        &self,
        token: &str,
        resource: &str,
        action: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.authenticate(token).await?;
        if user.has_capability(resource, action) {
            Ok(user)
        } else {
            Err(ApplicationError::forbidden(format!(
                "missing capability {resource}:{action}"
            )))
        }
    }
}
