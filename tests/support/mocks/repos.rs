// tests/support/mocks/repos.rs
use async_trait::async_trait;
use easyrent::domain::{
    errors::{DomainError, DomainResult},
    listing::{
        Listing, ListingContactRepository, ListingFilter, ListingId, ListingReadRepository,
        ListingUpdate, ListingView, ListingWriteRepository, NewListing, OwnerContact,
    },
    slug::Slug,
    taxonomy::{
        Category, CategoryId, CategoryRepository, Location, LocationId, LocationRepository,
        NewCategory, NewLocation, TermTitle,
    },
    user::{Email, NewUser, User, UserId, UserRepository, UserUpdate},
};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    users: Vec<User>,
    categories: Vec<Category>,
    locations: Vec<Location>,
    listings: Vec<Listing>,
    contacts: Vec<(ListingId, UserId)>,
    next_user: i64,
    next_category: i64,
    next_location: i64,
    next_listing: i64,
    /// Pending `slug_exists` calls that answer "free" regardless of the data,
    /// standing in for a concurrent writer that has not committed yet.
    blind_slug_checks: u32,
    /// Pending listing writes rejected as `SlugTaken` before touching data.
    forced_slug_conflicts: u32,
}

/// One in-memory database behind every repository trait. Mirrors the
/// Postgres constraints the services rely on: unique listing slugs, unique
/// emails and taxonomy titles, contact rows cascading with their listing.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n` slug lookups report every slug as free.
    pub fn blind_slug_checks(&self, n: u32) {
        self.state.lock().unwrap().blind_slug_checks = n;
    }

    /// The next `n` listing inserts or updates fail with `SlugTaken`.
    pub fn force_slug_conflicts(&self, n: u32) {
        self.state.lock().unwrap().forced_slug_conflicts = n;
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.state.lock().unwrap().listings.clone()
    }

    pub fn listing_slugs(&self) -> Vec<String> {
        self.listings()
            .into_iter()
            .map(|listing| listing.slug.into_inner())
            .collect()
    }

    pub fn contact_count(&self) -> usize {
        self.state.lock().unwrap().contacts.len()
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|user| user.id.0 == id)
            .cloned()
    }

    fn view(state: &State, listing: &Listing) -> DomainResult<ListingView> {
        let owner = state
            .users
            .iter()
            .find(|user| user.id == listing.owner_id)
            .ok_or_else(|| DomainError::Persistence("dangling owner".into()))?;
        let category = state
            .categories
            .iter()
            .find(|category| category.id == listing.category_id)
            .ok_or_else(|| DomainError::Persistence("dangling category".into()))?;
        let location = state
            .locations
            .iter()
            .find(|location| location.id == listing.location_id)
            .ok_or_else(|| DomainError::Persistence("dangling location".into()))?;

        Ok(ListingView {
            listing: listing.clone(),
            owner: OwnerContact {
                first_name: owner.first_name.clone(),
                last_name: owner.last_name.clone(),
                phone_number: owner.phone_number.clone(),
                email: owner.email.clone(),
            },
            category_title: category.title.as_str().to_string(),
            location_title: location.title.as_str().to_string(),
        })
    }

    fn newest_first(state: &State, keep: impl Fn(&Listing) -> bool) -> DomainResult<Vec<ListingView>> {
        let mut rows: Vec<&Listing> = state.listings.iter().filter(|l| keep(l)).collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        rows.into_iter().map(|listing| Self::view(state, listing)).collect()
    }

    fn matches(state: &State, listing: &Listing, filter: &ListingFilter) -> bool {
        if let Some(category_id) = filter.category_id {
            if listing.category_id != category_id {
                return false;
            }
        }
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };
        if let Some(needle) = &filter.category_title {
            let title = state
                .categories
                .iter()
                .find(|c| c.id == listing.category_id)
                .map(|c| c.title.as_str())
                .unwrap_or_default();
            if !contains(title, needle) {
                return false;
            }
        }
        if let Some(needle) = &filter.location_title {
            let title = state
                .locations
                .iter()
                .find(|l| l.id == listing.location_id)
                .map(|l| l.title.as_str())
                .unwrap_or_default();
            if !contains(title, needle) {
                return false;
            }
        }
        true
    }

    fn take_forced_conflict(state: &mut State, slug: &str) -> DomainResult<()> {
        if state.forced_slug_conflicts > 0 {
            state.forced_slug_conflicts -= 1;
            return Err(DomainError::SlugTaken(slug.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = User {
            id: UserId::new(next(&mut state.next_user))?,
            role: new_user.role,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone_number: new_user.phone_number,
            house_holding_number: new_user.house_holding_number,
            address: new_user.address,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        Ok(user.clone())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.categories.iter().any(|c| c.title == category.title) {
            return Err(DomainError::Conflict("category title already exists".into()));
        }
        let created = Category {
            id: CategoryId::new(next(&mut state.next_category))?,
            title: category.title,
            slug: category.slug,
            created_at: category.created_at,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn rename(&self, id: CategoryId, title: TermTitle, slug: Slug) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.categories.iter().any(|c| c.title == title && c.id != id) {
            return Err(DomainError::Conflict("category title already exists".into()));
        }
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.title = title;
        category.slug = slug;
        Ok(category.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl LocationRepository for InMemoryStore {
    async fn insert(&self, location: NewLocation) -> DomainResult<Location> {
        let mut state = self.state.lock().unwrap();
        if state.locations.iter().any(|l| l.title == location.title) {
            return Err(DomainError::Conflict("location title already exists".into()));
        }
        let created = Location {
            id: LocationId::new(next(&mut state.next_location))?,
            title: location.title,
            slug: location.slug,
            created_at: location.created_at,
        };
        state.locations.push(created.clone());
        Ok(created)
    }

    async fn rename(&self, id: LocationId, title: TermTitle, slug: Slug) -> DomainResult<Location> {
        let mut state = self.state.lock().unwrap();
        if state.locations.iter().any(|l| l.title == title && l.id != id) {
            return Err(DomainError::Conflict("location title already exists".into()));
        }
        let location = state
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| DomainError::NotFound("location not found".into()))?;
        location.title = title;
        location.slug = slug;
        Ok(location.clone())
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        let state = self.state.lock().unwrap();
        Ok(state.locations.iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Location>> {
        let state = self.state.lock().unwrap();
        let mut locations = state.locations.clone();
        locations.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(locations)
    }
}

#[async_trait]
impl ListingWriteRepository for InMemoryStore {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        let mut state = self.state.lock().unwrap();
        Self::take_forced_conflict(&mut state, listing.slug.as_str())?;
        if state.listings.iter().any(|l| l.slug == listing.slug) {
            return Err(DomainError::SlugTaken(listing.slug.into_inner()));
        }
        let created = Listing {
            id: ListingId::new(next(&mut state.next_listing))?,
            owner_id: listing.owner_id,
            category_id: listing.category_id,
            location_id: listing.location_id,
            title: listing.title,
            slug: listing.slug,
            layout: listing.layout,
            images: listing.images,
            features: listing.features,
            descriptions: listing.descriptions,
            available: listing.available,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        };
        state.listings.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            Self::take_forced_conflict(&mut state, slug.as_str())?;
            if state
                .listings
                .iter()
                .any(|l| &l.slug == slug && l.id != update.id)
            {
                return Err(DomainError::SlugTaken(slug.as_str().to_string()));
            }
        }
        let listing = state
            .listings
            .iter_mut()
            .find(|l| l.id == update.id)
            .ok_or_else(|| DomainError::NotFound("listing not found".into()))?;

        if let Some(category_id) = update.category_id {
            listing.category_id = category_id;
        }
        if let Some(location_id) = update.location_id {
            listing.location_id = location_id;
        }
        if let Some(title) = update.title {
            listing.title = title;
        }
        if let Some(slug) = update.slug {
            listing.slug = slug;
        }
        if let Some(layout) = update.layout {
            listing.layout = layout;
        }
        if let Some(images) = update.images {
            listing.images = images;
        }
        if let Some(features) = update.features {
            listing.features = features;
        }
        if let Some(descriptions) = update.descriptions {
            listing.descriptions = descriptions;
        }
        if let Some(available) = update.available {
            listing.available = available;
        }
        listing.updated_at = update.updated_at;
        Ok(listing.clone())
    }

    async fn delete(&self, id: ListingId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.listings.len();
        state.listings.retain(|l| l.id != id);
        if state.listings.len() == before {
            return Err(DomainError::NotFound("listing not found".into()));
        }
        state.contacts.retain(|(listing_id, _)| *listing_id != id);
        Ok(())
    }
}

#[async_trait]
impl ListingReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ListingId) -> DomainResult<Option<Listing>> {
        let state = self.state.lock().unwrap();
        Ok(state.listings.iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ListingView>> {
        let state = self.state.lock().unwrap();
        state
            .listings
            .iter()
            .find(|l| &l.slug == slug)
            .map(|listing| Self::view(&state, listing))
            .transpose()
    }

    async fn slug_exists(&self, slug: &Slug, excluding: Option<ListingId>) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.blind_slug_checks > 0 {
            state.blind_slug_checks -= 1;
            return Ok(false);
        }
        Ok(state
            .listings
            .iter()
            .any(|l| &l.slug == slug && Some(l.id) != excluding))
    }

    async fn latest(&self, limit: u64) -> DomainResult<Vec<ListingView>> {
        let state = self.state.lock().unwrap();
        let mut views = Self::newest_first(&state, |_| true)?;
        views.truncate(limit as usize);
        Ok(views)
    }

    async fn count(&self, filter: &ListingFilter) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .listings
            .iter()
            .filter(|l| Self::matches(&state, l, filter))
            .count() as u64)
    }

    async fn list(
        &self,
        filter: &ListingFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ListingView>> {
        let state = self.state.lock().unwrap();
        let views = Self::newest_first(&state, |l| Self::matches(&state, l, filter))?;
        Ok(views
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<ListingView>> {
        let state = self.state.lock().unwrap();
        Self::newest_first(&state, |l| l.owner_id == owner_id)
    }

    async fn list_contacted_by(&self, renter_id: UserId) -> DomainResult<Vec<ListingView>> {
        let state = self.state.lock().unwrap();
        let contacted: Vec<ListingId> = state
            .contacts
            .iter()
            .filter(|(_, renter)| *renter == renter_id)
            .map(|(listing, _)| *listing)
            .collect();
        Self::newest_first(&state, |l| contacted.contains(&l.id))
    }
}

#[async_trait]
impl ListingContactRepository for InMemoryStore {
    async fn exists(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.contacts.contains(&(listing_id, renter_id)))
    }

    async fn add(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.contacts.contains(&(listing_id, renter_id)) {
            return Ok(false);
        }
        state.contacts.push((listing_id, renter_id));
        Ok(true)
    }

    async fn remove(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.contacts.len();
        state
            .contacts
            .retain(|pair| *pair != (listing_id, renter_id));
        Ok(state.contacts.len() != before)
    }
}
