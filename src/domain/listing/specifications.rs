use std::collections::HashSet;

use crate::domain::listing::entity::Listing;
use crate::domain::user::value_objects::{Capability, UserId};

pub struct CanUpdateListingSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    listing: &'a Listing,
    user_id: UserId,
}

impl<'a> CanUpdateListingSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        listing: &'a Listing,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            listing,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "listings", "update:own")
            && self.listing.is_owned_by(self.user_id)
    }
}

pub struct CanDeleteListingSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    listing: &'a Listing,
    user_id: UserId,
}

impl<'a> CanDeleteListingSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        listing: &'a Listing,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            listing,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "listings", "delete:own")
            && self.listing.is_owned_by(self.user_id)
    }
}

fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities
        .iter()
        .any(|cap| cap.matches(resource, action))
}
