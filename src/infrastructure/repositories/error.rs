use crate::domain::errors::DomainError;

const CNT_LISTING_SLUG: &str = "listings_slug_key";
const CNT_LISTING_OWNER: &str = "listings_owner_id_fkey";
const CNT_LISTING_CATEGORY: &str = "listings_category_id_fkey";
const CNT_LISTING_LOCATION: &str = "listings_location_id_fkey";
const CNT_CONTACT_LISTING: &str = "listing_contacts_listing_id_fkey";
const CNT_CONTACT_RENTER: &str = "listing_contacts_renter_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CATEGORY_TITLE: &str = "categories_title_key";
const CNT_LOCATION_TITLE: &str = "locations_title_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LISTING_SLUG => DomainError::SlugTaken("slug already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_CATEGORY_TITLE => {
                        DomainError::Conflict("category title already exists".into())
                    }
                    CNT_LOCATION_TITLE => {
                        DomainError::Conflict("location title already exists".into())
                    }
                    CNT_LISTING_OWNER => DomainError::NotFound("owner not found".into()),
                    CNT_LISTING_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_LISTING_LOCATION => DomainError::NotFound("location not found".into()),
                    CNT_CONTACT_LISTING => DomainError::NotFound("listing not found".into()),
                    CNT_CONTACT_RENTER => DomainError::NotFound("user not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Like [`map_sqlx`], but a slug violation reports the slug that was written.
pub fn map_listing_write(err: sqlx::Error, slug: Option<&str>) -> DomainError {
    match (map_sqlx(err), slug) {
        (DomainError::SlugTaken(_), Some(slug)) => DomainError::SlugTaken(slug.to_string()),
        (other, _) => other,
    }
}
