use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, derive_slug};
use crate::domain::taxonomy::value_objects::TermTitle;

/// Category and location slugs follow their title on every save. Titles are
/// unique so no suffixing is needed.
pub fn derive_term_slug(
    generator: &dyn SlugGenerator,
    title: &TermTitle,
    fallback: &str,
) -> DomainResult<Slug> {
    derive_slug(generator, title.as_str(), fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::CATEGORY_SLUG_FALLBACK;

    struct Hyphenate;

    impl SlugGenerator for Hyphenate {
        fn slugify(&self, input: &str) -> String {
            input
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|part| !part.is_empty())
                .map(str::to_ascii_lowercase)
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    #[test]
    fn term_slug_is_deterministic() {
        let title = TermTitle::new("Family Apartment").unwrap();
        let first = derive_term_slug(&Hyphenate, &title, CATEGORY_SLUG_FALLBACK).unwrap();
        let second = derive_term_slug(&Hyphenate, &title, CATEGORY_SLUG_FALLBACK).unwrap();
        assert_eq!(first.as_str(), "family-apartment");
        assert_eq!(first, second);
    }

    #[test]
    fn symbol_titles_use_fallback() {
        let title = TermTitle::new("***").unwrap();
        let slug = derive_term_slug(&Hyphenate, &title, CATEGORY_SLUG_FALLBACK).unwrap();
        assert_eq!(slug.as_str(), "category");
    }
}
