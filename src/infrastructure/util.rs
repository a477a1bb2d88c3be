use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_and_collapses_separators() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("Cozy Downtown Studio"), "cozy-downtown-studio");
        assert_eq!(generator.slugify("  Café -- Déjà vu!  "), "cafe-deja-vu");
        assert_eq!(generator.slugify("!!!"), "");
    }
}
