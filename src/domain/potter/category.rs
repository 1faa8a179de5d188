use strum::{Display, EnumIter, EnumString};

/// The browsable Potter DB collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Books,
    Characters,
    Movies,
    Potions,
    Spells,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Books => "Books",
            Category::Characters => "Characters",
            Category::Movies => "Movies",
            Category::Potions => "Potions",
            Category::Spells => "Spells",
        }
    }

    /// API path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Category::Books => "books",
            Category::Characters => "characters",
            Category::Movies => "movies",
            Category::Potions => "potions",
            Category::Spells => "spells",
        }
    }

    pub fn default_page_size(&self) -> u32 {
        match self {
            Category::Books => 10,
            Category::Characters => 20,
            Category::Movies => 5,
            Category::Potions => 20,
            Category::Spells => 20,
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Category::Books => "All seven novels and more",
            Category::Characters => "Every witch and wizard",
            Category::Movies => "Films, trailers, and facts",
            Category::Potions => "Ingredients, effects, and lore",
            Category::Spells => "Incantations and usage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_page_sizes() {
        let sizes: Vec<u32> = Category::iter().map(|c| c.default_page_size()).collect();
        assert_eq!(sizes, vec![10, 20, 5, 20, 20]);
    }

    #[test]
    fn test_round_trip_name() {
        for category in Category::iter() {
            assert_eq!(Category::from_str(&category.to_string()), Ok(category));
            assert_eq!(category.to_string(), category.path());
        }
    }
}
