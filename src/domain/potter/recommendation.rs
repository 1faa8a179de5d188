//! A single random pick from the Potter DB collections

use std::future::Future;

use crate::domain::{
    error::FetchError,
    potter::{Book, Category, Character, Movie, Potion, Spell},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Book(Book),
    Movie(Movie),
    Character(Character),
    Potion(Potion),
    Spell(Spell),
}

impl Recommendation {
    pub fn category(&self) -> Category {
        match self {
            Recommendation::Book(_) => Category::Books,
            Recommendation::Movie(_) => Category::Movies,
            Recommendation::Character(_) => Category::Characters,
            Recommendation::Potion(_) => Category::Potions,
            Recommendation::Spell(_) => Category::Spells,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Recommendation::Book(book) => &book.id,
            Recommendation::Movie(movie) => &movie.id,
            Recommendation::Character(character) => &character.id,
            Recommendation::Potion(potion) => &potion.id,
            Recommendation::Spell(spell) => &spell.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Recommendation::Book(book) => &book.attributes.title,
            Recommendation::Movie(movie) => &movie.attributes.title,
            Recommendation::Character(character) => &character.attributes.name,
            Recommendation::Potion(potion) => &potion.attributes.name,
            Recommendation::Spell(spell) => &spell.attributes.name,
        }
    }

    pub fn subtitle(&self) -> String {
        let text = match self {
            Recommendation::Book(book) => book.attributes.author.as_deref(),
            Recommendation::Movie(movie) => movie.attributes.release_date.as_deref(),
            Recommendation::Character(character) => {
                let description = character.attributes.primary_description();
                if !description.is_empty() {
                    return description;
                }
                None
            }
            Recommendation::Potion(potion) => potion.attributes.effect.as_deref(),
            Recommendation::Spell(spell) => spell.attributes.category.as_deref(),
        };
        text.unwrap_or_else(|| self.fallback_subtitle()).to_string()
    }

    fn fallback_subtitle(&self) -> &'static str {
        match self {
            Recommendation::Book(_) => "Unknown author",
            Recommendation::Movie(_) => "Unknown release",
            Recommendation::Character(_) => "Character",
            Recommendation::Potion(_) => "Potion",
            Recommendation::Spell(_) => "Spell",
        }
    }

    /// Short blurb under the subtitle
    pub fn description(&self) -> String {
        match self {
            Recommendation::Book(book) => book
                .attributes
                .summary
                .as_deref()
                .map(str::trim)
                .unwrap_or("No summary available")
                .to_string(),
            Recommendation::Movie(movie) => movie
                .attributes
                .summary
                .clone()
                .unwrap_or_else(|| "No synopsis available".to_string()),
            Recommendation::Character(character) => {
                let attributes = &character.attributes;
                match (&attributes.born, &attributes.species) {
                    (Some(born), _) => format!("Born: {born}"),
                    (None, Some(species)) => species.clone(),
                    (None, None) => "Wizarding World".to_string(),
                }
            }
            Recommendation::Potion(potion) => potion
                .attributes
                .characteristics
                .clone()
                .or_else(|| potion.attributes.effect.clone())
                .unwrap_or_else(|| "A mysterious brew".to_string()),
            Recommendation::Spell(spell) => spell
                .attributes
                .effect
                .clone()
                .unwrap_or_else(|| "A magical incantation".to_string()),
        }
    }
}

/// Try `categories` in order and return the first pick
///
/// A category with nothing to offer is skipped; any fetch failure ends the search.
pub async fn first_recommendation<F, Fut>(
    categories: impl IntoIterator<Item = Category>,
    mut sample: F,
) -> Result<Recommendation, FetchError>
where
    F: FnMut(Category) -> Fut,
    Fut: Future<Output = Result<Option<Recommendation>, FetchError>>,
{
    for category in categories {
        if let Some(recommendation) = sample(category).await? {
            tracing::info!(%category, id = recommendation.id(), "Picked recommendation");
            return Ok(recommendation);
        }
        tracing::debug!(%category, "Nothing to recommend");
    }
    Err(FetchError::EmptyData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::potter::{
        BookAttributes, CharacterAttributes, PotionAttributes, Resource, SpellAttributes,
    };
    use pretty_assertions::assert_eq;

    fn spell() -> Recommendation {
        Recommendation::Spell(Resource::new(
            "s1",
            SpellAttributes {
                name: "Lumos".into(),
                ..Default::default()
            },
        ))
    }

    #[test]
    fn test_book_texts() {
        let book = Recommendation::Book(Resource::new(
            "b1",
            BookAttributes {
                title: "Harry Potter and the Goblet of Fire".into(),
                author: Some("J. K. Rowling".into()),
                summary: Some("  The Triwizard Tournament comes to Hogwarts.\n".into()),
                ..Default::default()
            },
        ));
        assert_eq!(book.category(), Category::Books);
        assert_eq!(book.title(), "Harry Potter and the Goblet of Fire");
        assert_eq!(book.subtitle(), "J. K. Rowling");
        assert_eq!(book.description(), "The Triwizard Tournament comes to Hogwarts.");
    }

    #[test]
    fn test_fallback_texts() {
        assert_eq!(spell().subtitle(), "Spell");
        assert_eq!(spell().description(), "A magical incantation");

        let potion = Recommendation::Potion(Resource::new(
            "p1",
            PotionAttributes {
                name: "Felix Felicis".into(),
                effect: Some("Luck".into()),
                ..Default::default()
            },
        ));
        assert_eq!(potion.subtitle(), "Luck");
        assert_eq!(potion.description(), "Luck");
    }

    #[test]
    fn test_character_texts() {
        let mut attributes = CharacterAttributes {
            name: "Dobby".into(),
            species: Some("House-elf".into()),
            ..Default::default()
        };
        let character = Recommendation::Character(Resource::new("c1", attributes.clone()));
        assert_eq!(character.subtitle(), "House-elf");
        assert_eq!(character.description(), "House-elf");

        attributes.born = Some("28 June, 1983".into());
        attributes.species = None;
        let character = Recommendation::Character(Resource::new("c1", attributes));
        assert_eq!(character.subtitle(), "Character");
        assert_eq!(character.description(), "Born: 28 June, 1983");
    }

    #[tokio::test]
    async fn test_skips_empty_categories() {
        let mut asked = vec![];
        let picked = first_recommendation([Category::Books, Category::Spells], |category| {
            asked.push(category);
            let pick = (category == Category::Spells).then(spell);
            async move { Ok(pick) }
        })
        .await;
        assert_eq!(picked, Ok(spell()));
        assert_eq!(asked, vec![Category::Books, Category::Spells]);
    }

    #[tokio::test]
    async fn test_all_empty_is_empty_data() {
        let picked = first_recommendation([Category::Movies, Category::Potions], |_| async {
            Ok(None)
        })
        .await;
        assert_eq!(picked, Err(FetchError::EmptyData));
    }

    #[tokio::test]
    async fn test_failure_stops_search() {
        let mut asked = 0;
        let picked = first_recommendation([Category::Books, Category::Spells], |_| {
            asked += 1;
            async { Err(FetchError::Transport("offline".into())) }
        })
        .await;
        assert_eq!(picked, Err(FetchError::Transport("offline".into())));
        assert_eq!(asked, 1);
    }
}
