//! Potter DB resources
//!
//! Every entity comes wrapped in a JSON:API resource object (`id` + `attributes`),
//! so the domain types are aliases over [`Resource`].

mod category;
pub mod character;
pub mod recommendation;
mod resources;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Identifiable;

pub use category::Category;
pub use character::{Character, CharacterAttributes, LetterGroup, SortOrder};
pub use recommendation::Recommendation;
pub use resources::{
    Book, BookAttributes, Chapter, ChapterAttributes, Movie, MovieAttributes, Potion,
    PotionAttributes, Spell, SpellAttributes,
};

/// A JSON:API resource object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource<A> {
    pub id: String,
    pub attributes: A,
}

impl<A> Resource<A> {
    pub fn new(id: impl Into<String>, attributes: A) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }
}

impl<A> Identifiable for Resource<A> {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}
