use serde::{Deserialize, Serialize};

use super::Resource;

pub type Book = Resource<BookAttributes>;
pub type Chapter = Resource<ChapterAttributes>;
pub type Movie = Resource<MovieAttributes>;
pub type Potion = Resource<PotionAttributes>;
pub type Spell = Resource<SpellAttributes>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BookAttributes {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub wiki: Option<String>,
}

/// One chapter of a book, ordered by `order` when the API provides it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChapterAttributes {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MovieAttributes {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub running_time: Option<String>,
    #[serde(default)]
    pub directors: Option<Vec<String>>,
    #[serde(default)]
    pub box_office: Option<String>,
    #[serde(default)]
    pub wiki: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PotionAttributes {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub characteristics: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub side_effects: Option<String>,
    #[serde(default)]
    pub wiki: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpellAttributes {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub incantation: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub wiki: Option<String>,
}
