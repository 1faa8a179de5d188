//! Characters, plus the ordering and letter filters of the character list

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::Resource;

pub type Character = Resource<CharacterAttributes>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CharacterAttributes {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub born: Option<String>,
    #[serde(default)]
    pub died: Option<String>,
    #[serde(default)]
    pub patronus: Option<String>,
    #[serde(default)]
    pub alias_names: Option<Vec<String>>,
    #[serde(default)]
    pub wands: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub wiki: Option<String>,
}

impl CharacterAttributes {
    /// "House • Species", skipping whatever is unknown
    pub fn primary_description(&self) -> String {
        [self.house.as_deref(), self.species.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// Server-side ordering of the character list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "A-Z")]
    Ascending,
    #[strum(serialize = "Z-A")]
    Descending,
}

impl SortOrder {
    /// Value of the `sort` query parameter
    pub fn sort_param(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "name",
            SortOrder::Descending => "-name",
        }
    }

    /// Case-insensitive name comparison in this order
    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        let ordering = lhs.to_lowercase().cmp(&rhs.to_lowercase());
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Sort one fetched page by name; pages are never merged and re-sorted
    pub fn sort_characters(&self, characters: &mut [Character]) {
        characters.sort_by(|lhs, rhs| self.compare(&lhs.attributes.name, &rhs.attributes.name));
    }
}

/// Client-side filter on the first letter of a character's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
pub enum LetterGroup {
    #[default]
    #[strum(serialize = "All")]
    All,
    #[strum(serialize = "A-C")]
    AToC,
    #[strum(serialize = "D-F")]
    DToF,
    #[strum(serialize = "G-I")]
    GToI,
    #[strum(serialize = "J-L")]
    JToL,
    #[strum(serialize = "M-O")]
    MToO,
    #[strum(serialize = "P-R")]
    PToR,
    #[strum(serialize = "S-U")]
    SToU,
    #[strum(serialize = "V-Z")]
    VToZ,
}

impl LetterGroup {
    fn bounds(&self) -> Option<(char, char)> {
        match self {
            LetterGroup::All => None,
            LetterGroup::AToC => Some(('A', 'C')),
            LetterGroup::DToF => Some(('D', 'F')),
            LetterGroup::GToI => Some(('G', 'I')),
            LetterGroup::JToL => Some(('J', 'L')),
            LetterGroup::MToO => Some(('M', 'O')),
            LetterGroup::PToR => Some(('P', 'R')),
            LetterGroup::SToU => Some(('S', 'U')),
            LetterGroup::VToZ => Some(('V', 'Z')),
        }
    }

    /// Whether a name belongs to this group; names not starting with a letter only
    /// belong to `All`
    pub fn contains(&self, name: &str) -> bool {
        let Some((lower, upper)) = self.bounds() else {
            return true;
        };
        let Some(first) = name.trim().chars().next() else {
            return false;
        };
        if !first.is_alphabetic() {
            return false;
        }
        first
            .to_uppercase()
            .next()
            .is_some_and(|c| (lower..=upper).contains(&c))
    }
}
