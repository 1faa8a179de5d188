//! Art Institute of Chicago artworks

use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog::{Identifiable, PageRequest},
    year_range::YearRange,
};

/// Default number of artworks per page
pub const ARTWORK_PAGE_SIZE: u32 = 20;

/// Fields requested from the API for both list and detail views
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "artist_title",
    "artist_display",
    "date_display",
    "date_start",
    "date_end",
    "place_of_origin",
    "medium_display",
    "dimensions",
    "credit_line",
    "artwork_type_title",
    "department_title",
    "image_id",
    "thumbnail",
    "style_titles",
    "subject_titles",
    "is_public_domain",
];

/// An artwork record; everything but the id and title is optional upstream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub medium_display: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub credit_line: Option<String>,
    #[serde(default)]
    pub artwork_type_title: Option<String>,
    #[serde(default)]
    pub department_title: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub style_titles: Option<Vec<String>>,
    #[serde(default)]
    pub subject_titles: Option<Vec<String>>,
    #[serde(default)]
    pub is_public_domain: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub lqip: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl Identifiable for Artwork {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Artwork {
    /// Minimal record, mostly useful for tests and placeholders
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist_title: None,
            artist_display: None,
            date_display: None,
            date_start: None,
            date_end: None,
            place_of_origin: None,
            medium_display: None,
            dimensions: None,
            credit_line: None,
            artwork_type_title: None,
            department_title: None,
            image_id: None,
            thumbnail: None,
            style_titles: None,
            subject_titles: None,
            is_public_domain: None,
        }
    }

    pub fn display_artist(&self) -> &str {
        self.artist_title.as_deref().unwrap_or("Unknown Artist")
    }

    pub fn display_date(&self) -> String {
        if let Some(date) = &self.date_display {
            return date.clone();
        }
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start == end => start.to_string(),
            (Some(start), Some(end)) => format!("{start} – {end}"),
            (Some(start), None) => format!("From {start}"),
            (None, Some(end)) => format!("Until {end}"),
            (None, None) => "Date unknown".to_string(),
        }
    }

    /// IIIF image URL at the given width
    pub fn image_url(&self, width: u32) -> Option<String> {
        self.image_id.as_ref().map(|image_id| {
            format!("https://www.artic.edu/iiif/2/{image_id}/full/{width},/0/default.jpg")
        })
    }
}

/// Mutable parameters of an artwork fetch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtworkQuery {
    pub page: u32,
    pub limit: u32,
    pub search_term: String,
    pub year_range: YearRange,
}

impl ArtworkQuery {
    pub fn new(request: PageRequest, search_term: impl Into<String>, year_range: YearRange) -> Self {
        Self {
            page: request.page,
            limit: request.page_size,
            search_term: search_term.into(),
            year_range,
        }
    }

    /// Search term with surrounding whitespace removed
    pub fn trimmed_search(&self) -> &str {
        self.search_term.trim()
    }

    /// False means browse mode: no text filter is sent at all
    pub fn is_search_active(&self) -> bool {
        !self.trimmed_search().is_empty()
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}
