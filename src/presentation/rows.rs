//! One-line summaries of catalog entities

use crate::{
    domain::{
        artwork::Artwork,
        potter::{
            Book, BookAttributes, Chapter, CharacterAttributes, MovieAttributes,
            PotionAttributes, Resource, SpellAttributes,
        },
    },
    presentation::text::truncate_to_width,
};

/// Text of a list row
pub trait RowText {
    fn title(&self) -> String;

    fn subtitle(&self) -> Option<String> {
        None
    }

    /// Title and subtitle on one line, cut to `width` columns
    fn row(&self, width: usize) -> String {
        let line = match self.subtitle().filter(|subtitle| !subtitle.is_empty()) {
            Some(subtitle) => format!("{} · {subtitle}", self.title()),
            None => self.title(),
        };
        truncate_to_width(&line, width)
    }
}

impl RowText for Artwork {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("{}, {}", self.display_artist(), self.display_date()))
    }
}

impl RowText for Resource<BookAttributes> {
    fn title(&self) -> String {
        self.attributes.title.clone()
    }

    fn subtitle(&self) -> Option<String> {
        let attributes = &self.attributes;
        match (&attributes.author, &attributes.release_date) {
            (Some(author), Some(date)) => Some(format!("{author}, {date}")),
            (Some(author), None) => Some(author.clone()),
            (None, date) => date.clone(),
        }
    }
}

impl RowText for Resource<MovieAttributes> {
    fn title(&self) -> String {
        self.attributes.title.clone()
    }

    fn subtitle(&self) -> Option<String> {
        self.attributes.release_date.clone()
    }
}

impl RowText for Resource<CharacterAttributes> {
    fn title(&self) -> String {
        self.attributes.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.attributes.primary_description())
    }
}

impl RowText for Resource<PotionAttributes> {
    fn title(&self) -> String {
        self.attributes.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        self.attributes.effect.clone()
    }
}

impl RowText for Resource<SpellAttributes> {
    fn title(&self) -> String {
        self.attributes.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        self.attributes
            .incantation
            .clone()
            .or_else(|| self.attributes.effect.clone())
    }
}

/// Key/value lines of the artwork detail view, skipping unknown values
pub fn artwork_details(artwork: &Artwork) -> Vec<(&'static str, String)> {
    let optional = [
        ("Origin", artwork.place_of_origin.clone()),
        ("Medium", artwork.medium_display.clone()),
        ("Dimensions", artwork.dimensions.clone()),
        ("Type", artwork.artwork_type_title.clone()),
        ("Department", artwork.department_title.clone()),
        ("Credit", artwork.credit_line.clone()),
        (
            "Styles",
            artwork
                .style_titles
                .as_ref()
                .filter(|styles| !styles.is_empty())
                .map(|styles| styles.join(", ")),
        ),
        ("Image", artwork.image_url(843)),
    ];

    let mut details = vec![
        ("Artist", artwork.display_artist().to_string()),
        ("Date", artwork.display_date()),
    ];
    details.extend(
        optional
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value))),
    );
    details
}

/// Key/value lines of the book detail view
pub fn book_details(book: &Book) -> Vec<(&'static str, String)> {
    let attributes = &book.attributes;
    let optional = [
        ("Released", attributes.release_date.clone()),
        ("Pages", attributes.pages.map(|pages| pages.to_string())),
        ("Cover", attributes.cover.clone()),
        ("Wiki", attributes.wiki.clone()),
    ];

    let mut details = vec![(
        "Author",
        attributes
            .author
            .clone()
            .unwrap_or_else(|| "Unknown author".to_string()),
    )];
    details.extend(
        optional
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value))),
    );
    details
}

/// "3. Title", or just the title when the order is unknown
pub fn chapter_line(chapter: &Chapter) -> String {
    match chapter.attributes.order {
        Some(order) => format!("{order}. {}", chapter.attributes.title),
        None => chapter.attributes.title.clone(),
    }
}
