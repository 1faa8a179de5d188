use std::io::Write;

use color_eyre::eyre::Result;
use serde::de::DeserializeOwned;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        catalog::Identifiable,
        error::FetchError,
        potter::{
            Book, BookAttributes, Category, Chapter, MovieAttributes, PotionAttributes,
            Recommendation, Resource, SortOrder, SpellAttributes,
        },
        year_range::YearRange,
    },
    infrastructure::{
        catalog::{ArticClient, PotterClient},
        cli::Command,
        config::Config,
    },
    integration::{
        characters::CharacterListController,
        controller::{PagedList, PaginatedFetchController},
        searchable::SearchableYearFilteredController,
    },
    presentation::{
        rows::{artwork_details, book_details, chapter_line, RowText},
        status::{notice_line, placeholder},
        text::{truncate_to_width, wrap_text},
    },
};

pub const DEFAULT_WIDTH: usize = 100;

/// Drives one CLI command: builds the controller, pages through it and prints rows
pub struct AppRunner<W: Write> {
    config: Config,
    out: W,
    width: usize,
}

impl<W: Write> AppRunner<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            config,
            out,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub async fn run(&mut self, command: Command, pages: u32) -> Result<()> {
        tracing::info!(?command, pages, "Running command");
        match command {
            Command::Artworks { ref search, .. } => {
                let search = search.clone().unwrap_or_default();
                let range = command.year_range();
                self.browse_artworks(&search, range, pages).await
            }
            Command::Artwork { id } => self.show_artwork(id).await,
            Command::Books => self.browse_category::<BookAttributes>(Category::Books, pages).await,
            Command::Book { ref id } => self.show_book(id).await,
            Command::Recommend => self.show_recommendation().await,
            Command::Movies => {
                self.browse_category::<MovieAttributes>(Category::Movies, pages)
                    .await
            }
            Command::Potions => {
                self.browse_category::<PotionAttributes>(Category::Potions, pages)
                    .await
            }
            Command::Spells => {
                self.browse_category::<SpellAttributes>(Category::Spells, pages)
                    .await
            }
            Command::Characters {
                descending,
                letters,
            } => {
                let client = PotterClient::new(&self.config.potter)?;
                let mut list = CharacterListController::new(
                    self.config.potter.page_size(Category::Characters),
                    move |order| client.characters_handler(order),
                )?;
                if descending {
                    list.set_sort_order(SortOrder::Descending);
                }
                list.set_letter_group(letters);
                self.header(&format!(
                    "{} · {} · {}",
                    Category::Characters.title(),
                    list.sort_order(),
                    list.letter_group()
                ))?;
                self.browse(&mut list, pages).await.map(|_| ())
            }
        }
    }

    async fn browse_artworks(
        &mut self,
        search: &str,
        range: YearRange,
        pages: u32,
    ) -> Result<()> {
        let client = ArticClient::new(&self.config.artic)?;
        let mut list = SearchableYearFilteredController::new(
            self.config.artic.page_size,
            self.config.search.debounce(),
            client.handler(),
        )?;

        list.update_search_text(search);
        if !range.is_empty() {
            list.apply_year_range(range);
        } else if !search.trim().is_empty() {
            list.submit_search();
        }

        let query = list.current_query();
        let title = if query.is_search_active() {
            format!("Artworks matching \"{}\" · {range}", query.trimmed_search())
        } else {
            format!("Popular artworks · {range}")
        };
        self.header(&title)?;
        self.browse(&mut list, pages).await.map(|_| ())
    }

    async fn browse_category<A>(&mut self, category: Category, pages: u32) -> Result<()>
    where
        A: DeserializeOwned + Send + 'static,
        Resource<A>: RowText,
    {
        let client = PotterClient::new(&self.config.potter)?;
        let mut list = PaginatedFetchController::new(
            self.config.potter.page_size(category),
            client.handler::<A>(category),
        )?;
        self.header(&format!("{} · {}", category.title(), category.tagline()))?;
        self.browse(&mut list, pages).await.map(|_| ())
    }

    async fn show_artwork(&mut self, id: u64) -> Result<()> {
        let client = ArticClient::new(&self.config.artic)?;
        let artwork = match client.fetch_artwork(id).await {
            Ok(artwork) => artwork,
            Err(error) => {
                writeln!(self.out, "{error}")?;
                return Err(error.into());
            }
        };

        self.header(&artwork.title)?;
        for (key, value) in artwork_details(&artwork) {
            let line = format!("{key:<11}{value}");
            writeln!(self.out, "{}", truncate_to_width(&line, self.width))?;
        }

        let Some(artist) = artwork.artist_title.clone() else {
            return Ok(());
        };
        match client.fetch_related(&artist, artwork.id, None).await {
            Ok(related) if related.is_empty() => {}
            Ok(related) => {
                writeln!(self.out)?;
                self.header(&format!("More by {artist}"))?;
                for artwork in &related {
                    writeln!(self.out, "  {}", artwork.row(self.width.saturating_sub(2)))?;
                }
            }
            Err(error) => {
                // Related works are a bonus; the detail itself already printed
                tracing::warn!(%error, "Failed to load related artworks");
            }
        }
        Ok(())
    }

    async fn show_book(&mut self, id: &str) -> Result<()> {
        let client = PotterClient::new(&self.config.potter)?;
        let book = match client.fetch_book(id).await {
            Ok(book) => book,
            Err(error) => {
                writeln!(self.out, "{}", error.user_message())?;
                return Err(error.into());
            }
        };
        let chapters = client.fetch_chapters(&book.id).await;
        self.write_book(&book, chapters)
    }

    fn write_book(
        &mut self,
        book: &Book,
        chapters: Result<Vec<Chapter>, FetchError>,
    ) -> Result<()> {
        self.header(&book.attributes.title)?;
        for (key, value) in book_details(book) {
            let line = format!("{key:<11}{value}");
            writeln!(self.out, "{}", truncate_to_width(&line, self.width))?;
        }
        let summary = book.attributes.summary.as_deref().map(str::trim);
        if let Some(summary) = summary.filter(|summary| !summary.is_empty()) {
            writeln!(self.out)?;
            writeln!(self.out, "{}", wrap_text(summary, self.width))?;
        }

        writeln!(self.out)?;
        self.header("Chapters")?;
        match chapters {
            Ok(chapters) if chapters.is_empty() => {
                writeln!(self.out, "No chapters were published for this book.")?;
            }
            Ok(chapters) => {
                for chapter in &chapters {
                    let line = chapter_line(chapter);
                    writeln!(self.out, "{}", truncate_to_width(&line, self.width))?;
                }
            }
            Err(error) => {
                // The book itself already printed
                tracing::warn!(kind = %error.kind(), ?error, "Failed to load chapters");
                writeln!(self.out, "{}", error.user_message())?;
            }
        }
        Ok(())
    }

    async fn show_recommendation(&mut self) -> Result<()> {
        let client = PotterClient::new(&self.config.potter)?;
        match client.fetch_recommendation().await {
            Ok(recommendation) => self.write_recommendation(&recommendation),
            Err(error) => {
                writeln!(self.out, "{}", error.user_message())?;
                Err(error.into())
            }
        }
    }

    fn write_recommendation(&mut self, recommendation: &Recommendation) -> Result<()> {
        self.header(&format!("Recommended {}", recommendation.category().title()))?;
        writeln!(self.out, "{}", truncate_to_width(recommendation.title(), self.width))?;
        writeln!(self.out, "{}", truncate_to_width(&recommendation.subtitle(), self.width))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", wrap_text(&recommendation.description(), self.width))?;
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<()> {
        let title = truncate_to_width(title, self.width);
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", "=".repeat(title.width()))?;
        Ok(())
    }

    /// Load up to `pages` pages, printing rows as they arrive
    ///
    /// A failed load-more is retried once, as a user tapping "retry" would. Returns
    /// the number of rows printed.
    pub async fn browse<L>(&mut self, list: &mut L, pages: u32) -> Result<usize>
    where
        L: PagedList,
        L::Item: RowText,
    {
        list.load_initial();
        list.settle().await;

        let mut printed = 0;
        let mut seen = 0;
        let mut loaded_pages = 0;
        let mut retried = false;
        loop {
            if let Some(text) = placeholder(list.view_state()) {
                writeln!(self.out, "{}", wrap_text(&text, self.width))?;
                break;
            }

            loaded_pages += 1;
            let fresh = &list.items()[seen..];
            for item in fresh.iter().filter(|item| list.is_visible(item)) {
                writeln!(self.out, "{}", item.row(self.width))?;
                printed += 1;
            }
            seen = list.items().len();

            if loaded_pages >= pages || !list.can_load_more() {
                break;
            }
            let Some(last) = list.items().last().map(Identifiable::id) else {
                break;
            };

            list.load_more_after(last);
            list.settle().await;

            if let Some(notice) = list.take_notice() {
                writeln!(self.out, "{}", notice_line(&notice, !retried))?;
                if retried {
                    break;
                }
                retried = true;
                list.retry_load_more();
                list.settle().await;
                if let Some(notice) = list.take_notice() {
                    writeln!(self.out, "{}", notice_line(&notice, false))?;
                    break;
                }
            }
        }

        if printed == 0 && seen > 0 {
            writeln!(self.out, "No loaded rows match the current filter.")?;
        }
        tracing::info!(rows = printed, pages = loaded_pages, "Browse finished");
        Ok(printed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::potter::{ChapterAttributes, SpellAttributes};
    use pretty_assertions::assert_eq;

    fn runner() -> AppRunner<Vec<u8>> {
        AppRunner::new(Config::default(), Vec::new()).with_width(60)
    }

    fn output(runner: AppRunner<Vec<u8>>) -> String {
        String::from_utf8(runner.into_inner()).unwrap()
    }

    fn book() -> Book {
        Book::new(
            "b1",
            BookAttributes {
                title: "Harry Potter and the Philosopher's Stone".into(),
                author: Some("J. K. Rowling".into()),
                summary: Some("Harry learns he is a wizard.".into()),
                ..Default::default()
            },
        )
    }

    fn chapter(order: u32, title: &str) -> Chapter {
        Chapter::new(
            format!("c{order}"),
            ChapterAttributes {
                title: title.into(),
                order: Some(order),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_write_book_with_chapters() {
        let mut runner = runner();
        let chapters = vec![chapter(1, "The Boy Who Lived"), chapter(2, "The Vanishing Glass")];
        runner.write_book(&book(), Ok(chapters)).unwrap();

        let output = output(runner);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Harry Potter and the Philosopher's Stone");
        assert_eq!(lines[2], "Author     J. K. Rowling");
        assert!(output.contains("Harry learns he is a wizard."));
        assert_eq!(
            lines[lines.len() - 4..],
            ["Chapters", "========", "1. The Boy Who Lived", "2. The Vanishing Glass"]
        );
    }

    #[test]
    fn test_write_book_without_chapters() {
        let mut runner = runner();
        runner.write_book(&book(), Ok(vec![])).unwrap();
        assert!(output(runner).ends_with("No chapters were published for this book.\n"));
    }

    #[test]
    fn test_chapter_failure_keeps_book() {
        let mut runner = runner();
        let error = FetchError::Transport("timed out".into());
        runner.write_book(&book(), Err(error.clone())).unwrap();

        let output = output(runner);
        assert!(output.starts_with("Harry Potter and the Philosopher's Stone\n"));
        assert!(output.ends_with(&format!("{}\n", error.user_message())));
    }

    #[test]
    fn test_write_recommendation() {
        let mut runner = runner();
        let spell = Recommendation::Spell(Resource::new(
            "s1",
            SpellAttributes {
                name: "Expecto Patronum".into(),
                category: Some("Charm".into()),
                ..Default::default()
            },
        ));
        runner.write_recommendation(&spell).unwrap();
        assert_eq!(
            output(runner),
            "Recommended Spells\n\
             ==================\n\
             Expecto Patronum\n\
             Charm\n\
             \n\
             A magical incantation\n"
        );
    }
}
