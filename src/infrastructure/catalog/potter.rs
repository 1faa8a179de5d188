//! Potter DB adapter (JSON:API)

use std::time::Duration;

use rand::{seq::SliceRandom, Rng};
use reqwest::Url;
use serde::{de::DeserializeOwned, Deserialize};
use strum::IntoEnumIterator;

use crate::{
    domain::{
        catalog::{fetch_handler, FetchHandler, FetchResult, Page, PageRequest},
        error::FetchError,
        potter::{
            recommendation::first_recommendation, Book, BookAttributes, Category, Chapter,
            ChapterAttributes, Character, CharacterAttributes, MovieAttributes, PotionAttributes,
            Recommendation, Resource, SortOrder, SpellAttributes,
        },
    },
    infrastructure::{catalog::http::JsonClient, config::PotterConfig},
};

/// Chapters of one book all fit on a single page
const CHAPTERS_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PotterPagination {
    #[serde(default)]
    pub current: Option<u32>,
    #[serde(default)]
    pub next: Option<u32>,
    #[serde(default)]
    pub last: Option<u32>,
    #[serde(default)]
    pub records: Option<u64>,
}

impl PotterPagination {
    pub fn can_load_more(&self) -> bool {
        if self.next.is_some_and(|next| next > 0) {
            return true;
        }
        match (self.current, self.last) {
            (Some(current), Some(last)) => current < last,
            _ => false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    #[serde(default)]
    pagination: Option<PotterPagination>,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "A: DeserializeOwned")]
struct ListResponse<A> {
    data: Vec<Resource<A>>,
    #[serde(default)]
    meta: Option<Meta>,
}

impl<A> ListResponse<A> {
    fn into_page(self) -> Page<Resource<A>> {
        let can_load_more = self
            .meta
            .and_then(|meta| meta.pagination)
            .is_some_and(|pagination| pagination.can_load_more());
        Page::new(self.data, can_load_more)
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound = "A: DeserializeOwned")]
struct SingleResponse<A> {
    data: Resource<A>,
}

fn in_reading_order(mut chapters: Vec<Chapter>) -> Vec<Chapter> {
    // Chapters without an order keep their server position after the numbered ones
    chapters.sort_by_key(|chapter| chapter.attributes.order.unwrap_or(u32::MAX));
    chapters
}

/// Reject ids that would escape their path segment
fn resource_path(prefix: &str, id: &str) -> Result<String, FetchError> {
    let id = id.trim();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(FetchError::InvalidRequest(format!("invalid resource id {id:?}")));
    }
    Ok(format!("{prefix}/{id}"))
}

fn shuffled_categories() -> Vec<Category> {
    let mut categories: Vec<Category> = Category::iter().collect();
    let mut rng = rand::rng();
    categories.shuffle(&mut rng);
    categories
}

fn pick_random<T>(page: Page<T>) -> Option<T> {
    let mut items = page.items;
    if items.is_empty() {
        return None;
    }
    let mut rng = rand::rng();
    let idx = rng.random_range(0..items.len());
    Some(items.swap_remove(idx))
}

/// Query parameters for one collection page
pub fn list_params(request: PageRequest, sort: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page[number]", request.page.to_string()),
        ("page[size]", request.page_size.to_string()),
    ];
    if let Some(sort) = sort.filter(|sort| !sort.is_empty()) {
        params.push(("sort", sort.to_string()));
    }
    params
}

#[derive(Debug, Clone)]
pub struct PotterClient {
    http: JsonClient,
}

impl PotterClient {
    pub fn new(config: &PotterConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: JsonClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?,
        })
    }

    pub fn list_url(
        &self,
        category: Category,
        request: PageRequest,
        sort: Option<&str>,
    ) -> Result<Url, FetchError> {
        self.http.endpoint(
            &format!("/{}", category.path()),
            &list_params(request, sort),
        )
    }

    pub async fn fetch_page<A: DeserializeOwned>(
        &self,
        category: Category,
        request: PageRequest,
        sort: Option<&str>,
    ) -> FetchResult<Resource<A>> {
        let url = self.list_url(category, request, sort)?;
        let response: ListResponse<A> = self.http.get_json(url).await?;
        Ok(response.into_page())
    }

    pub fn book_url(&self, id: &str) -> Result<Url, FetchError> {
        self.http
            .endpoint::<&str, &str>(&resource_path("/books", id)?, &[])
    }

    pub fn chapters_url(&self, book_id: &str) -> Result<Url, FetchError> {
        let path = format!("{}/chapters", resource_path("/books", book_id)?);
        self.http
            .endpoint(&path, &[("page[size]", CHAPTERS_PAGE_SIZE.to_string())])
    }

    pub async fn fetch_book(&self, id: &str) -> Result<Book, FetchError> {
        let url = self.book_url(id)?;
        let response: SingleResponse<BookAttributes> = self.http.get_json(url).await?;
        Ok(response.data)
    }

    pub async fn fetch_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, FetchError> {
        let url = self.chapters_url(book_id)?;
        let response: ListResponse<ChapterAttributes> = self.http.get_json(url).await?;
        tracing::debug!(book_id, count = response.data.len(), "Chapters loaded");
        Ok(in_reading_order(response.data))
    }

    /// One random entry from a randomly ordered walk over the collections
    ///
    /// Fails with [`FetchError::EmptyData`] when every collection is empty.
    pub async fn fetch_recommendation(&self) -> Result<Recommendation, FetchError> {
        first_recommendation(shuffled_categories(), |category| {
            self.sample_category(category)
        })
        .await
    }

    /// A random entry from the first page of `category`
    async fn sample_category(
        &self,
        category: Category,
    ) -> Result<Option<Recommendation>, FetchError> {
        let request = PageRequest::first(category.default_page_size());
        let pick = match category {
            Category::Books => pick_random(
                self.fetch_page::<BookAttributes>(category, request, None)
                    .await?,
            )
            .map(Recommendation::Book),
            Category::Characters => pick_random(
                self.fetch_page::<CharacterAttributes>(
                    category,
                    request,
                    Some(SortOrder::Ascending.sort_param()),
                )
                .await?,
            )
            .map(Recommendation::Character),
            Category::Movies => pick_random(
                self.fetch_page::<MovieAttributes>(category, request, None)
                    .await?,
            )
            .map(Recommendation::Movie),
            Category::Potions => pick_random(
                self.fetch_page::<PotionAttributes>(category, request, None)
                    .await?,
            )
            .map(Recommendation::Potion),
            Category::Spells => pick_random(
                self.fetch_page::<SpellAttributes>(category, request, None)
                    .await?,
            )
            .map(Recommendation::Spell),
        };
        Ok(pick)
    }

    /// Fetch strategy for one collection in server order
    pub fn handler<A>(&self, category: Category) -> FetchHandler<PageRequest, Resource<A>>
    where
        A: DeserializeOwned + Send + 'static,
    {
        self.sorted_handler(category, None)
    }

    /// Fetch strategy for characters sorted server-side by name
    pub fn characters_handler(&self, order: SortOrder) -> FetchHandler<PageRequest, Character> {
        self.sorted_handler(Category::Characters, Some(order.sort_param()))
    }

    fn sorted_handler<A>(
        &self,
        category: Category,
        sort: Option<&'static str>,
    ) -> FetchHandler<PageRequest, Resource<A>>
    where
        A: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        fetch_handler(move |request: PageRequest| {
            let client = client.clone();
            async move { client.fetch_page::<A>(category, request, sort).await }
        })
    }
}
