//! Art Institute of Chicago adapter

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::{
    domain::{
        artwork::{Artwork, ArtworkQuery, ARTWORK_FIELDS},
        catalog::{fetch_handler, FetchHandler, FetchResult, Page},
        error::FetchError,
        year_range::YearRange,
    },
    infrastructure::{catalog::http::JsonClient, config::ArticConfig},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticPagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub next_url: Option<String>,
}

impl ArticPagination {
    /// Missing fields fall back to the requested page, so an absent block means "last page"
    pub fn can_load_more(&self, requested_page: u32) -> bool {
        let current = self.current_page.unwrap_or(requested_page);
        let total = self.total_pages.unwrap_or(current);
        current < total || self.next_url.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    #[serde(default)]
    pagination: Option<ArticPagination>,
    data: Vec<Artwork>,
}

#[derive(Debug, Deserialize)]
struct ArtworkDetailResponse {
    data: Artwork,
}

fn fields() -> String {
    ARTWORK_FIELDS.join(",")
}

fn year_range_params(range: &YearRange) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(start) = range.start {
        params.push(("query[range][date_start][gte]", start.to_string()));
    }
    if let Some(end) = range.end {
        params.push(("query[range][date_start][lte]", end.to_string()));
    }
    params
}

/// Path and query parameters for one artworks page
///
/// Browse mode lists popular public-domain works; an active search term switches
/// to the search endpoint.
pub fn artworks_params(query: &ArtworkQuery) -> (&'static str, Vec<(&'static str, String)>) {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
        ("fields", fields()),
    ];
    let path = if query.is_search_active() {
        params.push(("q", query.trimmed_search().to_string()));
        "/artworks/search"
    } else {
        params.push(("sort", "popular".to_string()));
        "/artworks"
    };
    params.push(("query[term][is_public_domain]", "true".to_string()));
    params.extend(year_range_params(&query.year_range));
    (path, params)
}

/// Decode an artworks listing into a page
pub fn parse_artworks_page(body: &str, requested_page: u32) -> FetchResult<Artwork> {
    let response: ArtworksResponse = serde_json::from_str(body)?;
    Ok(into_page(response, requested_page))
}

fn into_page(response: ArtworksResponse, requested_page: u32) -> Page<Artwork> {
    let can_load_more = response
        .pagination
        .unwrap_or_default()
        .can_load_more(requested_page);
    Page::new(response.data, can_load_more)
}

#[derive(Debug, Clone)]
pub struct ArticClient {
    http: JsonClient,
    related_limit: u32,
}

impl ArticClient {
    pub fn new(config: &ArticConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: JsonClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?,
            related_limit: config.related_limit,
        })
    }

    pub fn artworks_url(&self, query: &ArtworkQuery) -> Result<Url, FetchError> {
        let (path, params) = artworks_params(query);
        self.http.endpoint(path, &params)
    }

    pub async fn fetch_artworks(&self, query: ArtworkQuery) -> FetchResult<Artwork> {
        let url = self.artworks_url(&query)?;
        let response: ArtworksResponse = self.http.get_json(url).await?;
        Ok(into_page(response, query.page))
    }

    pub async fn fetch_artwork(&self, id: u64) -> Result<Artwork, FetchError> {
        let url = self
            .http
            .endpoint(&format!("/artworks/{id}"), &[("fields", fields())])?;
        let response: ArtworkDetailResponse = self.http.get_json(url).await?;
        Ok(response.data)
    }

    /// Other public-domain works by `artist`, without the one being viewed
    pub async fn fetch_related(
        &self,
        artist: &str,
        excluding: u64,
        limit: Option<u32>,
    ) -> Result<Vec<Artwork>, FetchError> {
        let limit = limit.unwrap_or(self.related_limit);
        let params = [
            ("page", "1".to_string()),
            ("limit", limit.to_string()),
            ("fields", fields()),
            ("q", artist.to_string()),
            ("query[term][artist_title]", artist.to_string()),
            ("query[term][is_public_domain]", "true".to_string()),
        ];
        let url = self.http.endpoint("/artworks/search", &params)?;
        let response: ArtworksResponse = self.http.get_json(url).await?;
        Ok(response
            .data
            .into_iter()
            .filter(|artwork| artwork.id != excluding)
            .collect())
    }

    /// Fetch strategy for the searchable artwork list
    pub fn handler(&self) -> FetchHandler<ArtworkQuery, Artwork> {
        let client = self.clone();
        fetch_handler(move |query: ArtworkQuery| {
            let client = client.clone();
            async move { client.fetch_artworks(query).await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PageRequest;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn query(term: &str, range: YearRange) -> ArtworkQuery {
        ArtworkQuery::new(PageRequest::new(2, 20), term, range)
    }

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_browse_params() {
        let (path, params) = artworks_params(&query("   ", YearRange::default()));
        assert_eq!(path, "/artworks");
        assert_eq!(param(&params, "sort"), Some("popular"));
        assert_eq!(param(&params, "page"), Some("2"));
        assert_eq!(param(&params, "limit"), Some("20"));
        assert_eq!(param(&params, "q"), None);
        assert_eq!(param(&params, "query[term][is_public_domain]"), Some("true"));
        assert!(param(&params, "fields").unwrap().starts_with("id,title"));
    }

    #[test]
    fn test_search_params_with_year_range() {
        let (path, params) = artworks_params(&query(" monet ", YearRange::new(Some(1900), Some(1850))));
        assert_eq!(path, "/artworks/search");
        assert_eq!(param(&params, "q"), Some("monet"));
        assert_eq!(param(&params, "sort"), None);
        assert_eq!(param(&params, "query[range][date_start][gte]"), Some("1850"));
        assert_eq!(param(&params, "query[range][date_start][lte]"), Some("1900"));
    }

    #[test]
    fn test_open_ended_year_range() {
        let (_, params) = artworks_params(&query("", YearRange::new(None, Some(1700))));
        assert_eq!(param(&params, "query[range][date_start][gte]"), None);
        assert_eq!(param(&params, "query[range][date_start][lte]"), Some("1700"));
    }

    #[rstest]
    #[case(Some(1), Some(10), None, true)]
    #[case(Some(10), Some(10), None, false)]
    #[case(Some(10), Some(10), Some("https://api.artic.edu/api/v1/artworks?page=11"), true)]
    #[case(None, None, None, false)]
    #[case(None, Some(3), None, true)]
    fn test_can_load_more(
        #[case] current_page: Option<u32>,
        #[case] total_pages: Option<u32>,
        #[case] next_url: Option<&str>,
        #[case] expected: bool,
    ) {
        let pagination = ArticPagination {
            current_page,
            total_pages,
            next_url: next_url.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(pagination.can_load_more(2), expected);
    }

    #[test]
    fn test_parse_artworks_page() {
        let body = r#"{
            "pagination": {"total": 3, "limit": 2, "offset": 0, "total_pages": 2, "current_page": 1,
                           "next_url": "https://api.artic.edu/api/v1/artworks?page=2"},
            "data": [
                {"id": 27992, "title": "A Sunday on La Grande Jatte", "artist_title": "Georges Seurat",
                 "date_start": 1884, "date_end": 1886, "image_id": "1adf2696"},
                {"id": 28560, "title": "The Bedroom", "artist_title": null}
            ],
            "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
        }"#;
        let page = parse_artworks_page(body, 1).unwrap();
        assert!(page.can_load_more);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].date_start, Some(1884));
        assert_eq!(page.items[1].artist_title, None);
    }

    #[test]
    fn test_parse_without_pagination_is_last_page() {
        let page = parse_artworks_page(r#"{"data": []}"#, 4).unwrap();
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_parse_shape_mismatch_is_decode_error() {
        let result = parse_artworks_page(r#"{"data": {"id": 1}}"#, 1);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_artworks_url() {
        let client = ArticClient::new(&ArticConfig::default()).unwrap();
        let url = client.artworks_url(&query("", YearRange::default())).unwrap();
        assert_eq!(url.path(), "/api/v1/artworks");
    }
}
