use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;
use url::Url;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Search response from the YouTube Data API v3.
/// https://developers.google.com/youtube/v3/docs/search/list
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single search result. The snippet is optional: some results come back
/// without one, and those still count toward the video total.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub channel_id: String,
}

pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Build the search URL for a single niche query. All parameter values are
/// percent-encoded; neither the query nor the result cap is validated here.
pub fn build_search_url(query: &str, max_results: u32, api_key: &str) -> String {
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("endpoint constant must parse");
    url.query_pairs_mut()
        .append_pair("part", "snippet")
        .append_pair("q", query)
        .append_pair("type", "video")
        .append_pair("maxResults", &max_results.to_string())
        .append_pair("key", api_key);
    url.into()
}

/// Perform one blocking GET and decode the body. Network failures, non-2xx
/// statuses, and malformed JSON all propagate to the caller; there is no
/// retry and no rate-limit handling.
pub fn fetch_search_results(client: &Client, url: &str) -> Result<SearchResponse> {
    info!(action = "request", component = "youtube_api", "Sending search request");

    let response = client
        .get(url)
        .send()
        .context("Search request failed")?
        .error_for_status()
        .context("Search request returned an error status")?;

    let results: SearchResponse = response
        .json()
        .context("Search response did not match the expected JSON schema")?;

    info!(
        action = "response",
        component = "youtube_api",
        item_count = results.items.len(),
        "Search response decoded"
    );
    Ok(results)
}
