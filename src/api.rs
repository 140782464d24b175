// HTTP client module: a small blocking client for the TMDb v3 API. Every
// operation is a GET returning the raw JSON payload; the dispatcher treats
// those payloads as opaque values.

use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// The six upstream operations. Abstracted as a trait so the dispatcher can
/// run against a scripted double in tests.
pub trait MovieApi {
    fn popular_movies(&self, page: u32) -> Result<Value>;
    fn now_playing_movies(&self, page: u32) -> Result<Value>;
    fn movie(&self, id: u64) -> Result<Value>;
    fn movie_reviews(&self, id: u64) -> Result<Value>;
    fn popular_persons(&self, page: u32) -> Result<Value>;
    fn person(&self, id: u64) -> Result<Value>;
}

/// Blocking TMDb client holding the base URL and the API key, if one was
/// configured. Requests fail with a network error when the key is absent;
/// local-file commands never get here.
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a client configured from the environment: `TMDB_API_KEY` for
    /// the credential and `TMDB_BASE_URL` to override the upstream host.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let api_key = std::env::var("TMDB_API_KEY").ok().filter(|key| !key.is_empty());
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            base_url,
            api_key,
        })
    }

    /// Issue one GET against `path`, appending the API key and any extra
    /// query parameters, and parse the JSON body.
    fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            Error::Network("TMDB_API_KEY is not set; set it to your TMDb API key".into())
        })?;
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", key)])
            .query(query)
            .send()?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_else(|_| "".into());
            return Err(Error::Network(format!("GET {path} failed: {status} {body}")));
        }
        Ok(response.json()?)
    }
}

impl MovieApi for ApiClient {
    fn popular_movies(&self, page: u32) -> Result<Value> {
        self.fetch("movie/popular", &[("page", page.to_string())])
    }

    fn now_playing_movies(&self, page: u32) -> Result<Value> {
        self.fetch("movie/now_playing", &[("page", page.to_string())])
    }

    fn movie(&self, id: u64) -> Result<Value> {
        self.fetch(&format!("movie/{id}"), &[])
    }

    fn movie_reviews(&self, id: u64) -> Result<Value> {
        self.fetch(&format!("movie/{id}/reviews"), &[])
    }

    fn popular_persons(&self, page: u32) -> Result<Value> {
        self.fetch("person/popular", &[("page", page.to_string())])
    }

    fn person(&self, id: u64) -> Result<Value> {
        self.fetch(&format!("person/{id}"), &[])
    }
}
