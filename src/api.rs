// API client module: contains a small blocking HTTP client that talks to
// the Dog CEO REST API. It is intentionally small and synchronous; every
// operation is a single GET with the payload under the `message` key.

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// The breed catalog as returned by the list endpoint: breed name mapped
/// to its sub-breed names. Breeds without sub-breeds map to an empty
/// vector. A `BTreeMap` keeps iteration in ascending breed order, which
/// is the order the UI displays.
pub type BreedCatalog = BTreeMap<String, Vec<String>>;

/// Wire shape of the breed-list response. The API wraps every payload in
/// a `message` field; a missing field fails deserialization, so a
/// malformed body surfaces as an error instead of an empty catalog.
#[derive(Deserialize, Debug)]
struct BreedListResponse {
    message: BreedCatalog,
}

/// Wire shape of the random-image responses: `message` carries the URL.
#[derive(Deserialize, Debug)]
struct ImageResponse {
    message: String,
}

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the Dog CEO API. Stateless between calls; nothing is cached.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create an ApiClient for the given base URL. Trailing slashes are
    /// trimmed so endpoint paths can be appended uniformly. Requests time
    /// out after 15 seconds rather than blocking the menu indefinitely.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create an ApiClient configured from the environment variable
    /// `DOG_API_URL` or fallback to the public `https://dog.ceo/api`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("DOG_API_URL").unwrap_or_else(|_| "https://dog.ceo/api".into());
        Self::new(&base_url)
    }

    /// Fetch the full breed catalog by GETting /breeds/list/all. Returns
    /// the breed-to-sub-breeds mapping from the `message` field, or an
    /// error on any transport, status, or decoding failure.
    pub fn list_all_breeds(&self) -> Result<BreedCatalog> {
        let url = format!("{}/breeds/list/all", &self.base_url);
        debug!("GET {}", url);
        let res = self.client.get(&url)
            .send()
            .context("Failed to send breed list request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Breed list request failed: {} - {}", status, txt);
        }
        let resp: BreedListResponse = res.json().context("Parsing breed list json")?;
        Ok(resp.message)
    }

    /// Fetch a random image URL for a breed. The breed is inserted into
    /// the path verbatim; the caller has already trimmed and lowercased
    /// it and checked it against the catalog.
    pub fn random_image(&self, breed: &str) -> Result<String> {
        let url = format!("{}/breed/{}/images/random", &self.base_url, breed);
        self.fetch_image(&url)
    }

    /// Fetch a random image URL for a sub-breed of a breed. Both names
    /// are inserted into the path verbatim, pre-validated by the caller.
    pub fn random_sub_breed_image(&self, breed: &str, sub_breed: &str) -> Result<String> {
        let url = format!("{}/breed/{}/{}/images/random", &self.base_url, breed, sub_breed);
        self.fetch_image(&url)
    }

    /// Shared GET-and-extract for the two image endpoints. An empty
    /// `message` string counts as a failure: the caller must always be
    /// able to tell "got a URL" from "got nothing".
    fn fetch_image(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let res = self.client.get(url)
            .send()
            .context("Failed to send image request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Image request failed: {} - {}", status, txt);
        }
        let resp: ImageResponse = res.json().context("Parsing image response json")?;
        if resp.message.is_empty() {
            anyhow::bail!("Image response contained no URL");
        }
        Ok(resp.message)
    }
}
