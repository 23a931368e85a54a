// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{FetchError, Result};
use super::ResourceSource;
use crate::model::{Category, EntityRecord, EntityRef, Page};

pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// No timeout unless configured; a hung request keeps its view loading.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeout: None }
    }
}

/// reqwest-backed client for the catalog API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("holocron/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { base_url: config.base_url.trim_end_matches('/').to_owned(), client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_url(&self, category: Category, page: u32) -> String {
        format!("{}/{}/?page={}", self.base_url, category.path_segment(), page)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "fetch start");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http { url: url.to_owned(), source })?;
        let body = self.handle_response(url, response).await?;
        debug!(%url, bytes = body.len(), "fetch done");
        serde_json::from_slice(&body)
            .map_err(|source| FetchError::Decode { url: url.to_owned(), source })
    }

    async fn handle_response(&self, url: &str, response: Response) -> Result<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown Status").to_owned(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Http { url: url.to_owned(), source })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ResourceSource for HttpClient {
    async fn fetch_page(&self, category: Category, page: u32) -> Result<Page> {
        self.get_json(&self.page_url(category, page)).await
    }

    async fn fetch_record(&self, reference: &EntityRef) -> Result<EntityRecord> {
        self.get_json(reference.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientConfig, HttpClient};
    use crate::model::Category;

    #[test]
    fn page_urls_use_upstream_path_segments() {
        let client = HttpClient::new(&ClientConfig {
            base_url: "https://swapi.py4e.com/api/".to_owned(),
            timeout: None,
        })
        .expect("client");

        assert_eq!(client.base_url(), "https://swapi.py4e.com/api");
        assert_eq!(
            client.page_url(Category::Character, 3),
            "https://swapi.py4e.com/api/people/?page=3"
        );
        assert_eq!(client.page_url(Category::Film, 1), "https://swapi.py4e.com/api/films/?page=1");
    }
}
