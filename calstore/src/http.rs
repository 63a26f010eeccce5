// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with token auth and status mapping.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::CalStoreConfig;
use crate::error::StoreError;

/// HTTP client for calendar store operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    token: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &CalStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            token: config.token.clone(),
        })
    }

    /// Builds a request with the API token attached.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url).bearer_auth(&self.token)
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error
    /// status code; 404 is reported as [`StoreError::Http`] here and
    /// refined to `NotFound` by callers that know the record id.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = req.send().await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(resp),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(StoreError::Http(format!("{status}: {text}")))
            }
        }
    }

    /// Whether a response status is 404, for `NotFound` refinement.
    #[must_use]
    pub fn is_not_found(err: &StoreError) -> bool {
        matches!(err, StoreError::Http(msg) if msg.starts_with("404"))
    }
}
