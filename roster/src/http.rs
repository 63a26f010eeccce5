// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with bearer-token injection and status mapping.

use std::sync::RwLock;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::RosterConfig;
use crate::error::RosterError;

/// HTTP client for roster operations.
///
/// Holds the session token behind interior mutability so a re-login
/// through a shared client takes effect for every subsequent call.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    token: RwLock<Option<String>>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &RosterConfig) -> Result<Self, RosterError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            token: RwLock::new(None),
        })
    }

    /// Replaces the bearer token used for subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_string());
    }

    /// Builds a request carrying the current session token, if any.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);
        let token = self
            .token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(token) = token.as_deref() {
            req = req.bearer_auth(token);
        }
        drop(token);
        req
    }

    /// Executes a request and maps error statuses.
    ///
    /// A 401 is the roster's way of reporting an expired session; it
    /// maps to [`RosterError::SessionExpired`] instead of a generic
    /// HTTP error so the supervisor can route it to recovery.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error
    /// status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, RosterError> {
        let resp = req.send().await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(resp),
            StatusCode::UNAUTHORIZED => Err(RosterError::SessionExpired),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(RosterError::Http(format!("{status}: {text}")))
            }
        }
    }
}
