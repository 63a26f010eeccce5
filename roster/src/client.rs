// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Roster API client.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use reqwest::{Method, StatusCode};
use shiftcal_core::{AuthToken, ShiftRecord, ShiftSource, SyncError};

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::http::HttpClient;
use crate::types::{SessionRequest, SessionResponse, ShiftDto};

/// Client for the shift roster's REST API.
///
/// # Example
///
/// ```ignore
/// use shiftcal_roster::{RosterClient, RosterConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RosterConfig {
///     base_url: "https://roster.example.com".to_string(),
///     username: "sync-bot".to_string(),
///     password: "secret".to_string(),
///     ..Default::default()
/// };
///
/// let client = RosterClient::new(config)?;
/// client.create_session().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Arc<HttpClient>,
    config: RosterConfig,
}

impl RosterClient {
    /// Creates a new roster client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: RosterConfig) -> Result<Self, RosterError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Seeds the session token, e.g. from a persisted token file.
    pub fn set_token(&self, token: &str) {
        self.http.set_token(token);
    }

    /// Creates a fresh session and starts using its token.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Auth`] if the roster rejects the
    /// credentials.
    pub async fn create_session(&self) -> Result<String, RosterError> {
        let url = self.full_url("/api/v1/session");
        let body = SessionRequest {
            username: &self.config.username,
            password: &self.config.password,
        };

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(&body))
            .await
            .map_err(|e| match e {
                // 401 on login is bad credentials, not a stale session.
                RosterError::SessionExpired => {
                    RosterError::Auth("credentials rejected".to_string())
                }
                other => other,
            })?;

        let session: SessionResponse = resp
            .json()
            .await
            .map_err(|e| RosterError::InvalidResponse(e.to_string()))?;

        self.http.set_token(&session.token);
        tracing::debug!("roster session created");
        Ok(session.token)
    }

    /// Probes whether the current session token is still accepted.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures; a rejected token
    /// is reported as `Ok(false)`.
    pub async fn probe_session(&self) -> Result<bool, RosterError> {
        let url = self.full_url("/api/v1/session");
        let resp = self.http.build_request(Method::GET, &url).send().await?;

        match resp.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => Err(RosterError::Http(format!("{status}"))),
        }
    }

    /// Lists shifts starting at or after `from`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SessionExpired`] on 401, a transport or
    /// decode error otherwise.
    pub async fn shifts_from(&self, from: Timestamp) -> Result<Vec<ShiftRecord>, RosterError> {
        let url = self.full_url("/api/v1/shifts");
        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::GET, &url)
                    .query(&[("from", from.to_string())]),
            )
            .await?;

        let shifts: Vec<ShiftDto> = resp
            .json()
            .await
            .map_err(|e| RosterError::InvalidResponse(e.to_string()))?;

        tracing::debug!(count = shifts.len(), "shifts listed");
        Ok(shifts.into_iter().map(ShiftRecord::from).collect())
    }

    /// Builds a full URL from a path.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ShiftSource for RosterClient {
    async fn login(&self) -> Result<AuthToken, SyncError> {
        let token = self.create_session().await?;
        Ok(AuthToken::from(token))
    }

    async fn is_session_valid(&self) -> Result<bool, SyncError> {
        Ok(self.probe_session().await?)
    }

    async fn list_shifts(&self, from: Timestamp) -> Result<Vec<ShiftRecord>, SyncError> {
        Ok(self.shifts_from(from).await?)
    }
}
