// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar store API client.
//!
//! The store knows nothing about shifts or synchronization; it only
//! round-trips the opaque metadata bag attached to every record. The
//! wire shape of records and drafts is the core model itself, encoded
//! as JSON.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use shiftcal_core::{
    CalendarStore, RecordDraft, RecordFilter, RecordId, RecordStatus, SyncError, TargetRecord,
};

use crate::config::CalStoreConfig;
use crate::error::StoreError;
use crate::http::HttpClient;
use crate::types::StatusUpdate;

/// Client for the calendar store's REST API.
///
/// # Example
///
/// ```ignore
/// use shiftcal_calstore::{CalStoreClient, CalStoreConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CalStoreConfig {
///     base_url: "https://calendar.example.com".to_string(),
///     calendar_id: "team-roster".to_string(),
///     token: "secret".to_string(),
///     ..Default::default()
/// };
///
/// let client = CalStoreClient::new(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CalStoreClient {
    http: Arc<HttpClient>,
    config: CalStoreConfig,
}

impl CalStoreClient {
    /// Creates a new calendar store client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: CalStoreConfig) -> Result<Self, StoreError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Lists records matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails or decoding fails.
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<TargetRecord>, StoreError> {
        let url = self.events_url();
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url).query(&[
                ("tag", filter.tag.as_str()),
                ("status", &filter.status.to_string()),
                ("min_start", &filter.min_start.to_string()),
            ]))
            .await?;

        let records: Vec<TargetRecord> = resp
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        tracing::debug!(count = records.len(), "records listed");
        Ok(records)
    }

    /// Creates a record from the draft.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails.
    pub async fn create_record(&self, draft: &RecordDraft) -> Result<TargetRecord, StoreError> {
        let url = self.events_url();
        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(draft))
            .await?;

        resp.json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    /// Rewrites an existing record in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the record id is unknown.
    pub async fn update_record(
        &self,
        id: &RecordId,
        draft: &RecordDraft,
    ) -> Result<TargetRecord, StoreError> {
        let url = format!("{}/{id}", self.events_url());
        let resp = self
            .http
            .execute(self.http.build_request(Method::PATCH, &url).json(draft))
            .await
            .map_err(|e| refine_not_found(e, id))?;

        resp.json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    /// Mutates a record's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the record id is unknown.
    pub async fn update_status(
        &self,
        id: &RecordId,
        status: RecordStatus,
    ) -> Result<TargetRecord, StoreError> {
        let url = format!("{}/{id}/status", self.events_url());
        let body = StatusUpdate { status };
        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(&body))
            .await
            .map_err(|e| refine_not_found(e, id))?;

        resp.json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            self.config.base_url.trim_end_matches('/'),
            self.config.calendar_id
        )
    }
}

fn refine_not_found(err: StoreError, id: &RecordId) -> StoreError {
    if HttpClient::is_not_found(&err) {
        StoreError::NotFound(id.clone())
    } else {
        err
    }
}

#[async_trait]
impl CalendarStore for CalStoreClient {
    async fn list_records(&self, filter: &RecordFilter) -> Result<Vec<TargetRecord>, SyncError> {
        // A failed listing aborts the pass: a partial target snapshot
        // cannot be reconciled safely.
        self.list(filter)
            .await
            .map_err(|e| SyncError::Fetch(e.to_string()))
    }

    async fn create(&self, draft: &RecordDraft) -> Result<TargetRecord, SyncError> {
        self.create_record(draft)
            .await
            .map_err(|e| SyncError::Write(e.to_string()))
    }

    async fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<TargetRecord, SyncError> {
        self.update_record(id, draft)
            .await
            .map_err(|e| SyncError::Write(e.to_string()))
    }

    async fn set_status(
        &self,
        id: &RecordId,
        status: RecordStatus,
    ) -> Result<TargetRecord, SyncError> {
        self.update_status(id, status)
            .await
            .map_err(|e| SyncError::Write(e.to_string()))
    }
}
