// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use shiftcal_core::RecordId;

/// Calendar store client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP layer error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Record not found.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Invalid response from the server.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
