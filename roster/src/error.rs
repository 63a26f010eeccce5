// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use shiftcal_core::SyncError;

/// Roster client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// HTTP layer error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The roster rejected the login credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The session token is no longer accepted.
    #[error("session expired")]
    SessionExpired,

    /// Invalid response from the server.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for RosterError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<RosterError> for SyncError {
    fn from(e: RosterError) -> Self {
        match e {
            RosterError::SessionExpired => Self::SessionExpired,
            RosterError::Config(msg) => Self::Config(msg),
            other => Self::Fetch(other.to_string()),
        }
    }
}
