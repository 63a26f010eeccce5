// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use crate::shift::IdentityToken;

/// Errors raised while synchronizing the calendar store with the roster.
///
/// The variants carry the pass-level policy with them: translation and
/// write failures are recorded per record and the pass continues; fetch
/// failures and session expiry abort the pass before any write, since a
/// partial snapshot cannot be reconciled safely.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncError {
    /// Malformed source record; the offending shift is skipped.
    #[error("malformed shift {token}: {reason}")]
    Translation {
        /// Identity token of the offending shift.
        token: IdentityToken,
        /// What made the record untranslatable.
        reason: String,
    },

    /// The target store rejected a single create, update or cancel.
    #[error("target store write failed: {0}")]
    Write(String),

    /// A snapshot could not be retrieved from either client.
    #[error("snapshot fetch failed: {0}")]
    Fetch(String),

    /// The source session is no longer authenticated.
    #[error("source session expired")]
    SessionExpired,

    /// Unusable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SyncError {
    /// Whether this error aborts the whole pass rather than a single
    /// record.
    #[must_use]
    pub const fn aborts_pass(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::SessionExpired | Self::Config(_))
    }
}
