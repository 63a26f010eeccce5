// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Collaborator traits for the two external systems.
//!
//! The core never talks to the network itself: it is written against
//! these traits and exercised in tests with in-memory implementations.
//! The `shiftcal-roster` and `shiftcal-calstore` crates provide the
//! HTTP-backed ones.

use std::fmt;

use async_trait::async_trait;
use jiff::Timestamp;

use crate::error::SyncError;
use crate::record::{RecordDraft, RecordFilter, RecordId, RecordStatus, TargetRecord};
use crate::shift::ShiftRecord;

/// Bearer token returned by a successful roster login.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates an `AuthToken` from a string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Redacted Debug: tokens must not leak into logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// The authoritative source of scheduled shifts.
#[async_trait]
pub trait ShiftSource: Send + Sync {
    /// Authenticates against the roster, returning the fresh token.
    ///
    /// The implementation is expected to start using the new token for
    /// subsequent calls on its own.
    async fn login(&self) -> Result<AuthToken, SyncError>;

    /// Probes whether the current session is still accepted.
    ///
    /// This is an explicit state check, not an inference from error
    /// text of a failed call.
    async fn is_session_valid(&self) -> Result<bool, SyncError>;

    /// Lists shifts starting at or after `from`.
    async fn list_shifts(&self, from: Timestamp) -> Result<Vec<ShiftRecord>, SyncError>;
}

/// The target calendar store.
///
/// The store needs no notion of "managed by shiftcal" beyond the
/// opaque metadata bag it round-trips verbatim on every record.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Lists records matching the filter, in the store's own order.
    async fn list_records(&self, filter: &RecordFilter) -> Result<Vec<TargetRecord>, SyncError>;

    /// Creates a record from the draft.
    async fn create(&self, draft: &RecordDraft) -> Result<TargetRecord, SyncError>;

    /// Rewrites an existing record in place, keeping its identifier.
    async fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<TargetRecord, SyncError>;

    /// Mutates a record's lifecycle status. Never deletes.
    async fn set_status(
        &self,
        id: &RecordId,
        status: RecordStatus,
    ) -> Result<TargetRecord, SyncError>;
}
