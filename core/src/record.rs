// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Target-side record model and the opaque metadata bag.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use jiff::Timestamp;

use crate::fingerprint::Fingerprint;
use crate::shift::IdentityToken;

/// Metadata key marking a record as managed by this system.
pub const META_TAG: &str = "shiftcal/tag";

/// Metadata key echoing the shift's identity token.
pub const META_IDENTITY: &str = "shiftcal/shift-id";

/// Metadata key echoing the fingerprint from the last successful write.
pub const META_FINGERPRINT: &str = "shiftcal/fingerprint";

/// Target-assigned record identifier.
///
/// Opaque and owned by the calendar store. Distinct from the identity
/// token: the store mints a fresh one for every created record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new `RecordId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for RecordId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Lifecycle status of a target record.
///
/// Stale records are cancelled, never hard-deleted: the record stays
/// in the store for audit and its identity token can never be raced
/// onto a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// The record is live on the calendar.
    Active,
    /// The record has been withdrawn and left the reconciliation window.
    Cancelled,
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// A record as stored in the target calendar.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetRecord {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Display summary.
    pub summary: String,
    /// Display description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Start instant.
    pub start: Timestamp,
    /// End instant.
    pub end: Timestamp,
    /// IANA timezone name qualifying start and end for display.
    pub time_zone: String,
    /// Display color slot, human-assignable in the store's UI.
    #[serde(default)]
    pub color: Option<String>,
    /// Lifecycle status.
    pub status: RecordStatus,
    /// Opaque metadata bag, round-tripped verbatim by the store.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl TargetRecord {
    /// Identity token echoed from the shift this record was written
    /// from, if the record is positively attributable to this system.
    ///
    /// Returns `None` for foreign or corrupted records: those carry no
    /// matching sync tag under [`META_TAG`] or no token under
    /// [`META_IDENTITY`]. Such records must never be updated or
    /// cancelled.
    #[must_use]
    pub fn identity(&self, tag: &str) -> Option<IdentityToken> {
        if self.metadata.get(META_TAG).map(String::as_str) != Some(tag) {
            return None;
        }
        self.metadata
            .get(META_IDENTITY)
            .filter(|token| !token.is_empty())
            .map(|token| IdentityToken::from(token.as_str()))
    }

    /// Fingerprint echoed at the last successful create or update.
    #[must_use]
    pub fn fingerprint(&self) -> Option<Fingerprint> {
        self.metadata
            .get(META_FINGERPRINT)
            .map(|digest| Fingerprint::from(digest.as_str()))
    }
}

/// A record draft to be written to the target store.
///
/// Produced by the translator; carries everything a create or update
/// needs, including the metadata bag.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordDraft {
    /// Display summary.
    pub summary: String,
    /// Display description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Start instant.
    pub start: Timestamp,
    /// End instant.
    pub end: Timestamp,
    /// IANA timezone name qualifying start and end for display.
    pub time_zone: String,
    /// Display color, carried forward from the prior snapshot if any.
    #[serde(default)]
    pub color: Option<String>,
    /// Metadata bag: sync tag, identity token, fingerprint.
    pub metadata: BTreeMap<String, String>,
}

/// Listing filter restricting the target snapshot to records this
/// system manages and that are still inside the reconciliation window.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter {
    /// Sync tag the records must carry.
    pub tag: String,
    /// Required lifecycle status.
    pub status: RecordStatus,
    /// Earliest start instant; past records are never touched.
    pub min_start: Timestamp,
}
