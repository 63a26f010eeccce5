// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use jiff::Timestamp;

/// Stable key correlating one real-world shift across polls.
///
/// The roster assigns this token once and keeps it fixed for the
/// lifetime of the shift, no matter how its content changes. On the
/// target side it is written into a record's metadata at creation and
/// never rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Creates a new `IdentityToken` from a string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty, which the roster contract forbids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for IdentityToken {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for IdentityToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for IdentityToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// A scheduled work shift as reported by the roster.
///
/// Immutable within one reconciliation pass. The `id` is the identity
/// token; everything else is content that may change between polls.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShiftRecord {
    /// The roster's stable unique key for this shift.
    pub id: IdentityToken,
    /// Role or position worked during the shift.
    pub role: String,
    /// Location the shift is worked at.
    pub location: String,
    /// Start instant.
    pub start: Timestamp,
    /// End instant.
    pub end: Timestamp,
    /// Free-form note shown in the calendar entry, if any.
    pub note: Option<String>,
}

impl ShiftRecord {
    /// The identity token of this shift.
    ///
    /// This is a plain key lookup, computed independently from
    /// [`fingerprint`](Self::fingerprint): a content change never moves
    /// the identity, and a (hypothetical) token change never moves the
    /// fingerprint.
    #[must_use]
    pub fn identity(&self) -> &IdentityToken {
        &self.id
    }
}
