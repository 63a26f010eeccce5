// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Content fingerprint for change detection without a full field diff.

use std::fmt;
use std::ops::Deref;

use crate::shift::ShiftRecord;

/// Hex characters kept from the digest.
const DIGEST_LEN: usize = 16;

/// Fields are joined with an unprintable separator so content cannot
/// alias across field boundaries.
const FIELD_SEP: char = '\x1f';

/// Short hash over a shift's mutable content fields.
///
/// Two shifts with the same role, location, start and end produce the
/// same fingerprint; any semantic change produces a different one.
/// The identity token is deliberately excluded from the preimage, as
/// are server-side bookkeeping fields that change on every fetch.
///
/// Collisions are treated as cryptographically negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Creates a `Fingerprint` from an already-computed digest string.
    #[must_use]
    pub const fn new(digest: String) -> Self {
        Self(digest)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Fingerprint {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Fingerprint {
    fn from(digest: String) -> Self {
        Self(digest)
    }
}

impl From<&str> for Fingerprint {
    fn from(digest: &str) -> Self {
        Self(digest.to_string())
    }
}

impl ShiftRecord {
    /// Computes the content fingerprint of this shift.
    ///
    /// Deterministic across process restarts and retrieval order: the
    /// preimage is rebuilt from the semantic fields alone, with
    /// timestamps rendered in RFC 3339 UTC.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        let preimage = format!(
            "{role}{sep}{location}{sep}{start}{sep}{end}",
            role = self.role,
            location = self.location,
            start = self.start,
            end = self.end,
            sep = FIELD_SEP,
        );

        let mut digest = blake3::hash(preimage.as_bytes()).to_hex().to_string();
        digest.truncate(DIGEST_LEN);
        Fingerprint(digest)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::shift::{IdentityToken, ShiftRecord};

    fn shift(id: &str, role: &str) -> ShiftRecord {
        ShiftRecord {
            id: IdentityToken::from(id),
            role: role.to_string(),
            location: "Downtown".to_string(),
            start: Timestamp::from_second(1_770_000_000).unwrap(),
            end: Timestamp::from_second(1_770_028_800).unwrap(),
            note: None,
        }
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let a = shift("S1", "Barista");
        let b = shift("S1", "Barista");
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().as_str().len(), super::DIGEST_LEN);
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = shift("S1", "Barista");
        let mut b = shift("S1", "Trainee");
        assert_ne!(a.fingerprint(), b.fingerprint());

        b.role.clone_from(&a.role);
        assert_eq!(a.fingerprint(), b.fingerprint());

        b.location = "Harbour".to_string();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_ignores_identity_token() {
        // Identity and fingerprint are independent derivations: moving
        // one must not move the other.
        let a = shift("S1", "Barista");
        let b = shift("S2", "Barista");
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.identity(), b.identity());

        let c = shift("S1", "Trainee");
        assert_eq!(a.identity(), c.identity());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn fingerprint_ignores_note() {
        let a = shift("S1", "Barista");
        let mut b = shift("S1", "Barista");
        b.note = Some("viewed 2026-08-30".to_string());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_does_not_alias_across_fields() {
        let mut a = shift("S1", "Barista");
        a.role = "Bar".to_string();
        a.location = "istaDowntown".to_string();
        let b = shift("S1", "Barista");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
