// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Pure translation from a roster shift to a target record draft.

use std::collections::BTreeMap;

use crate::error::SyncError;
use crate::record::{META_FINGERPRINT, META_IDENTITY, META_TAG, RecordDraft};
use crate::shift::ShiftRecord;

/// Translates a shift into a draft ready to be written to the store.
///
/// Pure: all side effects happen in the driver. The draft embeds the
/// sync tag, the identity token and the content fingerprint in its
/// metadata bag so a later pass can re-attribute and re-compare the
/// record without any external change log.
///
/// `prior_color` is the last observed display color from the previous
/// target snapshot; threading it through keeps a human-assigned color
/// on the series instead of resetting it on every update. If absent,
/// no color is set and the store applies its default.
///
/// # Errors
///
/// Returns [`SyncError::Translation`] for malformed source records:
/// an empty identity token or a non-positive duration. The driver
/// skips such records and continues the pass.
pub fn translate(
    shift: &ShiftRecord,
    time_zone: &str,
    tag: &str,
    prior_color: Option<&str>,
) -> Result<RecordDraft, SyncError> {
    if shift.id.is_empty() {
        return Err(SyncError::Translation {
            token: shift.id.clone(),
            reason: "empty identity token".to_string(),
        });
    }
    if shift.end <= shift.start {
        return Err(SyncError::Translation {
            token: shift.id.clone(),
            reason: format!("shift ends at {} before it starts at {}", shift.end, shift.start),
        });
    }

    let mut metadata = BTreeMap::new();
    metadata.insert(META_TAG.to_string(), tag.to_string());
    metadata.insert(META_IDENTITY.to_string(), shift.id.as_str().to_string());
    metadata.insert(
        META_FINGERPRINT.to_string(),
        shift.fingerprint().as_str().to_string(),
    );

    Ok(RecordDraft {
        summary: format!("{} @ {}", shift.role, shift.location),
        description: shift.note.clone(),
        start: shift.start,
        end: shift.end,
        time_zone: time_zone.to_string(),
        color: prior_color.map(str::to_string),
        metadata,
    })
}
