// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use shiftcal_core::ShiftRecord;

/// Session creation request body.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SessionRequest<'a> {
    /// Login username.
    pub username: &'a str,
    /// Login password.
    pub password: &'a str,
}

/// Session creation response body.
#[derive(Debug, serde::Deserialize)]
pub struct SessionResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// A shift as the roster API reports it.
///
/// Carries server-side bookkeeping fields (`updated_at`) that change
/// on every fetch; those never reach the core model's fingerprint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ShiftDto {
    /// The roster's stable unique key.
    pub id: String,
    /// Role or position name.
    pub position: String,
    /// Location name.
    pub location: String,
    /// Start instant, RFC 3339.
    pub start: Timestamp,
    /// End instant, RFC 3339.
    pub end: Timestamp,
    /// Free-form note, if any.
    #[serde(default)]
    pub note: Option<String>,
    /// Server-side modification stamp; non-semantic.
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl From<ShiftDto> for ShiftRecord {
    fn from(dto: ShiftDto) -> Self {
        Self {
            id: dto.id.into(),
            role: dto.position,
            location: dto.location,
            start: dto.start,
            end: dto.end,
            note: dto.note,
        }
    }
}
