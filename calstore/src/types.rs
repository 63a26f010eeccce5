// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use shiftcal_core::RecordStatus;

/// Body of a status mutation request.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdate {
    /// The status to transition the record to.
    pub status: RecordStatus,
}
