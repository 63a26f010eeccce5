// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories.

use jiff::Timestamp;
use shiftcal_core::{RecordId, RecordStatus, ShiftRecord, TargetRecord, translate};

/// The pinned "now" used by driver tests.
pub const T0: i64 = 1_769_990_000;
/// Start of the first test shift (after `T0`).
pub const T1: i64 = 1_770_000_000;
/// End of the first test shift.
pub const T2: i64 = 1_770_028_800;
/// Start of a later test shift.
pub const T3: i64 = 1_770_086_400;

/// A future-dated shift starting at [`T1`].
#[must_use]
pub fn shift(id: &str, role: &str) -> ShiftRecord {
    shift_at(id, role, T1, T2)
}

/// A shift guaranteed to start after the wall clock, for tests that
/// drive passes with the real `Timestamp::now()`.
#[must_use]
pub fn future_shift(id: &str, role: &str) -> ShiftRecord {
    let start = Timestamp::now().as_second() + 3_600;
    shift_at(id, role, start, start + 28_800)
}

/// A shift with explicit start/end seconds.
#[must_use]
pub fn shift_at(id: &str, role: &str, start: i64, end: i64) -> ShiftRecord {
    ShiftRecord {
        id: id.into(),
        role: role.to_string(),
        location: "Downtown".to_string(),
        start: Timestamp::from_second(start).unwrap(),
        end: Timestamp::from_second(end).unwrap(),
        note: None,
    }
}

/// The target record a completed pass would have written for `shift`,
/// with a store-minted identifier derived from the token.
#[must_use]
pub fn target_from(shift: &ShiftRecord, tag: &str) -> TargetRecord {
    let draft = translate(shift, "UTC", tag, None).expect("fixture shift must translate");
    TargetRecord {
        id: RecordId::from(format!("G-{}", shift.identity())),
        summary: draft.summary,
        description: draft.description,
        start: draft.start,
        end: draft.end,
        time_zone: draft.time_zone,
        color: draft.color,
        status: RecordStatus::Active,
        metadata: draft.metadata,
    }
}
