// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the shiftcal synchronizer: keeps a target calendar store
//! consistent with an authoritative shift roster, one-way, using only
//! a stable identity token and a content fingerprint embedded in the
//! store's opaque metadata bag.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod client;
mod config;
mod driver;
mod error;
mod fingerprint;
mod guardian;
mod reconcile;
mod record;
mod shift;
mod translate;

pub use crate::client::{AuthToken, CalendarStore, ShiftSource};
pub use crate::config::{DEFAULT_TAG, SyncConfig};
pub use crate::driver::{PassReport, SyncEngine};
pub use crate::error::SyncError;
pub use crate::fingerprint::Fingerprint;
pub use crate::guardian::Supervisor;
pub use crate::reconcile::{Plan, reconcile};
pub use crate::record::{
    META_FINGERPRINT, META_IDENTITY, META_TAG, RecordDraft, RecordFilter, RecordId, RecordStatus,
    TargetRecord,
};
pub use crate::shift::{IdentityToken, ShiftRecord};
pub use crate::translate::translate;
