// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the target calendar store: filtered record listing,
//! create, in-place update and status mutation, with the opaque
//! metadata bag round-tripped verbatim. Implements
//! [`shiftcal_core::CalendarStore`].

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

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::CalStoreClient;
pub use crate::config::CalStoreConfig;
pub use crate::error::StoreError;
pub use crate::types::StatusUpdate;
