// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the authoritative shift roster: session login,
//! session probing and shift listing. Implements
//! [`shiftcal_core::ShiftSource`].

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

pub use crate::client::RosterClient;
pub use crate::config::RosterConfig;
pub use crate::error::RosterError;
pub use crate::types::{SessionRequest, SessionResponse, ShiftDto};
