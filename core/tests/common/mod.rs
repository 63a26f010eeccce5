// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared test infrastructure: shift/record factories and in-memory
//! implementations of the two collaborator traits.

// Each integration test crate compiles its own copy; not every crate
// uses every helper.
#![allow(dead_code)]

mod fixtures;
mod mock;

#[allow(unused_imports)]
pub use fixtures::{T0, T1, T2, T3, future_shift, shift, shift_at, target_from};
#[allow(unused_imports)]
pub use mock::{MockSource, MockStore};
