// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Default sync tag marking records as managed by this system.
pub const DEFAULT_TAG: &str = "shiftcal";

const fn default_poll_minutes() -> u64 {
    10
}

const fn default_fan_out() -> usize {
    4
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

/// Synchronization configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SyncConfig {
    /// Sync tag written into and matched against record metadata.
    #[serde(default = "default_tag")]
    pub tag: String,

    /// IANA timezone name qualifying start/end in written records.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Minutes of fixed delay between the end of one pass and the
    /// start of the next.
    #[serde(default = "default_poll_minutes")]
    pub poll_minutes: u64,

    /// Upper bound on concurrent writes within one pass. The planned
    /// operations touch disjoint records, so fan-out is safe.
    #[serde(default = "default_fan_out")]
    pub fan_out: usize,
}

impl SyncConfig {
    /// The fixed delay between passes.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_minutes * 60)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            time_zone: default_time_zone(),
            poll_minutes: default_poll_minutes(),
            fan_out: default_fan_out(),
        }
    }
}
