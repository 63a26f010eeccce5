// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Environment configuration for the daemon.
//!
//! The process has no command surface beyond start; everything is
//! supplied through `SHIFTCAL_*` environment variables.

use std::env;
use std::error::Error;
use std::path::PathBuf;

use shiftcal_calstore::CalStoreConfig;
use shiftcal_core::SyncConfig;
use shiftcal_roster::RosterConfig;

/// Fully assembled daemon configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Roster client configuration.
    pub roster: RosterConfig,
    /// Calendar store client configuration.
    pub store: CalStoreConfig,
    /// Core synchronization configuration.
    pub sync: SyncConfig,
    /// Where to persist the roster session token, if anywhere.
    pub token_file: Option<PathBuf>,
}

/// Reads the configuration from the process environment.
pub fn from_env() -> Result<Config, Box<dyn Error>> {
    from_lookup(|key| env::var(key).ok())
}

/// Assembles the configuration from an arbitrary variable lookup.
pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |key: &str| {
        lookup(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| format!("Missing required environment variable: {key}"))
    };

    let roster = RosterConfig {
        base_url: require("SHIFTCAL_ROSTER_URL")?,
        username: require("SHIFTCAL_ROSTER_USER")?,
        password: require("SHIFTCAL_ROSTER_PASSWORD")?,
        ..Default::default()
    };

    let store = CalStoreConfig {
        base_url: require("SHIFTCAL_CALENDAR_URL")?,
        calendar_id: require("SHIFTCAL_CALENDAR_ID")?,
        token: require("SHIFTCAL_CALENDAR_TOKEN")?,
        ..Default::default()
    };

    let mut sync = SyncConfig {
        time_zone: lookup("SHIFTCAL_TIME_ZONE").unwrap_or_else(system_time_zone),
        ..Default::default()
    };
    if let Some(tag) = lookup("SHIFTCAL_SYNC_TAG")
        && !tag.is_empty()
    {
        sync.tag = tag;
    }
    if let Some(minutes) = lookup("SHIFTCAL_POLL_MINUTES") {
        sync.poll_minutes = minutes
            .parse()
            .map_err(|e| format!("Invalid SHIFTCAL_POLL_MINUTES {minutes:?}: {e}"))?;
    }

    let token_file = lookup("SHIFTCAL_TOKEN_FILE").map(PathBuf::from);

    Ok(Config {
        roster,
        store,
        sync,
        token_file,
    })
}

fn system_time_zone() -> String {
    jiff::tz::TimeZone::system()
        .iana_name()
        .unwrap_or("UTC")
        .to_string()
}
