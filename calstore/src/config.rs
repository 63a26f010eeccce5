// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

/// Calendar store configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CalStoreConfig {
    /// Base URL of the calendar store API.
    pub base_url: String,
    /// Identifier of the calendar to synchronize into.
    pub calendar_id: String,
    /// API token.
    pub token: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("shiftcal-calstore/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CalStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            calendar_id: String::new(),
            token: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
