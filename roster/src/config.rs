// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

/// Roster server configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RosterConfig {
    /// Base URL of the roster API.
    pub base_url: String,
    /// Username for session creation.
    pub username: String,
    /// Password for session creation.
    pub password: String,
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
    concat!("shiftcal-roster/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
