// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! The shiftcal daemon: a single long-running process that keeps a
//! calendar store consistent with a shift roster.

mod config;

use std::error::Error;

use shiftcal_calstore::CalStoreClient;
use shiftcal_core::{Supervisor, SyncEngine};
use shiftcal_roster::RosterClient;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::from_env()?;

    let roster = RosterClient::new(config.roster)?;
    seed_session(&roster, config.token_file.as_deref()).await;

    let store = CalStoreClient::new(config.store)?;
    let engine = SyncEngine::new(roster, store, config.sync);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut supervisor = Supervisor::new(engine, shutdown_rx);
    if let Some(path) = config.token_file {
        supervisor = supervisor.with_token_path(path);
    }

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("interrupt received, shutting down after the current pass");
                let _ = shutdown_tx.send(true);
            }
            Err(err) => tracing::error!(%err, "failed to listen for the interrupt signal"),
        }
    });

    supervisor.run().await;
    tracing::info!("shiftcal stopped");
    Ok(())
}

/// Seeds the roster session: a persisted token if one exists, a fresh
/// login otherwise. Failures are logged, not fatal; the supervisor's
/// recovery path re-authenticates before the next pass.
async fn seed_session(roster: &RosterClient, token_file: Option<&std::path::Path>) {
    if let Some(path) = token_file {
        match tokio::fs::read_to_string(path).await {
            Ok(token) if !token.trim().is_empty() => {
                tracing::debug!(path = %path.display(), "using persisted session token");
                roster.set_token(token.trim());
                return;
            }
            Ok(_) => tracing::debug!(path = %path.display(), "token file is empty"),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no persisted session token");
            }
        }
    }

    match roster.create_session().await {
        Ok(token) => {
            if let Some(path) = token_file
                && let Err(err) = tokio::fs::write(path, &token).await
            {
                tracing::warn!(path = %path.display(), %err, "failed to persist auth token");
            }
        }
        Err(err) => {
            tracing::warn!(%err, "initial login failed, the sync loop will retry");
        }
    }
}
