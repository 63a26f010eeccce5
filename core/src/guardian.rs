// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Supervised polling loop with session recovery.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::client::{CalendarStore, ShiftSource};
use crate::driver::SyncEngine;

/// Supervises repeated reconciliation passes.
///
/// Scheduling is fixed-delay: the interval is measured from the end of
/// one pass to the start of the next, so a slow pass pushes the
/// schedule out instead of stacking concurrent passes. Exactly one
/// pass is ever in flight.
pub struct Supervisor<S, C> {
    engine: SyncEngine<S, C>,
    interval: Duration,
    token_path: Option<PathBuf>,
    shutdown: watch::Receiver<bool>,
}

impl<S, C> fmt::Debug for Supervisor<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("interval", &self.interval)
            .field("token_path", &self.token_path)
            .finish_non_exhaustive()
    }
}

impl<S: ShiftSource, C: CalendarStore> Supervisor<S, C> {
    /// Creates a supervisor around the engine.
    ///
    /// `shutdown` flips to `true` when the process should stop; the
    /// in-flight pass finishes before the loop exits.
    pub fn new(engine: SyncEngine<S, C>, shutdown: watch::Receiver<bool>) -> Self {
        let interval = engine.config().poll_interval();
        Self {
            engine,
            interval,
            token_path: None,
            shutdown,
        }
    }

    /// Persist re-authentication tokens to this file.
    #[must_use]
    pub fn with_token_path(mut self, path: PathBuf) -> Self {
        self.token_path = Some(path);
        self
    }

    /// The supervised engine.
    pub const fn engine(&self) -> &SyncEngine<S, C> {
        &self.engine
    }

    /// Runs passes until the shutdown signal fires.
    ///
    /// No pass outcome terminates the loop. A pass-level failure
    /// triggers one session probe and at most one re-login before the
    /// next scheduled pass; the failed pass itself is never retried
    /// immediately. That bounds worst-case recovery latency to one
    /// poll interval and keeps failures from looping tightly.
    pub async fn run(mut self) {
        loop {
            match self.engine.run_pass().await {
                Ok(report) if report.is_clean() => {
                    tracing::info!(
                        created = report.created,
                        updated = report.updated,
                        cancelled = report.cancelled,
                        "pass completed"
                    );
                }
                Ok(report) => {
                    tracing::warn!(
                        created = report.created,
                        updated = report.updated,
                        cancelled = report.cancelled,
                        skipped = report.skipped,
                        errors = report.errors.len(),
                        "pass completed with errors"
                    );
                }
                Err(err) => {
                    tracing::warn!(%err, "pass aborted");
                    self.recover().await;
                }
            }

            tokio::select! {
                () = time::sleep(self.interval) => {}
                changed = self.shutdown.changed() => {
                    // A dropped sender counts as a shutdown request;
                    // anything else would leave this arm permanently
                    // ready and skip the poll delay.
                    if changed.is_err() || *self.shutdown.borrow() {
                        tracing::info!("shutdown requested, stopping sync loop");
                        break;
                    }
                }
            }
        }
    }

    /// Runs exactly one pass plus recovery, for callers with their own
    /// scheduler.
    pub async fn run_once(&mut self) {
        if let Err(err) = self.engine.run_pass().await {
            tracing::warn!(%err, "pass aborted");
            self.recover().await;
        }
    }

    async fn recover(&mut self) {
        match self.engine.source().is_session_valid().await {
            Ok(true) => {
                tracing::debug!("session still valid, leaving the failure to the next pass");
            }
            Ok(false) => self.reauthenticate().await,
            Err(err) => {
                // A failing probe is treated like an invalid session;
                // one login attempt, then back to the schedule.
                tracing::warn!(%err, "session probe failed");
                self.reauthenticate().await;
            }
        }
    }

    async fn reauthenticate(&self) {
        match self.engine.source().login().await {
            Ok(token) => {
                tracing::info!("re-authenticated against the roster");
                if let Some(path) = &self.token_path
                    && let Err(err) = tokio::fs::write(path, token.as_str()).await
                {
                    tracing::warn!(path = %path.display(), %err, "failed to persist auth token");
                }
            }
            Err(err) => {
                tracing::warn!(%err, "re-authentication failed, next pass will retry");
            }
        }
    }
}
