// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! One reconciliation pass: fetch both snapshots, plan, apply.

use std::fmt;

use futures::StreamExt;
use futures::stream;
use jiff::Timestamp;

use crate::client::{CalendarStore, ShiftSource};
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::record::{RecordDraft, RecordFilter, RecordId, RecordStatus};
use crate::reconcile::reconcile;
use crate::translate::translate;

/// Outcome of one reconciliation pass.
///
/// A pass with a non-empty `errors` list still counts as completed for
/// scheduling purposes; the caller decides whether to alert on it.
#[derive(Debug, Default)]
pub struct PassReport {
    /// Records created.
    pub created: usize,
    /// Records rewritten in place.
    pub updated: usize,
    /// Records transitioned to cancelled.
    pub cancelled: usize,
    /// Source records skipped because they failed translation.
    pub skipped: usize,
    /// Per-record failures collected over the pass.
    pub errors: Vec<SyncError>,
}

impl PassReport {
    /// Whether every planned operation succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A planned write, translated and ready to issue.
enum Op {
    Create(RecordDraft),
    Update(RecordId, RecordDraft),
    Cancel(RecordId),
}

/// What an applied operation did, for the report tally.
enum Applied {
    Created,
    Updated,
    Cancelled,
}

/// Drives one fetch-compute-apply cycle against the two clients.
pub struct SyncEngine<S, C> {
    source: S,
    store: C,
    config: SyncConfig,
}

impl<S, C> fmt::Debug for SyncEngine<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: ShiftSource, C: CalendarStore> SyncEngine<S, C> {
    /// Creates a sync engine over the given collaborators.
    pub const fn new(source: S, store: C, config: SyncConfig) -> Self {
        Self {
            source,
            store,
            config,
        }
    }

    /// The source client, for session recovery by the supervisor.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The target store client.
    pub const fn store(&self) -> &C {
        &self.store
    }

    /// The active configuration.
    pub const fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Runs one reconciliation pass.
    ///
    /// Fetch failures and session expiry abort the pass before any
    /// write is issued: reconciling against a partial snapshot would be
    /// read as "cancel everything" or "create everything". Individual
    /// translation and write failures are recorded in the report and
    /// the remaining operations are still attempted.
    #[tracing::instrument(skip(self))]
    pub async fn run_pass(&self) -> Result<PassReport, SyncError> {
        let now = Timestamp::now();
        self.run_pass_at(now).await
    }

    /// Same as [`run_pass`](Self::run_pass) with an explicit "now",
    /// which pins the reconciliation window in tests.
    pub async fn run_pass_at(&self, now: Timestamp) -> Result<PassReport, SyncError> {
        let shifts = self.source.list_shifts(now).await?;

        let filter = RecordFilter {
            tag: self.config.tag.clone(),
            status: RecordStatus::Active,
            min_start: now,
        };
        let targets = self.store.list_records(&filter).await?;
        tracing::debug!(
            shifts = shifts.len(),
            targets = targets.len(),
            "snapshots fetched"
        );

        // Color hint: the last record of the listing, carried forward
        // so a human-assigned color on the series survives updates.
        let prior_color = targets.last().and_then(|t| t.color.clone());

        let plan = reconcile(&shifts, &targets, &self.config.tag);
        tracing::info!(
            create = plan.to_create.len(),
            update = plan.to_update.len(),
            cancel = plan.to_cancel.len(),
            "plan computed"
        );

        let mut report = PassReport::default();
        let mut ops: Vec<Op> = Vec::with_capacity(plan.len());

        for shift in plan.to_create {
            match translate(&shift, &self.config.time_zone, &self.config.tag, prior_color.as_deref())
            {
                Ok(draft) => ops.push(Op::Create(draft)),
                Err(err) => {
                    tracing::warn!(token = %shift.identity(), %err, "skipping untranslatable shift");
                    report.skipped += 1;
                    report.errors.push(err);
                }
            }
        }
        for (id, shift) in plan.to_update {
            match translate(&shift, &self.config.time_zone, &self.config.tag, prior_color.as_deref())
            {
                Ok(draft) => ops.push(Op::Update(id, draft)),
                Err(err) => {
                    tracing::warn!(token = %shift.identity(), %err, "skipping untranslatable shift");
                    report.skipped += 1;
                    report.errors.push(err);
                }
            }
        }
        ops.extend(plan.to_cancel.into_iter().map(|t| Op::Cancel(t.id)));

        // The plan's operations touch disjoint record identifiers, so
        // they may be issued concurrently up to the configured bound.
        let results: Vec<Result<Applied, SyncError>> = stream::iter(ops)
            .map(|op| self.apply(op))
            .buffer_unordered(self.config.fan_out.max(1))
            .collect()
            .await;

        for result in results {
            match result {
                Ok(Applied::Created) => report.created += 1,
                Ok(Applied::Updated) => report.updated += 1,
                Ok(Applied::Cancelled) => report.cancelled += 1,
                Err(err) => {
                    tracing::warn!(%err, "write failed, continuing pass");
                    report.errors.push(err);
                }
            }
        }

        Ok(report)
    }

    async fn apply(&self, op: Op) -> Result<Applied, SyncError> {
        match op {
            Op::Create(draft) => {
                let record = self.store.create(&draft).await?;
                tracing::debug!(id = %record.id, summary = %draft.summary, "record created");
                Ok(Applied::Created)
            }
            Op::Update(id, draft) => {
                self.store.update(&id, &draft).await?;
                tracing::debug!(%id, summary = %draft.summary, "record updated");
                Ok(Applied::Updated)
            }
            Op::Cancel(id) => {
                // Status mutation, not deletion: the record stays for
                // audit and its token can never be raced onto a new one.
                self.store.set_status(&id, RecordStatus::Cancelled).await?;
                tracing::debug!(%id, "record cancelled");
                Ok(Applied::Cancelled)
            }
        }
    }
}
