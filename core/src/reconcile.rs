// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! The reconciliation planner.
//!
//! Given a fresh source snapshot and the previously-synchronized target
//! snapshot, compute the minimal set of create / update / cancel
//! operations using only the identity token and the content
//! fingerprint. No field-by-field diff, no external change log.

use std::collections::{HashMap, HashSet};

use crate::record::{RecordId, TargetRecord};
use crate::shift::{IdentityToken, ShiftRecord};

/// Operations needed to make the target consistent with the source.
///
/// The three sets are disjoint by construction: a record identifier
/// appearing in `to_update` can never appear in `to_cancel`, so the
/// driver may apply all operations concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// Shifts with no matching active target record.
    pub to_create: Vec<ShiftRecord>,
    /// Matched records whose fingerprint no longer agrees with the
    /// shift, paired with the store-owned identifier to rewrite.
    pub to_update: Vec<(RecordId, ShiftRecord)>,
    /// Managed records whose identity token vanished from the source.
    pub to_cancel: Vec<TargetRecord>,
}

impl Plan {
    /// Whether the pass has nothing to write.
    ///
    /// A re-run over unchanged source data must land here: that is the
    /// stability guarantee keeping no-op passes free of writes.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_create.is_empty() && self.to_update.is_empty() && self.to_cancel.is_empty()
    }

    /// Total number of planned operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_create.len() + self.to_update.len() + self.to_cancel.len()
    }

    /// Whether the plan holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_noop()
    }
}

/// Computes the operation plan from two snapshots.
///
/// Pure, total and deterministic: no I/O and no failure mode. The
/// caller is responsible for the window filter; only active,
/// future-dated target records may be passed in.
///
/// Matching rules:
/// - shift with no matching target → create
/// - match with equal fingerprints → no-op
/// - match with differing fingerprints → update in place
/// - attributable target with no matching shift → cancel
/// - target without a positively attributable identity token (foreign
///   or corrupted metadata) → excluded from matching, left untouched
///
/// If two shifts in one snapshot share an identity token the later one
/// wins. The roster contract forbids duplicates, so the collision is
/// logged instead of being silently resolved by map insertion order.
#[must_use]
pub fn reconcile(shifts: &[ShiftRecord], targets: &[TargetRecord], tag: &str) -> Plan {
    let mut by_token: HashMap<IdentityToken, &TargetRecord> = HashMap::with_capacity(targets.len());
    for target in targets {
        if let Some(token) = target.identity(tag) {
            by_token.insert(token, target);
        } else {
            tracing::debug!(id = %target.id, "record not attributable to this system, leaving untouched");
        }
    }

    // Deduplicate the source snapshot, preserving first-seen order.
    let mut deduped: Vec<&ShiftRecord> = Vec::with_capacity(shifts.len());
    let mut seen: HashMap<&IdentityToken, usize> = HashMap::with_capacity(shifts.len());
    for shift in shifts {
        if let Some(&slot) = seen.get(shift.identity()) {
            tracing::warn!(
                token = %shift.identity(),
                "duplicate identity token in source snapshot, keeping the later shift"
            );
            deduped[slot] = shift;
        } else {
            seen.insert(shift.identity(), deduped.len());
            deduped.push(shift);
        }
    }

    let mut plan = Plan::default();
    let mut claimed: HashSet<&IdentityToken> = HashSet::with_capacity(deduped.len());

    for shift in deduped {
        claimed.insert(shift.identity());
        match by_token.get(shift.identity()) {
            None => plan.to_create.push(shift.clone()),
            Some(target) => {
                // A missing echoed fingerprint counts as changed: the
                // record is ours but we cannot prove it is current.
                if target.fingerprint().as_ref() == Some(&shift.fingerprint()) {
                    continue;
                }
                plan.to_update.push((target.id.clone(), shift.clone()));
            }
        }
    }

    // Cancellations follow the listing order of the target snapshot so
    // the plan is reproducible for identical inputs.
    for target in targets {
        if let Some(token) = target.identity(tag)
            && !claimed.contains(&token)
        {
            plan.to_cancel.push(target.clone());
        }
    }

    plan
}
