// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory collaborator implementations for driver and guardian
//! tests. They honor the same contracts as the HTTP clients: the store
//! applies the listing filter itself, the source rejects calls once
//! its session is marked expired.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use jiff::Timestamp;
use shiftcal_core::{
    AuthToken, CalendarStore, META_TAG, RecordDraft, RecordFilter, RecordId, RecordStatus,
    ShiftRecord, ShiftSource, SyncError, TargetRecord,
};

/// In-memory shift roster.
#[derive(Default)]
pub struct MockSource {
    shifts: Mutex<Vec<ShiftRecord>>,
    session_valid: AtomicBool,
    fail_fetch: AtomicBool,
    /// Number of `login` calls observed.
    pub login_calls: AtomicUsize,
    /// Number of `is_session_valid` calls observed.
    pub probe_calls: AtomicUsize,
}

impl MockSource {
    #[must_use]
    pub fn new(shifts: Vec<ShiftRecord>) -> Self {
        let source = Self::default();
        source.session_valid.store(true, Ordering::SeqCst);
        *source.shifts.lock().unwrap() = shifts;
        source
    }

    pub fn set_shifts(&self, shifts: Vec<ShiftRecord>) {
        *self.shifts.lock().unwrap() = shifts;
    }

    /// Marks the session as silently expired, as the roster does.
    pub fn expire_session(&self) {
        self.session_valid.store(false, Ordering::SeqCst);
    }

    /// Makes `list_shifts` fail with a transport error.
    pub fn fail_next_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ShiftSource for MockSource {
    async fn login(&self) -> Result<AuthToken, SyncError> {
        let n = self.login_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.session_valid.store(true, Ordering::SeqCst);
        Ok(AuthToken::from(format!("token-{n}")))
    }

    async fn is_session_valid(&self) -> Result<bool, SyncError> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.session_valid.load(Ordering::SeqCst))
    }

    async fn list_shifts(&self, from: Timestamp) -> Result<Vec<ShiftRecord>, SyncError> {
        if !self.session_valid.load(Ordering::SeqCst) {
            return Err(SyncError::SessionExpired);
        }
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SyncError::Fetch("roster unreachable".to_string()));
        }
        Ok(self
            .shifts
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.start >= from)
            .cloned()
            .collect())
    }
}

/// In-memory calendar store.
#[derive(Default)]
pub struct MockStore {
    records: Mutex<Vec<TargetRecord>>,
    next_id: AtomicUsize,
    fail_list: AtomicBool,
    fail_create_summaries: Mutex<HashSet<String>>,
}

impl MockStore {
    #[must_use]
    pub fn new(records: Vec<TargetRecord>) -> Self {
        let store = Self::default();
        *store.records.lock().unwrap() = records;
        store
    }

    /// A snapshot of everything the store holds, regardless of filter.
    #[must_use]
    pub fn records(&self) -> Vec<TargetRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Makes `list_records` fail with a transport error.
    pub fn fail_next_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Rejects creates whose draft carries this summary.
    pub fn fail_create_for(&self, summary: &str) {
        self.fail_create_summaries
            .lock()
            .unwrap()
            .insert(summary.to_string());
    }

    fn mint_id(&self) -> RecordId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        RecordId::from(format!("G{n}"))
    }
}

fn record_from_draft(id: RecordId, draft: &RecordDraft) -> TargetRecord {
    TargetRecord {
        id,
        summary: draft.summary.clone(),
        description: draft.description.clone(),
        start: draft.start,
        end: draft.end,
        time_zone: draft.time_zone.clone(),
        color: draft.color.clone(),
        status: RecordStatus::Active,
        metadata: draft.metadata.clone(),
    }
}

#[async_trait]
impl CalendarStore for MockStore {
    async fn list_records(&self, filter: &RecordFilter) -> Result<Vec<TargetRecord>, SyncError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(SyncError::Fetch("calendar store unreachable".to_string()));
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.status == filter.status
                    && r.start >= filter.min_start
                    && r.metadata.get(META_TAG).map(String::as_str) == Some(filter.tag.as_str())
            })
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &RecordDraft) -> Result<TargetRecord, SyncError> {
        if self.fail_create_summaries.lock().unwrap().contains(&draft.summary) {
            return Err(SyncError::Write(format!("create rejected: {}", draft.summary)));
        }
        let record = record_from_draft(self.mint_id(), draft);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<TargetRecord, SyncError> {
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| SyncError::Write(format!("no such record: {id}")))?;
        *slot = record_from_draft(id.clone(), draft);
        Ok(slot.clone())
    }

    async fn set_status(
        &self,
        id: &RecordId,
        status: RecordStatus,
    ) -> Result<TargetRecord, SyncError> {
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| SyncError::Write(format!("no such record: {id}")))?;
        slot.status = status;
        Ok(slot.clone())
    }
}
