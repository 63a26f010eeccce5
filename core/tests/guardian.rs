// SPDX-FileCopyrightText: 2026 Mara Jelen <mara@shiftcal.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Session guardian tests: probe-then-reauth-once recovery, token
//! persistence and graceful shutdown.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use shiftcal_core::{Supervisor, SyncConfig, SyncEngine};
use tokio::sync::watch;

use crate::common::{MockSource, MockStore, future_shift};

fn supervisor(
    source: MockSource,
) -> (Supervisor<MockSource, MockStore>, watch::Sender<bool>) {
    let engine = SyncEngine::new(source, MockStore::default(), SyncConfig::default());
    let (tx, rx) = watch::channel(false);
    (Supervisor::new(engine, rx), tx)
}

#[tokio::test]
async fn expired_session_triggers_probe_and_single_relogin() {
    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    source.expire_session();
    let (mut supervisor, _tx) = supervisor(source);

    supervisor.run_once().await;

    let source = supervisor.engine().source();
    assert_eq!(source.probe_calls.load(Ordering::SeqCst), 1);
    // Exactly one re-login, never a synchronous retry loop.
    assert_eq!(source.login_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_pass_is_not_retried_within_the_cycle() {
    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    source.expire_session();
    let (mut supervisor, _tx) = supervisor(source);

    supervisor.run_once().await;

    // Recovery re-authenticated but did not re-run the pass: nothing
    // reached the store until the next scheduled cycle.
    assert!(supervisor.engine().store().records().is_empty());

    supervisor.run_once().await;
    assert_eq!(supervisor.engine().store().records().len(), 1);
}

#[tokio::test]
async fn healthy_session_is_not_reauthenticated() {
    // A transport-level fetch failure with a valid session: the probe
    // runs, the login does not.
    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    source.fail_next_fetch(true);
    let (mut supervisor, _tx) = supervisor(source);

    supervisor.run_once().await;

    let source = supervisor.engine().source();
    assert_eq!(source.probe_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.login_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_pass_skips_recovery_entirely() {
    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    let (mut supervisor, _tx) = supervisor(source);

    supervisor.run_once().await;

    let source = supervisor.engine().source();
    assert_eq!(source.probe_calls.load(Ordering::SeqCst), 0);
    assert_eq!(source.login_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn relogin_persists_the_fresh_token() {
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("roster.token");

    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    source.expire_session();
    let (supervisor, _tx) = supervisor(source);
    let mut supervisor = supervisor.with_token_path(token_path.clone());

    supervisor.run_once().await;

    let persisted = tokio::fs::read_to_string(&token_path).await.unwrap();
    assert_eq!(persisted, "token-1");
}

#[tokio::test]
async fn shutdown_signal_stops_the_loop() {
    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    let (supervisor, tx) = supervisor(source);

    let handle = tokio::spawn(supervisor.run());
    // Let the first pass run, then request shutdown.
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(true).unwrap();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("supervisor must exit after the shutdown signal")
        .unwrap();
}

#[tokio::test]
async fn dropped_shutdown_sender_stops_the_loop() {
    // A vanished sender must read as a shutdown request, not as a
    // permanently-ready select arm that skips the poll delay.
    let source = MockSource::new(vec![future_shift("S1", "Barista")]);
    let (supervisor, tx) = supervisor(source);
    drop(tx);

    let handle = tokio::spawn(supervisor.run());
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("supervisor must exit once the shutdown sender is gone")
        .unwrap();
}

#[test]
fn debug_output_elides_the_engine_collaborators() {
    let (supervisor, _tx) = supervisor(MockSource::default());
    let rendered = format!("{supervisor:?}");
    assert!(rendered.starts_with("Supervisor"));
    assert!(rendered.contains("interval"));
}
