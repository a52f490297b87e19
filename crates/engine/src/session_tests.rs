// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rg_adapters::FakeSessionAdapter;

fn manager() -> (Arc<SessionManager<FakeSessionAdapter>>, FakeSessionAdapter) {
    let adapter = FakeSessionAdapter::new();
    (Arc::new(SessionManager::new(adapter.clone())), adapter)
}

#[tokio::test]
async fn first_acquire_opens_named_session() {
    let (manager, adapter) = manager();
    assert!(manager.current().await.is_none());

    let session = manager.acquire(Path::new("/work/a")).await.unwrap();
    assert_eq!(adapter.opened(), vec![session.id.clone()]);
    assert_eq!(adapter.name(&session.id).as_deref(), Some(SESSION_NAME));
    assert_eq!(session.working_dir, PathBuf::from("/work/a"));
    assert_eq!(manager.current().await, Some(session));
}

#[tokio::test]
async fn live_session_is_reused_without_updating_directory() {
    let (manager, adapter) = manager();
    let first = manager.acquire(Path::new("/work/a")).await.unwrap();
    let second = manager.acquire(Path::new("/work/b")).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.working_dir, PathBuf::from("/work/a"));
    assert_eq!(adapter.opened().len(), 1);
}

#[tokio::test]
async fn closed_session_is_replaced_on_next_acquire() {
    let (manager, adapter) = manager();
    let first = manager.acquire(Path::new("/work/a")).await.unwrap();

    assert!(manager.notify_closed(&first.id).await);
    assert!(manager.current().await.is_none());

    let second = manager.acquire(Path::new("/work/b")).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.working_dir, PathBuf::from("/work/b"));
    assert_eq!(adapter.opened().len(), 2);
}

#[tokio::test]
async fn dead_session_is_replaced_even_without_notification() {
    let (manager, adapter) = manager();
    let first = manager.acquire(Path::new("/work")).await.unwrap();
    adapter.kill(&first.id);

    let second = manager.acquire(Path::new("/work")).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn stale_close_leaves_live_session_alone() {
    let (manager, _adapter) = manager();
    let live = manager.acquire(Path::new("/work")).await.unwrap();

    assert!(!manager.notify_closed(&SessionId::new("ses-stale")).await);
    assert_eq!(manager.current().await, Some(live));
}

#[tokio::test]
async fn teardown_closes_live_session_once() {
    let (manager, adapter) = manager();
    let session = manager.acquire(Path::new("/work")).await.unwrap();

    manager.teardown().await;
    manager.teardown().await;

    assert_eq!(adapter.closed(), vec![session.id]);
    assert!(manager.current().await.is_none());
}

#[tokio::test]
async fn teardown_without_session_is_noop() {
    let (manager, adapter) = manager();
    manager.teardown().await;
    assert!(adapter.closed().is_empty());
}

#[tokio::test]
async fn failed_open_leaves_no_session() {
    let (manager, adapter) = manager();
    adapter.set_fail_open(true);
    assert!(manager.acquire(Path::new("/work")).await.is_err());
    assert!(manager.current().await.is_none());

    adapter.set_fail_open(false);
    assert!(manager.acquire(Path::new("/work")).await.is_ok());
}

#[tokio::test]
async fn concurrent_acquires_open_one_session() {
    let (manager, adapter) = manager();
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.acquire(Path::new(&format!("/work/{i}"))).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().id);
    }
    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(adapter.opened().len(), 1);
}

#[tokio::test]
async fn listener_forwards_close_events() {
    let (manager, _adapter) = manager();
    let session = manager.acquire(Path::new("/work")).await.unwrap();

    let (tx, rx) = mpsc::channel(4);
    let task = manager.listen(rx);
    tx.send(SessionEvent::Closed(session.id)).await.unwrap();
    drop(tx);
    task.await.unwrap();

    assert!(manager.current().await.is_none());
}
