// Tests for WordListManager
// Test cases:
// - Add appends sanitized words; invalid or duplicate words are dropped silently
// - Add then remove restores the original list
// - Remove drops all exact occurrences; clear empties the list
// - A second add while the first is in flight is refused, not dropped mid-flight
// - Store rejection leaves the list unchanged

use super::*;
use crate::settings::{MemorySettings, StoreError};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// Store double that can hold writes open or refuse them
struct ControlledStore {
    inner: MemorySettings,
    hold_writes: AtomicBool,
    reject_writes: AtomicBool,
    write_started: Notify,
    release: Notify,
}

impl ControlledStore {
    fn new(inner: MemorySettings) -> Self {
        Self {
            inner,
            hold_writes: AtomicBool::new(false),
            reject_writes: AtomicBool::new(false),
            write_started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl SettingsStore for ControlledStore {
    fn get_setting(&self, key: &str) -> Option<Value> {
        self.inner.get_setting(key)
    }

    async fn update_setting(&self, key: &str, value: Value) -> Result<(), StoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed(key.to_string(), "read-only".to_string()));
        }
        if self.hold_writes.load(Ordering::SeqCst) {
            self.write_started.notify_one();
            self.release.notified().await;
        }
        self.inner.update_setting(key, value).await
    }

    async fn refresh_settings(&self) -> Result<(), StoreError> {
        self.inner.refresh_settings().await
    }
}

fn manager_with(words: &[&str]) -> WordListManager<ControlledStore> {
    let mut initial = HashMap::new();
    initial.insert(CUSTOM_WORDS.to_string(), json!(words));
    let store = ControlledStore::new(MemorySettings::with_settings(initial));
    WordListManager::new(Arc::new(SettingsSync::new(Arc::new(store))))
}

#[tokio::test]
async fn test_add_appends_in_order() {
    let manager = manager_with(&["alpha"]);
    assert!(manager.add("beta").await.unwrap());
    assert!(manager.add("  gamma  ").await.unwrap());
    assert_eq!(manager.words(), vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_add_stores_sanitized_word() {
    let manager = manager_with(&[]);
    assert!(manager.add("<script>").await.unwrap());
    assert_eq!(manager.words(), vec!["script"]);
}

#[tokio::test]
async fn test_invalid_words_are_dropped_silently() {
    let manager = manager_with(&["alpha"]);
    assert!(!manager.add("").await.unwrap());
    assert!(!manager.add("two words").await.unwrap());
    assert!(!manager.add(&"x".repeat(51)).await.unwrap());
    assert!(!manager.add("alpha").await.unwrap());
    assert_eq!(manager.words(), vec!["alpha"]);
}

#[tokio::test]
async fn test_add_then_remove_round_trip() {
    let manager = manager_with(&["alpha", "beta"]);
    let before = manager.words();

    assert!(manager.add("héllo").await.unwrap());
    assert_eq!(manager.words().last().map(String::as_str), Some("héllo"));
    manager.remove("héllo").await.unwrap();

    assert_eq!(manager.words(), before);
}

#[tokio::test]
async fn test_remove_drops_all_exact_occurrences() {
    let manager = manager_with(&["a", "b", "a", "A"]);
    manager.remove("a").await.unwrap();
    assert_eq!(manager.words(), vec!["b", "A"]);
}

#[tokio::test]
async fn test_clear_empties_list() {
    let manager = manager_with(&["a", "b"]);
    manager.clear().await.unwrap();
    assert!(manager.words().is_empty());
}

#[tokio::test]
async fn test_rejected_write_leaves_list_unchanged() {
    let manager = manager_with(&["alpha"]);
    manager.sync.store().reject_writes.store(true, Ordering::SeqCst);

    let result = manager.add("beta").await;
    assert!(matches!(result, Err(SyncError::Rejected(_))));
    assert_eq!(manager.words(), vec!["alpha"]);
    assert!(manager.can_edit());
}

#[tokio::test]
async fn test_can_add_affordance() {
    let manager = manager_with(&[]);
    assert!(manager.can_add("word"));
    assert!(manager.can_add(" word "));
    assert!(!manager.can_add("   "));
    assert!(!manager.can_add("two words"));
    assert!(!manager.can_add(&"x".repeat(51)));
}

#[tokio::test]
async fn test_concurrent_add_is_refused() {
    let manager = Arc::new(manager_with(&[]));
    manager.sync.store().hold_writes.store(true, Ordering::SeqCst);

    let first = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.add("first").await })
    };
    manager.sync.store().write_started.notified().await;

    assert!(manager.sync.is_updating(CUSTOM_WORDS));
    assert!(!manager.can_add("second"));
    assert!(!manager.can_edit());
    assert_eq!(
        manager.add("second").await,
        Err(SyncError::Busy(CUSTOM_WORDS.to_string()))
    );

    manager.sync.store().release.notify_one();
    assert_eq!(first.await.unwrap(), Ok(true));
    assert_eq!(manager.words(), vec!["first"]);
    assert!(manager.can_edit());
}
