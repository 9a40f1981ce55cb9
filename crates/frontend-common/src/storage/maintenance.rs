//! Administrative operations over client storage

use super::error::{StorageError, StorageResult};
use super::namespace::StorageNamespace;
use super::record::{NotificationEnvelope, NotificationRecord, StoredValue, UserId};
use super::store::{BrowserStorage, KeyValueStore, MemoryStore};
use crate::config::StorageConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// Keys removed by a cleanup pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: Vec<String>,
    /// Whether the session store was wiped as well
    pub session_cleared: bool,
}

/// Outcome of migrating one user's notification lists
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Keys rewritten from the legacy list into an envelope by this call
    pub migrated: Vec<String>,
    /// Keys that already held an envelope
    pub already_current: Vec<String>,
    /// Keys whose value could not be recognized
    pub skipped: Vec<String>,
}

impl MigrationReport {
    pub fn any_migrated(&self) -> bool {
        !self.migrated.is_empty()
    }
}

/// Decoded view of every entry in the durable store
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StorageSnapshot {
    pub entries: BTreeMap<String, StoredValue>,
    /// Subset of `entries` whose key looks like notification state
    pub notification_entries: BTreeMap<String, StoredValue>,
}

impl StorageSnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_notification_key(key: &str) -> bool {
        StorageConfig::NOTIFICATION_MARKERS
            .iter()
            .any(|marker| key.contains(marker))
    }
}

/// Maintenance service over the durable store `L` and the session store `S`.
///
/// Each operation comes in two forms. The `try_*` form returns the detailed
/// result or the first storage error. The plain form never fails: it logs
/// the error and returns `false` (or `None`).
#[derive(Clone, Debug)]
pub struct StorageMaintenance<L, S = L> {
    local: L,
    session: S,
    clock: fn() -> i64,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl<L: KeyValueStore, S: KeyValueStore> StorageMaintenance<L, S> {
    pub fn new(local: L, session: S) -> Self {
        Self {
            local,
            session,
            clock: now_millis,
        }
    }

    /// Replace the source of envelope timestamps
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Delete every key in a reserved namespace and wipe the session store.
    pub fn cleanup_all_app_data(&self) -> bool {
        match self.try_cleanup_all_app_data() {
            Ok(report) => {
                info!(removed = report.removed.len(), "Cleared all app data");
                true
            }
            Err(e) => {
                error!("Failed to clear app data: {e}");
                false
            }
        }
    }

    pub fn try_cleanup_all_app_data(&self) -> StorageResult<CleanupReport> {
        let removed = self.remove_namespaces(&StorageNamespace::ALL)?;
        self.session.clear()?;
        debug!("Session storage cleared");

        Ok(CleanupReport {
            removed,
            session_cleared: true,
        })
    }

    /// Delete notification state only; session data is left alone.
    pub fn reset_all_notification_data(&self) -> bool {
        match self.try_reset_all_notification_data() {
            Ok(report) => {
                info!(removed = report.removed.len(), "Reset notification data");
                true
            }
            Err(e) => {
                error!("Failed to reset notification data: {e}");
                false
            }
        }
    }

    pub fn try_reset_all_notification_data(&self) -> StorageResult<CleanupReport> {
        let removed = self.remove_namespaces(&StorageNamespace::NOTIFICATIONS)?;
        Ok(CleanupReport {
            removed,
            session_cleared: false,
        })
    }

    /// Decode every durable entry for inspection. Never writes.
    pub fn debug_all_local_storage_data(&self) -> Option<StorageSnapshot> {
        match self.try_debug_all_local_storage_data() {
            Ok(snapshot) => {
                info!(
                    entries = snapshot.len(),
                    notification_entries = snapshot.notification_entries.len(),
                    "Collected storage snapshot"
                );
                Some(snapshot)
            }
            Err(e) => {
                error!("Failed to read storage: {e}");
                None
            }
        }
    }

    pub fn try_debug_all_local_storage_data(&self) -> StorageResult<StorageSnapshot> {
        let mut snapshot = StorageSnapshot::default();

        for key in self.local.keys()? {
            // A key can vanish between enumeration and read
            let Some(raw) = self.local.get(&key)? else {
                continue;
            };
            let value = StoredValue::decode(&raw);
            debug!(key = %key, value = %value, "Storage entry");

            if StorageSnapshot::is_notification_key(&key) {
                snapshot.notification_entries.insert(key.clone(), value.clone());
            }
            snapshot.entries.insert(key, value);
        }

        Ok(snapshot)
    }

    /// Rewrap a user's legacy notification lists into v2.0 envelopes.
    ///
    /// Returns `true` only if this call rewrote at least one key. A blank
    /// user id returns `false` without touching the store.
    pub fn migrate_user_notification_data(&self, user_id: impl Into<UserId>) -> bool {
        match self.try_migrate_user_notification_data(user_id) {
            Ok(report) => {
                info!(
                    migrated = report.migrated.len(),
                    already_current = report.already_current.len(),
                    skipped = report.skipped.len(),
                    "Notification data migration finished"
                );
                report.any_migrated()
            }
            Err(StorageError::InvalidUserId) => {
                error!("User id is required for notification data migration");
                false
            }
            Err(e) => {
                error!("Notification data migration failed: {e}");
                false
            }
        }
    }

    pub fn try_migrate_user_notification_data(
        &self,
        user_id: impl Into<UserId>,
    ) -> StorageResult<MigrationReport> {
        let user_id = user_id.into();
        if user_id.is_blank() {
            return Err(StorageError::InvalidUserId);
        }

        let mut report = MigrationReport::default();
        for namespace in StorageNamespace::MIGRATABLE {
            let key = namespace.user_key(&user_id);
            let Some(raw) = self.local.get(&key)? else {
                continue;
            };

            match NotificationRecord::decode(&raw) {
                NotificationRecord::Legacy(ids) => {
                    let envelope = NotificationEnvelope::wrap(ids, user_id.clone(), (self.clock)());
                    self.local.set(&key, &serde_json::to_string(&envelope)?)?;
                    debug!(key = %key, "Migrated legacy notification list");
                    report.migrated.push(key);
                }
                NotificationRecord::Envelope(_) => report.already_current.push(key),
                NotificationRecord::Unknown => {
                    warn!(key = %key, "Skipping unrecognized notification record");
                    report.skipped.push(key);
                }
            }
        }

        Ok(report)
    }

    fn remove_namespaces(&self, namespaces: &[StorageNamespace]) -> StorageResult<Vec<String>> {
        // Collect first: removing while enumerating shifts key indices
        let doomed: Vec<String> = self
            .local
            .keys()?
            .into_iter()
            .filter(|key| StorageNamespace::classify(key).is_some_and(|ns| namespaces.contains(&ns)))
            .collect();

        for key in &doomed {
            self.local.remove(key)?;
            debug!(key = %key, "Removed storage key");
        }

        Ok(doomed)
    }
}

impl StorageMaintenance<Rc<dyn KeyValueStore>> {
    /// Maintenance over the window's `localStorage` and `sessionStorage`.
    ///
    /// An unavailable area is replaced by an empty in-memory store so the
    /// operations still run (and report nothing to do).
    pub fn browser() -> Self {
        Self::new(
            open_or_memory(BrowserStorage::local(), "localStorage"),
            open_or_memory(BrowserStorage::session(), "sessionStorage"),
        )
    }
}

fn open_or_memory(
    storage: StorageResult<BrowserStorage>,
    area: &'static str,
) -> Rc<dyn KeyValueStore> {
    match storage {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            warn!("{area} unavailable, using in-memory store: {e}");
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::{json, Value};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn keys(&self) -> StorageResult<Vec<String>> {
            Err(StorageError::Access("storage disabled".to_string()))
        }

        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Access("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Access("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Access("storage disabled".to_string()))
        }

        fn clear(&self) -> StorageResult<()> {
            Err(StorageError::Access("storage disabled".to_string()))
        }
    }

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    fn service(local: &MemoryStore, session: &MemoryStore) -> StorageMaintenance<MemoryStore> {
        StorageMaintenance::new(local.clone(), session.clone()).with_clock(fixed_clock)
    }

    fn stored_json(store: &MemoryStore, key: &str) -> Value {
        serde_json::from_str(&store.get(key).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn cleanup_removes_reserved_prefixes_only() {
        let local = MemoryStore::with_entries([
            ("session_abc", "1"),
            ("auth_xyz", "token"),
            ("unrelated_key", "keep"),
        ]);
        let session = MemoryStore::with_entries([("tab_state", "x")]);

        assert!(service(&local, &session).cleanup_all_app_data());

        assert_eq!(local.keys().unwrap(), vec!["unrelated_key".to_string()]);
        assert!(session.is_empty());
    }

    #[test]
    fn cleanup_covers_all_five_namespaces() {
        let local = MemoryStore::with_entries([
            ("read_notifications_1", "[]"),
            ("cleared_notifications_1", "[]"),
            ("notification_last_cleanup_1", "0"),
            ("session_1", "s"),
            ("auth_1", "a"),
            ("theme", "\"Dark\""),
        ]);
        let session = MemoryStore::new();

        let report = service(&local, &session).try_cleanup_all_app_data().unwrap();

        assert_eq!(report.removed.len(), 5);
        assert!(report.session_cleared);
        assert_eq!(local.keys().unwrap(), vec!["theme".to_string()]);
    }

    #[test]
    fn reset_notifications_keeps_session_and_auth() {
        let local = MemoryStore::with_entries([
            ("read_notifications_1", "[1]"),
            ("cleared_notifications_1", "[2]"),
            ("notification_last_cleanup_1", "0"),
            ("session_1", "s"),
            ("auth_1", "a"),
        ]);
        let session = MemoryStore::with_entries([("tab_state", "x")]);

        assert!(service(&local, &session).reset_all_notification_data());

        assert_eq!(
            local.keys().unwrap(),
            vec!["auth_1".to_string(), "session_1".to_string()]
        );
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn operations_return_sentinels_when_storage_fails() {
        let maintenance = StorageMaintenance::new(FailingStore, FailingStore);

        assert!(!maintenance.cleanup_all_app_data());
        assert!(!maintenance.reset_all_notification_data());
        assert!(maintenance.debug_all_local_storage_data().is_none());
        assert!(!maintenance.migrate_user_notification_data(42));
    }

    #[test]
    fn cleanup_fails_when_session_store_fails() {
        let local = MemoryStore::with_entries([("session_abc", "1")]);
        let maintenance = StorageMaintenance::new(local.clone(), FailingStore);

        assert!(!maintenance.cleanup_all_app_data());
        // Durable keys were already removed before the session wipe failed
        assert!(local.is_empty());
    }

    #[test]
    fn debug_snapshot_covers_every_key() {
        let local = MemoryStore::with_entries([
            ("read_notifications_42", "[1,2,3]"),
            ("cleared_notifications_42", "not json"),
            ("notification_last_cleanup_42", "1700"),
            ("theme", "\"Dark\""),
            ("greeting", "hello"),
        ]);
        let session = MemoryStore::new();

        let snapshot = service(&local, &session).debug_all_local_storage_data().unwrap();

        let keys: Vec<_> = snapshot.entries.keys().cloned().collect();
        assert_eq!(keys, local.keys().unwrap());
        assert_eq!(snapshot.entries["read_notifications_42"], StoredValue::Json(json!([1, 2, 3])));
        assert_eq!(
            snapshot.entries["cleared_notifications_42"],
            StoredValue::Raw("not json".to_string())
        );
        assert_eq!(snapshot.entries["greeting"], StoredValue::Raw("hello".to_string()));
        assert_eq!(snapshot.notification_entries.len(), 3);
        assert!(!snapshot.notification_entries.contains_key("theme"));
    }

    #[test]
    fn debug_snapshot_of_empty_store_is_empty() {
        let local = MemoryStore::new();
        let session = MemoryStore::new();

        let snapshot = service(&local, &session).debug_all_local_storage_data().unwrap();

        assert!(snapshot.is_empty());
        assert!(snapshot.notification_entries.is_empty());
    }

    #[test]
    fn debug_snapshot_does_not_modify_store() {
        let local = MemoryStore::with_entries([("read_notifications_1", "[1]"), ("x", "y")]);
        let session = MemoryStore::new();

        service(&local, &session).debug_all_local_storage_data().unwrap();

        assert_eq!(local.get("read_notifications_1").unwrap().as_deref(), Some("[1]"));
        assert_eq!(local.len(), 2);
    }

    #[test]
    fn migrate_wraps_legacy_list_into_envelope() {
        let local = MemoryStore::with_entries([("read_notifications_42", "[1,2,3]")]);
        let session = MemoryStore::new();

        assert!(service(&local, &session).migrate_user_notification_data(42));

        assert_eq!(
            stored_json(&local, "read_notifications_42"),
            json!({
                "data": [1, 2, 3],
                "timestamp": 1_700_000_000_000_i64,
                "userId": 42,
                "migrated": true,
                "version": "2.0",
            })
        );
    }

    #[test]
    fn migrate_handles_both_user_keys() {
        let local = MemoryStore::with_entries([
            ("read_notifications_alice", "[\"n1\"]"),
            ("cleared_notifications_alice", "[\"n2\"]"),
            ("read_notifications_bob", "[\"n3\"]"),
        ]);
        let session = MemoryStore::new();

        let report = service(&local, &session)
            .try_migrate_user_notification_data("alice")
            .unwrap();

        assert_eq!(
            report.migrated,
            vec![
                "read_notifications_alice".to_string(),
                "cleared_notifications_alice".to_string()
            ]
        );
        assert_eq!(stored_json(&local, "cleared_notifications_alice")["userId"], json!("alice"));
        // Other users are untouched
        assert_eq!(local.get("read_notifications_bob").unwrap().as_deref(), Some("[\"n3\"]"));
    }

    #[test]
    fn migrate_is_idempotent() {
        let local = MemoryStore::with_entries([("read_notifications_42", "[1,2,3]")]);
        let session = MemoryStore::new();
        let maintenance = service(&local, &session);

        assert!(maintenance.migrate_user_notification_data(42));
        let after_first = local.get("read_notifications_42").unwrap();

        let report = maintenance.try_migrate_user_notification_data(42).unwrap();

        assert!(!report.any_migrated());
        assert_eq!(report.already_current, vec!["read_notifications_42".to_string()]);
        assert_eq!(local.get("read_notifications_42").unwrap(), after_first);
        assert!(!maintenance.migrate_user_notification_data(42));
    }

    #[test]
    fn migrate_uses_key_exactly_as_typed() {
        let local = MemoryStore::with_entries([
            ("read_notifications_007", "[1,2]"),
            ("read_notifications_7", "[9]"),
        ]);
        let session = MemoryStore::new();

        assert!(service(&local, &session).migrate_user_notification_data(UserId::parse("007")));

        let migrated = stored_json(&local, "read_notifications_007");
        assert_eq!(migrated["data"], json!([1, 2]));
        assert_eq!(migrated["userId"], json!("007"));
        // The canonical numeric user is left alone
        assert_eq!(local.get("read_notifications_7").unwrap().as_deref(), Some("[9]"));
    }

    #[test]
    fn migrate_rejects_blank_user_id() {
        let local = MemoryStore::with_entries([("read_notifications_", "[1]")]);
        let session = MemoryStore::new();
        let maintenance = service(&local, &session);

        assert!(!maintenance.migrate_user_notification_data(""));
        assert_eq!(
            maintenance.try_migrate_user_notification_data("  "),
            Err(StorageError::InvalidUserId)
        );
        assert_eq!(local.get("read_notifications_").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn migrate_skips_unreadable_records_without_failing() {
        let local = MemoryStore::with_entries([
            ("read_notifications_7", "{broken"),
            ("cleared_notifications_7", "[9]"),
        ]);
        let session = MemoryStore::new();

        let report = service(&local, &session)
            .try_migrate_user_notification_data(7)
            .unwrap();

        assert_eq!(report.skipped, vec!["read_notifications_7".to_string()]);
        assert_eq!(report.migrated, vec!["cleared_notifications_7".to_string()]);
        assert_eq!(local.get("read_notifications_7").unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn migrate_without_data_reports_nothing() {
        let local = MemoryStore::new();
        let session = MemoryStore::new();

        assert!(!service(&local, &session).migrate_user_notification_data(42));
        assert!(local.is_empty());
    }
}
