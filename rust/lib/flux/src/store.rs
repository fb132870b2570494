use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::topic::PatternTable;
use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Path-keyed state with pattern-matched change notifications.
///
/// - `set(path, value)` stores a value and notifies matching subscribers.
/// - `get(path)` / `get_as::<T>(path)` read the current value.
/// - `update::<T>(path, f)` is a read-modify-write helper for page states.
/// - `remove(path)` drops a value silently (used when a page unmounts).
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    subscribers: PatternTable<Subscriber>,
    next_id: AtomicU64,
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            subscribers: PatternTable::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store a typed value at `path` and notify subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Store a pre-built `StateValue` at `path` and notify subscribers.
    ///
    /// Subscribers run after the write lock is released, on the caller's task.
    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
            values.insert(path.to_string(), value.clone());
        }
        for subscriber in self.subscribers.matching(path) {
            (subscriber.handler)(path, &value);
        }
    }

    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.get(path).cloned()
    }

    /// Clone the value at `path` out as `T`. `None` when absent or of another type.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.cloned::<T>())
    }

    /// Apply `f` to a copy of the `T` at `path` and store the result.
    ///
    /// Returns `false` (and stores nothing) when no `T` lives at `path`.
    /// Not atomic against a concurrent `set` on the same path; the dashboard
    /// runs one handler chain at a time per page.
    pub fn update<T, F>(&self, path: &str, f: F) -> bool
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce(&mut T),
    {
        let Some(mut current) = self.get_as::<T>(path) else {
            return false;
        };
        f(&mut current);
        self.set(path, current);
        true
    }

    /// Remove the value at `path` without notifying subscribers.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(path)
    }

    /// Children of `prefix` (entries under `{prefix}/`), ordered by path.
    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        let scan_prefix = format!("{}/", prefix);
        values
            .range(scan_prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&scan_prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.contains_key(path)
    }

    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to changes on paths matching `pattern`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.insert(
            pattern,
            Subscriber {
                id,
                handler: Arc::new(handler),
            },
        );
        id
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.subscribers.remove(pattern, |s| s.id == id);
    }

    /// All entries, ordered by path.
    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct PageState {
        items: Vec<String>,
        loading: bool,
        error: Option<String>,
    }

    fn page() -> PageState {
        PageState {
            items: vec![],
            loading: true,
            error: None,
        }
    }

    // ========================================================================
    // get / set / get_as
    // ========================================================================

    #[test]
    fn set_then_get_as() {
        let store = StateStore::new();
        store.set("employees/page", page());
        assert_eq!(store.get_as::<PageState>("employees/page"), Some(page()));
    }

    #[test]
    fn get_as_wrong_type_is_none() {
        let store = StateStore::new();
        store.set("app/route", "/dashboard".to_string());
        assert!(store.get_as::<PageState>("app/route").is_none());
        assert!(store.get_as::<String>("missing").is_none());
    }

    #[test]
    fn set_overwrites() {
        let store = StateStore::new();
        store.set("app/route", "/".to_string());
        store.set("app/route", "/dashboard".to_string());
        assert_eq!(store.get_as::<String>("app/route").unwrap(), "/dashboard");
        assert_eq!(store.len(), 1);
    }

    // ========================================================================
    // update
    // ========================================================================

    #[test]
    fn update_applies_closure() {
        let store = StateStore::new();
        store.set("employees/page", page());

        let updated = store.update::<PageState, _>("employees/page", |p| {
            p.loading = false;
            p.items.push("e1".into());
        });

        assert!(updated);
        let p = store.get_as::<PageState>("employees/page").unwrap();
        assert!(!p.loading);
        assert_eq!(p.items, vec!["e1"]);
    }

    #[test]
    fn update_missing_path_stores_nothing() {
        let store = StateStore::new();
        let updated = store.update::<PageState, _>("guests/page", |p| p.loading = false);
        assert!(!updated);
        assert!(!store.contains("guests/page"));
    }

    #[test]
    fn update_notifies_subscribers() {
        let store = StateStore::new();
        store.set("guests/page", page());
        let seen = Arc::new(Mutex::new(0));
        let s = seen.clone();
        store.subscribe("guests/page", move |_, _| *s.lock().unwrap() += 1);

        store.update::<PageState, _>("guests/page", |p| p.loading = false);
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    // ========================================================================
    // remove / scan / snapshot
    // ========================================================================

    #[test]
    fn remove_is_silent() {
        let store = StateStore::new();
        store.set("users/page", page());
        let seen = Arc::new(Mutex::new(0));
        let s = seen.clone();
        store.subscribe("#", move |_, _| *s.lock().unwrap() += 1);

        assert!(store.remove("users/page").is_some());
        assert!(store.remove("users/page").is_none());
        assert_eq!(*seen.lock().unwrap(), 0);
    }

    #[test]
    fn scan_lists_children_only() {
        let store = StateStore::new();
        store.set("employees", 0u8);
        store.set("employees/page", 1u8);
        store.set("employees/form", 2u8);
        store.set("employeesx/page", 3u8);

        let paths: Vec<String> = store.scan("employees").into_iter().map(|(k, _)| k).collect();
        assert_eq!(paths, vec!["employees/form", "employees/page"]);
    }

    #[test]
    fn snapshot_is_ordered() {
        let store = StateStore::new();
        store.set("b", 1u8);
        store.set("a", 2u8);
        let paths: Vec<String> = store.snapshot().into_iter().map(|(k, _)| k).collect();
        assert_eq!(paths, vec!["a", "b"]);
        assert_eq!(store.snapshot().len(), 2);
        assert!(!store.is_empty());
    }

    // ========================================================================
    // subscribe / unsubscribe
    // ========================================================================

    #[test]
    fn wildcard_subscriber_sees_matching_paths() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let s = seen.clone();
        store.subscribe("+/page", move |path, _| s.lock().unwrap().push(path.to_string()));

        store.set("employees/page", page());
        store.set("employees/form", 0u8);
        store.set("guests/page", page());

        assert_eq!(*seen.lock().unwrap(), vec!["employees/page", "guests/page"]);
    }

    #[test]
    fn subscriber_receives_new_value() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(None::<String>));
        let s = seen.clone();
        store.subscribe("app/route", move |_, v| {
            *s.lock().unwrap() = v.cloned::<String>();
        });

        store.set("app/route", "/dashboard/guests".to_string());
        assert_eq!(seen.lock().unwrap().as_deref(), Some("/dashboard/guests"));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = StateStore::new();
        let count = Arc::new(Mutex::new(0));
        let c = count.clone();
        let id = store.subscribe("auth/state", move |_, _| *c.lock().unwrap() += 1);

        store.set("auth/state", 1u8);
        store.unsubscribe("auth/state", id);
        store.set("auth/state", 2u8);

        assert_eq!(*count.lock().unwrap(), 1);
    }
}
