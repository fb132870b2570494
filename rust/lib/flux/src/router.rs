use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::store::StateStore;
use crate::topic::PatternTable;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased request payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Request router — maps path patterns to async handlers.
///
/// Several handlers may match one path; they run sequentially, in the
/// order they were registered. An unmatched path is a silent no-op.
pub struct Router {
    handlers: PatternTable<ErasedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            handlers: PatternTable::new(),
        }
    }

    /// Register a handler that receives the raw, type-erased payload.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(move |path, payload, store| -> BoxFuture {
            Box::pin(handler(path, payload, store))
        });
        self.handlers.insert(pattern, handler);
    }

    /// Register a handler for a typed request.
    ///
    /// The payload is downcast to `R` before the handler runs. A payload of
    /// any other type is logged and dropped.
    pub fn on_request<R, F, Fut>(&self, pattern: &str, handler: F)
    where
        R: Any + Send + Sync,
        F: Fn(Arc<R>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on(pattern, move |path, payload: Payload, store| {
            let fut = match payload.downcast::<R>() {
                Ok(req) => Some(handler(req, store)),
                Err(_) => {
                    warn!(
                        %path,
                        expected = std::any::type_name::<R>(),
                        "request payload has unexpected type"
                    );
                    None
                }
            };
            async move {
                if let Some(fut) = fut {
                    fut.await;
                }
            }
        });
    }

    /// Run every handler matching `path`, one after another.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) {
        let handlers = self.handlers.matching(path);
        debug!(path, handlers = handlers.len(), "dispatch");
        for handler in handlers {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Check if a handler is registered under the exact pattern.
    pub fn has_handler(&self, pattern: &str) -> bool {
        self.handlers.has_pattern(pattern)
    }

    /// Check if any handler would run for `path`.
    pub fn matches(&self, path: &str) -> bool {
        !self.handlers.matching(path).is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn test_store() -> Arc<StateStore> {
        Arc::new(StateStore::new())
    }

    #[derive(Debug)]
    struct SearchReq {
        query: String,
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    #[tokio::test]
    async fn dispatch_exact_match() {
        let router = Router::new();
        let called = Arc::new(AtomicU64::new(0));
        let c = called.clone();
        router.on("employees/load", move |_, _, _| {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::Relaxed);
            }
        });

        router.dispatch("employees/load", Arc::new(()), test_store()).await;
        router.dispatch("guests/load", Arc::new(()), test_store()).await;

        assert_eq!(called.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn dispatch_runs_all_matches_in_order() {
        let router = Router::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (pattern, tag) in [("employees/load", "exact"), ("+/load", "single"), ("#", "all")] {
            let o = order.clone();
            router.on(pattern, move |_, _, _| {
                let o = o.clone();
                async move {
                    o.lock().unwrap().push(tag);
                }
            });
        }

        router.dispatch("employees/load", Arc::new(()), test_store()).await;
        assert_eq!(*order.lock().unwrap(), vec!["exact", "single", "all"]);
    }

    #[tokio::test]
    async fn handler_receives_matched_path() {
        let router = Router::new();
        let seen = Arc::new(Mutex::new(String::new()));
        let s = seen.clone();
        router.on("+/load", move |path, _, _| {
            let s = s.clone();
            async move {
                *s.lock().unwrap() = path;
            }
        });

        router.dispatch("vehicles/load", Arc::new(()), test_store()).await;
        assert_eq!(*seen.lock().unwrap(), "vehicles/load");
    }

    // ========================================================================
    // Typed requests
    // ========================================================================

    #[tokio::test]
    async fn on_request_downcasts_payload() {
        let router = Router::new();
        router.on_request::<SearchReq, _, _>("employees/search", |req, store| async move {
            store.set("employees/query", req.query.clone());
        });

        let store = test_store();
        router
            .dispatch(
                "employees/search",
                Arc::new(SearchReq { query: "guard".into() }),
                store.clone(),
            )
            .await;

        assert_eq!(store.get_as::<String>("employees/query").unwrap(), "guard");
    }

    #[tokio::test]
    async fn on_request_ignores_wrong_payload_type() {
        let router = Router::new();
        let called = Arc::new(AtomicU64::new(0));
        let c = called.clone();
        router.on_request::<SearchReq, _, _>("employees/search", move |_, _| {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::Relaxed);
            }
        });

        router.dispatch("employees/search", Arc::new(42u32), test_store()).await;
        assert_eq!(called.load(Ordering::Relaxed), 0);
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    #[test]
    fn has_handler_and_matches() {
        let router = Router::new();
        router.on("society/form/#", |_, _, _| async {});

        assert!(router.has_handler("society/form/#"));
        assert!(!router.has_handler("society/form/submit"));
        assert!(router.matches("society/form/submit"));
        assert!(!router.matches("society/load"));
    }
}
