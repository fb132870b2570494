use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted state value.
///
/// Readers share one allocation; `clone` is an atomic increment. Page
/// states hold whole collections, so handing them out by `Arc` keeps a
/// re-render from copying every row.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StateValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value as `T`, or `None` if it holds another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone the value out as `T`.
    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Rust type name of the stored value, for logs and debugging.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of live handles to the underlying value.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type", &self.type_name)
            .finish()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Banner {
        message: String,
    }

    #[test]
    fn downcast_matching_type() {
        let v = StateValue::new(Banner { message: "Failed to fetch employees".into() });
        assert_eq!(
            v.downcast_ref::<Banner>().map(|b| b.message.as_str()),
            Some("Failed to fetch employees")
        );
        assert!(v.is::<Banner>());
        assert_eq!(v.type_id(), TypeId::of::<Banner>());
    }

    #[test]
    fn downcast_wrong_type_is_none() {
        let v = StateValue::new(42u32);
        assert!(v.downcast_ref::<i32>().is_none());
        assert!(v.cloned::<String>().is_none());
        assert!(!v.is::<String>());
    }

    #[test]
    fn cloned_copies_out() {
        let v = StateValue::new(vec!["a".to_string(), "b".to_string()]);
        let items: Vec<String> = v.cloned().unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn clone_shares_allocation() {
        let v1 = StateValue::new(vec![0u8; 4096]);
        let v2 = v1.clone();
        assert_eq!(v1.ref_count(), 2);

        let p1 = v1.downcast_ref::<Vec<u8>>().unwrap().as_ptr();
        let p2 = v2.downcast_ref::<Vec<u8>>().unwrap().as_ptr();
        assert_eq!(p1, p2);

        drop(v2);
        assert_eq!(v1.ref_count(), 1);
    }

    #[test]
    fn debug_shows_type_name() {
        let v = StateValue::new(7u64);
        assert!(format!("{:?}", v).contains("u64"));
        assert_eq!(v.type_name(), "u64");
    }

    fn _assert_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StateValue>();
    }
}
