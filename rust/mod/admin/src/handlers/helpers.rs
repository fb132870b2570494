//! Shared helpers for handlers.

use flux::StateStore;
use tracing::debug;

use crate::collection::{CollectionState, Record};
use crate::session::Session;
use crate::state::{SessionUser, SocietyPage};

/// Page state tagged with the mount it belongs to.
pub trait Mounted: Clone + Send + Sync + 'static {
    fn mount(&self) -> u64;
}

impl<T: Record> Mounted for CollectionState<T> {
    fn mount(&self) -> u64 {
        self.mount
    }
}

impl Mounted for SocietyPage {
    fn mount(&self) -> u64 {
        self.mount
    }
}

/// Mount id of the page state at `path`, if the page is mounted.
pub fn current_mount<S: Mounted>(store: &StateStore, path: &str) -> Option<u64> {
    store.get(path).and_then(|v| v.downcast_ref::<S>().map(Mounted::mount))
}

/// Apply `f` to the page state at `path` only if it is still the same mount.
///
/// Returns `false` when the page was unmounted (or remounted) meanwhile;
/// the result is then dropped.
pub fn apply_if_mounted<S, F>(store: &StateStore, path: &str, mount: u64, f: F) -> bool
where
    S: Mounted,
    F: FnOnce(&mut S),
{
    let mut applied = false;
    store.update::<S, _>(path, |state| {
        if state.mount() == mount {
            f(state);
            applied = true;
        }
    });
    if !applied {
        debug!(path, mount, "page no longer mounted; result discarded");
    }
    applied
}

/// Display claims of the current credential.
pub fn session_user(session: &Session) -> SessionUser {
    SessionUser {
        id: session.user_id(),
        name: session.user_name(),
        role: session.user_role(),
    }
}

/// First path segment, e.g. `employees` for `employees/search`.
pub fn page_key(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}
