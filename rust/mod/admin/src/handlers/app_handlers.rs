//! App lifecycle handler implementations.

use flux::StateStore;
use tracing::{debug, info};

use super::AdminContext;
use super::auth_handlers;
use super::page_handlers;
use crate::form::{EmployeeForm, SocietyForm};
use crate::guard::{self, GuardDecision, Screen};
use crate::page::Page;
use crate::request::{InitializeReq, NavigateReq};
use crate::state::{AppRoute, AuthState, NavState};

const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

/// Handle `app/initialize`.
pub async fn handle_initialize(req: &InitializeReq, store: &StateStore, ctx: &AdminContext) {
    store.set(NavState::PATH, NavState::for_route(&req.path, true));
    auth_handlers::sync_auth_state(store, ctx);
    navigate(&req.path, store, ctx).await;
}

/// Handle `app/navigate`.
pub async fn handle_navigate(req: &NavigateReq, store: &StateStore, ctx: &AdminContext) {
    navigate(&req.path, store, ctx).await;
}

/// Expire a dead session, run the guard, then swap the mounted page.
pub async fn navigate(path: &str, store: &StateStore, ctx: &AdminContext) {
    if ctx.session.expire_if_stale() {
        store.set(AuthState::PATH, AuthState::failed(SESSION_EXPIRED));
    }

    let target = match guard::guard(path, ctx.session.is_present()) {
        GuardDecision::Proceed => path.to_string(),
        GuardDecision::Redirect(to) => {
            info!(from = path, to = %to, "redirect");
            to
        }
    };

    let previous = store.get_as::<AppRoute>(AppRoute::PATH);
    let sidebar_open = store
        .get_as::<NavState>(NavState::PATH)
        .map(|n| n.sidebar_open)
        .unwrap_or(true);
    store.set(AppRoute::PATH, AppRoute(target.clone()));
    store.set(NavState::PATH, NavState::for_route(&target, sidebar_open));

    let current = Screen::from_path(&target).page();
    for page in Page::ALL {
        if Some(page) != current {
            unmount(page, store);
        }
    }

    let Some(page) = current else {
        return;
    };
    let same_route = previous.is_some_and(|r| r.0 == target);
    if same_route && store.contains(&page.state_path()) {
        debug!(route = %target, "already mounted");
        return;
    }
    page_handlers::mount(page, store, ctx).await;
}

/// Drop everything a page owns. In-flight loads for it are discarded.
pub fn unmount(page: Page, store: &StateStore) {
    if store.remove(&page.state_path()).is_some() {
        debug!(page = page.key(), "unmount");
    }
    match page {
        Page::Employees => {
            store.remove(EmployeeForm::PATH);
        }
        Page::Society => {
            store.remove(SocietyForm::PATH);
        }
        _ => {}
    }
}

/// Handle `app/toggle-sidebar`.
pub fn handle_toggle_sidebar(store: &StateStore) {
    store.update::<NavState, _>(NavState::PATH, |n| n.sidebar_open = !n.sidebar_open);
}
