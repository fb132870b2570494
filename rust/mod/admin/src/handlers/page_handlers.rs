//! Collection page handlers: load, search, select, flag.
//!
//! One generic implementation per action; [`load`] and friends pick the
//! record type from the page.

use std::fmt::Debug;

use flux::StateStore;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::AdminContext;
use super::helpers::{self, apply_if_mounted};
use super::society_handlers;
use crate::collection::{CollectionState, Record};
use crate::model::{ApprovedUser, Employee, Guest, PendingApproval, Vehicle};
use crate::page::Page;
use crate::request::{FlagReq, SearchReq, SelectReq};

/// Bound every listed entity satisfies.
pub trait ListRecord: Record + DeserializeOwned + Debug + PartialEq {}

impl<T: Record + DeserializeOwned + Debug + PartialEq> ListRecord for T {}

/// Mount fresh state for `page` and fetch it.
pub async fn mount(page: Page, store: &StateStore, ctx: &AdminContext) {
    let mount = ctx.next_mount();
    debug!(page = page.key(), mount, "mount");
    match page {
        Page::Society => society_handlers::mount(mount, store),
        Page::Approvals => mount_collection::<PendingApproval>(mount, store),
        Page::Employees => mount_collection::<Employee>(mount, store),
        Page::Guests => mount_collection::<Guest>(mount, store),
        Page::Users => mount_collection::<ApprovedUser>(mount, store),
        Page::Vehicles => mount_collection::<Vehicle>(mount, store),
    }
    load(page, store, ctx).await;
}

fn mount_collection<T: ListRecord>(mount: u64, store: &StateStore) {
    store.set(&CollectionState::<T>::path(), CollectionState::<T>::mounted(mount));
}

/// Handle `{page}/load`.
pub async fn load(page: Page, store: &StateStore, ctx: &AdminContext) {
    match page {
        Page::Society => society_handlers::handle_load(store, ctx).await,
        Page::Approvals => load_collection::<PendingApproval>(store, ctx).await,
        Page::Employees => load_collection::<Employee>(store, ctx).await,
        Page::Guests => load_collection::<Guest>(store, ctx).await,
        Page::Users => load_collection::<ApprovedUser>(store, ctx).await,
        Page::Vehicles => load_collection::<Vehicle>(store, ctx).await,
    }
}

/// Fetch the collection and land it on the mount that asked for it.
pub async fn load_collection<T: ListRecord>(store: &StateStore, ctx: &AdminContext) {
    let path = CollectionState::<T>::path();
    let Some(mount) = helpers::current_mount::<CollectionState<T>>(store, &path) else {
        debug!(page = T::PAGE.key(), "page not mounted; load skipped");
        return;
    };
    apply_if_mounted::<CollectionState<T>, _>(store, &path, mount, |s| s.begin_load());

    let result = fetch_collection::<T>(ctx).await;
    apply_if_mounted::<CollectionState<T>, _>(store, &path, mount, move |s| match result {
        Ok(items) => s.finish_load(items),
        Err(message) => s.fail_load(message),
    });
}

async fn fetch_collection<T: ListRecord>(ctx: &AdminContext) -> Result<Vec<T>, String> {
    let page = T::PAGE;
    let result = if page.benign_not_found() {
        ctx.api
            .get_optional::<Vec<T>>(page.endpoint())
            .await
            .map(Option::unwrap_or_default)
    } else {
        ctx.api.get_json::<Vec<T>>(page.endpoint()).await
    };
    result.map_err(|e| {
        warn!(page = page.key(), error = %e, "load failed");
        page.load_error().to_string()
    })
}

/// Handle `{page}/search`.
pub fn handle_search(page: Page, req: &SearchReq, store: &StateStore) {
    let query = req.query.clone();
    with_collection(page, store, CollectionOp::Search(query));
}

/// Handle `{page}/select`.
pub fn handle_select(page: Page, req: &SelectReq, store: &StateStore) {
    with_collection(page, store, CollectionOp::Select(req.id.clone()));
}

/// Handle `{page}/flag`.
pub fn handle_flag(page: Page, req: &FlagReq, store: &StateStore) {
    with_collection(page, store, CollectionOp::Flag(req.clone()));
}

enum CollectionOp {
    Search(String),
    Select(Option<String>),
    Flag(FlagReq),
}

fn with_collection(page: Page, store: &StateStore, op: CollectionOp) {
    match page {
        Page::Approvals => apply_op::<PendingApproval>(store, op),
        Page::Employees => apply_op::<Employee>(store, op),
        Page::Guests => apply_op::<Guest>(store, op),
        Page::Users => apply_op::<ApprovedUser>(store, op),
        Page::Vehicles => apply_op::<Vehicle>(store, op),
        Page::Society => debug!("society page has no list; request ignored"),
    }
}

fn apply_op<T: ListRecord>(store: &StateStore, op: CollectionOp) {
    let path = CollectionState::<T>::path();
    let page = T::PAGE.key();
    let found = store.update::<CollectionState<T>, _>(&path, |s| match op {
        CollectionOp::Search(query) => s.set_query(query),
        CollectionOp::Select(Some(id)) => {
            if !s.select(&id) {
                warn!(page, %id, "select: unknown id");
            }
        }
        CollectionOp::Select(None) => s.clear_selection(),
        CollectionOp::Flag(FlagReq { flag, on }) => {
            if !s.set_flag(flag, on) {
                warn!(page, flag = flag.key(), "flag not supported here");
            }
        }
    });
    if !found {
        debug!(page, "page not mounted; request ignored");
    }
}
