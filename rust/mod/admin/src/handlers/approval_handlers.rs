//! Approval handler implementations.

use flux::StateStore;
use tracing::{info, warn};

use super::AdminContext;
use super::helpers::{apply_if_mounted, current_mount};
use super::page_handlers;
use crate::model::PendingApproval;
use crate::request::{ApproveReq, RejectReq};
use crate::state::ApprovalsPage;

const APPROVE_FAILED: &str = "Failed to approve resident";

/// Handle `approvals/approve`.
pub async fn handle_approve(req: &ApproveReq, store: &StateStore, ctx: &AdminContext) {
    let path = ApprovalsPage::path();
    let Some(mount) = current_mount::<ApprovalsPage>(store, &path) else {
        warn!("approve: approvals page not mounted");
        return;
    };

    let endpoint = format!("/admin/approve/{}", req.resident_id);
    match ctx.api.patch(&endpoint).await {
        Ok(()) => {
            info!(resident = %req.resident_id, "resident approved");
            page_handlers::load_collection::<PendingApproval>(store, ctx).await;
        }
        Err(e) => {
            warn!(resident = %req.resident_id, error = %e, "approve failed");
            apply_if_mounted::<ApprovalsPage, _>(store, &path, mount, |s| {
                s.fail_load(APPROVE_FAILED)
            });
        }
    }
}

/// Handle `approvals/reject`. Local only; the backend has no reject endpoint.
pub fn handle_reject(req: &RejectReq, store: &StateStore) {
    let path = ApprovalsPage::path();
    let mut removed = false;
    store.update::<ApprovalsPage, _>(&path, |s| {
        removed = s.remove(&req.resident_id).is_some();
    });
    if !removed {
        warn!(resident = %req.resident_id, "reject: no such pending approval");
    }
}
