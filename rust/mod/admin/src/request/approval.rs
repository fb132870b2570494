//! Approval requests.

/// Approve a pending resident, then re-fetch the list.
#[derive(Debug, Clone)]
pub struct ApproveReq {
    pub resident_id: String,
}

impl ApproveReq {
    pub const PATH: &'static str = "approvals/approve";
}

/// Drop a pending resident from the local list. No backend call.
#[derive(Debug, Clone)]
pub struct RejectReq {
    pub resident_id: String,
}

impl RejectReq {
    pub const PATH: &'static str = "approvals/reject";
}
