//! App lifecycle requests.

/// First request a front end sends: sync auth state, then open `path`.
#[derive(Debug, Clone)]
pub struct InitializeReq {
    pub path: String,
}

impl InitializeReq {
    pub const PATH: &'static str = "app/initialize";
}

/// Go to a route. The guard may redirect.
#[derive(Debug, Clone)]
pub struct NavigateReq {
    pub path: String,
}

impl NavigateReq {
    pub const PATH: &'static str = "app/navigate";
}

#[derive(Debug, Clone)]
pub struct ToggleSidebarReq;

impl ToggleSidebarReq {
    pub const PATH: &'static str = "app/toggle-sidebar";
}
