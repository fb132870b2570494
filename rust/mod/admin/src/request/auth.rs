//! Auth requests.

/// Start a session with a bearer credential issued by the backend.
#[derive(Debug, Clone)]
pub struct LoginReq {
    pub token: String,
}

impl LoginReq {
    pub const PATH: &'static str = "auth/login";
}

/// Logout — end the session.
#[derive(Debug, Clone)]
pub struct LogoutReq;

impl LogoutReq {
    pub const PATH: &'static str = "auth/logout";
}
