//! Auth state — stored at `auth/state`.

/// What the shell shows about the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<SessionUser>,
    pub busy: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticated,
}

/// Claims decoded from the credential, for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl AuthState {
    pub const PATH: &'static str = "auth/state";

    pub fn signed_out() -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            user: None,
            busy: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), ..Self::signed_out() }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            phase: AuthPhase::Authenticated,
            user: Some(user),
            busy: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }
}
