//! Auth handler implementations.

use flux::StateStore;
use tracing::{info, warn};

use super::AdminContext;
use super::app_handlers;
use super::helpers;
use crate::guard::{DASHBOARD_PATH, LOGIN_PATH};
use crate::request::LoginReq;
use crate::state::AuthState;

const TOKEN_REJECTED: &str = "Token is expired or invalid";

/// Handle `auth/login`.
pub async fn handle_login(req: &LoginReq, store: &StateStore, ctx: &AdminContext) {
    store.set(AuthState::PATH, AuthState { busy: true, ..AuthState::signed_out() });

    if let Err(e) = ctx.session.begin(&req.token) {
        warn!(error = %e, "login failed");
        store.set(AuthState::PATH, AuthState::failed(e.to_string()));
        return;
    }
    if !ctx.session.is_authenticated() {
        if let Err(e) = ctx.session.end() {
            warn!(error = %e, "failed to discard rejected token");
        }
        store.set(AuthState::PATH, AuthState::failed(TOKEN_REJECTED));
        return;
    }

    store.set(AuthState::PATH, AuthState::signed_in(helpers::session_user(&ctx.session)));
    app_handlers::navigate(DASHBOARD_PATH, store, ctx).await;
}

/// Handle `auth/logout`.
pub async fn handle_logout(store: &StateStore, ctx: &AdminContext) {
    if let Err(e) = ctx.session.end() {
        warn!(error = %e, "failed to clear stored token");
    }
    info!("logged out");
    store.set(AuthState::PATH, AuthState::signed_out());
    app_handlers::navigate(LOGIN_PATH, store, ctx).await;
}

/// Mirror the session into `auth/state`.
pub fn sync_auth_state(store: &StateStore, ctx: &AdminContext) {
    let state = if ctx.session.is_authenticated() {
        AuthState::signed_in(helpers::session_user(&ctx.session))
    } else {
        AuthState::signed_out()
    };
    store.set(AuthState::PATH, state);
}
