//! Login, logout and whoami.

use anyhow::{Result, bail};
use vaultx_admin::DashboardConfig;
use vaultx_admin::guard::LOGIN_PATH;
use vaultx_admin::render;
use vaultx_admin::request::{LoginReq, LogoutReq};
use vaultx_admin::state::AuthState;

use super::Dashboard;

pub async fn login(config: DashboardConfig, token: &str) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.start(LOGIN_PATH).await;
    dashboard
        .flux
        .emit(LoginReq::PATH, LoginReq { token: token.to_string() })
        .await;

    let auth = dashboard.read::<AuthState>(AuthState::PATH)?;
    if let Some(error) = &auth.error {
        bail!("Login failed: {}", error);
    }
    println!("{}", render::auth(&auth));
    Ok(())
}

pub async fn logout(config: DashboardConfig) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.flux.emit(LogoutReq::PATH, LogoutReq).await;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami(config: DashboardConfig) -> Result<()> {
    let dashboard = Dashboard::open(config);
    // Initializing runs expiry detection, so a dead token is cleared here.
    dashboard.start(LOGIN_PATH).await;
    let auth = dashboard.read::<AuthState>(AuthState::PATH)?;
    println!("{}", render::auth(&auth));
    if auth.is_authenticated() {
        if let Some(id) = auth.user.and_then(|u| u.id) {
            println!("User ID: {}", id);
        }
    }
    Ok(())
}
