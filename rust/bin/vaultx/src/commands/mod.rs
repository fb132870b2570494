pub mod auth;
pub mod employees;
pub mod pages;
pub mod society;

use std::any::Any;
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use flux::Flux;
use vaultx_admin::request::InitializeReq;
use vaultx_admin::state::{AppRoute, NavState};
use vaultx_admin::{
    AdminContext, DashboardConfig, FileTokenStore, Session, register_handlers, render,
};

/// A dashboard instance backed by the on-disk token.
pub struct Dashboard {
    pub flux: Flux,
}

impl Dashboard {
    pub fn open(config: DashboardConfig) -> Self {
        let store = FileTokenStore::new(config.resolve_token_path());
        let session = Session::new(Arc::new(store));
        let flux = Flux::new();
        register_handlers(&flux, Arc::new(AdminContext::new(config, session)));
        Self { flux }
    }

    /// Start the dashboard on `route`, wherever the guard sends us.
    pub async fn start(&self, route: &str) {
        self.flux
            .emit(InitializeReq::PATH, InitializeReq { path: route.to_string() })
            .await;
    }

    /// Start the dashboard on `route`. Fails if the guard sends us elsewhere.
    pub async fn visit(&self, route: &str) -> Result<()> {
        self.start(route).await;
        let landed = self.read::<AppRoute>(AppRoute::PATH)?;
        if landed.0 != route {
            bail!("Not signed in. Run `vaultx login --token <token>` first.");
        }
        Ok(())
    }

    pub fn read<T: Any + Clone>(&self, path: &str) -> Result<T> {
        self.flux
            .get_as::<T>(path)
            .ok_or_else(|| anyhow!("dashboard state missing at {}", path))
    }

    pub fn print_nav(&self) -> Result<()> {
        let nav = self.read::<NavState>(NavState::PATH)?;
        let text = render::nav(&nav);
        if !text.is_empty() {
            println!("{}\n", text);
        }
        Ok(())
    }
}
