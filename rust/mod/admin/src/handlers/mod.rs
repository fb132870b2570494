//! Dashboard handlers and Flux wiring.
//!
//! Each `handle_*` function implements one request path. `register_handlers`
//! binds them to a [`Flux`] instance, downcasting the typed payload and
//! handing over the shared [`AdminContext`].

pub mod app_handlers;
pub mod approval_handlers;
pub mod auth_handlers;
pub mod employee_handlers;
pub mod helpers;
pub mod page_handlers;
pub mod society_handlers;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flux::{Flux, Payload, StateStore};
use tracing::warn;
use vaultx_client::ApiClient;

use crate::config::DashboardConfig;
use crate::page::Page;
use crate::request::{
    ApproveReq, CancelSocietyFormReq, CloseEmployeeFormReq, FlagReq, InitializeReq, LoadReq,
    LoginReq, LogoutReq, NavigateReq, OpenEmployeeFormReq, OpenSocietyFormReq, RejectReq,
    SearchReq, SelectReq, SubmitEmployeeFormReq, SubmitSocietyFormReq, ToggleSidebarReq,
    UpdateEmployeeFieldReq, UpdateSocietyFieldReq,
};
use crate::session::Session;

/// Everything a handler needs besides the state store.
pub struct AdminContext {
    pub session: Session,
    pub api: ApiClient,
    pub config: DashboardConfig,
    mounts: AtomicU64,
}

impl AdminContext {
    /// The REST client authenticates through `session`.
    pub fn new(config: DashboardConfig, session: Session) -> Self {
        let api = ApiClient::new(config.api_url.clone(), Arc::new(session.clone()));
        Self {
            session,
            api,
            config,
            mounts: AtomicU64::new(0),
        }
    }

    /// Id for the next page mount.
    pub fn next_mount(&self) -> u64 {
        self.mounts.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Page addressed by a `{page}/{action}` request path.
fn page_of(path: &str) -> Option<Page> {
    let page = Page::from_key(helpers::page_key(path));
    if page.is_none() {
        warn!(path, "request for unknown page");
    }
    page
}

/// Downcast a raw payload, logging a mismatch.
fn payload_as<'a, R: 'static>(path: &str, payload: &'a Payload) -> Option<&'a R> {
    let req = payload.downcast_ref::<R>();
    if req.is_none() {
        warn!(path, expected = std::any::type_name::<R>(), "request payload has unexpected type");
    }
    req
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<AdminContext>) {
    // app/initialize
    {
        let ctx = ctx.clone();
        flux.on_request(InitializeReq::PATH, move |req: Arc<InitializeReq>, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_initialize(&req, &store, &ctx).await;
            }
        });
    }

    // app/navigate
    {
        let ctx = ctx.clone();
        flux.on_request(NavigateReq::PATH, move |req: Arc<NavigateReq>, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_navigate(&req, &store, &ctx).await;
            }
        });
    }

    // app/toggle-sidebar
    flux.on_request(ToggleSidebarReq::PATH, |_: Arc<ToggleSidebarReq>, store: Arc<StateStore>| async move {
        app_handlers::handle_toggle_sidebar(&store);
    });

    // auth/login
    {
        let ctx = ctx.clone();
        flux.on_request(LoginReq::PATH, move |req: Arc<LoginReq>, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                auth_handlers::handle_login(&req, &store, &ctx).await;
            }
        });
    }

    // auth/logout
    {
        let ctx = ctx.clone();
        flux.on_request(LogoutReq::PATH, move |_: Arc<LogoutReq>, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                auth_handlers::handle_logout(&store, &ctx).await;
            }
        });
    }

    // {page}/load
    {
        let ctx = ctx.clone();
        flux.on(LoadReq::PATTERN, move |path, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                if let Some(page) = page_of(&path) {
                    page_handlers::load(page, &store, &ctx).await;
                }
            }
        });
    }

    // {page}/search
    flux.on(SearchReq::PATTERN, |path, payload, store: Arc<StateStore>| async move {
        if let (Some(page), Some(req)) = (page_of(&path), payload_as::<SearchReq>(&path, &payload)) {
            page_handlers::handle_search(page, req, &store);
        }
    });

    // {page}/select
    flux.on(SelectReq::PATTERN, |path, payload, store: Arc<StateStore>| async move {
        if let (Some(page), Some(req)) = (page_of(&path), payload_as::<SelectReq>(&path, &payload)) {
            page_handlers::handle_select(page, req, &store);
        }
    });

    // {page}/flag
    flux.on(FlagReq::PATTERN, |path, payload, store: Arc<StateStore>| async move {
        if let (Some(page), Some(req)) = (page_of(&path), payload_as::<FlagReq>(&path, &payload)) {
            page_handlers::handle_flag(page, req, &store);
        }
    });

    // approvals/approve
    {
        let ctx = ctx.clone();
        flux.on_request(ApproveReq::PATH, move |req: Arc<ApproveReq>, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                approval_handlers::handle_approve(&req, &store, &ctx).await;
            }
        });
    }

    // approvals/reject
    flux.on_request(RejectReq::PATH, |req: Arc<RejectReq>, store: Arc<StateStore>| async move {
        approval_handlers::handle_reject(&req, &store);
    });

    // employees/form/*
    flux.on_request(OpenEmployeeFormReq::PATH, |_: Arc<OpenEmployeeFormReq>, store: Arc<StateStore>| async move {
        employee_handlers::handle_open(&store);
    });
    flux.on_request(UpdateEmployeeFieldReq::PATH, |req: Arc<UpdateEmployeeFieldReq>, store: Arc<StateStore>| async move {
        employee_handlers::handle_update(&req, &store);
    });
    {
        let ctx = ctx.clone();
        flux.on_request(SubmitEmployeeFormReq::PATH, move |_: Arc<SubmitEmployeeFormReq>, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                employee_handlers::handle_submit(&store, &ctx).await;
            }
        });
    }
    flux.on_request(CloseEmployeeFormReq::PATH, |_: Arc<CloseEmployeeFormReq>, store: Arc<StateStore>| async move {
        employee_handlers::handle_close(&store);
    });

    // society/form/*
    flux.on_request(OpenSocietyFormReq::PATH, |_: Arc<OpenSocietyFormReq>, store: Arc<StateStore>| async move {
        society_handlers::handle_open(&store);
    });
    flux.on_request(UpdateSocietyFieldReq::PATH, |req: Arc<UpdateSocietyFieldReq>, store: Arc<StateStore>| async move {
        society_handlers::handle_update(&req, &store);
    });
    flux.on_request(SubmitSocietyFormReq::PATH, move |_: Arc<SubmitSocietyFormReq>, store: Arc<StateStore>| {
        let ctx = ctx.clone();
        async move {
            society_handlers::handle_submit(&store, &ctx).await;
        }
    });
    flux.on_request(CancelSocietyFormReq::PATH, |_: Arc<CancelSocietyFormReq>, store: Arc<StateStore>| async move {
        society_handlers::handle_cancel(&store);
    });
}
