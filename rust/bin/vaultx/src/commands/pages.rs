//! Read-mostly screens: home and the list pages.

use anyhow::Result;
use vaultx_admin::{DashboardConfig, Page};
use vaultx_admin::collection::{CollectionState, FlagFilter};
use vaultx_admin::guard::DASHBOARD_PATH;
use vaultx_admin::render::{self, RecordView};
use vaultx_admin::request::{ApproveReq, FlagReq, RejectReq, SearchReq, SelectReq};
use vaultx_admin::state::{ApprovedUser, Employee, Guest, PendingApproval, Vehicle};

use super::Dashboard;
use crate::ListArgs;

pub async fn home(config: DashboardConfig) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(DASHBOARD_PATH).await?;
    dashboard.print_nav()?;
    println!("{}", render::home());
    Ok(())
}

pub async fn approvals(
    config: DashboardConfig,
    list: &ListArgs,
    approve: Option<String>,
    reject: Option<String>,
) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(Page::Approvals.route()).await?;
    if let Some(resident_id) = approve {
        dashboard.flux.emit(ApproveReq::PATH, ApproveReq { resident_id }).await;
    }
    if let Some(resident_id) = reject {
        dashboard.flux.emit(RejectReq::PATH, RejectReq { resident_id }).await;
    }
    apply_list_args(&dashboard, Page::Approvals, list).await;
    print_page::<PendingApproval>(&dashboard)
}

pub async fn employees(config: DashboardConfig, list: &ListArgs) -> Result<()> {
    show_list::<Employee>(config, list).await
}

pub async fn guests(config: DashboardConfig, list: &ListArgs, verified_only: bool) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(Page::Guests.route()).await?;
    if verified_only {
        let req = FlagReq { flag: FlagFilter::VerifiedOnly, on: true };
        dashboard.flux.emit(&FlagReq::path(Page::Guests), req).await;
    }
    apply_list_args(&dashboard, Page::Guests, list).await;
    print_page::<Guest>(&dashboard)
}

pub async fn users(config: DashboardConfig, list: &ListArgs) -> Result<()> {
    show_list::<ApprovedUser>(config, list).await
}

pub async fn vehicles(config: DashboardConfig, list: &ListArgs) -> Result<()> {
    show_list::<Vehicle>(config, list).await
}

async fn show_list<T: RecordView>(config: DashboardConfig, list: &ListArgs) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(T::PAGE.route()).await?;
    apply_list_args(&dashboard, T::PAGE, list).await;
    print_page::<T>(&dashboard)
}

pub(super) async fn apply_list_args(dashboard: &Dashboard, page: Page, list: &ListArgs) {
    if let Some(query) = &list.search {
        let req = SearchReq { query: query.clone() };
        dashboard.flux.emit(&SearchReq::path(page), req).await;
    }
    if let Some(id) = &list.select {
        let req = SelectReq { id: Some(id.clone()) };
        dashboard.flux.emit(&SelectReq::path(page), req).await;
    }
}

pub(super) fn print_page<T: RecordView>(dashboard: &Dashboard) -> Result<()> {
    dashboard.print_nav()?;
    let state = dashboard.read::<CollectionState<T>>(&T::PAGE.state_path())?;
    println!("{}", render::collection(&state));
    Ok(())
}
