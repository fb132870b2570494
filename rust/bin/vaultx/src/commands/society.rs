//! `vaultx society` — show, register, edit.

use anyhow::{Result, bail};
use clap::Args;
use vaultx_admin::form::{SocietyField, SocietyForm, SocietyFormMode};
use vaultx_admin::render;
use vaultx_admin::request::{OpenSocietyFormReq, SubmitSocietyFormReq, UpdateSocietyFieldReq};
use vaultx_admin::state::SocietyPage;
use vaultx_admin::{DashboardConfig, Page};

use super::Dashboard;

#[derive(Args, Debug)]
pub struct SocietyArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
}

impl SocietyArgs {
    fn fields(self) -> Vec<(SocietyField, String)> {
        [
            (SocietyField::Name, self.name),
            (SocietyField::Address, self.address),
            (SocietyField::City, self.city),
            (SocietyField::State, self.state),
            (SocietyField::PostalCode, self.postal_code),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

pub async fn show(config: DashboardConfig) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(Page::Society.route()).await?;
    print(&dashboard)
}

pub async fn register(config: DashboardConfig, args: SocietyArgs) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(Page::Society.route()).await?;
    let page = dashboard.read::<SocietyPage>(SocietyPage::PATH)?;
    if page.society.is_some() {
        bail!("A society is already registered. Use `vaultx society edit`.");
    }
    submit(&dashboard, args).await
}

pub async fn edit(config: DashboardConfig, args: SocietyArgs) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(Page::Society.route()).await?;
    dashboard.flux.emit(OpenSocietyFormReq::PATH, OpenSocietyFormReq).await;
    let form = dashboard.read::<SocietyForm>(SocietyForm::PATH)?;
    if form.mode == SocietyFormMode::Register {
        bail!("No society registered yet. Use `vaultx society register`.");
    }
    submit(&dashboard, args).await
}

async fn submit(dashboard: &Dashboard, args: SocietyArgs) -> Result<()> {
    for (field, value) in args.fields() {
        dashboard
            .flux
            .emit(UpdateSocietyFieldReq::PATH, UpdateSocietyFieldReq { field, value })
            .await;
    }
    dashboard.flux.emit(SubmitSocietyFormReq::PATH, SubmitSocietyFormReq).await;

    if let Some(form) = dashboard.flux.get_as::<SocietyForm>(SocietyForm::PATH) {
        println!("{}", render::society_form(&form));
        bail!("Society not saved.");
    }
    print(dashboard)
}

fn print(dashboard: &Dashboard) -> Result<()> {
    dashboard.print_nav()?;
    let page = dashboard.read::<SocietyPage>(SocietyPage::PATH)?;
    let form = dashboard.flux.get_as::<SocietyForm>(SocietyForm::PATH);
    println!("{}", render::society(&page, form.as_ref()));
    Ok(())
}
