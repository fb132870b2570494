//! `vaultx employees add`.

use anyhow::{Result, bail};
use clap::Args;
use vaultx_admin::form::{EmployeeField, EmployeeForm};
use vaultx_admin::render;
use vaultx_admin::request::{OpenEmployeeFormReq, SubmitEmployeeFormReq, UpdateEmployeeFieldReq};
use vaultx_admin::state::Employee;
use vaultx_admin::{DashboardConfig, Page};

use super::Dashboard;
use super::pages;

/// New employee. Missing required fields are reported by the form.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub firstname: Option<String>,
    #[arg(long)]
    pub lastname: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Login password (at least 6 characters).
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub cnic: Option<String>,
    /// Internal role, e.g. "Security Guard".
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub shift: Option<String>,
    /// YYYY-MM-DD.
    #[arg(long)]
    pub joining_date: Option<String>,
}

impl AddArgs {
    fn fields(self) -> Vec<(EmployeeField, String)> {
        [
            (EmployeeField::Firstname, self.firstname),
            (EmployeeField::Lastname, self.lastname),
            (EmployeeField::Email, self.email),
            (EmployeeField::Password, self.password),
            (EmployeeField::Phone, self.phone),
            (EmployeeField::Cnic, self.cnic),
            (EmployeeField::InternalRole, self.role),
            (EmployeeField::Department, self.department),
            (EmployeeField::Shift, self.shift),
            (EmployeeField::JoiningDate, self.joining_date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

pub async fn add(config: DashboardConfig, args: AddArgs) -> Result<()> {
    let dashboard = Dashboard::open(config);
    dashboard.visit(Page::Employees.route()).await?;

    dashboard.flux.emit(OpenEmployeeFormReq::PATH, OpenEmployeeFormReq).await;
    for (field, value) in args.fields() {
        dashboard
            .flux
            .emit(UpdateEmployeeFieldReq::PATH, UpdateEmployeeFieldReq { field, value })
            .await;
    }
    dashboard.flux.emit(SubmitEmployeeFormReq::PATH, SubmitEmployeeFormReq).await;

    // The form closes only on success.
    if let Some(form) = dashboard.flux.get_as::<EmployeeForm>(EmployeeForm::PATH) {
        println!("{}", render::employee_form(&form));
        bail!("Employee not created.");
    }
    println!("Employee created.\n");
    pages::print_page::<Employee>(&dashboard)
}
