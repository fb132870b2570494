//! Add-employee form requests.

use crate::form::EmployeeField;

#[derive(Debug, Clone)]
pub struct OpenEmployeeFormReq;

impl OpenEmployeeFormReq {
    pub const PATH: &'static str = "employees/form/open";
}

#[derive(Debug, Clone)]
pub struct UpdateEmployeeFieldReq {
    pub field: EmployeeField,
    pub value: String,
}

impl UpdateEmployeeFieldReq {
    pub const PATH: &'static str = "employees/form/update";
}

#[derive(Debug, Clone)]
pub struct SubmitEmployeeFormReq;

impl SubmitEmployeeFormReq {
    pub const PATH: &'static str = "employees/form/submit";
}

#[derive(Debug, Clone)]
pub struct CloseEmployeeFormReq;

impl CloseEmployeeFormReq {
    pub const PATH: &'static str = "employees/form/close";
}
