//! Society form requests.

use crate::form::SocietyField;

/// Open the form: edit when a society is loaded, register otherwise.
#[derive(Debug, Clone)]
pub struct OpenSocietyFormReq;

impl OpenSocietyFormReq {
    pub const PATH: &'static str = "society/form/open";
}

#[derive(Debug, Clone)]
pub struct UpdateSocietyFieldReq {
    pub field: SocietyField,
    pub value: String,
}

impl UpdateSocietyFieldReq {
    pub const PATH: &'static str = "society/form/update";
}

#[derive(Debug, Clone)]
pub struct SubmitSocietyFormReq;

impl SubmitSocietyFormReq {
    pub const PATH: &'static str = "society/form/submit";
}

#[derive(Debug, Clone)]
pub struct CancelSocietyFormReq;

impl CancelSocietyFormReq {
    pub const PATH: &'static str = "society/form/cancel";
}
