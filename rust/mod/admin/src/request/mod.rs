//! Request definitions.
//!
//! Fixed-path requests carry a `PATH` const. Collection-page requests are
//! shared across pages and addressed with `Type::path(page)`.

pub mod app;
pub mod approval;
pub mod auth;
pub mod employee;
pub mod page;
pub mod society;

pub use app::{InitializeReq, NavigateReq, ToggleSidebarReq};
pub use approval::{ApproveReq, RejectReq};
pub use auth::{LoginReq, LogoutReq};
pub use employee::{
    CloseEmployeeFormReq, OpenEmployeeFormReq, SubmitEmployeeFormReq, UpdateEmployeeFieldReq,
};
pub use page::{FlagReq, LoadReq, SearchReq, SelectReq};
pub use society::{
    CancelSocietyFormReq, OpenSocietyFormReq, SubmitSocietyFormReq, UpdateSocietyFieldReq,
};
