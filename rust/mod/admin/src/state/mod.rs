//! State definitions.
//!
//! Each type is stored at a well-known path (`PATH`). Collection pages are
//! `CollectionState<T>` at `{page}/page`.

pub mod app;
pub mod auth;
pub mod society;

pub use app::{AppRoute, DASHBOARD_CARDS, DashboardCard, HOME_DESCRIPTION, HOME_TITLE, NavItem, NavState};
pub use auth::{AuthPhase, AuthState, SessionUser};
pub use society::SocietyPage;

pub use crate::collection::CollectionState;
pub use crate::form::{EmployeeForm, SocietyForm};
pub use crate::model::{ApprovedUser, Employee, Guest, PendingApproval, Vehicle};

pub type ApprovalsPage = CollectionState<PendingApproval>;
pub type EmployeesPage = CollectionState<Employee>;
pub type GuestsPage = CollectionState<Guest>;
pub type UsersPage = CollectionState<ApprovedUser>;
pub type VehiclesPage = CollectionState<Vehicle>;
