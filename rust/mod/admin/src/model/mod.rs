//! Entities as the VaultX backend sends them.
//!
//! Field names follow the backend's camelCase JSON. Missing optional fields
//! deserialize to `None`; unknown fields are ignored.

pub mod approval;
pub mod availability;
pub mod employee;
pub mod guest;
pub mod residence;
pub mod society;
pub mod user;
pub mod vehicle;

pub use approval::PendingApproval;
pub use availability::{Availability, Capability};
pub use employee::Employee;
pub use guest::{Guest, GuestVehicle, VisitStatus};
pub use residence::Residence;
pub use society::Society;
pub use user::ApprovedUser;
pub use vehicle::{Vehicle, VehicleEntry, VehicleOwner};
