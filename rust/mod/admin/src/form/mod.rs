//! Mutation forms. Validation runs before any request is sent.

pub mod employee;
pub mod society;

pub use employee::{EmployeeField, EmployeeForm, FormTab, NewEmployee};
pub use society::{SocietyDraft, SocietyField, SocietyForm, SocietyFormMode};
