//! Flux — headless state engine for the VaultX dashboard.
//!
//! Rust owns all dashboard state and logic; a renderer (the `vaultx` CLI,
//! a web view, a desktop shell) only emits requests and draws what it reads.
//!
//! # Three Primitives
//!
//! - `get(path)` — read state at a path (Arc clone, no data copy)
//! - `emit(path, payload)` — send a request to the handler(s) matching `path`
//! - `subscribe(pattern)` — observe state changes under a pattern
//!
//! # Path Addressing
//!
//! State and requests share a flat `/`-separated namespace:
//! - Global: `auth/state`, `app/route`, `app/nav`
//! - Page: `employees/page`, `approvals/page`
//! - Form: `employees/form`, `society/form`
//!
//! Patterns use MQTT-style wildcards: `+` matches one level, a trailing
//! `#` matches any remaining levels.

pub mod app;
pub mod router;
pub mod store;
pub mod topic;
pub mod value;

pub use app::Flux;
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
