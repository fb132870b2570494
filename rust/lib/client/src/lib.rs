//! VaultX REST client.
//!
//! One authenticated JSON client shared by every dashboard page.
//! Authentication is supplied by a pluggable [`TokenSource`]; the admin
//! crate's `Session` is the production implementation.
//!
//! # Usage
//!
//! ```ignore
//! use vaultx_client::{ApiClient, StaticToken};
//!
//! let client = ApiClient::new("http://localhost:8080", Arc::new(StaticToken::new(jwt)));
//! let employees: Vec<Employee> = client.get_json("/employee/all").await?;
//! let society: Option<Society> = client.get_optional("/society/latest").await?;
//! ```

mod client;
mod error;
mod token;

pub use client::ApiClient;
pub use error::ApiError;
pub use token::{NoAuth, StaticToken, TokenSource};
