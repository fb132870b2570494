//! VaultX admin dashboard, headless.
//!
//! All dashboard state lives in a [`flux::Flux`] store and changes only
//! through requests. A front end emits requests (`app/navigate`,
//! `employees/search`, `approvals/approve`, ...) and draws what it reads
//! back from the state paths (`app/route`, `auth/state`, `{page}/page`,
//! `employees/form`, `society/form`).
//!
//! ```ignore
//! let flux = Flux::new();
//! let session = Session::new(Arc::new(FileTokenStore::new(config.resolve_token_path())));
//! register_handlers(&flux, Arc::new(AdminContext::new(config, session)));
//! flux.emit(InitializeReq::PATH, InitializeReq { path: "/dashboard".into() }).await;
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod form;
pub mod guard;
pub mod handlers;
pub mod model;
pub mod page;
pub mod render;
pub mod request;
pub mod session;
pub mod state;

pub use config::{DashboardConfig, SocietyUpdateRoute};
pub use error::SessionError;
pub use handlers::{AdminContext, register_handlers};
pub use page::Page;
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
