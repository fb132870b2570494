//! Society page — stored at `society/page`.

use crate::model::Society;

/// Singleton page: the latest registered society, if any.
///
/// Whether the registration/edit form is showing is the presence of
/// `society/form`.
#[derive(Debug, Clone, PartialEq)]
pub struct SocietyPage {
    pub society: Option<Society>,
    pub loading: bool,
    pub error: Option<String>,
    pub mount: u64,
}

impl SocietyPage {
    pub const PATH: &'static str = "society/page";

    pub fn mounted(mount: u64) -> Self {
        Self { society: None, loading: true, error: None, mount }
    }

    pub fn finish_load(&mut self, society: Option<Society>) {
        self.society = society;
        self.loading = false;
        self.error = None;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }
}
