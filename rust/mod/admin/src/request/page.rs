//! Requests shared by every collection page, addressed `{page}/{action}`.

use crate::collection::FlagFilter;
use crate::page::Page;

/// Re-fetch the page's collection.
#[derive(Debug, Clone)]
pub struct LoadReq;

#[derive(Debug, Clone)]
pub struct SearchReq {
    pub query: String,
}

/// Select an item by id; `None` clears the selection.
#[derive(Debug, Clone)]
pub struct SelectReq {
    pub id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FlagReq {
    pub flag: FlagFilter,
    pub on: bool,
}

impl LoadReq {
    pub const ACTION: &'static str = "load";
    pub const PATTERN: &'static str = "+/load";

    pub fn path(page: Page) -> String {
        page.path(Self::ACTION)
    }
}

impl SearchReq {
    pub const ACTION: &'static str = "search";
    pub const PATTERN: &'static str = "+/search";

    pub fn path(page: Page) -> String {
        page.path(Self::ACTION)
    }
}

impl SelectReq {
    pub const ACTION: &'static str = "select";
    pub const PATTERN: &'static str = "+/select";

    pub fn path(page: Page) -> String {
        page.path(Self::ACTION)
    }
}

impl FlagReq {
    pub const ACTION: &'static str = "flag";
    pub const PATTERN: &'static str = "+/flag";

    pub fn path(page: Page) -> String {
        page.path(Self::ACTION)
    }
}
