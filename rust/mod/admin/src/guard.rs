//! Route guard — runs before every navigation.

use crate::page::Page;

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Path prefixes (after the leading `/`) the guard never inspects.
const EXCLUDED_PREFIXES: &[&str] = &["api", "_next/static", "_next/image", "favicon.ico"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Whether the guard applies to `path` at all.
///
/// Exclusion is a plain prefix test on the text after the leading slash, so
/// `/apiary` is excluded just like `/api/users`.
pub fn is_guarded(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    !EXCLUDED_PREFIXES.iter().any(|p| rest.starts_with(p))
}

/// Decide a navigation from credential presence alone.
pub fn guard(path: &str, session_present: bool) -> GuardDecision {
    if !is_guarded(path) {
        return GuardDecision::Proceed;
    }
    let is_login = path == LOGIN_PATH;
    if is_login && session_present {
        return GuardDecision::Redirect(DASHBOARD_PATH.to_string());
    }
    if !is_login && !session_present {
        return GuardDecision::Redirect(LOGIN_PATH.to_string());
    }
    GuardDecision::Proceed
}

/// What a route path shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Page(Page),
    /// Any other path: the route is kept but nothing is mounted.
    Unknown,
}

impl Screen {
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => LOGIN_PATH,
            p => p,
        };
        if path == LOGIN_PATH {
            return Screen::Login;
        }
        if path == DASHBOARD_PATH {
            return Screen::Home;
        }
        Page::ALL
            .iter()
            .find(|p| p.route() == path)
            .map(|p| Screen::Page(*p))
            .unwrap_or(Screen::Unknown)
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Screen::Page(p) => Some(*p),
            _ => None,
        }
    }
}
