//! App-level state — `app/route` and `app/nav`.

use crate::guard::{DASHBOARD_PATH, Screen};
use crate::page::Page;

/// Current route path.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRoute(pub String);

impl AppRoute {
    pub const PATH: &'static str = "app/route";

    pub fn screen(&self) -> Screen {
        Screen::from_path(&self.0)
    }
}

/// One sidebar link.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
}

/// Sidebar shell.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub items: Vec<NavItem>,
    /// Route of the highlighted item, if the current route has one.
    pub active: Option<&'static str>,
    pub sidebar_open: bool,
}

impl NavState {
    pub const PATH: &'static str = "app/nav";

    pub fn for_route(route: &str, sidebar_open: bool) -> Self {
        let mut items = vec![NavItem { label: "Dashboard", route: DASHBOARD_PATH }];
        items.extend(Page::ALL.iter().map(|p| NavItem { label: p.nav_label(), route: p.route() }));
        let active = items.iter().find(|i| i.route == route).map(|i| i.route);
        Self { items, active, sidebar_open }
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.active == Some(item.route)
    }
}

/// Shortcut card on the dashboard home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardCard {
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

pub const HOME_TITLE: &str = "Dashboard";
pub const HOME_DESCRIPTION: &str = "Welcome to the VaultX Society Management System";

pub const DASHBOARD_CARDS: [DashboardCard; 4] = [
    DashboardCard {
        title: "Resident Approvals",
        description: "Pending resident approvals",
        route: "/dashboard/approvals",
    },
    DashboardCard {
        title: "Guests",
        description: "Guests registered today",
        route: "/dashboard/guests",
    },
    DashboardCard {
        title: "Employees",
        description: "Manage society employees",
        route: "/dashboard/employees",
    },
    DashboardCard {
        title: "Users",
        description: "Approved residents",
        route: "/dashboard/users",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_order_and_active_item() {
        let nav = NavState::for_route("/dashboard/guests", true);
        let labels: Vec<_> = nav.items.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Society", "Approvals", "Vehicles", "Guests", "Employees", "Users"]
        );
        assert_eq!(nav.active, Some("/dashboard/guests"));
        assert!(nav.is_active(&nav.items[4]));
        assert!(!nav.is_active(&nav.items[0]));
    }

    #[test]
    fn unknown_route_has_no_active_item() {
        assert_eq!(NavState::for_route("/dashboard/reports", false).active, None);
    }

    #[test]
    fn cards_point_at_real_pages() {
        for card in DASHBOARD_CARDS {
            assert!(matches!(Screen::from_path(card.route), Screen::Page(_)), "{}", card.route);
        }
    }
}
