//! Dashboard pages and their fixed configuration.

use crate::collection::SelectionPolicy;

/// A data-bearing dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Society,
    Approvals,
    Vehicles,
    Guests,
    Employees,
    Users,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 6] = [
        Page::Society,
        Page::Approvals,
        Page::Vehicles,
        Page::Guests,
        Page::Employees,
        Page::Users,
    ];

    /// First segment of every state and request path owned by the page.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Society => "society",
            Page::Approvals => "approvals",
            Page::Vehicles => "vehicles",
            Page::Guests => "guests",
            Page::Employees => "employees",
            Page::Users => "users",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn route(&self) -> &'static str {
        match self {
            Page::Society => "/dashboard/society",
            Page::Approvals => "/dashboard/approvals",
            Page::Vehicles => "/dashboard/vehicles",
            Page::Guests => "/dashboard/guests",
            Page::Employees => "/dashboard/employees",
            Page::Users => "/dashboard/users",
        }
    }

    /// `{key}/page`
    pub fn state_path(&self) -> String {
        self.path("page")
    }

    /// `{key}/{action}`, for both requests and state.
    pub fn path(&self, action: &str) -> String {
        format!("{}/{}", self.key(), action)
    }

    /// Collection (or singleton) endpoint fetched on mount.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Page::Society => "/society/latest",
            Page::Approvals => "/admin/approval/pending",
            Page::Vehicles => "/vehicle/all",
            Page::Guests => "/guest/all",
            Page::Employees => "/employee/all",
            Page::Users => "/admin/approval/approved",
        }
    }

    /// Pages where a 404 means "nothing there yet" rather than a failure.
    pub fn benign_not_found(&self) -> bool {
        matches!(self, Page::Approvals | Page::Society)
    }

    pub fn policy(&self) -> SelectionPolicy {
        match self {
            Page::Approvals | Page::Society => SelectionPolicy::AutoSelectFirst,
            _ => SelectionPolicy::Manual,
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Society => "Society",
            Page::Approvals => "Approvals",
            Page::Vehicles => "Vehicles",
            Page::Guests => "Guests",
            Page::Employees => "Employees",
            Page::Users => "Users",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Society => "Society",
            Page::Approvals => "Pending Approvals",
            Page::Vehicles => "Vehicles",
            Page::Guests => "Guests",
            Page::Employees => "Employees",
            Page::Users => "Approved Users",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Society => "Register and manage your society profile",
            Page::Approvals => "Review and approve resident registration requests",
            Page::Vehicles => "View and manage all vehicles in the society",
            Page::Guests => "View and manage guest entries in the society",
            Page::Employees => "Manage society employees",
            Page::Users => "View and manage approved residents",
        }
    }

    /// Shown when there is nothing to list. `flagged` is true while a
    /// narrowing flag (guests' verified-only) is on.
    pub fn empty_message(&self, flagged: bool) -> &'static str {
        match self {
            Page::Society => "No society registered yet",
            Page::Approvals => "No pending approvals at the moment",
            Page::Vehicles => "No vehicles found",
            Page::Guests if flagged => "No verified guests found",
            Page::Guests => "No guests found",
            Page::Employees => "No employees found",
            Page::Users => "No approved users found",
        }
    }

    pub fn select_prompt(&self) -> &'static str {
        match self {
            Page::Society => "Select a society to view details",
            Page::Approvals => "Select a resident approval request to view details",
            Page::Vehicles => "Select a vehicle to view details",
            Page::Guests => "Select a guest to view details",
            Page::Employees => "Select an employee to view details",
            Page::Users => "Select a user to view details",
        }
    }

    pub fn load_error(&self) -> &'static str {
        match self {
            Page::Society => "Failed to fetch society",
            Page::Approvals => "Failed to fetch pending approvals",
            Page::Vehicles => "Failed to fetch vehicles",
            Page::Guests => "Failed to fetch guests",
            Page::Employees => "Failed to fetch employees",
            Page::Users => "Failed to fetch approved users",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
            assert!(page.route().ends_with(page.key()));
        }
        assert_eq!(Page::from_key("app"), None);
    }

    #[test]
    fn paths() {
        assert_eq!(Page::Employees.state_path(), "employees/page");
        assert_eq!(Page::Approvals.path("approve"), "approvals/approve");
    }

    #[test]
    fn only_approvals_and_society_tolerate_404() {
        let benign: Vec<_> = Page::ALL.iter().filter(|p| p.benign_not_found()).collect();
        assert_eq!(benign, vec![&Page::Society, &Page::Approvals]);
    }

    #[test]
    fn guests_empty_message_follows_flag() {
        assert_eq!(Page::Guests.empty_message(false), "No guests found");
        assert_eq!(Page::Guests.empty_message(true), "No verified guests found");
        assert_eq!(Page::Users.empty_message(true), "No approved users found");
    }
}
