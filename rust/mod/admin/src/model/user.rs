use serde::{Deserialize, Serialize};

use super::{Availability, Capability, Guest, Residence, Vehicle};
use crate::collection::Record;
use crate::page::Page;

/// A resident whose registration has been approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedUser {
    pub resident_id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    #[serde(default)]
    pub residence: Residence,
}

impl ApprovedUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Guests this resident registered. No endpoint serves this yet.
    pub fn guest_history(&self) -> Availability<Vec<Guest>> {
        Availability::unavailable(Capability::ResidentGuests)
    }

    /// Vehicles registered to this resident. No endpoint serves this yet.
    pub fn vehicle_history(&self) -> Availability<Vec<Vehicle>> {
        Availability::unavailable(Capability::ResidentVehicles)
    }
}

impl Record for ApprovedUser {
    const PAGE: Page = Page::Users;

    fn record_id(&self) -> &str {
        &self.resident_id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.firstname.as_str(),
            self.lastname.as_str(),
            self.email.as_str(),
        ];
        fields.extend(self.cnic.as_deref());
        fields.extend(self.residence.address_line1.as_deref());
        fields
    }
}
