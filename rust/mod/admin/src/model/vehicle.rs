use serde::{Deserialize, Serialize};

use super::{Availability, Capability, Residence};
use crate::collection::Record;
use crate::page::Page;

/// A resident vehicle known to the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub license_plate: String,
    #[serde(alias = "ownerId")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_exit: Option<String>,
}

/// Owner profile shown beside a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleOwner {
    pub user_id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
    pub residences: Vec<Residence>,
}

/// One gate passage.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleEntry {
    pub id: String,
    pub entry_time: String,
    pub exit_time: Option<String>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Owner profile. No endpoint serves this yet.
    pub fn owner(&self) -> Availability<VehicleOwner> {
        Availability::unavailable(Capability::VehicleOwner)
    }

    /// Recent gate entries. No endpoint serves this yet.
    pub fn entries(&self) -> Availability<Vec<VehicleEntry>> {
        Availability::unavailable(Capability::VehicleEntries)
    }
}

impl Record for Vehicle {
    const PAGE: Page = Page::Vehicles;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.make.as_str(),
            self.model.as_str(),
            self.color.as_str(),
            self.license_plate.as_str(),
        ];
        fields.extend(self.user_name.as_deref());
        fields
    }
}
