use serde::{Deserialize, Serialize};

use super::{Availability, Capability, Residence};
use crate::collection::{FlagFilter, Record};
use crate::page::Page;

/// A visitor registered by a resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub guest_id: String,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone_number: Option<String>,
    /// Expected arrival, as sent by the backend.
    pub eta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence: Option<Residence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_vehicle: Option<GuestVehicle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestVehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_license_plate_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    Verified,
    Pending,
}

impl VisitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VisitStatus::Verified => "Verified",
            VisitStatus::Pending => "Pending",
        }
    }
}

impl Guest {
    /// Visit status, when the backend reported one.
    pub fn visit_status(&self) -> Availability<VisitStatus> {
        Availability::from_option(
            self.visit_completed.map(|done| {
                if done { VisitStatus::Verified } else { VisitStatus::Pending }
            }),
            Capability::GuestVisitStatus,
        )
    }

    pub fn residence_info(&self) -> Availability<&Residence> {
        Availability::from_option(self.residence.as_ref(), Capability::GuestResidence)
    }

    pub fn license_plate(&self) -> Option<&str> {
        self.guest_vehicle
            .as_ref()
            .and_then(|v| v.vehicle_license_plate_number.as_deref())
    }
}

impl Record for Guest {
    const PAGE: Page = Page::Guests;
    const FLAGS: &'static [FlagFilter] = &[FlagFilter::VerifiedOnly];

    fn record_id(&self) -> &str {
        &self.guest_id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.guest_name.as_str()];
        fields.extend(self.guest_phone_number.as_deref());
        fields.extend(self.license_plate());
        fields
    }

    fn passes(&self, flag: FlagFilter) -> bool {
        match flag {
            // Unknown status is not verified.
            FlagFilter::VerifiedOnly => self.visit_completed == Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(json: &str) -> Guest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_status_is_unavailable_not_fabricated() {
        let g = guest(r#"{"guestId":"g1","guestName":"Omar","eta":"2024-05-01T10:00:00Z"}"#);
        assert_eq!(g.visit_status(), Availability::unavailable(Capability::GuestVisitStatus));
        assert_eq!(g.residence_info(), Availability::unavailable(Capability::GuestResidence));
        assert!(!g.passes(FlagFilter::VerifiedOnly));
    }

    #[test]
    fn reported_status() {
        let g = guest(
            r#"{"guestId":"g1","guestName":"Omar","eta":"x","visitCompleted":true,
                "residence":{"addressLine1":"House 4","block":"C"}}"#,
        );
        assert_eq!(g.visit_status(), Availability::Available(VisitStatus::Verified));
        assert!(g.passes(FlagFilter::VerifiedOnly));
        assert_eq!(
            g.residence_info().available().and_then(|r| r.short_address()),
            Some("House 4")
        );

        let g = guest(r#"{"guestId":"g2","guestName":"Zara","eta":"x","visitCompleted":false}"#);
        assert_eq!(g.visit_status(), Availability::Available(VisitStatus::Pending));
        assert!(!g.passes(FlagFilter::VerifiedOnly));
    }

    #[test]
    fn searches_phone_and_plate() {
        let g = guest(
            r#"{"guestId":"g1","guestName":"Omar","eta":"x","guestPhoneNumber":"0333",
                "guestVehicle":{"vehicleModel":"Civic","vehicleLicensePlateNumber":"LEB-123"}}"#,
        );
        assert_eq!(g.search_fields(), vec!["Omar", "0333", "LEB-123"]);
        assert_eq!(g.license_plate(), Some("LEB-123"));
    }
}
