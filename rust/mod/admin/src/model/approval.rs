use serde::{Deserialize, Serialize};

use super::Residence;
use crate::collection::Record;
use crate::page::Page;

/// A resident registration waiting for admin approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingApproval {
    pub resident_id: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub cnic: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub residence: Residence,
}

impl PendingApproval {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl Record for PendingApproval {
    const PAGE: Page = Page::Approvals;

    fn record_id(&self) -> &str {
        &self.resident_id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.firstname.as_str(),
            self.lastname.as_str(),
            self.email.as_str(),
            self.cnic.as_str(),
        ];
        fields.extend(self.residence.address_line1.as_deref());
        fields.extend(self.residence.block.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_missing_optionals() {
        let a: PendingApproval = serde_json::from_str(
            r#"{"residentId":"r1","firstname":"Hina","lastname":"Aslam","email":"h@x.pk"}"#,
        )
        .unwrap();
        assert_eq!(a.record_id(), "r1");
        assert_eq!(a.cnic, "");
        assert_eq!(a.residence, Residence::default());
        assert_eq!(a.full_name(), "Hina Aslam");
    }

    #[test]
    fn searches_residence_address() {
        let a: PendingApproval = serde_json::from_str(
            r#"{"residentId":"r1","firstname":"Hina","lastname":"Aslam","email":"h@x.pk",
                "cnic":"35202-1","phone":"0300","residence":{"addressLine1":"House 9","block":"F"}}"#,
        )
        .unwrap();
        assert_eq!(a.search_fields(), vec!["Hina", "Aslam", "h@x.pk", "35202-1", "House 9", "F"]);
    }
}
