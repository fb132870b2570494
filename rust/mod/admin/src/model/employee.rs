use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::page::Page;

/// Society staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    pub internal_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl Record for Employee {
    const PAGE: Page = Page::Employees;

    fn record_id(&self) -> &str {
        &self.employee_id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.firstname.as_str(),
            self.lastname.as_str(),
            self.email.as_str(),
            self.internal_role.as_str(),
        ];
        fields.extend(self.department.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal() {
        let e: Employee = serde_json::from_str(
            r#"{"employeeId":"e1","firstname":"A","lastname":"B","email":"a@b.com","internalRole":"Guard"}"#,
        )
        .unwrap();
        assert_eq!(e.record_id(), "e1");
        assert_eq!(e.full_name(), "A B");
        assert_eq!(e.department, None);
        assert_eq!(e.search_fields(), vec!["A", "B", "a@b.com", "Guard"]);
    }

    #[test]
    fn department_is_searchable() {
        let e: Employee = serde_json::from_str(
            r#"{"employeeId":"e1","firstname":"A","lastname":"B","email":"a@b.com",
                "internalRole":"Guard","department":"Security","joiningDate":"2024-01-02"}"#,
        )
        .unwrap();
        assert!(e.search_fields().contains(&"Security"));
        assert_eq!(e.joining_date.as_deref(), Some("2024-01-02"));
    }
}
