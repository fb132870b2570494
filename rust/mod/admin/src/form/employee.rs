//! Add-employee form — stored at `employees/form`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    Firstname,
    Lastname,
    Email,
    Password,
    Phone,
    Cnic,
    InternalRole,
    Department,
    Shift,
    JoiningDate,
}

/// Form sections; validation focuses the first one holding an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTab {
    Personal,
    Employment,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 10] = [
        EmployeeField::Firstname,
        EmployeeField::Lastname,
        EmployeeField::Email,
        EmployeeField::Password,
        EmployeeField::Phone,
        EmployeeField::Cnic,
        EmployeeField::InternalRole,
        EmployeeField::Department,
        EmployeeField::Shift,
        EmployeeField::JoiningDate,
    ];

    /// JSON key, also the field's name in `employees/form/update`.
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::Firstname => "firstname",
            EmployeeField::Lastname => "lastname",
            EmployeeField::Email => "email",
            EmployeeField::Password => "password",
            EmployeeField::Phone => "phone",
            EmployeeField::Cnic => "cnic",
            EmployeeField::InternalRole => "internalRole",
            EmployeeField::Department => "department",
            EmployeeField::Shift => "shift",
            EmployeeField::JoiningDate => "joiningDate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn tab(&self) -> FormTab {
        match self {
            EmployeeField::Firstname
            | EmployeeField::Lastname
            | EmployeeField::Email
            | EmployeeField::Password
            | EmployeeField::Phone
            | EmployeeField::Cnic => FormTab::Personal,
            _ => FormTab::Employment,
        }
    }
}

/// Request body for `POST /employee/create`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub cnic: String,
    pub internal_role: String,
    pub department: String,
    pub shift: String,
    pub joining_date: String,
}

impl NewEmployee {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Firstname => &self.firstname,
            EmployeeField::Lastname => &self.lastname,
            EmployeeField::Email => &self.email,
            EmployeeField::Password => &self.password,
            EmployeeField::Phone => &self.phone,
            EmployeeField::Cnic => &self.cnic,
            EmployeeField::InternalRole => &self.internal_role,
            EmployeeField::Department => &self.department,
            EmployeeField::Shift => &self.shift,
            EmployeeField::JoiningDate => &self.joining_date,
        }
    }

    fn slot(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::Firstname => &mut self.firstname,
            EmployeeField::Lastname => &mut self.lastname,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Password => &mut self.password,
            EmployeeField::Phone => &mut self.phone,
            EmployeeField::Cnic => &mut self.cnic,
            EmployeeField::InternalRole => &mut self.internal_role,
            EmployeeField::Department => &mut self.department,
            EmployeeField::Shift => &mut self.shift,
            EmployeeField::JoiningDate => &mut self.joining_date,
        }
    }

    /// Per-field problems; empty means the form may be submitted.
    pub fn validate(&self) -> BTreeMap<EmployeeField, String> {
        let mut errors = BTreeMap::new();
        let mut require = |field: EmployeeField, message: &str| {
            if self.get(field).trim().is_empty() {
                errors.insert(field, message.to_string());
            }
        };
        require(EmployeeField::Firstname, "First name is required");
        require(EmployeeField::Lastname, "Last name is required");
        require(EmployeeField::Email, "Email is required");
        require(EmployeeField::Password, "Password is required");
        require(EmployeeField::InternalRole, "Role is required");

        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                EmployeeField::Password,
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }
        if !self.email.trim().is_empty() && !EMAIL_RE.is_match(&self.email) {
            errors.insert(EmployeeField::Email, "Invalid email format".to_string());
        }
        errors
    }
}

/// Add-employee dialog state.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub fields: NewEmployee,
    pub errors: BTreeMap<EmployeeField, String>,
    pub tab: FormTab,
    pub busy: bool,
    /// Banner shown above the form (server-side failure).
    pub error: Option<String>,
}

impl EmployeeForm {
    pub const PATH: &'static str = "employees/form";

    pub fn empty() -> Self {
        Self {
            fields: NewEmployee::default(),
            errors: BTreeMap::new(),
            tab: FormTab::Personal,
            busy: false,
            error: None,
        }
    }

    /// Edit one field. Clears that field's error.
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.errors.remove(&field);
    }

    /// Run validation, store the errors and focus the failing tab.
    pub fn check(&mut self) -> bool {
        self.errors = self.fields.validate();
        if self.errors.is_empty() {
            return true;
        }
        let personal = self.errors.keys().any(|f| f.tab() == FormTab::Personal);
        self.tab = if personal { FormTab::Personal } else { FormTab::Employment };
        false
    }

    pub fn error_for(&self, field: EmployeeField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
