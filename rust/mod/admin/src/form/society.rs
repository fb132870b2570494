//! Society registration / edit form — stored at `society/form`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Society;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocietyField {
    Name,
    Address,
    City,
    State,
    PostalCode,
}

impl SocietyField {
    pub const ALL: [SocietyField; 5] = [
        SocietyField::Name,
        SocietyField::Address,
        SocietyField::City,
        SocietyField::State,
        SocietyField::PostalCode,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SocietyField::Name => "name",
            SocietyField::Address => "address",
            SocietyField::City => "city",
            SocietyField::State => "state",
            SocietyField::PostalCode => "postalCode",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// Request body for `POST /society/add` and the update PATCH.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl SocietyDraft {
    pub fn from_society(s: &Society) -> Self {
        Self {
            name: s.name.clone(),
            address: s.address.clone(),
            city: s.city.clone().unwrap_or_default(),
            state: s.state.clone().unwrap_or_default(),
            postal_code: s.postal_code.clone().unwrap_or_default(),
        }
    }

    fn slot(&mut self, field: SocietyField) -> &mut String {
        match field {
            SocietyField::Name => &mut self.name,
            SocietyField::Address => &mut self.address,
            SocietyField::City => &mut self.city,
            SocietyField::State => &mut self.state,
            SocietyField::PostalCode => &mut self.postal_code,
        }
    }

    pub fn validate(&self) -> BTreeMap<SocietyField, String> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(SocietyField::Name, "Society name is required".to_string());
        }
        if self.address.trim().is_empty() {
            errors.insert(SocietyField::Address, "Address is required".to_string());
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SocietyFormMode {
    Register,
    Edit { society_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocietyForm {
    pub mode: SocietyFormMode,
    pub fields: SocietyDraft,
    pub errors: BTreeMap<SocietyField, String>,
    pub busy: bool,
    pub error: Option<String>,
}

impl SocietyForm {
    pub const PATH: &'static str = "society/form";

    pub fn register() -> Self {
        Self {
            mode: SocietyFormMode::Register,
            fields: SocietyDraft::default(),
            errors: BTreeMap::new(),
            busy: false,
            error: None,
        }
    }

    /// Edit form prefilled from the current society.
    pub fn edit(society: &Society) -> Self {
        Self {
            mode: SocietyFormMode::Edit { society_id: society.society_id.clone() },
            fields: SocietyDraft::from_society(society),
            ..Self::register()
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            SocietyFormMode::Register => "Register New Society",
            SocietyFormMode::Edit { .. } => "Edit Society",
        }
    }

    /// Generic failure text when the backend sends no `message`.
    pub fn failure_message(&self) -> &'static str {
        match self.mode {
            SocietyFormMode::Register => "Failed to register society",
            SocietyFormMode::Edit { .. } => "Failed to update society",
        }
    }

    pub fn set(&mut self, field: SocietyField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn check(&mut self) -> bool {
        self.errors = self.fields.validate();
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn society() -> Society {
        Society {
            society_id: "s1".into(),
            name: "Green Meadows".into(),
            address: "Chak Shahzad".into(),
            city: Some("Islamabad".into()),
            state: None,
            postal_code: Some("44000".into()),
        }
    }

    #[test]
    fn name_and_address_required() {
        let mut form = SocietyForm::register();
        assert!(!form.check());
        assert_eq!(form.errors.len(), 2);

        form.set(SocietyField::Name, "GM");
        assert!(!form.errors.contains_key(&SocietyField::Name));
        form.set(SocietyField::Address, "Street 1");
        assert!(form.check());
    }

    #[test]
    fn edit_prefills() {
        let form = SocietyForm::edit(&society());
        assert_eq!(form.mode, SocietyFormMode::Edit { society_id: "s1".into() });
        assert_eq!(form.fields.city, "Islamabad");
        assert_eq!(form.fields.state, "");
        assert_eq!(form.title(), "Edit Society");
        assert_eq!(form.failure_message(), "Failed to update society");
    }

    #[test]
    fn body_keys() {
        let json = serde_json::to_value(SocietyDraft::from_society(&society())).unwrap();
        assert_eq!(json["postalCode"], "44000");
        assert_eq!(json["name"], "Green Meadows");
    }

    #[test]
    fn field_keys() {
        for field in SocietyField::ALL {
            assert_eq!(SocietyField::from_key(field.key()), Some(field));
        }
    }
}
