use serde::{Deserialize, Serialize};

use super::residence::non_blank;

/// The residential society this dashboard administers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    pub society_id: String,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Society {
    /// `address, city, state, postalCode`, skipping absent parts.
    pub fn formatted_address(&self) -> String {
        let mut parts = vec![self.address.clone()];
        let city_state = [non_blank(&self.city), non_blank(&self.state)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        if !city_state.is_empty() {
            parts.push(city_state);
        }
        if let Some(code) = non_blank(&self.postal_code) {
            parts.push(code.to_string());
        }
        parts.join(", ")
    }
}
