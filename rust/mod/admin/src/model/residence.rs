use serde::{Deserialize, Serialize};

/// A resident's address inside the society.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Residence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_type: Option<String>,
}

impl Residence {
    /// Address line, else block, else `None`. Blank strings count as missing.
    pub fn short_address(&self) -> Option<&str> {
        non_blank(&self.address_line1).or_else(|| non_blank(&self.block))
    }

    /// Every present part, comma-joined.
    pub fn full_address(&self) -> String {
        [&self.address_line1, &self.block, &self.residence]
            .into_iter()
            .filter_map(non_blank)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case() {
        let r: Residence = serde_json::from_str(
            r#"{"addressLine1":"House 12","block":"B","residenceType":"Villa","extra":1}"#,
        )
        .unwrap();
        assert_eq!(r.address_line1.as_deref(), Some("House 12"));
        assert_eq!(r.residence_type.as_deref(), Some("Villa"));
        assert_eq!(r.residence, None);
    }

    #[test]
    fn short_address_falls_back() {
        let mut r = Residence { block: Some("Block C".into()), ..Default::default() };
        assert_eq!(r.short_address(), Some("Block C"));
        r.address_line1 = Some("  ".into());
        assert_eq!(r.short_address(), Some("Block C"));
        r.address_line1 = Some("House 1".into());
        assert_eq!(r.short_address(), Some("House 1"));
        assert_eq!(Residence::default().short_address(), None);
    }

    #[test]
    fn full_address_joins_present_parts() {
        let r = Residence {
            address_line1: Some("House 1".into()),
            block: Some("A".into()),
            residence: None,
            ..Default::default()
        };
        assert_eq!(r.full_address(), "House 1, A");
    }
}
