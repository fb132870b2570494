//! Display-only JWT claim decoding.
//!
//! The dashboard never verifies signatures; the backend does that on every
//! request. Claims are read only to show who is logged in and to notice an
//! expired credential before the backend rejects it.
//!
//! Each claim is extracted on its own. A claim of an unexpected JSON type
//! reads as absent without affecting the others.

use serde::Serialize;
use serde_json::{Map, Value};

/// Claims the VaultX backend puts in its tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiration (unix timestamp, seconds). May be fractional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
}

impl Claims {
    /// Decode the payload without checking the signature or any claim.
    ///
    /// Fails only when the token is not a JWT with a JSON object payload.
    pub fn decode(token: &str) -> Result<Self, String> {
        let mut validation = jsonwebtoken::Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let key = jsonwebtoken::DecodingKey::from_secret(&[]);
        let payload = jsonwebtoken::decode::<Map<String, Value>>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| format!("jwt decode: {}", e))?;

        Ok(Self {
            userid: text_claim(&payload, "userid"),
            name: text_claim(&payload, "name"),
            role: text_claim(&payload, "role"),
            exp: payload.get("exp").and_then(Value::as_f64),
        })
    }

    /// True iff `now` (unix seconds) is strictly before `exp`.
    pub fn is_live_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp > now as f64)
    }
}

/// A string claim; numbers are accepted and printed as-is.
fn text_claim(payload: &Map<String, Value>, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
