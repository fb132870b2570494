use serde::Deserialize;

/// Client-side API error.
///
/// - `Network`: the request never produced a response.
/// - `Server`: a non-2xx response; `message` is the JSON body's `message`
///   field when the body parsed and carried one.
/// - `Decode`: a 2xx response whose body did not match the expected shape.
/// - `Auth`: the token source failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server { status: u16, message: Option<String> },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("auth: {0}")]
    Auth(String),

    #[error("decode: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a `Server` error from a raw response body.
    ///
    /// Bodies that are not JSON, or JSON without a string `message`, give
    /// `message: None`.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Banner text for this error.
    ///
    /// A server-supplied message wins; a bare non-2xx falls back to
    /// `fallback`; transport and decode failures describe themselves.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(m), .. } => m.clone(),
            ApiError::Server { message: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}
