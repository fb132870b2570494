use thiserror::Error;

/// Failures of the persisted-credential layer.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Login was attempted with an empty credential.
    #[error("token must not be empty")]
    EmptyToken,

    /// Reading or writing the credential file failed.
    #[error("token storage: {0}")]
    Io(#[from] std::io::Error),

    /// The credential file exists but is not a valid token document.
    #[error("token file is malformed: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("token encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
