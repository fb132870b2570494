use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Dashboard configuration shared by every front end.
///
/// Front ends (the `vaultx` CLI, tests) fill this from their own argument
/// parsing, then hand it to [`crate::AdminContext::new`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the VaultX REST backend.
    pub api_url: String,

    /// Directory holding client-side state (the persisted credential).
    /// Defaults to `~/.vaultx` if not specified.
    pub data_dir: Option<PathBuf>,

    /// Path to the credential file.
    /// Defaults to `{data_dir}/token.toml` if not specified.
    pub token_path: Option<PathBuf>,

    /// Endpoint used when editing an existing society.
    pub society_update: SocietyUpdateRoute,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            data_dir: None,
            token_path: None,
            society_update: SocietyUpdateRoute::default(),
        }
    }
}

impl DashboardConfig {
    /// Resolve the data directory, falling back to `~/.vaultx`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(home_dir_path)
    }

    /// Resolve the credential file, falling back to `{data_dir}/token.toml`.
    pub fn resolve_token_path(&self) -> PathBuf {
        self.token_path
            .clone()
            .unwrap_or_else(|| self.resolve_data_dir().join("token.toml"))
    }
}

/// Which PATCH endpoint updates an existing society.
///
/// The backend has exposed both shapes; neither is assumed authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SocietyUpdateRoute {
    /// `PATCH /society/{societyId}`
    #[default]
    ById,
    /// `PATCH /society/latest/update`
    Latest,
}

impl SocietyUpdateRoute {
    pub fn path(&self, society_id: &str) -> String {
        match self {
            SocietyUpdateRoute::ById => format!("/society/{}", society_id),
            SocietyUpdateRoute::Latest => "/society/latest/update".to_string(),
        }
    }
}

impl FromStr for SocietyUpdateRoute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "by-id" | "byid" | "id" => Ok(SocietyUpdateRoute::ById),
            "latest" => Ok(SocietyUpdateRoute::Latest),
            other => Err(format!(
                "unknown society update route '{}' (expected 'by-id' or 'latest')",
                other
            )),
        }
    }
}

impl fmt::Display for SocietyUpdateRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocietyUpdateRoute::ById => f.write_str("by-id"),
            SocietyUpdateRoute::Latest => f.write_str("latest"),
        }
    }
}

/// `~/.vaultx`, or `./.vaultx` when no home directory is known.
fn home_dir_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".vaultx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = DashboardConfig {
            data_dir: Some(PathBuf::from("/data")),
            ..Default::default()
        };
        assert_eq!(config.resolve_data_dir(), PathBuf::from("/data"));
        assert_eq!(config.resolve_token_path(), PathBuf::from("/data/token.toml"));
    }

    #[test]
    fn test_explicit_token_path_wins() {
        let config = DashboardConfig {
            data_dir: Some(PathBuf::from("/data")),
            token_path: Some(PathBuf::from("/run/vaultx.toml")),
            ..Default::default()
        };
        assert_eq!(config.resolve_token_path(), PathBuf::from("/run/vaultx.toml"));
    }

    #[test]
    fn test_society_update_paths() {
        assert_eq!(SocietyUpdateRoute::ById.path("s1"), "/society/s1");
        assert_eq!(SocietyUpdateRoute::Latest.path("s1"), "/society/latest/update");
    }

    #[test]
    fn test_society_update_parse() {
        assert_eq!("by-id".parse::<SocietyUpdateRoute>(), Ok(SocietyUpdateRoute::ById));
        assert_eq!(" Latest ".parse::<SocietyUpdateRoute>(), Ok(SocietyUpdateRoute::Latest));
        assert!("other".parse::<SocietyUpdateRoute>().is_err());
        assert_eq!(SocietyUpdateRoute::Latest.to_string(), "latest");
    }
}
