use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the price API deployments the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Development server on this machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Parse a user-supplied API location (`local` or an http(s) base URL).
    pub fn parse_api_url(value: &str) -> Result<Environment, String> {
        value.parse().map_err(|_| {
            format!(
                "Invalid API URL: {}. Use `local` or an http(s) URL.",
                value.trim()
            )
        })
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            _ if trimmed.starts_with("http://") || trimmed.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
