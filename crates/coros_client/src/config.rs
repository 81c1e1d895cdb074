use crate::CorosError;
use secrecy::SecretString;

/// Default endpoint origin (Europe). The vendor runs per-region origins:
/// America `https://teamapi.coros.com`, Europe `https://teameuapi.coros.com`,
/// China `https://teamcnapi.coros.com`.
pub const DEFAULT_BASE_URL: &str = "https://teameuapi.coros.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub email: String,
    pub password: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, CorosError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, CorosError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let email =
            get("COROS_EMAIL").ok_or_else(|| CorosError::Config("COROS_EMAIL missing".into()))?;
        let password = get("COROS_PASSWORD")
            .ok_or_else(|| CorosError::Config("COROS_PASSWORD missing".into()))?;
        let base_url = get("COROS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Self {
            email,
            password: SecretString::new(password.into()),
            base_url,
        })
    }
}
