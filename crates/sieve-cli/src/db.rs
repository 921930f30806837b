use crate::error::{CliError, Result};
use serde::Deserialize;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.materialsproject.org";
const API_KEY_ENV_VAR: &str = "MP_API_KEY";

/// A thin client for the Materials Project summary endpoint, used to pull
/// known reference compounds for the chemical subsystems of an element set.
///
/// The API key is resolved once at construction (explicit parameter first,
/// then the `MP_API_KEY` environment variable), and a missing key is a
/// configuration error raised before any network traffic.
pub struct ReferenceDbClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    data: Vec<SummaryDoc>,
}

#[derive(Debug, Deserialize)]
struct SummaryDoc {
    formula_pretty: String,
}

impl ReferenceDbClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Result<Self> {
        let api_key = resolve_api_key(api_key)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Searches the summary endpoint for compounds in any of the given
    /// chemical systems ("Cl-Na" style keys) and returns their formulas.
    pub fn search(&self, chemical_systems: &[String]) -> Result<Vec<String>> {
        let chemsys = chemical_systems.join(",");
        let url = format!("{}/materials/summary/", self.base_url);
        debug!(%url, %chemsys, "Querying reference database.");

        let response: SummaryResponse = self
            .http
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .query(&[
                ("chemsys", chemsys.as_str()),
                ("_fields", "formula_pretty"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        info!(
            compounds = response.data.len(),
            "Reference database query complete."
        );
        Ok(response
            .data
            .into_iter()
            .map(|doc| doc.formula_pretty)
            .collect())
    }
}

fn resolve_api_key(explicit: Option<String>) -> Result<String> {
    explicit
        .filter(|key| !key.trim().is_empty())
        .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(CliError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env_key() {
        unsafe { std::env::remove_var(API_KEY_ENV_VAR) };
    }

    #[test]
    #[serial]
    fn explicit_key_wins_over_environment() {
        unsafe { std::env::set_var(API_KEY_ENV_VAR, "env-key") };
        let key = resolve_api_key(Some("param-key".to_string())).unwrap();
        assert_eq!(key, "param-key");
        clear_env_key();
    }

    #[test]
    #[serial]
    fn environment_key_is_the_fallback() {
        unsafe { std::env::set_var(API_KEY_ENV_VAR, "env-key") };
        let key = resolve_api_key(None).unwrap();
        assert_eq!(key, "env-key");
        clear_env_key();
    }

    #[test]
    #[serial]
    fn missing_key_is_a_configuration_error() {
        clear_env_key();
        assert!(matches!(
            resolve_api_key(None),
            Err(CliError::MissingApiKey)
        ));
    }

    #[test]
    #[serial]
    fn blank_keys_are_treated_as_missing() {
        clear_env_key();
        assert!(matches!(
            resolve_api_key(Some("   ".to_string())),
            Err(CliError::MissingApiKey)
        ));
    }

    #[test]
    #[serial]
    fn client_construction_fails_without_a_key_before_any_network_call() {
        clear_env_key();
        assert!(ReferenceDbClient::new(None).is_err());
    }
}
