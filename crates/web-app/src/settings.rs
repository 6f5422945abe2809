use chrono::Duration;
use stort_domain::Debouncer;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// Connection to the exercise API and search behaviour.
///
/// The API key is not part of the application. It has to be provided by the user before the
/// first search.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub search_delay_ms: u32,
}

impl Settings {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.api-ninjas.com";

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        if self.base_url.trim().is_empty() {
            return Err(SettingsError::MissingBaseUrl);
        }
        Ok(())
    }

    #[must_use]
    pub fn debouncer(&self) -> Debouncer {
        Debouncer::new(Duration::milliseconds(i64::from(self.search_delay_ms)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            search_delay_ms: u32::try_from(Debouncer::DEFAULT_DELAY_MS).unwrap_or(500),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("API key is missing")]
    MissingApiKey,
    #[error("base URL is missing")]
    MissingBaseUrl,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://api.api-ninjas.com");
        assert_eq!(settings.search_delay_ms, 500);
        assert_eq!(settings.api_key, "");
        assert_eq!(settings.debouncer(), Debouncer::default());
    }

    #[rstest]
    #[case("key", "https://example.org", Ok(()))]
    #[case("", "https://example.org", Err(SettingsError::MissingApiKey))]
    #[case("  ", "https://example.org", Err(SettingsError::MissingApiKey))]
    #[case("key", "", Err(SettingsError::MissingBaseUrl))]
    fn test_validate(
        #[case] api_key: &str,
        #[case] base_url: &str,
        #[case] expected: Result<(), SettingsError>,
    ) {
        let settings = Settings {
            api_key: api_key.into(),
            base_url: base_url.into(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), expected);
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: Settings = serde_json::from_str(r#"{ "api_key": "secret" }"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                api_key: "secret".into(),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_serde() {
        let settings = Settings {
            api_key: "secret".into(),
            base_url: "http://localhost:8080".into(),
            search_delay_ms: 250,
        };
        let serialized = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            serde_json::from_str::<Settings>(&serialized).unwrap(),
            settings
        );
        assert_eq!(
            settings.debouncer().delay(),
            Duration::milliseconds(250)
        );
    }
}
