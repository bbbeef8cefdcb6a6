//! src/configuration.rs

use crate::api::MockApi;
use crate::validators::Locale;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub validation: ValidationSettings,
}

/// Latency and fixture literals of the mock api.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub latency_milliseconds: u64,
    pub taken_nickname: String,
    pub taken_email: String,
}

impl ApiSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_milliseconds)
    }

    pub fn client(&self) -> MockApi {
        MockApi::new(
            self.latency(),
            self.taken_nickname.clone(),
            self.taken_email.clone(),
        )
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ValidationSettings {
    #[serde(default)]
    pub locale: Locale,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub nickname_min_length: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub password_min_length: u64,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_API__LATENCY_MILLISECONDS=0` would set `Settings.api.latency_milliseconds`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
