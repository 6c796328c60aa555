use std::{env, fmt, str::FromStr, time::Duration};

use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_owner_username")]
    pub owner_username: String,

    #[serde(default = "default_owner_email")]
    pub owner_email: String,

    /// Interval between progress ticks of a simulated resume analysis.
    #[serde(default = "default_analysis_tick_ms")]
    pub analysis_tick_ms: u64,

    /// Progress gained per tick, in percent points.
    #[serde(default = "default_analysis_progress_step")]
    pub analysis_progress_step: u8,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Skillfolio".to_string()
}
fn default_owner_username() -> String {
    "john_doe".to_string()
}
fn default_owner_email() -> String {
    "john.doe@example.com".to_string()
}
fn default_analysis_tick_ms() -> u64 {
    200
}
fn default_analysis_progress_step() -> u8 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            owner_username: default_owner_username(),
            owner_email: default_owner_email(),
            analysis_tick_ms: default_analysis_tick_ms(),
            analysis_progress_step: default_analysis_progress_step(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.owner_username.trim().is_empty() {
            errors.push("OWNER_USERNAME cannot be empty");
        }
        if self.owner_email.trim().is_empty() {
            errors.push("OWNER_EMAIL cannot be empty");
        }
        if self.analysis_tick_ms == 0 {
            errors.push("ANALYSIS_TICK_MS must be greater than zero");
        }
        if self.analysis_progress_step == 0 || self.analysis_progress_step > 100 {
            errors.push("ANALYSIS_PROGRESS_STEP must be between 1 and 100");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn analysis_tick(&self) -> Duration {
        Duration::from_millis(self.analysis_tick_ms)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}
