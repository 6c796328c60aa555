use std::str::FromStr;
use std::time::Duration;

use skillfolio::settings::{AppConfig, AppEnvironment};

#[test]
fn default_config_matches_the_simulated_analysis_pace() {
    let config = AppConfig::default();

    assert_eq!(config.env, AppEnvironment::Development);
    assert_eq!(config.owner_username, "john_doe");
    assert_eq!(config.owner_email, "john.doe@example.com");
    assert_eq!(config.analysis_tick_ms, 200);
    assert_eq!(config.analysis_progress_step, 10);
    assert_eq!(config.analysis_tick(), Duration::from_millis(200));
    assert!(!config.is_production());
}

#[test]
fn environment_parses_case_insensitively() {
    assert_eq!(
        AppEnvironment::from_str("Development").unwrap(),
        AppEnvironment::Development
    );
    assert_eq!(
        AppEnvironment::from_str("PRODUCTION").unwrap(),
        AppEnvironment::Production
    );
    assert!(AppEnvironment::from_str("staging").is_err());
}

#[test]
fn environment_displays_lowercase() {
    assert_eq!(AppEnvironment::Testing.to_string(), "testing");
}

#[test]
fn app_state_seeds_the_owner_profile() {
    let config = AppConfig::default();
    let state = skillfolio::AppState::new(&config);

    let handler = state.profile.read();
    assert_eq!(handler.profile().username, "john_doe");
    assert_eq!(handler.profile().email, "john.doe@example.com");
    assert!(handler.profile().skills.is_empty());
}
