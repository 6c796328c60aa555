use std::sync::Arc;

use parking_lot::RwLock;

mod domain;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;

pub use domain::{entities, use_cases};
pub use infrastructure::{analysis, telemetry};

use analysis::extractor::{CannedExtractor, SkillExtractor};
use entities::profile::UserProfile;
use use_cases::profile::ProfileHandler;

/// Process-wide state handed to the presentation layer: the profile
/// behind a lock, plus the extractor shared by analysis runs.
pub struct AppState {
    pub profile: RwLock<ProfileHandler>,
    pub extractor: Arc<dyn SkillExtractor>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let profile = UserProfile::new(
            config.owner_username.clone(),
            config.owner_email.clone(),
        );

        AppState {
            profile: RwLock::new(ProfileHandler::new(profile)),
            extractor: Arc::new(CannedExtractor),
        }
    }
}
