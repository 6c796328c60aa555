/// Catalog size at which "Skills Master" unlocks.
pub const SKILLS_MASTER_TARGET: usize = 10;

/// Completion percentage at which "Profile Complete" unlocks.
pub const PROFILE_COMPLETE_THRESHOLD: u8 = 80;

/// Number of career fields counted towards profile completion.
pub const TRACKED_FIELD_COUNT: usize = 7;
