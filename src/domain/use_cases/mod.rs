pub mod achievements;
pub mod profile;
