use std::collections::BTreeMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::achievement::Achievement,
    entities::profile::{UpdateProfileRequest, UserProfile},
    entities::skill::{NewSkill, Skill, SkillCategory, SkillSummary},
    errors::AppError,
    use_cases::achievements,
};

/// Owns one profile and answers every request the presentation layer can
/// make: field updates, catalog mutations, and the derived views.
/// UI-only view state (expanded groups, open dialogs) stays with the
/// caller.
pub struct ProfileHandler {
    profile: UserProfile,
}

impl ProfileHandler {
    pub fn new(profile: UserProfile) -> Self {
        ProfileHandler { profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Validates and applies a partial profile update.
    pub fn update(&mut self, request: UpdateProfileRequest) -> Result<(), AppError> {
        request.validate()?;

        self.profile.apply_update(request);
        tracing::info!(username = %self.profile.username, "Profile updated");

        Ok(())
    }

    pub fn add_skill(&mut self, request: NewSkill) -> Result<Skill, AppError> {
        let skill = self.profile.skills.add(request)?;
        self.profile.updated_at = chrono::Utc::now();

        tracing::info!(
            skill = %skill.name,
            category = %skill.category,
            proficiency = %skill.proficiency,
            "Skill added"
        );
        Ok(skill)
    }

    /// Appends a batch of skill proposals, typically the outcome of a
    /// resume analysis the caller chose to accept. All-or-nothing.
    pub fn import_skills(&mut self, requests: Vec<NewSkill>) -> Result<Vec<Skill>, AppError> {
        let created = self.profile.skills.add_batch(requests)?;
        if !created.is_empty() {
            self.profile.updated_at = chrono::Utc::now();
        }

        tracing::info!(count = created.len(), "Skills imported");
        Ok(created)
    }

    pub fn remove_skill(&mut self, id: Uuid) -> Option<Skill> {
        let removed = self.profile.skills.remove(id);
        match &removed {
            Some(skill) => {
                self.profile.updated_at = chrono::Utc::now();
                tracing::info!(skill = %skill.name, "Skill removed");
            }
            None => tracing::debug!(%id, "Remove requested for unknown skill"),
        }
        removed
    }

    // ----------------- Derived views -----------------
    //
    // Recomputed synchronously on every call; the data is small enough
    // that no caching layer is warranted.

    pub fn skills_by_category(&self) -> BTreeMap<SkillCategory, Vec<&Skill>> {
        self.profile.skills.group_by_category()
    }

    pub fn skill_summary(&self) -> SkillSummary {
        self.profile.skills.summary()
    }

    pub fn completion_percentage(&self) -> u8 {
        achievements::completion_percentage(&self.profile)
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        achievements::evaluate(&self.profile)
    }
}
