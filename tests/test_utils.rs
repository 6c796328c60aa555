use skillfolio::entities::profile::UserProfile;
use skillfolio::entities::skill::{NewSkill, Proficiency, SkillCategory};

/// Builder for seeded profiles used across the integration tests.
#[derive(Debug, Clone)]
pub struct TestProfile {
    profile: UserProfile,
}

impl TestProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            profile: UserProfile::new(username, "test@example.com"),
        }
    }

    #[allow(dead_code)]
    pub fn with_career_goals(mut self, goals: impl Into<String>) -> Self {
        self.profile.career_goals = goals.into();
        self
    }

    /// Fills the first `count` completion-tracked fields, in their display
    /// order.
    #[allow(dead_code)]
    pub fn with_tracked_fields(mut self, count: usize) -> Self {
        let fields = [
            &mut self.profile.target_role,
            &mut self.profile.bio,
            &mut self.profile.location,
            &mut self.profile.experience_level,
            &mut self.profile.preferred_work_type,
            &mut self.profile.availability,
            &mut self.profile.career_goals,
        ];
        for field in fields.into_iter().take(count) {
            *field = "Filled".to_string();
        }
        self
    }

    #[allow(dead_code)]
    pub fn completed(self) -> Self {
        self.with_tracked_fields(7)
    }

    #[allow(dead_code)]
    pub fn with_skills(mut self, count: usize, proficiency: Proficiency) -> Self {
        for i in 0..count {
            self.profile
                .skills
                .add(NewSkill::new(
                    format!("Skill {i}"),
                    proficiency,
                    SkillCategory::Technical,
                ))
                .unwrap();
        }
        self
    }

    pub fn build(self) -> UserProfile {
        self.profile
    }
}
