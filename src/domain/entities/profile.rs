use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::TRACKED_FIELD_COUNT;

use super::option_fields::PatchString;
use super::skill::SkillCatalog;

// ───── Core Model ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileVisibility {
    #[default]
    Public,
    Limited,
    Private,
}

/// The profile record. Text fields use the empty string for "unset";
/// the skill catalog is exclusively owned, one per profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub profile_picture: String,

    pub target_role: String,
    pub bio: String,
    pub location: String,
    pub experience_level: String,
    pub preferred_work_type: String,
    pub availability: String,
    pub salary_range: String,
    pub career_goals: String,

    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,

    pub profile_visibility: ProfileVisibility,
    pub show_salary_public: bool,
    pub show_contact_info: bool,
    pub show_achievements_public: bool,

    pub email_notifications: bool,
    pub skill_update_notifications: bool,
    pub marketing_emails: bool,

    pub skills: SkillCatalog,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        UserProfile {
            username: username.into(),
            email: email.into(),
            profile_picture: String::new(),
            target_role: String::new(),
            bio: String::new(),
            location: String::new(),
            experience_level: String::new(),
            preferred_work_type: String::new(),
            availability: String::new(),
            salary_range: String::new(),
            career_goals: String::new(),
            website: String::new(),
            linkedin: String::new(),
            github: String::new(),
            twitter: String::new(),
            profile_visibility: ProfileVisibility::default(),
            show_salary_public: false,
            show_contact_info: true,
            show_achievements_public: true,
            email_notifications: true,
            skill_update_notifications: true,
            marketing_emails: false,
            skills: SkillCatalog::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The career fields counted towards profile completion, in their
    /// fixed display order.
    pub fn tracked_fields(&self) -> [&str; TRACKED_FIELD_COUNT] {
        [
            &self.target_role,
            &self.bio,
            &self.location,
            &self.experience_level,
            &self.preferred_work_type,
            &self.availability,
            &self.career_goals,
        ]
    }

    /// Applies a partial update, leaving `Unchanged` fields as-is.
    pub(crate) fn apply_update(&mut self, update: UpdateProfileRequest) {
        update.profile_picture.apply_to(&mut self.profile_picture);
        update.target_role.apply_to(&mut self.target_role);
        update.bio.apply_to(&mut self.bio);
        update.location.apply_to(&mut self.location);
        update.experience_level.apply_to(&mut self.experience_level);
        update.preferred_work_type.apply_to(&mut self.preferred_work_type);
        update.availability.apply_to(&mut self.availability);
        update.salary_range.apply_to(&mut self.salary_range);
        update.career_goals.apply_to(&mut self.career_goals);
        update.website.apply_to(&mut self.website);
        update.linkedin.apply_to(&mut self.linkedin);
        update.github.apply_to(&mut self.github);
        update.twitter.apply_to(&mut self.twitter);

        if let Some(visibility) = update.profile_visibility {
            self.profile_visibility = visibility;
        }
        if let Some(value) = update.show_salary_public {
            self.show_salary_public = value;
        }
        if let Some(value) = update.show_contact_info {
            self.show_contact_info = value;
        }
        if let Some(value) = update.show_achievements_public {
            self.show_achievements_public = value;
        }
        if let Some(value) = update.email_notifications {
            self.email_notifications = value;
        }
        if let Some(value) = update.skill_update_notifications {
            self.skill_update_notifications = value;
        }
        if let Some(value) = update.marketing_emails {
            self.marketing_emails = value;
        }

        self.updated_at = Utc::now();
    }
}

// ───── Input & Validation ───────────────────────────────────────────

/// Partial profile update. Absent fields deserialize to `Unchanged`
/// (text) or `None` (toggles), so callers only send what they touched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub profile_picture: PatchString,

    #[serde(default)]
    pub target_role: PatchString,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: PatchString,

    #[serde(default)]
    pub location: PatchString,

    #[serde(default)]
    pub experience_level: PatchString,

    #[serde(default)]
    pub preferred_work_type: PatchString,

    #[serde(default)]
    pub availability: PatchString,

    #[serde(default)]
    pub salary_range: PatchString,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Career goals must be at most 2000 characters"))]
    pub career_goals: PatchString,

    #[serde(default)]
    pub website: PatchString,

    #[serde(default)]
    pub linkedin: PatchString,

    #[serde(default)]
    pub github: PatchString,

    #[serde(default)]
    pub twitter: PatchString,

    #[serde(default)]
    pub profile_visibility: Option<ProfileVisibility>,

    #[serde(default)]
    pub show_salary_public: Option<bool>,

    #[serde(default)]
    pub show_contact_info: Option<bool>,

    #[serde(default)]
    pub show_achievements_public: Option<bool>,

    #[serde(default)]
    pub email_notifications: Option<bool>,

    #[serde(default)]
    pub skill_update_notifications: Option<bool>,

    #[serde(default)]
    pub marketing_emails: Option<bool>,
}

// ───── Display ──────────────────────────────────────────────────────

impl fmt::Display for ProfileVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileVisibility::Public => "Public",
            ProfileVisibility::Limited => "Limited",
            ProfileVisibility::Private => "Private",
        };
        write!(f, "{s}")
    }
}
