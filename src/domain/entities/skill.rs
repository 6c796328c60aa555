use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::AppError;

// ───── Core Model ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Whether this level counts towards the "Advanced+" bucket.
    ///
    /// Membership in {Advanced, Expert}, not an ordering threshold.
    pub fn is_advanced_plus(&self) -> bool {
        matches!(self, Proficiency::Advanced | Proficiency::Expert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Tools,
    Frameworks,
    Languages,
    Methodologies,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// One tracked skill. Identity is assigned at creation time and stays
/// stable for the skill's lifetime; there is no in-place edit operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub proficiency: Proficiency,
    pub category: SkillCategory,
    pub status: SkillStatus,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub notes: String,
    pub added_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Skill-creation request, shared by the add dialog (name, proficiency,
/// category) and richer extracted-skill proposals (status, notes, dates).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(custom(function = "validate_skill_name"))]
    pub name: String,

    pub proficiency: Proficiency,

    pub category: SkillCategory,

    #[serde(default)]
    pub status: SkillStatus,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
}

impl NewSkill {
    pub fn new(
        name: impl Into<String>,
        proficiency: Proficiency,
        category: SkillCategory,
    ) -> Self {
        NewSkill {
            name: name.into(),
            proficiency,
            category,
            status: SkillStatus::default(),
            notes: String::new(),
            start_date: None,
            completion_date: None,
        }
    }

    fn into_skill(self) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: self.name,
            proficiency: self.proficiency,
            category: self.category,
            status: self.status,
            start_date: self.start_date,
            completion_date: self.completion_date,
            notes: self.notes,
            added_at: Utc::now(),
        }
    }
}

fn validate_skill_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("empty_skill_name");
        err.message = Some("Skill name cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

// ───── Catalog ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub total: usize,
    pub advanced_plus: usize,
    pub categories: usize,
}

/// The ordered collection of one profile's skills. Insertion order is
/// preserved for stable iteration; ids are unique within the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        SkillCatalog { skills: Vec::new() }
    }

    /// Validates and appends a skill, returning the created entry.
    ///
    /// The stored name keeps the submitted text; trimming is applied only
    /// for the emptiness check.
    pub fn add(&mut self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;

        let skill = request.into_skill();
        self.skills.push(skill.clone());

        Ok(skill)
    }

    /// Appends a batch of skills, all-or-nothing: every request is
    /// validated before anything is appended. Duplicate names are allowed,
    /// within a batch as much as against existing entries.
    pub fn add_batch(&mut self, requests: Vec<NewSkill>) -> Result<Vec<Skill>, AppError> {
        for request in &requests {
            request.validate()?;
        }

        let created: Vec<Skill> = requests.into_iter().map(NewSkill::into_skill).collect();
        self.skills.extend(created.iter().cloned());

        Ok(created)
    }

    /// Removes a skill by id. Removing an absent id is a no-op, not an
    /// error, and repeated removal is idempotent.
    pub fn remove(&mut self, id: Uuid) -> Option<Skill> {
        let index = self.skills.iter().position(|s| s.id == id)?;
        Some(self.skills.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Groups skills by category in a single linear pass. Relative
    /// insertion order is preserved within each group; categories with no
    /// skills are absent from the result.
    pub fn group_by_category(&self) -> BTreeMap<SkillCategory, Vec<&Skill>> {
        let mut groups: BTreeMap<SkillCategory, Vec<&Skill>> = BTreeMap::new();
        for skill in &self.skills {
            groups.entry(skill.category).or_default().push(skill);
        }
        groups
    }

    pub fn summary(&self) -> SkillSummary {
        let advanced_plus = self
            .skills
            .iter()
            .filter(|s| s.proficiency.is_advanced_plus())
            .count();
        let categories = self
            .skills
            .iter()
            .map(|s| s.category)
            .collect::<BTreeSet<_>>()
            .len();

        SkillSummary {
            total: self.skills.len(),
            advanced_plus,
            categories,
        }
    }
}

// ───── Display ──────────────────────────────────────────────────────

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Tools => "Tools",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Languages => "Languages",
            SkillCategory::Methodologies => "Methodologies",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillStatus::NotStarted => "Not Started",
            SkillStatus::InProgress => "In Progress",
            SkillStatus::Completed => "Completed",
        };
        write!(f, "{s}")
    }
}
