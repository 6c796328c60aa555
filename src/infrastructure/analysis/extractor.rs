use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::entities::skill::{NewSkill, Proficiency, SkillCategory, SkillStatus};
use crate::errors::AnalysisError;

/// A resume handed over for analysis. Contents are carried as raw bytes;
/// making sense of them is entirely the extractor's concern.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        ResumeDocument {
            file_name: file_name.into(),
            content,
        }
    }
}

/// Turns a resume into skill proposals. The catalog stays synchronous and
/// unaware of this asynchrony; implementations only propose, the caller
/// decides what to import.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract_skills(
        &self,
        document: &ResumeDocument,
    ) -> Result<Vec<NewSkill>, AnalysisError>;
}

static CANNED_SKILLS: Lazy<Vec<NewSkill>> = Lazy::new(|| {
    vec![
        NewSkill {
            name: "React".to_string(),
            proficiency: Proficiency::Advanced,
            category: SkillCategory::Frameworks,
            status: SkillStatus::Completed,
            notes: "Extracted from resume".to_string(),
            start_date: None,
            completion_date: None,
        },
        NewSkill {
            name: "TypeScript".to_string(),
            proficiency: Proficiency::Intermediate,
            category: SkillCategory::Languages,
            status: SkillStatus::InProgress,
            notes: "Extracted from resume".to_string(),
            start_date: None,
            completion_date: None,
        },
    ]
});

/// Stand-in until a real resume parser is integrated: returns a fixed
/// result set regardless of document contents.
#[derive(Debug, Default, Clone)]
pub struct CannedExtractor;

#[async_trait]
impl SkillExtractor for CannedExtractor {
    async fn extract_skills(
        &self,
        document: &ResumeDocument,
    ) -> Result<Vec<NewSkill>, AnalysisError> {
        tracing::debug!(
            file = %document.file_name,
            size = document.content.len(),
            "Extracting skills from resume"
        );
        Ok(CANNED_SKILLS.clone())
    }
}
