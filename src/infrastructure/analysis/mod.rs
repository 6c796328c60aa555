pub mod extractor;
pub mod task;

pub use extractor::{CannedExtractor, ResumeDocument, SkillExtractor};
pub use task::{AnalysisReport, AnalysisTask};
