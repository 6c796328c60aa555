use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    SkillsMaster,
    GoalSetter,
    ProfileComplete,
    ResumeOptimizer,
}

/// A derived unlock/progress indicator. Achievements are recomputed on
/// demand from current profile state and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
    pub progress: u8,
}
