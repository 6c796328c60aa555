use crate::constants::{PROFILE_COMPLETE_THRESHOLD, SKILLS_MASTER_TARGET};
use crate::entities::achievement::{Achievement, AchievementId};
use crate::entities::profile::UserProfile;

/// Share of the tracked career fields that are filled in, as a rounded
/// integer percent. A field counts once its trimmed text is non-empty.
pub fn completion_percentage(profile: &UserProfile) -> u8 {
    let fields = profile.tracked_fields();
    let completed = fields.iter().filter(|f| !f.trim().is_empty()).count();

    ((completed as f64 / fields.len() as f64) * 100.0).round() as u8
}

/// Evaluates the full achievement panel. Each rule is independent of the
/// others and of evaluation order; calling this never fails.
pub fn evaluate(profile: &UserProfile) -> Vec<Achievement> {
    let skill_count = profile.skills.len();
    let completion = completion_percentage(profile);
    let goals_set = !profile.career_goals.trim().is_empty();

    vec![
        Achievement {
            id: AchievementId::SkillsMaster,
            title: "Skills Master",
            description: "Add 10+ skills to your profile",
            unlocked: skill_count >= SKILLS_MASTER_TARGET,
            progress: (skill_count * 100 / SKILLS_MASTER_TARGET).min(100) as u8,
        },
        Achievement {
            id: AchievementId::GoalSetter,
            title: "Goal Setter",
            description: "Set your career goals",
            unlocked: goals_set,
            progress: if goals_set { 100 } else { 0 },
        },
        Achievement {
            id: AchievementId::ProfileComplete,
            title: "Profile Complete",
            description: "Complete your profile",
            unlocked: completion >= PROFILE_COMPLETE_THRESHOLD,
            progress: completion,
        },
        // TODO: unlock once an AnalysisReport delivery feeds a completion
        // signal back into the profile.
        Achievement {
            id: AchievementId::ResumeOptimizer,
            title: "Resume Optimizer",
            description: "Upload and analyze your resume",
            unlocked: false,
            progress: 0,
        },
    ]
}
