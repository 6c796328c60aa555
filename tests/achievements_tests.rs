use skillfolio::entities::achievement::{Achievement, AchievementId};
use skillfolio::entities::skill::Proficiency;
use skillfolio::use_cases::achievements::{completion_percentage, evaluate};

mod test_utils;
use test_utils::TestProfile;

fn find(achievements: &[Achievement], id: AchievementId) -> &Achievement {
    achievements
        .iter()
        .find(|a| a.id == id)
        .expect("achievement should be present")
}

#[test]
fn empty_profile_scores_zero() {
    let profile = TestProfile::new("casey").build();

    assert_eq!(completion_percentage(&profile), 0);

    let achievements = evaluate(&profile);
    assert_eq!(achievements.len(), 4);

    let skills_master = find(&achievements, AchievementId::SkillsMaster);
    assert!(!skills_master.unlocked);
    assert_eq!(skills_master.progress, 0);

    let profile_complete = find(&achievements, AchievementId::ProfileComplete);
    assert!(!profile_complete.unlocked);
    assert_eq!(profile_complete.progress, 0);
}

#[test]
fn completing_all_tracked_fields_scores_100() {
    let profile = TestProfile::new("casey").completed().build();

    assert_eq!(completion_percentage(&profile), 100);

    let achievements = evaluate(&profile);
    let profile_complete = find(&achievements, AchievementId::ProfileComplete);
    assert!(profile_complete.unlocked);
    assert_eq!(profile_complete.progress, 100);
}

#[test]
fn completion_rounds_to_nearest_percent() {
    // 3 of 7 fields → 42.86 → 43
    let profile = TestProfile::new("casey").with_tracked_fields(3).build();
    assert_eq!(completion_percentage(&profile), 43);

    // 6 of 7 fields → 85.71 → 86, which clears the unlock threshold
    let profile = TestProfile::new("casey").with_tracked_fields(6).build();
    assert_eq!(completion_percentage(&profile), 86);

    let achievements = evaluate(&profile);
    let profile_complete = find(&achievements, AchievementId::ProfileComplete);
    assert!(profile_complete.unlocked);
    assert_eq!(profile_complete.progress, 86);
}

#[test]
fn whitespace_only_fields_do_not_count() {
    let mut profile = TestProfile::new("casey").build();
    profile.bio = "   ".to_string();
    profile.salary_range = "$80k - $120k".to_string();

    assert_eq!(completion_percentage(&profile), 0);
}

#[test]
fn skills_master_progresses_with_catalog_size() {
    let profile = TestProfile::new("casey")
        .with_skills(5, Proficiency::Beginner)
        .build();
    let achievements = evaluate(&profile);
    let skills_master = find(&achievements, AchievementId::SkillsMaster);
    assert!(!skills_master.unlocked);
    assert_eq!(skills_master.progress, 50);

    let profile = TestProfile::new("casey")
        .with_skills(10, Proficiency::Beginner)
        .build();
    let achievements = evaluate(&profile);
    let skills_master = find(&achievements, AchievementId::SkillsMaster);
    assert!(skills_master.unlocked);
    assert_eq!(skills_master.progress, 100);
}

#[test]
fn skills_master_progress_caps_at_100() {
    let profile = TestProfile::new("casey")
        .with_skills(14, Proficiency::Intermediate)
        .build();

    let achievements = evaluate(&profile);
    let skills_master = find(&achievements, AchievementId::SkillsMaster);
    assert!(skills_master.unlocked);
    assert_eq!(skills_master.progress, 100);
}

#[test]
fn goal_setter_is_binary() {
    let profile = TestProfile::new("casey").with_career_goals("   ").build();
    let achievements = evaluate(&profile);
    let goal_setter = find(&achievements, AchievementId::GoalSetter);
    assert!(!goal_setter.unlocked);
    assert_eq!(goal_setter.progress, 0);

    let profile = TestProfile::new("casey")
        .with_career_goals("Become a staff engineer")
        .build();
    let achievements = evaluate(&profile);
    let goal_setter = find(&achievements, AchievementId::GoalSetter);
    assert!(goal_setter.unlocked);
    assert_eq!(goal_setter.progress, 100);
}

#[test]
fn resume_optimizer_stays_locked() {
    let profile = TestProfile::new("casey")
        .completed()
        .with_skills(10, Proficiency::Expert)
        .build();

    let achievements = evaluate(&profile);
    let optimizer = find(&achievements, AchievementId::ResumeOptimizer);
    assert!(!optimizer.unlocked);
    assert_eq!(optimizer.progress, 0);
}
