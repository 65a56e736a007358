//! Year-end progress summary
//!
//! Pure delta and threshold computation over the year-in-review form:
//! weight and body-fat changes, workout totals, and the badge/milestone
//! lists. Badge checks are independent threshold rules applied in order;
//! labels are disjoint so no dedup is needed.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::types::ProgressInput;
use crate::units::round_to;
use crate::validation::validate_input;

/// Weeks used to annualize the end-of-year workout frequency.
const WEEKS_PER_YEAR: f64 = 52.0;

/// A highlighted milestone card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
}

/// Complete year-end summary for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// End minus start weight, lbs, 1 decimal. Negative means loss.
    pub weight_change_lbs: f64,
    /// Weight change as a percentage of the starting weight, 1 decimal.
    pub weight_change_pct: f64,
    /// End minus start body fat, only when both endpoints were provided.
    pub body_fat_change_pct: Option<f64>,
    /// End minus start weekly workout frequency, 1 decimal.
    pub workouts_change_per_week: f64,
    /// Approximate workouts across the year.
    pub total_workouts: i32,
    pub goal_achievement_pct: f64,
    pub badges: Vec<String>,
    pub milestones: Vec<Milestone>,
}

fn earn_badges(
    weight_change: f64,
    body_fat_change: Option<f64>,
    total_workouts: i32,
    goal_pct: f64,
    biggest_win: Option<&str>,
) -> Vec<String> {
    let mut badges = Vec::new();

    if weight_change <= -10.0 {
        badges.push("Lost 10+ lbs".to_string());
    }
    if weight_change <= -20.0 {
        badges.push("Lost 20+ lbs".to_string());
    }
    if weight_change <= -30.0 {
        badges.push("Lost 30+ lbs".to_string());
    }
    if weight_change >= 10.0 {
        badges.push("Gained 10+ lbs".to_string());
    }

    if let Some(bf_change) = body_fat_change {
        if bf_change <= -5.0 {
            badges.push("Lost 5%+ Body Fat".to_string());
        }
        if bf_change <= -10.0 {
            badges.push("Lost 10%+ Body Fat".to_string());
        }
    }

    if total_workouts >= 100 {
        badges.push("100+ Workouts".to_string());
    }
    if total_workouts >= 150 {
        badges.push("150+ Workouts".to_string());
    }
    if total_workouts >= 200 {
        badges.push("200+ Workouts".to_string());
    }

    if goal_pct == 100.0 {
        badges.push("Goal Crusher".to_string());
    }
    if goal_pct >= 75.0 {
        badges.push("Nearly There".to_string());
    }

    if let Some(win) = biggest_win {
        if !win.trim().is_empty() {
            badges.push(win.trim().to_string());
        }
    }

    if badges.is_empty() {
        badges.push("Started Your Journey".to_string());
    }

    badges
}

fn derive_milestones(
    weight_change: f64,
    body_fat_change: Option<f64>,
    workouts_change: f64,
    goal_pct: f64,
) -> Vec<Milestone> {
    let mut milestones = Vec::new();

    if weight_change.abs() > 5.0 {
        let direction = if weight_change > 0.0 { "gained" } else { "lost" };
        milestones.push(Milestone {
            title: "Weight Progress".to_string(),
            description: format!("{:.1} lbs {}", weight_change.abs(), direction),
        });
    }

    if let Some(bf_change) = body_fat_change {
        if bf_change.abs() > 1.0 {
            let direction = if bf_change > 0.0 { "gained" } else { "lost" };
            milestones.push(Milestone {
                title: "Body Recomp".to_string(),
                description: format!("{:.1}% body fat {}", bf_change.abs(), direction),
            });
        }
    }

    if workouts_change > 0.0 {
        milestones.push(Milestone {
            title: "Consistency".to_string(),
            description: format!("+{:.1} workouts/week", workouts_change),
        });
    }

    if goal_pct >= 75.0 {
        milestones.push(Milestone {
            title: "Goal Achieved".to_string(),
            description: format!("{:.0}% complete", goal_pct),
        });
    }

    if milestones.is_empty() {
        milestones.push(Milestone {
            title: "Journey Started".to_string(),
            description: "Taking the first steps".to_string(),
        });
    }

    milestones
}

/// Validated entry point over the year-in-review form input.
pub fn progress_summary(input: &ProgressInput) -> MetricResult<ProgressSummary> {
    validate_input(input)?;

    let weight_change = round_to(input.end_weight_lbs - input.start_weight_lbs, 1);
    let weight_change_pct = round_to(
        (input.end_weight_lbs - input.start_weight_lbs) / input.start_weight_lbs * 100.0,
        1,
    );
    let body_fat_change = match (input.start_body_fat_pct, input.end_body_fat_pct) {
        (Some(start), Some(end)) => Some(round_to(end - start, 1)),
        _ => None,
    };
    let workouts_change = round_to(
        input.end_workouts_per_week - input.start_workouts_per_week,
        1,
    );
    let total_workouts = (input.end_workouts_per_week * WEEKS_PER_YEAR).round() as i32;

    Ok(ProgressSummary {
        weight_change_lbs: weight_change,
        weight_change_pct,
        body_fat_change_pct: body_fat_change,
        workouts_change_per_week: workouts_change,
        total_workouts,
        goal_achievement_pct: input.goal_achievement_pct,
        badges: earn_badges(
            weight_change,
            body_fat_change,
            total_workouts,
            input.goal_achievement_pct,
            input.biggest_win.as_deref(),
        ),
        milestones: derive_milestones(
            weight_change,
            body_fat_change,
            workouts_change,
            input.goal_achievement_pct,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProgressInput;

    fn base_input() -> ProgressInput {
        ProgressInput {
            start_weight_lbs: 200.0,
            end_weight_lbs: 178.0,
            start_body_fat_pct: Some(28.0),
            end_body_fat_pct: Some(22.0),
            start_workouts_per_week: 1.0,
            end_workouts_per_week: 4.0,
            goal_achievement_pct: 80.0,
            biggest_win: Some("Ran a half marathon".to_string()),
        }
    }

    #[test]
    fn test_deltas() {
        let summary = progress_summary(&base_input()).unwrap();
        assert_eq!(summary.weight_change_lbs, -22.0);
        assert_eq!(summary.weight_change_pct, -11.0);
        assert_eq!(summary.body_fat_change_pct, Some(-6.0));
        assert_eq!(summary.workouts_change_per_week, 3.0);
        assert_eq!(summary.total_workouts, 208);
    }

    #[test]
    fn test_badges_stack_without_dedup() {
        let summary = progress_summary(&base_input()).unwrap();
        let badges = &summary.badges;
        assert!(badges.contains(&"Lost 10+ lbs".to_string()));
        assert!(badges.contains(&"Lost 20+ lbs".to_string()));
        assert!(!badges.contains(&"Lost 30+ lbs".to_string()));
        assert!(badges.contains(&"Lost 5%+ Body Fat".to_string()));
        assert!(badges.contains(&"200+ Workouts".to_string()));
        assert!(badges.contains(&"Nearly There".to_string()));
        assert!(!badges.contains(&"Goal Crusher".to_string()));
        assert!(badges.contains(&"Ran a half marathon".to_string()));
    }

    #[test]
    fn test_badge_order_is_stable() {
        let summary = progress_summary(&base_input()).unwrap();
        let lost10 = summary.badges.iter().position(|b| b == "Lost 10+ lbs");
        let lost20 = summary.badges.iter().position(|b| b == "Lost 20+ lbs");
        assert!(lost10 < lost20);
    }

    #[test]
    fn test_fallback_badge_and_milestone() {
        let input = ProgressInput {
            start_weight_lbs: 180.0,
            end_weight_lbs: 179.0,
            start_body_fat_pct: None,
            end_body_fat_pct: None,
            start_workouts_per_week: 1.0,
            end_workouts_per_week: 1.0,
            goal_achievement_pct: 20.0,
            biggest_win: None,
        };
        let summary = progress_summary(&input).unwrap();
        assert_eq!(summary.badges, vec!["Started Your Journey".to_string()]);
        assert_eq!(summary.milestones.len(), 1);
        assert_eq!(summary.milestones[0].title, "Journey Started");
    }

    #[test]
    fn test_body_fat_requires_both_endpoints() {
        let input = ProgressInput {
            start_body_fat_pct: Some(25.0),
            end_body_fat_pct: None,
            ..base_input()
        };
        let summary = progress_summary(&input).unwrap();
        assert_eq!(summary.body_fat_change_pct, None);
    }

    #[test]
    fn test_goal_crusher_at_exactly_100() {
        let input = ProgressInput {
            goal_achievement_pct: 100.0,
            ..base_input()
        };
        let summary = progress_summary(&input).unwrap();
        assert!(summary.badges.contains(&"Goal Crusher".to_string()));
        assert!(summary.badges.contains(&"Nearly There".to_string()));
    }

    #[test]
    fn test_milestones() {
        let summary = progress_summary(&base_input()).unwrap();
        let titles: Vec<&str> = summary.milestones.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Weight Progress",
                "Body Recomp",
                "Consistency",
                "Goal Achieved"
            ]
        );
    }

    #[test]
    fn test_rejects_invalid_input() {
        let input = ProgressInput {
            goal_achievement_pct: 150.0,
            ..base_input()
        };
        assert!(progress_summary(&input).is_err());
    }
}
