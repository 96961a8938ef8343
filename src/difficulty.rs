//! Difficulty Selection
//!
//! Rule-based tier adjustment. Rules are checked in a fixed order and the
//! first band that matches decides the outcome:
//!
//! 1. fewer than 5 answers: keep the current tier
//! 2. excellence (overall >= 90, in-tier >= 85): promote when streak >= 3, else keep
//! 3. struggle (overall < 50 or in-tier < 40): demote when streak == 0 and
//!    at least 3 incorrect answers, else keep
//! 4. moderate promotion (overall >= 75, in-tier >= 75, streak >= 2)
//! 5. moderate demotion (overall < 65, in-tier < 55, streak == 0)
//! 6. keep
//!
//! The overall score is the rounded performance score; in-tier accuracy is not
//! rounded. Boundary values (e.g. exactly 75%) can satisfy more than one band,
//! so the order above is load-bearing.

use tracing::debug;

use crate::metrics::{calculate_performance_score, tier_accuracy};
use crate::types::{Difficulty, PerformanceSnapshot};

const EXCELLENT_OVERALL: u32 = 90;
const EXCELLENT_IN_TIER: f64 = 85.0;
const EXCELLENT_STREAK: u32 = 3;

const STRUGGLE_OVERALL: u32 = 50;
const STRUGGLE_IN_TIER: f64 = 40.0;
const STRUGGLE_MIN_INCORRECT: u32 = 3;

const MODERATE_PROMOTE_OVERALL: u32 = 75;
const MODERATE_PROMOTE_IN_TIER: f64 = 70.0;
const MODERATE_PROMOTE_IN_TIER_STRICT: f64 = 75.0;
const MODERATE_PROMOTE_STREAK: u32 = 2;

const MODERATE_DEMOTE_OVERALL: u32 = 65;
const MODERATE_DEMOTE_IN_TIER: f64 = 55.0;

/// Which rule decided the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyRule {
    NotEnoughData,
    Excellence,
    Struggle,
    ModeratePromotion,
    ModerateDemotion,
    Hold,
}

/// Tier decision together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyDecision {
    pub next: Difficulty,
    pub rule: DifficultyRule,
}

pub fn select_next_difficulty(snapshot: &PerformanceSnapshot, current: Difficulty) -> Difficulty {
    decide_difficulty(snapshot, current).next
}

pub fn decide_difficulty(snapshot: &PerformanceSnapshot, current: Difficulty) -> DifficultyDecision {
    let decision = evaluate_rules(snapshot, current);
    if decision.next != current {
        debug!(
            from = %current,
            to = %decision.next,
            rule = ?decision.rule,
            total = snapshot.total_questions,
            streak = snapshot.current_streak,
            "difficulty changed"
        );
    }
    decision
}

fn evaluate_rules(snapshot: &PerformanceSnapshot, current: Difficulty) -> DifficultyDecision {
    let keep = |rule| DifficultyDecision { next: current, rule };

    if !snapshot.has_enough_data() {
        return keep(DifficultyRule::NotEnoughData);
    }

    let overall = calculate_performance_score(snapshot);
    let in_tier = tier_accuracy(snapshot, current);
    let streak = snapshot.current_streak;

    if overall >= EXCELLENT_OVERALL && in_tier >= EXCELLENT_IN_TIER {
        let next = if streak >= EXCELLENT_STREAK {
            current.promote()
        } else {
            current
        };
        return DifficultyDecision {
            next,
            rule: DifficultyRule::Excellence,
        };
    }

    if overall < STRUGGLE_OVERALL || in_tier < STRUGGLE_IN_TIER {
        let next = if streak == 0 && snapshot.incorrect_answers >= STRUGGLE_MIN_INCORRECT {
            current.demote()
        } else {
            current
        };
        return DifficultyDecision {
            next,
            rule: DifficultyRule::Struggle,
        };
    }

    if overall >= MODERATE_PROMOTE_OVERALL
        && in_tier >= MODERATE_PROMOTE_IN_TIER
        && streak >= MODERATE_PROMOTE_STREAK
        && in_tier >= MODERATE_PROMOTE_IN_TIER_STRICT
        && current != Difficulty::Hard
    {
        return DifficultyDecision {
            next: current.promote(),
            rule: DifficultyRule::ModeratePromotion,
        };
    }

    if overall < MODERATE_DEMOTE_OVERALL
        && in_tier < MODERATE_DEMOTE_IN_TIER
        && streak == 0
        && current != Difficulty::Easy
    {
        return DifficultyDecision {
            next: current.demote(),
            rule: DifficultyRule::ModerateDemotion,
        };
    }

    keep(DifficultyRule::Hold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Counts;

    fn snapshot(
        total: u32,
        correct: u32,
        streak: u32,
        tier: Difficulty,
        in_tier: (u32, u32),
    ) -> PerformanceSnapshot {
        let mut s = PerformanceSnapshot {
            total_questions: total,
            correct_answers: correct,
            incorrect_answers: total - correct,
            current_streak: streak,
            ..Default::default()
        };
        *s.difficulty_performance.get_mut(tier) = Counts::new(in_tier.0, in_tier.1);
        s
    }

    #[test]
    fn test_below_floor_keeps_tier() {
        let s = snapshot(4, 4, 4, Difficulty::Easy, (4, 4));
        assert_eq!(select_next_difficulty(&s, Difficulty::Easy), Difficulty::Easy);
        let s = snapshot(4, 0, 0, Difficulty::Hard, (0, 4));
        assert_eq!(select_next_difficulty(&s, Difficulty::Hard), Difficulty::Hard);
    }

    #[test]
    fn test_excellence_promotes_easy_to_medium() {
        let s = snapshot(10, 9, 4, Difficulty::Easy, (9, 10));
        let decision = decide_difficulty(&s, Difficulty::Easy);
        assert_eq!(decision.next, Difficulty::Medium);
        assert_eq!(decision.rule, DifficultyRule::Excellence);
    }

    #[test]
    fn test_excellence_stays_at_hard() {
        let s = snapshot(10, 10, 10, Difficulty::Hard, (10, 10));
        assert_eq!(select_next_difficulty(&s, Difficulty::Hard), Difficulty::Hard);
    }

    #[test]
    fn test_excellence_without_streak_ends_evaluation() {
        // Would satisfy the moderate promotion band, but excellence matched first
        let s = snapshot(10, 9, 2, Difficulty::Easy, (9, 10));
        let decision = decide_difficulty(&s, Difficulty::Easy);
        assert_eq!(decision.next, Difficulty::Easy);
        assert_eq!(decision.rule, DifficultyRule::Excellence);
    }

    #[test]
    fn test_struggle_demotes_hard_to_medium() {
        let s = snapshot(10, 2, 0, Difficulty::Hard, (2, 10));
        assert_eq!(select_next_difficulty(&s, Difficulty::Hard), Difficulty::Medium);
    }

    #[test]
    fn test_struggle_with_streak_keeps_tier() {
        let s = snapshot(10, 4, 1, Difficulty::Medium, (1, 5));
        let decision = decide_difficulty(&s, Difficulty::Medium);
        assert_eq!(decision.next, Difficulty::Medium);
        assert_eq!(decision.rule, DifficultyRule::Struggle);
    }

    #[test]
    fn test_struggle_with_few_misses_keeps_tier() {
        // in-tier 33% is a struggle band, but only two misses in total
        let mut s = snapshot(5, 3, 0, Difficulty::Medium, (1, 3));
        s.difficulty_performance.easy = Counts::new(2, 2);
        assert_eq!(s.incorrect_answers, 2);
        let decision = decide_difficulty(&s, Difficulty::Medium);
        assert_eq!(decision.rule, DifficultyRule::Struggle);
        assert_eq!(decision.next, Difficulty::Medium);
    }

    #[test]
    fn test_struggle_stays_at_easy() {
        let s = snapshot(6, 1, 0, Difficulty::Easy, (1, 6));
        assert_eq!(select_next_difficulty(&s, Difficulty::Easy), Difficulty::Easy);
    }

    #[test]
    fn test_moderate_promotion_at_boundary() {
        // overall 75, in-tier exactly 75, streak 2
        let s = snapshot(8, 6, 2, Difficulty::Medium, (3, 4));
        let decision = decide_difficulty(&s, Difficulty::Medium);
        assert_eq!(decision.next, Difficulty::Hard);
        assert_eq!(decision.rule, DifficultyRule::ModeratePromotion);
    }

    #[test]
    fn test_moderate_band_needs_strict_in_tier() {
        // in-tier 71.4% passes the 70 check but not the 75 one
        let s = snapshot(10, 8, 3, Difficulty::Easy, (5, 7));
        let decision = decide_difficulty(&s, Difficulty::Easy);
        assert_eq!(decision.next, Difficulty::Easy);
        assert_eq!(decision.rule, DifficultyRule::Hold);
    }

    #[test]
    fn test_moderate_demotion() {
        // overall 60, in-tier 50, streak 0
        let s = snapshot(10, 6, 0, Difficulty::Hard, (2, 4));
        let decision = decide_difficulty(&s, Difficulty::Hard);
        assert_eq!(decision.next, Difficulty::Medium);
        assert_eq!(decision.rule, DifficultyRule::ModerateDemotion);
    }

    #[test]
    fn test_moderate_demotion_not_below_easy() {
        let s = snapshot(10, 6, 0, Difficulty::Easy, (2, 4));
        assert_eq!(decide_difficulty(&s, Difficulty::Easy).rule, DifficultyRule::Hold);
    }

    #[test]
    fn test_untouched_tier_counts_as_zero_accuracy() {
        // No medium answers yet: in-tier accuracy is 0, which is a struggle band
        let s = snapshot(6, 6, 6, Difficulty::Easy, (6, 6));
        let decision = decide_difficulty(&s, Difficulty::Medium);
        assert_eq!(decision.rule, DifficultyRule::Struggle);
        assert_eq!(decision.next, Difficulty::Medium);
    }
}
