//! Performance Metrics Aggregation
//!
//! Folds answer events into a [`PerformanceSnapshot`]. Updates are pure: the
//! input snapshot is left untouched and a new one is returned, so callers can
//! keep history for undo or replay.

use crate::types::{AnswerEvent, Difficulty, PerformanceSnapshot, TopicPerformance};

/// Fold one answer into the snapshot
pub fn update_metrics(snapshot: &PerformanceSnapshot, event: &AnswerEvent) -> PerformanceSnapshot {
    let mut next = snapshot.clone();

    next.total_questions += 1;
    if event.is_correct {
        next.correct_answers += 1;
        next.current_streak += 1;
    } else {
        next.incorrect_answers += 1;
        next.current_streak = 0;
    }

    match next
        .topic_performance
        .iter_mut()
        .find(|t| t.topic == event.topic)
    {
        Some(entry) => {
            entry.total += 1;
            if event.is_correct {
                entry.correct += 1;
            }
        }
        None => next.topic_performance.push(TopicPerformance {
            topic: event.topic.clone(),
            correct: u32::from(event.is_correct),
            total: 1,
        }),
    }

    next.difficulty_performance
        .get_mut(event.difficulty)
        .record(event.is_correct);

    if let Some(secs) = event.time_spent_secs.filter(|s| s.is_finite() && *s >= 0.0) {
        // Running mean over timed events only
        next.timed_questions += 1;
        let prev = snapshot.average_time_per_question;
        next.average_time_per_question = prev + (secs - prev) / next.timed_questions as f64;
    }

    next
}

/// Overall score in percent, rounded, 0 when nothing has been answered
pub fn calculate_performance_score(snapshot: &PerformanceSnapshot) -> u32 {
    if snapshot.total_questions == 0 {
        return 0;
    }
    let ratio = snapshot.correct_answers.min(snapshot.total_questions) as f64
        / snapshot.total_questions as f64;
    (ratio * 100.0).round() as u32
}

/// Rounded accuracy for one topic, 0 when unknown or empty
pub fn calculate_topic_mastery(topic: &str, snapshot: &PerformanceSnapshot) -> u32 {
    snapshot
        .topic(topic)
        .map(|t| t.counts())
        .filter(|c| c.total > 0)
        .map(|c| c.accuracy().round() as u32)
        .unwrap_or(0)
}

/// Unrounded in-tier accuracy in percent
pub fn tier_accuracy(snapshot: &PerformanceSnapshot, difficulty: Difficulty) -> f64 {
    snapshot.difficulty_performance.get(difficulty).accuracy()
}

/// Replay a sequence of events from an empty snapshot
pub fn replay<'a, I>(events: I) -> PerformanceSnapshot
where
    I: IntoIterator<Item = &'a AnswerEvent>,
{
    events
        .into_iter()
        .fold(PerformanceSnapshot::default(), |acc, e| update_metrics(&acc, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Counts;

    fn event(topic: &str, difficulty: Difficulty, ok: bool) -> AnswerEvent {
        AnswerEvent::new(topic, difficulty, ok)
    }

    #[test]
    fn test_update_counts_and_creates_keys() {
        let s0 = PerformanceSnapshot::default();
        let s1 = update_metrics(&s0, &event("চাপ", Difficulty::Easy, true));

        assert_eq!(s0.total_questions, 0, "input must not change");
        assert_eq!(s1.total_questions, 1);
        assert_eq!(s1.correct_answers, 1);
        assert_eq!(s1.incorrect_answers, 0);
        assert_eq!(s1.current_streak, 1);
        assert_eq!(s1.topic("চাপ").unwrap().counts(), Counts::new(1, 1));
        assert_eq!(s1.difficulty_performance.easy, Counts::new(1, 1));
        assert_eq!(s1.difficulty_performance.hard, Counts::default());
    }

    #[test]
    fn test_incorrect_resets_streak() {
        let s = replay(&[
            event("a", Difficulty::Easy, true),
            event("a", Difficulty::Easy, true),
            event("b", Difficulty::Medium, true),
        ]);
        assert_eq!(s.current_streak, 3);

        let s = update_metrics(&s, &event("b", Difficulty::Medium, false));
        assert_eq!(s.current_streak, 0);
        assert_eq!(s.incorrect_answers, 1);
        assert_eq!(s.correct_answers + s.incorrect_answers, s.total_questions);
    }

    #[test]
    fn test_topic_order_is_first_seen() {
        let s = replay(&[
            event("z", Difficulty::Easy, true),
            event("a", Difficulty::Easy, false),
            event("z", Difficulty::Hard, false),
        ]);
        let topics: Vec<_> = s.topic_performance.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, vec!["z", "a"]);
        assert_eq!(s.topic("z").unwrap().counts(), Counts::new(1, 2));
    }

    #[test]
    fn test_average_time_running_mean() {
        let s = update_metrics(
            &PerformanceSnapshot::default(),
            &event("a", Difficulty::Easy, true).with_time(10.0),
        );
        let s = update_metrics(&s, &event("a", Difficulty::Easy, true).with_time(20.0));
        assert!((s.average_time_per_question - 15.0).abs() < 1e-9);

        // Untimed events leave the mean alone
        let s = update_metrics(&s, &event("a", Difficulty::Easy, true));
        assert!((s.average_time_per_question - 15.0).abs() < 1e-9);

        let s = update_metrics(&s, &event("a", Difficulty::Easy, true).with_time(30.0));
        assert!((s.average_time_per_question - 20.0).abs() < 1e-9);
        assert_eq!(s.timed_questions, 3);
    }

    #[test]
    fn test_performance_score() {
        assert_eq!(calculate_performance_score(&PerformanceSnapshot::default()), 0);

        let s = PerformanceSnapshot {
            total_questions: 3,
            correct_answers: 2,
            incorrect_answers: 1,
            ..Default::default()
        };
        assert_eq!(calculate_performance_score(&s), 67);
    }

    #[test]
    fn test_topic_mastery() {
        let s = replay(&[
            event("x", Difficulty::Easy, true),
            event("x", Difficulty::Easy, false),
            event("x", Difficulty::Easy, false),
        ]);
        assert_eq!(calculate_topic_mastery("x", &s), 33);
        assert_eq!(calculate_topic_mastery("missing", &s), 0);
    }
}
