//! Practice session management for adaptive practice.
//! Tracks one learner's snapshot, answered questions and current tier, and
//! runs every answer through the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::metrics::{calculate_performance_score, update_metrics};
use crate::recommendation::build_recommendation;
use crate::selector::{select_next_question, RandomSource};
use crate::types::{
    AdaptiveRecommendation, Answer, AnswerEvent, Difficulty, PerformanceSnapshot, Question,
    QuizScore,
};

/// Result of submitting one answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub question_id: String,
    pub is_correct: bool,
    pub explanation: String,
    pub points_awarded: u32,
    pub previous_difficulty: Difficulty,
    pub recommendation: AdaptiveRecommendation,
}

/// One learner's practice run. Serializable so callers can persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    current_difficulty: Difficulty,
    snapshot: PerformanceSnapshot,
    answered: HashSet<String>,
    points: u32,
}

impl PracticeSession {
    pub fn new(starting_difficulty: Difficulty) -> Self {
        Self {
            current_difficulty: starting_difficulty,
            snapshot: PerformanceSnapshot::default(),
            answered: HashSet::new(),
            points: 0,
        }
    }

    pub fn current_difficulty(&self) -> Difficulty {
        self.current_difficulty
    }

    pub fn snapshot(&self) -> &PerformanceSnapshot {
        &self.snapshot
    }

    pub fn answered_ids(&self) -> &HashSet<String> {
        &self.answered
    }

    pub fn next_question<'a, R>(&self, pool: &'a [Question], rng: &mut R) -> Option<&'a Question>
    where
        R: RandomSource + ?Sized,
    {
        select_next_question(
            pool,
            &self.snapshot,
            self.current_difficulty,
            &self.answered,
            rng,
        )
    }

    /// Check an answer, fold it into the snapshot and move to the next tier.
    ///
    /// The event is recorded under the question's own tier, which differs from
    /// the session tier when the selector fell back to another tier.
    pub fn submit_answer(
        &mut self,
        question: &Question,
        answer: &Answer,
        time_spent_secs: Option<f64>,
    ) -> Result<AnswerOutcome, EngineError> {
        if self.answered.contains(&question.id) {
            return Err(EngineError::AlreadyAnswered(question.id.clone()));
        }

        let is_correct = question.check_answer(answer);
        let event = AnswerEvent {
            topic: question.topic.clone(),
            difficulty: question.difficulty,
            is_correct,
            time_spent_secs,
        };

        self.snapshot = update_metrics(&self.snapshot, &event);
        self.answered.insert(question.id.clone());
        let points_awarded = if is_correct { question.points } else { 0 };
        self.points += points_awarded;

        let previous_difficulty = self.current_difficulty;
        let recommendation = build_recommendation(&self.snapshot, previous_difficulty);
        self.current_difficulty = recommendation.next_difficulty;

        debug!(
            question = %question.id,
            is_correct,
            from = %previous_difficulty,
            to = %self.current_difficulty,
            action = ?recommendation.next_action,
            "answer recorded"
        );

        Ok(AnswerOutcome {
            question_id: question.id.clone(),
            is_correct,
            explanation: question.explanation.clone(),
            points_awarded,
            previous_difficulty,
            recommendation,
        })
    }

    pub fn recommendation(&self) -> AdaptiveRecommendation {
        build_recommendation(&self.snapshot, self.current_difficulty)
    }

    pub fn score(&self) -> QuizScore {
        QuizScore {
            correct: self.snapshot.correct_answers,
            total: self.snapshot.total_questions,
            percentage: calculate_performance_score(&self.snapshot),
            points: self.points,
        }
    }

    /// True once every question in the pool has been answered
    pub fn is_complete(&self, pool: &[Question]) -> bool {
        pool.iter().all(|q| self.answered.contains(&q.id))
    }
}
