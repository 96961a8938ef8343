//! Common Types and Constants
//!
//! Shared data structures used across all engine modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

// ==================== Constants ====================

/// Minimum answered questions before any tier change
pub const MIN_QUESTIONS_FOR_ASSESSMENT: u32 = 5;

/// Topic score at or above which a topic is strong
pub const STRONG_TOPIC_THRESHOLD: f64 = 80.0;

/// Topic score below which a topic is weak
pub const WEAK_TOPIC_THRESHOLD: f64 = 50.0;

/// Maximum number of focus topics in a recommendation
pub const MAX_FOCUS_TOPICS: usize = 3;

/// Streak length treated as a strong streak
pub const STRONG_STREAK: u32 = 3;

// ==================== Difficulty ====================

/// Difficulty tier of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// One tier up, saturating at hard
    pub fn promote(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// One tier down, saturating at easy
    pub fn demote(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(EngineError::UnknownDifficulty(other.to_string())),
        }
    }
}

// ==================== Performance Types ====================

/// Correct/total counter pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub correct: u32,
    pub total: u32,
}

impl Counts {
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }

    /// Accuracy in percent, 0 when empty
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }

    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }
}

/// Per-topic counters, kept in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicPerformance {
    pub topic: String,
    pub correct: u32,
    pub total: u32,
}

impl TopicPerformance {
    pub fn counts(&self) -> Counts {
        Counts::new(self.correct, self.total)
    }
}

/// Fixed per-tier counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyPerformance {
    pub easy: Counts,
    pub medium: Counts,
    pub hard: Counts,
}

impl DifficultyPerformance {
    pub fn get(&self, difficulty: Difficulty) -> Counts {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut Counts {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Caller-owned aggregate of a learner's practice performance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    #[serde(default)]
    pub topic_performance: Vec<TopicPerformance>,
    #[serde(default)]
    pub difficulty_performance: DifficultyPerformance,
    /// Seconds; informational only
    #[serde(default)]
    pub average_time_per_question: f64,
    /// Answers that carried a time measurement
    #[serde(default)]
    pub timed_questions: u32,
    pub current_streak: u32,
}

impl PerformanceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for a topic, if it has been seen
    pub fn topic(&self, topic: &str) -> Option<&TopicPerformance> {
        self.topic_performance.iter().find(|t| t.topic == topic)
    }

    /// Topics with at least one answer
    pub fn topics_with_data(&self) -> impl Iterator<Item = &TopicPerformance> {
        self.topic_performance.iter().filter(|t| t.total > 0)
    }

    pub fn has_enough_data(&self) -> bool {
        self.total_questions >= MIN_QUESTIONS_FOR_ASSESSMENT
    }
}

/// One answered question, as seen by the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvent {
    pub topic: String,
    pub difficulty: Difficulty,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_secs: Option<f64>,
}

impl AnswerEvent {
    pub fn new(topic: impl Into<String>, difficulty: Difficulty, is_correct: bool) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            is_correct,
            time_spent_secs: None,
        }
    }

    pub fn with_time(mut self, secs: f64) -> Self {
        self.time_spent_secs = Some(secs);
        self
    }
}

// ==================== Question Types ====================

/// Presentation kind of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Mcq,
    TrueFalse,
    FillBlank,
}

/// Expected answer; option index, text, or boolean
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Option(usize),
    Bool(bool),
    Text(String),
}

/// A learner's response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Option(usize),
    Bool(bool),
    Text(String),
}

/// Immutable question from a question bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub correct_answer: CorrectAnswer,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub points: u32,
}

// ==================== Engine Output ====================

/// Topic buckets in snapshot order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAnalysis {
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub needs_review: Vec<String>,
}

/// What the learner should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextAction {
    Continue,
    Review,
    Advance,
}

/// Engine output after each answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveRecommendation {
    pub next_difficulty: Difficulty,
    pub focus_topics: Vec<String>,
    pub recommendation: String,
    /// [0, 1]
    pub confidence: f64,
    pub next_action: NextAction,
}

/// Final tally of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
    pub points: u32,
}
