//! Question Bank
//!
//! JSON loading, answer checking and the bundled Class 9 physics chapter 3
//! bank (চাপ ও পদার্থের অবস্থা).

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::EngineError;
use crate::sanitize::validate_question_pool;
use crate::types::{Answer, CorrectAnswer, Difficulty, Question};

const PHYSICS_CHAPTER_3_JSON: &str = include_str!("../data/physics_ch3.json");

impl Question {
    /// Whether `answer` matches the expected answer.
    ///
    /// Fill-in-the-blank answers are compared after trimming and lowercasing.
    /// An answer of the wrong shape is simply incorrect.
    pub fn check_answer(&self, answer: &Answer) -> bool {
        match (&self.correct_answer, answer) {
            (CorrectAnswer::Option(expected), Answer::Option(given)) => expected == given,
            (CorrectAnswer::Bool(expected), Answer::Bool(given)) => expected == given,
            (CorrectAnswer::Text(expected), Answer::Text(given)) => {
                normalize(expected) == normalize(given)
            }
            _ => false,
        }
    }

    /// Distinct topics in pool order
    pub fn topics(pool: &[Question]) -> Vec<&str> {
        let mut seen = HashSet::new();
        pool.iter()
            .map(|q| q.topic.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parse and validate a JSON array of questions
pub fn load_question_bank(json: &str) -> Result<Vec<Question>, EngineError> {
    let pool: Vec<Question> = serde_json::from_str(json)?;
    validate_question_pool(&pool)?;
    debug!(questions = pool.len(), "question bank loaded");
    Ok(pool)
}

pub fn load_question_bank_file(path: impl AsRef<Path>) -> Result<Vec<Question>, EngineError> {
    let json = std::fs::read_to_string(path)?;
    load_question_bank(&json)
}

/// Bundled physics bank: 15 questions, five per tier
pub fn physics_chapter_3() -> Result<Vec<Question>, EngineError> {
    load_question_bank(PHYSICS_CHAPTER_3_JSON)
}

/// Number of questions per tier
pub fn tier_counts(pool: &[Question]) -> [(Difficulty, usize); 3] {
    Difficulty::ALL.map(|tier| (tier, pool.iter().filter(|q| q.difficulty == tier).count()))
}
