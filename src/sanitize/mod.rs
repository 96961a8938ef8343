//! Boundary Validation
//!
//! Checks caller-supplied data before it reaches the engine.
//!
//! Functions:
//! - Snapshot invariant checks
//! - Question pool checks
//! - Snapshot health diagnostics

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{CorrectAnswer, Difficulty, PerformanceSnapshot, Question, QuestionKind};

/// Snapshot health report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDiagnostics {
    pub is_healthy: bool,
    pub issues: Vec<String>,
}

/// Collect every violated snapshot invariant
pub fn diagnose_snapshot(snapshot: &PerformanceSnapshot) -> SnapshotDiagnostics {
    let mut issues = Vec::new();

    let answered = u64::from(snapshot.correct_answers) + u64::from(snapshot.incorrect_answers);
    if answered != u64::from(snapshot.total_questions) {
        issues.push(format!(
            "correct ({}) + incorrect ({}) != total ({})",
            snapshot.correct_answers, snapshot.incorrect_answers, snapshot.total_questions
        ));
    }

    if snapshot.current_streak > snapshot.correct_answers {
        issues.push(format!(
            "streak {} exceeds correct answers {}",
            snapshot.current_streak, snapshot.correct_answers
        ));
    }

    let mut seen = HashSet::new();
    for entry in &snapshot.topic_performance {
        if entry.topic.trim().is_empty() {
            issues.push("empty topic name".to_string());
        }
        if !seen.insert(entry.topic.as_str()) {
            issues.push(format!("duplicate topic '{}'", entry.topic));
        }
        if entry.correct > entry.total {
            issues.push(format!(
                "topic '{}' has correct {} > total {}",
                entry.topic, entry.correct, entry.total
            ));
        }
    }

    let mut tier_total = 0u64;
    for tier in Difficulty::ALL {
        let counts = snapshot.difficulty_performance.get(tier);
        if counts.correct > counts.total {
            issues.push(format!(
                "tier {} has correct {} > total {}",
                tier, counts.correct, counts.total
            ));
        }
        tier_total += u64::from(counts.total);
    }
    if tier_total != u64::from(snapshot.total_questions) {
        issues.push(format!(
            "tier totals sum to {} but total is {}",
            tier_total, snapshot.total_questions
        ));
    }

    let avg = snapshot.average_time_per_question;
    if !avg.is_finite() || avg < 0.0 {
        issues.push(format!("invalid average time {avg}"));
    }
    if snapshot.timed_questions > snapshot.total_questions {
        issues.push(format!(
            "timed answers {} exceed total {}",
            snapshot.timed_questions, snapshot.total_questions
        ));
    }

    SnapshotDiagnostics {
        is_healthy: issues.is_empty(),
        issues,
    }
}

/// Fail on the first violated invariant
pub fn validate_snapshot(snapshot: &PerformanceSnapshot) -> Result<(), EngineError> {
    let report = diagnose_snapshot(snapshot);
    match report.issues.into_iter().next() {
        Some(issue) => Err(EngineError::InvalidSnapshot(issue)),
        None => Ok(()),
    }
}

fn invalid(question: &Question, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidQuestion {
        id: question.id.clone(),
        reason: reason.into(),
    }
}

pub fn validate_question(question: &Question) -> Result<(), EngineError> {
    if question.id.trim().is_empty() {
        return Err(invalid(question, "empty id"));
    }
    if question.topic.trim().is_empty() {
        return Err(invalid(question, "empty topic"));
    }
    if question.points == 0 {
        return Err(invalid(question, "points must be positive"));
    }

    match (question.kind, &question.correct_answer) {
        (QuestionKind::Mcq, CorrectAnswer::Option(idx)) => {
            if question.options.len() < 2 {
                return Err(invalid(question, "mcq needs at least two options"));
            }
            if *idx >= question.options.len() {
                return Err(invalid(
                    question,
                    format!("answer index {} out of {} options", idx, question.options.len()),
                ));
            }
        }
        (QuestionKind::TrueFalse, CorrectAnswer::Bool(_)) => {}
        (QuestionKind::FillBlank, CorrectAnswer::Text(text)) if !text.trim().is_empty() => {}
        (kind, answer) => {
            return Err(invalid(
                question,
                format!("answer {answer:?} does not fit kind {kind:?}"),
            ));
        }
    }

    Ok(())
}

/// Check every question and id uniqueness
pub fn validate_question_pool(pool: &[Question]) -> Result<(), EngineError> {
    let mut ids = HashSet::with_capacity(pool.len());
    for question in pool {
        validate_question(question)?;
        if !ids.insert(question.id.as_str()) {
            return Err(EngineError::DuplicateQuestion(question.id.clone()));
        }
    }
    Ok(())
}
