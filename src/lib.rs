//! # shikkha-practice - adaptive practice engine
//!
//! Rule-based adaptive practice for the Shikkha AI learning app:
//!
//! - **Metrics** - fold answers into a performance snapshot
//! - **Topic analysis** - strong, weak and needs-review topics
//! - **Difficulty selection** - promote or demote between easy, medium and hard
//! - **Recommendations** - Bengali guidance with a confidence and next action
//! - **Question selection** - weak-topic-first draw with an injectable RNG
//!
//! ## Design
//!
//! - **Pure functions** - the caller owns the snapshot; every update returns a new one
//! - **Validation at the boundary** - see [`sanitize`]; the engine itself never fails
//! - **Reproducible** - randomness goes through [`selector::RandomSource`]
//!
//! ## Modules
//!
//! - [`metrics`] - answer aggregation and scores
//! - [`topics`] - topic buckets
//! - [`difficulty`] - next tier
//! - [`recommendation`] - recommendation bands
//! - [`selector`] - next question
//! - [`session`] - a learner's practice run
//! - [`question_bank`] - question loading and answer checking
//! - [`sanitize`] - snapshot and question validation
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use shikkha_practice::{
//!     build_recommendation, update_metrics, AnswerEvent, Difficulty, NextAction,
//!     PerformanceSnapshot,
//! };
//!
//! let mut snapshot = PerformanceSnapshot::default();
//! for _ in 0..5 {
//!     let event = AnswerEvent::new("চাপের সংজ্ঞা", Difficulty::Easy, true);
//!     snapshot = update_metrics(&snapshot, &event);
//! }
//!
//! let rec = build_recommendation(&snapshot, Difficulty::Easy);
//! assert_eq!(rec.next_difficulty, Difficulty::Medium);
//! assert_eq!(rec.next_action, NextAction::Advance);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod difficulty;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod question_bank;
pub mod recommendation;
pub mod sanitize;
pub mod selector;
pub mod session;
pub mod topics;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use error::EngineError;

pub use metrics::{calculate_performance_score, calculate_topic_mastery, tier_accuracy, update_metrics};

pub use topics::analyze_topics;

pub use difficulty::{decide_difficulty, select_next_difficulty, DifficultyDecision, DifficultyRule};

pub use recommendation::{build_recommendation, build_recommendations_batch};

pub use selector::{seeded_rng, select_next_question, RandomSource};

pub use session::{AnswerOutcome, PracticeSession};

pub use question_bank::{load_question_bank, load_question_bank_file, physics_chapter_3};

pub use sanitize::{diagnose_snapshot, validate_question_pool, validate_snapshot, SnapshotDiagnostics};
