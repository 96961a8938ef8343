//! Simulator configuration read from environment variables.

use std::path::PathBuf;

use crate::error::EngineError;
use crate::types::Difficulty;

/// Runtime settings for the practice simulator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u64,
    pub start_difficulty: Difficulty,
    /// Probability that the simulated learner answers correctly
    pub accuracy: f64,
    pub max_questions: Option<usize>,
    /// Question bank file; the bundled physics bank when unset
    pub bank_path: Option<PathBuf>,
    pub log_level: String,
    /// Also write a daily rolling log file under `log_dir`
    pub file_logs: bool,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            start_difficulty: Difficulty::Easy,
            accuracy: 0.75,
            max_questions: None,
            bank_path: None,
            log_level: "info".to_string(),
            file_logs: false,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable numbers fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("PRACTICE_SEED")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.seed);

        let start_difficulty = match lookup("PRACTICE_START_DIFFICULTY") {
            Some(value) => value
                .parse::<Difficulty>()
                .map_err(|e| EngineError::Config(format!("PRACTICE_START_DIFFICULTY: {e}")))?,
            None => defaults.start_difficulty,
        };

        let accuracy = lookup("PRACTICE_ACCURACY")
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|p| (0.0..=1.0).contains(p))
            .unwrap_or(defaults.accuracy);

        let max_questions = lookup("PRACTICE_MAX_QUESTIONS")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|n| *n > 0);

        let bank_path = lookup("PRACTICE_BANK_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|value| value == "true" || value == "1")
            .unwrap_or(defaults.file_logs);

        let log_dir = lookup("LOG_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Ok(Self {
            seed,
            start_difficulty,
            accuracy,
            max_questions,
            bank_path,
            log_level,
            file_logs,
            log_dir,
        })
    }
}
