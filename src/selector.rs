//! Question Selection
//!
//! Picks the next question from a pool:
//! - Unanswered questions at the current tier are the candidates
//! - With no candidates, the first unanswered question of any tier is used
//! - Otherwise weak-topic candidates win, then needs-review ones, then any
//!
//! The random draw goes through [`RandomSource`] so tests and simulations can
//! seed it.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::topics::analyze_topics;
use crate::types::{Difficulty, PerformanceSnapshot, Question};

/// Source of uniform indices
pub trait RandomSource {
    /// Uniform index in `0..len`; `len` is never 0
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Reproducible generator for tests and simulations
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn select_next_question<'a, R>(
    pool: &'a [Question],
    snapshot: &PerformanceSnapshot,
    current: Difficulty,
    answered_ids: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: RandomSource + ?Sized,
{
    let is_open = |q: &&Question| !answered_ids.contains(&q.id);

    let candidates: Vec<&Question> = pool
        .iter()
        .filter(is_open)
        .filter(|q| q.difficulty == current)
        .collect();

    if candidates.is_empty() {
        let fallback = pool.iter().find(is_open);
        debug!(
            tier = %current,
            fallback = fallback.map(|q| q.id.as_str()),
            "no unanswered questions at tier"
        );
        return fallback;
    }

    let analysis = analyze_topics(snapshot);

    let weak: Vec<&Question> = candidates
        .iter()
        .copied()
        .filter(|q| analysis.weak_topics.contains(&q.topic))
        .collect();
    if !weak.is_empty() {
        return Some(weak[rng.pick_index(weak.len())]);
    }

    let review: Vec<&Question> = candidates
        .iter()
        .copied()
        .filter(|q| analysis.needs_review.contains(&q.topic))
        .collect();
    if !review.is_empty() {
        return Some(review[rng.pick_index(review.len())]);
    }

    Some(candidates[rng.pick_index(candidates.len())])
}
