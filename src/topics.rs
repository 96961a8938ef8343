//! Topic Analysis
//!
//! Buckets topics by accuracy:
//! - strong: score >= 80
//! - weak: score < 50
//! - needs review: 50 <= score < 80
//!
//! Topics without answers are left out. Bucket order follows the snapshot.

use crate::types::{PerformanceSnapshot, TopicAnalysis, STRONG_TOPIC_THRESHOLD, WEAK_TOPIC_THRESHOLD};

pub fn analyze_topics(snapshot: &PerformanceSnapshot) -> TopicAnalysis {
    let mut analysis = TopicAnalysis::default();

    for entry in snapshot.topics_with_data() {
        let score = entry.counts().accuracy();
        let bucket = if score >= STRONG_TOPIC_THRESHOLD {
            &mut analysis.strong_topics
        } else if score < WEAK_TOPIC_THRESHOLD {
            &mut analysis.weak_topics
        } else {
            &mut analysis.needs_review
        };
        bucket.push(entry.topic.clone());
    }

    analysis
}

/// Share of data-bearing topics that are strong; denominator floored at 1
pub fn topic_mastery_ratio(snapshot: &PerformanceSnapshot, analysis: &TopicAnalysis) -> f64 {
    let with_data = snapshot.topics_with_data().count().max(1);
    analysis.strong_topics.len() as f64 / with_data as f64
}
