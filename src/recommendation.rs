//! Recommendation Composer
//!
//! Summarises a snapshot into an [`AdaptiveRecommendation`]: a Bengali message,
//! a confidence, the next action, the next tier and up to three focus topics.
//!
//! Bands are checked in order, first match wins:
//!
//! | score | extra condition                  | action   | confidence |
//! |-------|----------------------------------|----------|------------|
//! | >= 90 | >= 5 answers and streak >= 3     | advance  | 0.95       |
//! | >= 85 | >= 5 answers                     | advance  | 0.85       |
//! | >= 75 | topic mastery ratio >= 0.6       | continue | 0.80       |
//! | >= 70 |                                  | continue | 0.70       |
//! | >= 50 |                                  | review   | 0.65       |
//! | < 50  |                                  | review   | 0.85       |

use rayon::prelude::*;

use crate::difficulty::select_next_difficulty;
use crate::metrics::calculate_performance_score;
use crate::topics::{analyze_topics, topic_mastery_ratio};
use crate::types::{
    AdaptiveRecommendation, Difficulty, NextAction, PerformanceSnapshot, TopicAnalysis,
    MAX_FOCUS_TOPICS, STRONG_STREAK,
};

const MASTERY_RATIO_FOR_CONTINUE: f64 = 0.6;

const MSG_MASTERED: &str = "অভিনন্দন! আপনি এই স্তরে উচ্চ দক্ষতা প্রদর্শন করেছেন। পরবর্তী কঠিন স্তরে অগ্রসর হওয়ার জন্য প্রস্তুত।";
const MSG_EXCELLENT: &str = "চমৎকার পারফরম্যান্স! আপনি এই স্তরে ভালো করছেন। পরবর্তী স্তরে চলে যাওয়ার জন্য প্রস্তুত হতে পারেন।";
const MSG_GOOD: &str = "ভালো পারফরম্যান্স! বেশিরভাগ বিষয়ে আপনি দক্ষ। কিছু দুর্বল বিষয়ে আরো অনুশীলন করুন।";
const MSG_SATISFACTORY: &str = "সন্তোষজনক পারফরম্যান্স। দুর্বল বিষয়গুলোতে ফোকাস করুন এবং আরো অনুশীলন করুন।";
const MSG_MODERATE: &str = "মাঝারি পারফরম্যান্স। মৌলিক ধারণাগুলো পুনরায় পড়ুন এবং দুর্বল বিষয়গুলোতে বেশি সময় দিন।";
const MSG_FOUNDATIONS: &str = "মৌলিক ধারণাগুলো আরো ভালোভাবে বুঝতে হবে। সহজ স্তরে ফিরে যান, ধীরে ধীরে অগ্রসর হন এবং প্রতিটি ধারণা ভালোভাবে আয়ত্ত করুন।";

/// Recommendation band, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Mastered,
    Excellent,
    Good,
    Satisfactory,
    Moderate,
    Foundations,
}

impl Band {
    pub fn classify(snapshot: &PerformanceSnapshot, analysis: &TopicAnalysis) -> Self {
        let score = calculate_performance_score(snapshot);
        let enough_data = snapshot.has_enough_data();
        let strong_streak = snapshot.current_streak >= STRONG_STREAK;

        if score >= 90 && enough_data && strong_streak {
            Band::Mastered
        } else if score >= 85 && enough_data {
            Band::Excellent
        } else if score >= 75
            && topic_mastery_ratio(snapshot, analysis) >= MASTERY_RATIO_FOR_CONTINUE
        {
            Band::Good
        } else if score >= 70 {
            Band::Satisfactory
        } else if score >= 50 {
            Band::Moderate
        } else {
            Band::Foundations
        }
    }

    pub fn next_action(&self) -> NextAction {
        match self {
            Band::Mastered | Band::Excellent => NextAction::Advance,
            Band::Good | Band::Satisfactory => NextAction::Continue,
            Band::Moderate | Band::Foundations => NextAction::Review,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Band::Mastered => 0.95,
            Band::Excellent => 0.85,
            Band::Good => 0.8,
            Band::Satisfactory => 0.7,
            Band::Moderate => 0.65,
            Band::Foundations => 0.85,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Band::Mastered => MSG_MASTERED,
            Band::Excellent => MSG_EXCELLENT,
            Band::Good => MSG_GOOD,
            Band::Satisfactory => MSG_SATISFACTORY,
            Band::Moderate => MSG_MODERATE,
            Band::Foundations => MSG_FOUNDATIONS,
        }
    }
}

pub fn build_recommendation(
    snapshot: &PerformanceSnapshot,
    current: Difficulty,
) -> AdaptiveRecommendation {
    let analysis = analyze_topics(snapshot);
    let next_difficulty = select_next_difficulty(snapshot, current);
    let band = Band::classify(snapshot, &analysis);

    AdaptiveRecommendation {
        next_difficulty,
        focus_topics: focus_topics(&analysis),
        recommendation: band.message().to_string(),
        confidence: band.confidence(),
        next_action: band.next_action(),
    }
}

/// Up to three weak topics, or topics needing review when none are weak
pub fn focus_topics(analysis: &TopicAnalysis) -> Vec<String> {
    let source = if !analysis.weak_topics.is_empty() {
        &analysis.weak_topics
    } else {
        &analysis.needs_review
    };
    source.iter().take(MAX_FOCUS_TOPICS).cloned().collect()
}

/// Evaluate many independent sessions in parallel; output order matches input
pub fn build_recommendations_batch(
    sessions: &[(PerformanceSnapshot, Difficulty)],
) -> Vec<AdaptiveRecommendation> {
    sessions
        .par_iter()
        .map(|(snapshot, current)| build_recommendation(snapshot, *current))
        .collect()
}
