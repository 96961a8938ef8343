use std::process::ExitCode;

use rand::Rng;
use serde::Serialize;

use shikkha_practice::config::Config;
use shikkha_practice::logging::init_tracing;
use shikkha_practice::question_bank::tier_counts;
use shikkha_practice::{
    analyze_topics, load_question_bank_file, physics_chapter_3, seeded_rng, AdaptiveRecommendation,
    Answer, CorrectAnswer, Difficulty, EngineError, PerformanceSnapshot, PracticeSession, Question,
    QuizScore, TopicAnalysis,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepRecord<'a> {
    step: usize,
    question_id: &'a str,
    difficulty: Difficulty,
    is_correct: bool,
    recommendation: &'a AdaptiveRecommendation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    score: QuizScore,
    final_difficulty: Difficulty,
    topics: TopicAnalysis,
    snapshot: &'a PerformanceSnapshot,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            let _guard = init_tracing(&Config::default());
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    let _guard = init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "practice simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), EngineError> {
    let pool = match &config.bank_path {
        Some(path) => load_question_bank_file(path)?,
        None => physics_chapter_3()?,
    };
    let [(_, easy), (_, medium), (_, hard)] = tier_counts(&pool);
    tracing::info!(
        questions = pool.len(),
        easy,
        medium,
        hard,
        seed = config.seed,
        accuracy = config.accuracy,
        start = %config.start_difficulty,
        "starting practice simulation"
    );

    let mut selector_rng = seeded_rng(config.seed);
    let mut learner_rng = seeded_rng(config.seed.wrapping_add(1));
    let mut session = PracticeSession::new(config.start_difficulty);
    let limit = config.max_questions.unwrap_or(pool.len());

    for step in 1..=limit {
        let Some(question) = session.next_question(&pool, &mut selector_rng) else {
            tracing::info!(step, "question pool exhausted");
            break;
        };

        let answer = simulated_answer(question, learner_rng.gen_bool(config.accuracy));
        let time_spent = learner_rng.gen_range(5.0..40.0);
        let outcome = session.submit_answer(question, &answer, Some(time_spent))?;

        let record = StepRecord {
            step,
            question_id: &question.id,
            difficulty: question.difficulty,
            is_correct: outcome.is_correct,
            recommendation: &outcome.recommendation,
        };
        println!("{}", serde_json::to_string(&record)?);
    }

    let summary = Summary {
        score: session.score(),
        final_difficulty: session.current_difficulty(),
        topics: analyze_topics(session.snapshot()),
        snapshot: session.snapshot(),
    };
    println!("{}", serde_json::to_string(&summary)?);

    tracing::info!(
        correct = summary.score.correct,
        total = summary.score.total,
        points = summary.score.points,
        "practice simulation finished"
    );
    Ok(())
}

fn simulated_answer(question: &Question, knows_it: bool) -> Answer {
    match (&question.correct_answer, knows_it) {
        (CorrectAnswer::Option(i), true) => Answer::Option(*i),
        (CorrectAnswer::Option(i), false) => {
            Answer::Option((i + 1) % question.options.len().max(1))
        }
        (CorrectAnswer::Bool(b), true) => Answer::Bool(*b),
        (CorrectAnswer::Bool(b), false) => Answer::Bool(!*b),
        (CorrectAnswer::Text(t), true) => Answer::Text(t.clone()),
        (CorrectAnswer::Text(_), false) => Answer::Text(String::new()),
    }
}
