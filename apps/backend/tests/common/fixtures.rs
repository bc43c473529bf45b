//! Test fixtures and factory functions for creating test data.

use chrono::Duration;
use serde_json::json;

use quizdrill_core::{LearningRecord, Progress, Question, QuestionBank, QuestionId};

use super::TestContext;

/// Three questions: 1 and 2 on day1, 3 on day2.
pub fn question_bank() -> QuestionBank {
    let text = json!({
        "meta": {
            "total_questions": 3,
            "days": [
                { "id": "day1", "name": "Day 1", "question_count": 2 },
                { "id": "day2", "name": "Day 2", "question_count": 1 }
            ],
            "subjects": []
        },
        "questions": [
            question_json(1, "day1", "anatomy", &["a", "b", "c"], 2),
            question_json(2, "day1", "physiology", &["O", "X"], 1),
            question_json(3, "day2", "anatomy", &["a", "b", "c", "d"], 4)
        ]
    })
    .to_string();

    QuestionBank::from_json(&text).expect("fixture bank is valid")
}

fn question_json(
    id: QuestionId,
    day: &str,
    subject: &str,
    choices: &[&str],
    answer: usize,
) -> serde_json::Value {
    json!({
        "id": id,
        "day": day,
        "original_number": id,
        "subject": subject,
        "question_text": format!("Question {}?", id),
        "choices": choices,
        "answer": answer,
        "explanation": format!("Explanation {}.", id)
    })
}

/// Correct 1-based choice for a fixture question.
pub fn correct_choice(id: QuestionId) -> usize {
    question_bank()
        .get(id)
        .map(|q: &Question| q.answer)
        .expect("fixture question exists")
}

/// Record due `due_in` days from the test date.
pub fn record(ease: f64, repetitions: u32, interval: u32, due_in: i64) -> LearningRecord {
    LearningRecord {
        ease,
        interval,
        repetitions,
        next_review: TestContext::today() + Duration::days(due_in),
    }
}

/// History with the given records.
pub fn progress_with(records: &[(QuestionId, LearningRecord)]) -> Progress {
    records
        .iter()
        .cloned()
        .fold(Progress::default(), |p, (id, r)| p.with_record(id, r))
}

/// Create a submit answer request body.
pub fn answer_request(
    question_id: QuestionId,
    choice: usize,
    mode: &str,
    confidence: Option<&str>,
) -> serde_json::Value {
    json!({
        "question_id": question_id,
        "choice": choice,
        "mode": mode,
        "confidence": confidence
    })
}
