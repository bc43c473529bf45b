//! Spaced repetition scheduling.

pub mod sm2;

use crate::types::{Confidence, LearningRecord, Progress, QuestionId};
use chrono::NaiveDate;

pub use sm2::Sm2;

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next record after a graded review on `today`.
    fn review(&self, record: &LearningRecord, outcome: Confidence, today: NaiveDate) -> LearningRecord;

    /// Record for a question that has never been reviewed.
    fn initial_record(&self, today: NaiveDate) -> LearningRecord;
}

/// Review a question from the history, starting from a fresh record when it has none.
pub fn review_question(
    algorithm: &dyn SpacedRepetitionAlgorithm,
    progress: &Progress,
    question_id: QuestionId,
    outcome: Confidence,
    today: NaiveDate,
) -> LearningRecord {
    match progress.record(question_id) {
        Some(record) => algorithm.review(record, outcome, today),
        None => algorithm.review(&algorithm.initial_record(today), outcome, today),
    }
}
