//! Grading an answer within a study mode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm::{review_question, SpacedRepetitionAlgorithm};
use crate::error::{Error, Result};
use crate::types::{Confidence, Progress, QuestionId};

/// How a graded answer affects the learning history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    /// Spaced repetition: reschedules the question.
    Review,
    /// Weakest-first drill over studied questions; schedules are left alone.
    Cram,
    /// Random, sequential and wrong-answer drills.
    Practice,
}

impl StudyMode {
    pub fn schedules(self) -> bool {
        matches!(self, Self::Review)
    }
}

/// Apply a graded answer to `progress`.
///
/// Review mode requires a confidence grade and updates the question's
/// record before recording the answer. Other modes only record the answer.
pub fn grade(
    progress: Progress,
    algorithm: &dyn SpacedRepetitionAlgorithm,
    mode: StudyMode,
    question_id: QuestionId,
    correct: bool,
    confidence: Option<Confidence>,
    at: DateTime<Utc>,
) -> Result<Progress> {
    let progress = if mode.schedules() {
        let outcome = confidence.ok_or(Error::MissingGrade)?;
        let record = review_question(algorithm, &progress, question_id, outcome, at.date_naive());
        progress.with_record(question_id, record)
    } else {
        progress
    };

    Ok(progress.record_answer(question_id, correct, at))
}
