//! Answer recording on the learning history.
//!
//! All operations consume a `Progress` and return the updated value; the
//! progress store swaps it in.

use chrono::{DateTime, Utc};

use crate::types::{HistoryEntry, LearningRecord, Progress, QuestionId};

impl Progress {
    /// Record a graded answer: history, counters, streak and wrong-answer set.
    ///
    /// The study day is the UTC date of `at`.
    pub fn record_answer(mut self, question_id: QuestionId, correct: bool, at: DateTime<Utc>) -> Self {
        let today = at.date_naive();

        self.history.push(HistoryEntry {
            question_id,
            correct,
            timestamp: at,
        });

        self.stats.total_attempts += 1;
        if correct {
            self.stats.correct_count += 1;
        }

        if self.stats.last_study_date != Some(today) {
            self.stats.streak_days = if self.stats.last_study_date == today.pred_opt() {
                self.stats.streak_days + 1
            } else {
                1
            };
            self.stats.last_study_date = Some(today);
        }

        if correct {
            self.wrong_answers.retain(|id| *id != question_id);
        } else if !self.wrong_answers.contains(&question_id) {
            self.wrong_answers.push(question_id);
        }

        self
    }

    /// Replace the scheduling record for a question.
    pub fn with_record(mut self, question_id: QuestionId, record: LearningRecord) -> Self {
        self.records.insert(question_id, record);
        self
    }

    /// Store the sequential-mode position for `day`, clamped to `[0, len - 1]`.
    pub fn set_sequential(mut self, day: &str, index: usize, len: usize) -> Self {
        let clamped = index.min(len.saturating_sub(1));
        self.sequential.insert(day.to_string(), clamped);
        self
    }

    pub fn sequential_position(&self, day: &str) -> usize {
        self.sequential.get(day).copied().unwrap_or(0)
    }
}
