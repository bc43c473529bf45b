//! Dashboard figures derived from the learning history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::queue::{due_queue, new_queue};
use crate::types::{NewCardLimit, Progress, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySummary {
    pub total_attempts: u64,
    pub correct_count: u64,
    /// Rounded percentage, 0 when nothing has been answered.
    pub accuracy_percent: u32,
    pub streak_days: u32,
    pub due_count: usize,
    pub new_count: usize,
    pub studied_count: usize,
    pub wrong_count: usize,
}

impl StudySummary {
    pub fn compute(progress: &Progress, ids: &[QuestionId], today: NaiveDate) -> Self {
        let stats = &progress.stats;
        let accuracy_percent = if stats.total_attempts > 0 {
            (stats.correct_count as f64 / stats.total_attempts as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total_attempts: stats.total_attempts,
            correct_count: stats.correct_count,
            accuracy_percent,
            streak_days: stats.streak_days,
            due_count: due_queue(progress, ids, today).len(),
            new_count: new_queue(progress, ids, NewCardLimit::Unlimited).len(),
            studied_count: ids.iter().filter(|id| progress.record(**id).is_some()).count(),
            wrong_count: progress.wrong_answers.len(),
        }
    }
}
