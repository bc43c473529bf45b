//! Review queue selection.
//!
//! Every builder takes the full ordered identifier list from the question
//! bank and keeps that order unless stated otherwise. Identifiers without a
//! record are "new"; lookups never fail.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{NewCardLimit, Progress, QuestionId};

/// Which queue to build for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueMode {
    Due,
    New,
    /// Due reviews followed by new introductions.
    Session,
    Cram,
    WrongAnswers,
}

impl Default for QueueMode {
    fn default() -> Self {
        Self::Session
    }
}

/// Reviewed questions whose next review date is on or before `today`.
pub fn due_queue(progress: &Progress, ids: &[QuestionId], today: NaiveDate) -> Vec<QuestionId> {
    ids.iter()
        .copied()
        .filter(|id| progress.record(*id).is_some_and(|r| r.is_due(today)))
        .collect()
}

/// Questions never reviewed, capped by `limit`.
pub fn new_queue(progress: &Progress, ids: &[QuestionId], limit: NewCardLimit) -> Vec<QuestionId> {
    let unseen = ids.iter().copied().filter(|id| progress.record(*id).is_none());
    match limit {
        NewCardLimit::Unlimited => unseen.collect(),
        NewCardLimit::AtMost(n) => unseen.take(n).collect(),
    }
}

/// Normal review session: due cards always come before new ones.
pub fn session_queue(
    progress: &Progress,
    ids: &[QuestionId],
    today: NaiveDate,
    limit: NewCardLimit,
) -> Vec<QuestionId> {
    let mut queue = due_queue(progress, ids, today);
    queue.extend(new_queue(progress, ids, limit));
    queue
}

/// Every reviewed question, weakest first by `(ease, repetitions, interval)`.
///
/// The sort is stable, so ties keep their input order.
pub fn cram_queue(progress: &Progress, ids: &[QuestionId]) -> Vec<QuestionId> {
    let mut studied: Vec<_> = ids
        .iter()
        .filter_map(|id| progress.record(*id).map(|r| (*id, r)))
        .collect();

    studied.sort_by(|(_, a), (_, b)| {
        a.ease
            .total_cmp(&b.ease)
            .then(a.repetitions.cmp(&b.repetitions))
            .then(a.interval.cmp(&b.interval))
    });

    studied.into_iter().map(|(id, _)| id).collect()
}

/// Questions currently in the wrong-answer set, in input order.
pub fn wrong_answer_queue(progress: &Progress, ids: &[QuestionId]) -> Vec<QuestionId> {
    ids.iter().copied().filter(|id| progress.is_wrong(*id)).collect()
}

/// Build the queue for `mode`.
pub fn build_queue(
    mode: QueueMode,
    progress: &Progress,
    ids: &[QuestionId],
    today: NaiveDate,
    limit: NewCardLimit,
) -> Vec<QuestionId> {
    match mode {
        QueueMode::Due => due_queue(progress, ids, today),
        QueueMode::New => new_queue(progress, ids, limit),
        QueueMode::Session => session_queue(progress, ids, today, limit),
        QueueMode::Cram => cram_queue(progress, ids),
        QueueMode::WrongAnswers => wrong_answer_queue(progress, ids),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LearningRecord;
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn record(ease: f64, repetitions: u32, interval: u32, due_in: i64) -> LearningRecord {
        LearningRecord {
            ease,
            interval,
            repetitions,
            next_review: today() + Duration::days(due_in),
        }
    }

    fn progress_with(records: &[(QuestionId, LearningRecord)]) -> Progress {
        let mut progress = Progress::default();
        for (id, r) in records {
            progress.records.insert(*id, r.clone());
        }
        progress
    }

    #[test]
    fn scenario_due_new_and_session() {
        let progress = progress_with(&[(1, record(2.5, 1, 1, 0)), (2, record(2.5, 2, 3, 5))]);
        let ids = [1, 2, 3];
        let limit = NewCardLimit::AtMost(10);

        assert_eq!(due_queue(&progress, &ids, today()), vec![1]);
        assert_eq!(new_queue(&progress, &ids, limit), vec![3]);
        assert_eq!(session_queue(&progress, &ids, today(), limit), vec![1, 3]);
    }

    #[test]
    fn overdue_cards_stay_due() {
        let progress = progress_with(&[(4, record(2.5, 3, 8, -30))]);
        assert_eq!(due_queue(&progress, &[4], today()), vec![4]);
    }

    #[test]
    fn due_keeps_input_order() {
        let progress = progress_with(&[
            (5, record(2.5, 1, 1, -1)),
            (9, record(2.5, 1, 1, 0)),
            (2, record(2.5, 1, 1, -2)),
        ]);
        assert_eq!(due_queue(&progress, &[9, 2, 5], today()), vec![9, 2, 5]);
    }

    #[test]
    fn new_limit_zero_is_not_unlimited() {
        let progress = Progress::default();
        let ids = [1, 2, 3, 4];
        assert!(new_queue(&progress, &ids, NewCardLimit::AtMost(0)).is_empty());
        assert_eq!(new_queue(&progress, &ids, NewCardLimit::Unlimited), vec![1, 2, 3, 4]);
        assert_eq!(new_queue(&progress, &ids, NewCardLimit::AtMost(2)), vec![1, 2]);
    }

    #[test]
    fn due_and_new_are_disjoint() {
        let progress = progress_with(&[
            (1, record(2.5, 1, 1, 0)),
            (3, record(2.5, 1, 1, -4)),
            (5, record(2.5, 1, 1, 2)),
        ]);
        let ids: Vec<QuestionId> = (1..=8).collect();
        let due = due_queue(&progress, &ids, today());
        let new = new_queue(&progress, &ids, NewCardLimit::Unlimited);

        assert!(due.iter().all(|id| progress.records.contains_key(id)));
        assert!(new.iter().all(|id| !progress.records.contains_key(id)));

        let session = session_queue(&progress, &ids, today(), NewCardLimit::Unlimited);
        let unique: HashSet<_> = session.iter().collect();
        assert_eq!(unique.len(), session.len());
        assert_eq!(session, vec![1, 3, 2, 4, 6, 7, 8]);
    }

    #[test]
    fn cram_orders_weakest_first() {
        let progress = progress_with(&[
            (1, record(2.5, 3, 8, 10)),
            (2, record(1.3, 0, 1, 1)),
            (3, record(2.5, 1, 1, 0)),
            (4, record(2.5, 1, 3, 2)),
            (5, record(1.7, 4, 20, 30)),
        ]);
        let ids = [1, 2, 3, 4, 5, 6];
        assert_eq!(cram_queue(&progress, &ids), vec![2, 5, 3, 4, 1]);
    }

    #[test]
    fn cram_ties_keep_input_order() {
        let same = record(2.18, 0, 1, 1);
        let progress = progress_with(&[(10, same.clone()), (20, same.clone()), (30, same)]);
        assert_eq!(cram_queue(&progress, &[30, 10, 20]), vec![30, 10, 20]);
    }

    #[test]
    fn cram_is_permutation_of_studied() {
        let progress = progress_with(&[
            (2, record(2.6, 2, 3, 1)),
            (4, record(1.9, 1, 1, 0)),
            (6, record(2.2, 0, 1, 3)),
        ]);
        let ids: Vec<QuestionId> = (1..=7).collect();
        let cram = cram_queue(&progress, &ids);

        let mut sorted = cram.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![2, 4, 6]);

        for pair in cram.windows(2) {
            let a = &progress.records[&pair[0]];
            let b = &progress.records[&pair[1]];
            assert!((a.ease, a.repetitions, a.interval) <= (b.ease, b.repetitions, b.interval));
        }
    }

    #[test]
    fn empty_input_gives_empty_queues() {
        let progress = progress_with(&[(1, record(2.5, 1, 1, 0))]);
        for mode in [
            QueueMode::Due,
            QueueMode::New,
            QueueMode::Session,
            QueueMode::Cram,
            QueueMode::WrongAnswers,
        ] {
            assert!(build_queue(mode, &progress, &[], today(), NewCardLimit::Unlimited).is_empty());
        }
    }

    #[test]
    fn wrong_answers_follow_input_order() {
        let mut progress = Progress::default();
        progress.wrong_answers = vec![7, 3];
        assert_eq!(wrong_answer_queue(&progress, &[1, 3, 5, 7]), vec![3, 7]);
    }
}
