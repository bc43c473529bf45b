//! Study engine for multiple-choice question practice.
//!
//! Provides:
//! - SM-2 card scheduling over per-question learning records
//! - Queue selection for due, new, session, cram and wrong-answer drills
//! - Answer recording (history, counters, streak, wrong-answer set)
//! - Versioned snapshot export/import of the learning history
//! - The question bank model
//!
//! Everything here is a pure function of its inputs. Dates are passed in
//! explicitly; persistence belongs to the caller.

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod progress;
pub mod questions;
pub mod queue;
pub mod snapshot;
pub mod study;
pub mod summary;
pub mod types;

pub use algorithm::{review_question, Sm2, SpacedRepetitionAlgorithm};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use questions::{BankMeta, DayMeta, Question, QuestionBank, SubjectMeta};
pub use queue::{
    build_queue, cram_queue, due_queue, new_queue, session_queue, wrong_answer_queue, QueueMode,
};
pub use snapshot::SNAPSHOT_VERSION;
pub use study::{grade, StudyMode};
pub use summary::StudySummary;
pub use types::{
    Confidence, HistoryEntry, LearningRecord, NewCardLimit, Progress, QuestionId, StudyStats,
};
