//! Core types for the study engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::snapshot::SNAPSHOT_VERSION;

/// Identifier of a question in the question bank.
pub type QuestionId = u32;

/// Confidence grade given by the learner after seeing the correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Again,
    Hard,
    Good,
    Easy,
}

impl Confidence {
    /// Quality score used by the SM-2 update (0-5 scale).
    pub fn quality(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Hard => 2,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl FromStr for Confidence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            other => Err(Error::InvalidGrade(other.to_string())),
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling state of a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    pub ease: f64,
    pub interval: u32,
    pub repetitions: u32,
    pub next_review: NaiveDate,
}

impl LearningRecord {
    /// Record for a question that has never been reviewed.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            ease: 2.5,
            interval: 0,
            repetitions: 0,
            next_review: today,
        }
    }

    /// Whether the card has come due on `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review <= today
    }
}

/// One graded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question_id: QuestionId,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate usage counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStats {
    pub total_attempts: u64,
    pub correct_count: u64,
    pub streak_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_study_date: Option<NaiveDate>,
}

/// Full learning history persisted by the progress store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub version: u32,
    #[serde(default)]
    pub records: BTreeMap<QuestionId, LearningRecord>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Questions currently marked incorrect, in the order they were missed.
    #[serde(default)]
    pub wrong_answers: Vec<QuestionId>,
    /// Sequential-mode position per day.
    #[serde(default)]
    pub sequential: BTreeMap<String, usize>,
    #[serde(default)]
    pub stats: StudyStats,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records: BTreeMap::new(),
            history: Vec::new(),
            wrong_answers: Vec::new(),
            sequential: BTreeMap::new(),
            stats: StudyStats::default(),
        }
    }
}

impl Progress {
    /// Scheduling record for a question, if it has been reviewed.
    pub fn record(&self, id: QuestionId) -> Option<&LearningRecord> {
        self.records.get(&id)
    }

    pub fn is_wrong(&self, id: QuestionId) -> bool {
        self.wrong_answers.contains(&id)
    }
}

/// Cap on how many unseen questions a session introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewCardLimit {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl FromStr for NewCardLimit {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "unlimited" => Ok(Self::Unlimited),
            n => n.parse().map(Self::AtMost),
        }
    }
}

impl fmt::Display for NewCardLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::AtMost(n) => write!(f, "{}", n),
        }
    }
}
