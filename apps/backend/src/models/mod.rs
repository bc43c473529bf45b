//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quizdrill-core
pub use quizdrill_core::{
    LearningRecord, Question, QueueMode, QuestionId, StudyMode, StudySummary,
};

// Question types
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListQuery {
    pub day: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
}

// Study types
#[derive(Debug, Serialize, Deserialize)]
pub struct StudyQueueQuery {
    #[serde(default)]
    pub mode: QueueMode,
    /// Overrides the configured cap: a number or "unlimited".
    pub max_new: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudyQueueResponse {
    pub mode: QueueMode,
    pub question_ids: Vec<QuestionId>,
    pub due_count: usize,
    pub new_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub question_id: QuestionId,
    /// 1-based choice picked by the learner.
    pub choice: usize,
    pub mode: StudyMode,
    /// One of again, hard, good, easy. Required in review mode.
    pub confidence: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub answer: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<LearningRecord>,
    pub wrong_answer_count: usize,
}

// Progress types
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub records: usize,
    pub history: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SequentialRequest {
    pub index: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SequentialResponse {
    pub day: String,
    pub index: usize,
    pub total: usize,
}
