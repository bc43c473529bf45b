//! Question bank model.
//!
//! The bank is loaded from JSON once and treated as read-only. Its
//! identifier order is the order every queue builder starts from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::QuestionId;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub day: String,
    pub original_number: u32,
    pub subject: String,
    pub question_text: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub choices: Vec<String>,
    /// 1-based index into `choices`.
    pub answer: usize,
    #[serde(default)]
    pub explanation: String,
    /// True/false ("O/X") question.
    #[serde(default)]
    pub is_ox: bool,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeta {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectMeta {
    pub id: String,
    pub name: String,
    pub day: String,
    pub question_range: (QuestionId, QuestionId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankMeta {
    pub total_questions: usize,
    #[serde(default)]
    pub days: Vec<DayMeta>,
    #[serde(default)]
    pub subjects: Vec<SubjectMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub meta: BankMeta,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Parse and validate a bank.
    ///
    /// Identifiers must be unique and every answer must point at a choice.
    pub fn from_json(text: &str) -> Result<Self> {
        let bank: Self =
            serde_json::from_str(text).map_err(|e| Error::InvalidQuestionBank(e.to_string()))?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(Error::InvalidQuestionBank(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            if question.answer == 0 || question.answer > question.choices.len() {
                return Err(Error::InvalidQuestionBank(format!(
                    "question {} answer {} is outside its {} choices",
                    question.id,
                    question.answer,
                    question.choices.len()
                )));
            }
        }
        Ok(())
    }

    /// All identifiers in bank order.
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id).collect()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Check a 1-based choice; `None` when the question is unknown.
    pub fn is_correct(&self, id: QuestionId, choice: usize) -> Option<bool> {
        self.get(id).map(|q| q.is_correct(choice))
    }

    /// Questions matching the optional day and subject filters, in bank order.
    pub fn filter(&self, day: Option<&str>, subject: Option<&str>) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| day.map_or(true, |d| q.day == d))
            .filter(|q| subject.map_or(true, |s| q.subject == s))
            .collect()
    }

    pub fn questions_for_day(&self, day: &str) -> Vec<&Question> {
        self.filter(Some(day), None)
    }
}
