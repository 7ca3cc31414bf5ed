use std::collections::BTreeMap;

use crate::error::QuizError;
use crate::model::{Dosha, QuestionId};

/// The answers of one quiz session, keyed by question.
///
/// Scoring answers are checked against the option table when recorded, so every
/// stored scoring answer maps to exactly one dosha. Height and weight are kept
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    answers: BTreeMap<QuestionId, String>,
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace an answer.
    pub fn record(&mut self, question: QuestionId, value: impl Into<String>) -> Result<(), QuizError> {
        let value = value.into();
        if question.is_scored() && question.dosha_for(&value).is_none() {
            return Err(QuizError::UnknownOption {
                question: question.key().to_string(),
                value,
            });
        }
        self.answers.insert(question, value);
        Ok(())
    }

    /// Parse `{"bodyFrame": "thin", "height": "170", ...}`.
    ///
    /// Empty values are treated as unanswered.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut answers = Self::new();
        for (key, value) in raw {
            let question =
                QuestionId::from_key(&key).ok_or_else(|| QuizError::UnknownQuestion(key.clone()))?;
            if value.is_empty() {
                continue;
            }
            answers.record(question, value)?;
        }
        Ok(answers)
    }

    pub fn get(&self, question: QuestionId) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Scoring questions not yet answered, in quiz order.
    pub fn unanswered(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|q| q.is_scored() && !self.answers.contains_key(q))
            .collect()
    }

    /// The dosha of every answered scoring question.
    pub fn scored(&self) -> impl Iterator<Item = Dosha> + '_ {
        self.answers
            .iter()
            .filter(|(question, _)| question.is_scored())
            .filter_map(|(question, value)| question.dosha_for(value))
    }
}
