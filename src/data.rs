// src/data.rs

use crate::error::{QuizError, Result};
use crate::model::QuestionRecord;

/// Ordered, read-only list of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Validates every record before accepting the bank.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (index, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(QuizError::InvalidQuestion {
                    index,
                    reason: format!("needs at least 2 options, found {}", q.options.len()),
                });
            }
            if q.correct_index >= q.options.len() {
                return Err(QuizError::InvalidQuestion {
                    index,
                    reason: format!(
                        "correct_index {} outside {} options",
                        q.correct_index,
                        q.options.len()
                    ),
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let questions: Vec<QuestionRecord> = serde_yaml::from_str(text)?;
        Self::new(questions)
    }

    pub fn question_at(&self, index: usize) -> Result<&QuestionRecord> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            count: self.questions.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank> {
    let file_content = include_str!("data/quiz_questions.yaml");
    let bank = QuestionBank::from_yaml_str(file_content)?;
    log::debug!("loaded {} embedded questions", bank.count());
    Ok(bank)
}
