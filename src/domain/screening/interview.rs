//! Question set, answer scoring, and the interview cursor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Lowest score on the 1-5 scale; also the fallback when scoring fails.
pub const MIN_SCORE: u8 = 1;
/// Highest score on the 1-5 scale.
pub const MAX_SCORE: u8 = 5;

/// Ordered interview questions, generated once and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet(Vec<String>);

impl QuestionSet {
    /// Builds a question set, trimming each question and dropping blanks.
    ///
    /// # Errors
    ///
    /// `EmptyField` if no usable question remains.
    pub fn new(questions: Vec<String>) -> Result<Self, ValidationError> {
        let questions: Vec<String> = questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        Ok(Self(questions))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Per-answer scores, each on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTriple {
    clarity: u8,
    technical_accuracy: u8,
    depth: u8,
}

impl ScoreTriple {
    /// Creates a score triple, validating every component is in range.
    pub fn new(clarity: u8, technical_accuracy: u8, depth: u8) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("clarity", clarity),
            ("technical_accuracy", technical_accuracy),
            ("depth", depth),
        ] {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(ValidationError::out_of_range(
                    field,
                    MIN_SCORE as i64,
                    MAX_SCORE as i64,
                    value as i64,
                ));
            }
        }
        Ok(Self {
            clarity,
            technical_accuracy,
            depth,
        })
    }

    /// The (1, 1, 1) score recorded when evaluation is unavailable.
    pub fn minimum() -> Self {
        Self {
            clarity: MIN_SCORE,
            technical_accuracy: MIN_SCORE,
            depth: MIN_SCORE,
        }
    }

    pub fn clarity(&self) -> u8 {
        self.clarity
    }

    pub fn technical_accuracy(&self) -> u8 {
        self.technical_accuracy
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Mean of the three components.
    pub fn mean(&self) -> f64 {
        (self.clarity as f64 + self.technical_accuracy as f64 + self.depth as f64) / 3.0
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub answer: String,
    pub score: ScoreTriple,
    /// False when the fallback score was recorded.
    pub scored: bool,
}

impl AnswerRecord {
    pub fn scored(answer: impl Into<String>, score: ScoreTriple) -> Self {
        Self {
            answer: answer.into(),
            score,
            scored: true,
        }
    }

    pub fn unscored(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            score: ScoreTriple::minimum(),
            scored: false,
        }
    }
}

/// Interview progress over a fixed question set.
///
/// The number of answers always equals the cursor, and the cursor never
/// passes the number of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    questions: QuestionSet,
    answers: Vec<AnswerRecord>,
}

impl Interview {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    /// Index of the question currently awaiting an answer.
    pub fn cursor(&self) -> usize {
        self.answers.len()
    }

    /// The question awaiting an answer, or `None` once all are answered.
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.cursor())
    }

    pub fn is_complete(&self) -> bool {
        self.cursor() >= self.questions.len()
    }

    /// Records the answer to the current question and advances the cursor.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if every question has already been answered.
    pub fn record_answer(&mut self, record: AnswerRecord) -> Result<(), ValidationError> {
        if self.is_complete() {
            return Err(ValidationError::invalid_format(
                "answers",
                "all questions already answered",
            ));
        }
        self.answers.push(record);
        Ok(())
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Mean of each answer's score mean, or `None` before any answer.
    pub fn mean_score(&self) -> Option<f64> {
        if self.answers.is_empty() {
            return None;
        }
        let total: f64 = self.answers.iter().map(|a| a.score.mean()).sum();
        Some(total / self.answers.len() as f64)
    }
}

/// Rounds to two decimal places for display.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
