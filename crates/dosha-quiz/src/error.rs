#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Scoring was attempted before any scoring question was answered.
    #[error("no scorable answers; every quiz question must be answered before scoring")]
    NoScorableAnswers,

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("unknown option {value:?} for question {question}")]
    UnknownOption { question: String, value: String },

    #[error("invalid answers json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
}
