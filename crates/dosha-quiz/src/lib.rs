pub mod answers;
pub mod error;
pub mod model;
pub mod scorer;

pub use answers::QuizAnswers;
pub use error::QuizError;
pub use model::{Dosha, QuestionId};
pub use scorer::{score, DoshaResult};
