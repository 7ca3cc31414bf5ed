use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::answers::QuizAnswers;
use crate::error::QuizError;
use crate::model::Dosha;

/// Percentage per dosha plus the dominant one.
///
/// Each percentage is rounded on its own, so the three may sum to 99 or 101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaResult {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
    pub dominant: Dosha,
}

impl DoshaResult {
    pub fn percentage(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }
}

/// Score a quiz session. Fails with [`QuizError::NoScorableAnswers`] when no
/// scoring question has been answered.
pub fn score(answers: &QuizAnswers) -> Result<DoshaResult, QuizError> {
    let (mut vata, mut pitta, mut kapha) = (0u32, 0u32, 0u32);
    for dosha in answers.scored() {
        match dosha {
            Dosha::Vata => vata += 1,
            Dosha::Pitta => pitta += 1,
            Dosha::Kapha => kapha += 1,
        }
    }

    let total = vata + pitta + kapha;
    if total == 0 {
        return Err(QuizError::NoScorableAnswers);
    }
    debug!(vata, pitta, kapha, total, "dosha counts");

    let mut result = DoshaResult {
        vata: percent(vata, total),
        pitta: percent(pitta, total),
        kapha: percent(kapha, total),
        dominant: Dosha::Vata,
    };
    result.dominant = dominant(&result);
    Ok(result)
}

/// `round(count / total * 100)` with halves rounded up, in integer arithmetic.
fn percent(count: u32, total: u32) -> u32 {
    (count * 200 + total) / (2 * total)
}

/// Highest percentage; ties go to the earliest dosha in [`Dosha::PRIORITY`].
fn dominant(result: &DoshaResult) -> Dosha {
    let mut best = Dosha::PRIORITY[0];
    for dosha in &Dosha::PRIORITY[1..] {
        if result.percentage(*dosha) > result.percentage(best) {
            best = *dosha;
        }
    }
    best
}
