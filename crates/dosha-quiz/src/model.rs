use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Tie-break order for the dominant dosha: earlier wins.
    pub const PRIORITY: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    Height,
    Weight,
    BodyFrame,
    Skin,
    Hair,
    Eyes,
    Digestion,
    Appetite,
    Thirst,
    Personality,
    Emotions,
    Memory,
    Energy,
    Sleep,
    Weather,
    Exercise,
    Speech,
}

impl QuestionId {
    /// Quiz order: the two biometric fields, then the scoring questions.
    pub const ALL: [QuestionId; 17] = [
        Self::Height,
        Self::Weight,
        Self::BodyFrame,
        Self::Skin,
        Self::Hair,
        Self::Eyes,
        Self::Digestion,
        Self::Appetite,
        Self::Thirst,
        Self::Personality,
        Self::Emotions,
        Self::Memory,
        Self::Energy,
        Self::Sleep,
        Self::Weather,
        Self::Exercise,
        Self::Speech,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
            Self::BodyFrame => "bodyFrame",
            Self::Skin => "skin",
            Self::Hair => "hair",
            Self::Eyes => "eyes",
            Self::Digestion => "digestion",
            Self::Appetite => "appetite",
            Self::Thirst => "thirst",
            Self::Personality => "personality",
            Self::Emotions => "emotions",
            Self::Memory => "memory",
            Self::Energy => "energy",
            Self::Sleep => "sleep",
            Self::Weather => "weather",
            Self::Exercise => "exercise",
            Self::Speech => "speech",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.key() == key)
    }

    /// Height and weight are collected but never scored.
    pub fn is_scored(self) -> bool {
        !matches!(self, Self::Height | Self::Weight)
    }

    /// Option values and the dosha each one counts toward, in display order.
    pub fn options(self) -> &'static [(&'static str, Dosha)] {
        use Dosha::{Kapha, Pitta, Vata};

        match self {
            Self::Height | Self::Weight => &[],
            Self::BodyFrame => &[("thin", Vata), ("medium", Pitta), ("large", Kapha)],
            Self::Skin => &[("dry", Vata), ("warm", Pitta), ("oily", Kapha)],
            Self::Hair => &[("dry", Vata), ("fine", Pitta), ("thick", Kapha)],
            Self::Eyes => &[("small", Vata), ("sharp", Pitta), ("large", Kapha)],
            Self::Digestion => &[("irregular", Vata), ("strong", Pitta), ("slow", Kapha)],
            Self::Appetite => &[("variable", Vata), ("strong", Pitta), ("low", Kapha)],
            Self::Thirst => &[("variable", Vata), ("excessive", Pitta), ("minimal", Kapha)],
            Self::Personality => &[("creative", Vata), ("ambitious", Pitta), ("calm", Kapha)],
            Self::Emotions => &[("anxious", Vata), ("angry", Pitta), ("withdrawn", Kapha)],
            Self::Memory => &[("quick", Vata), ("sharp", Pitta), ("slow", Kapha)],
            Self::Energy => &[("variable", Vata), ("consistent", Pitta), ("steady", Kapha)],
            Self::Sleep => &[("light", Vata), ("moderate", Pitta), ("deep", Kapha)],
            Self::Weather => &[("warm", Vata), ("cool", Pitta), ("warm-dry", Kapha)],
            Self::Exercise => &[("light", Vata), ("moderate", Pitta), ("intense", Kapha)],
            Self::Speech => &[("fast", Vata), ("sharp", Pitta), ("slow", Kapha)],
        }
    }

    pub fn dosha_for(self, value: &str) -> Option<Dosha> {
        self.options()
            .iter()
            .find(|(option, _)| *option == value)
            .map(|&(_, dosha)| dosha)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
