//! Emotion categories and intensity

use crate::error::MoodlogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of emotions a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Calm,
    Anxious,
    Excited,
    Frustrated,
    Peaceful,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Calm,
        Emotion::Anxious,
        Emotion::Excited,
        Emotion::Frustrated,
        Emotion::Peaceful,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Calm => "calm",
            Emotion::Anxious => "anxious",
            Emotion::Excited => "excited",
            Emotion::Frustrated => "frustrated",
            Emotion::Peaceful => "peaceful",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Calm => "😌",
            Emotion::Anxious => "😰",
            Emotion::Excited => "🤩",
            Emotion::Frustrated => "😤",
            Emotion::Peaceful => "🕊️",
        }
    }

    /// Dotted translation key for this emotion's display label
    pub fn label_key(&self) -> String {
        format!("emotions.{}", self.code())
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Emotion {
    type Err = MoodlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.code() == wanted)
            .ok_or_else(|| MoodlogError::InvalidEmotion(s.to_string()))
    }
}

/// How strongly an emotion was felt, 1 (mild) to 10 (intense)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, MoodlogError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Intensity(value as u8))
        } else {
            Err(MoodlogError::InvalidIntensity(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Intensity {
    type Error = MoodlogError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Intensity::new(value)
    }
}

impl From<Intensity> for i64 {
    fn from(intensity: Intensity) -> Self {
        i64::from(intensity.0)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
