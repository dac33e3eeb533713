//! Journaled emotion entries

use crate::domain::{Emotion, Intensity};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One journaled entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRecord {
    id: i64,
    emotion: Emotion,
    emotion_name: String,
    intensity: Intensity,
    #[serde(default)]
    trigger: String,
    timestamp: DateTime<Utc>,
    date: String,
}

impl EmotionRecord {
    /// Create a record captured at `created`.
    ///
    /// The id is the creation instant in milliseconds and `date` is the
    /// calendar date in `created`'s own timezone.
    pub fn new<Tz: TimeZone>(
        emotion: Emotion,
        emotion_name: impl Into<String>,
        intensity: Intensity,
        trigger: impl Into<String>,
        created: DateTime<Tz>,
    ) -> Self {
        EmotionRecord {
            id: created.timestamp_millis(),
            emotion,
            emotion_name: emotion_name.into(),
            intensity,
            trigger: trigger.into(),
            date: created.date_naive().format("%Y-%m-%d").to_string(),
            timestamp: created.with_timezone(&Utc),
        }
    }

    /// Same record with a different id; used to keep ids strictly increasing
    /// when two entries land in the same millisecond.
    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    pub fn emotion_name(&self) -> &str {
        &self.emotion_name
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Grouping key as stored
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parsed grouping date; `None` for dates written in another format
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
