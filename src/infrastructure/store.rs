//! Emotion journal store
//!
//! Single source of truth for the settings and the record log. Every
//! mutation updates memory first and then writes the affected key back to
//! storage, so the two never disagree once a call returns. Storage failures
//! are logged and otherwise ignored; malformed data degrades to the key's
//! default without touching the other keys.

use crate::domain::{EmotionRecord, Language, OnboardingState, RecordMode};
use crate::error::MoodlogError;
use crate::infrastructure::KeyValueStorage;
use std::str::FromStr;

pub const LANGUAGE_KEY: &str = "emotion-app-language";
pub const RECORD_MODE_KEY: &str = "emotion-app-record-mode";
pub const RECORDS_KEY: &str = "emotion-app-records";

#[derive(Debug)]
pub struct EmotionJournalStore<S: KeyValueStorage> {
    storage: S,
    language: Option<Language>,
    record_mode: Option<RecordMode>,
    records: Vec<EmotionRecord>,
    setup_completed: bool,
}

impl<S: KeyValueStorage> EmotionJournalStore<S> {
    /// Build a store from whatever `storage` currently holds
    pub fn load(storage: S) -> Self {
        let mut store = EmotionJournalStore {
            storage,
            language: None,
            record_mode: None,
            records: Vec::new(),
            setup_completed: false,
        };
        store.reload();
        store
    }

    /// Re-read all three keys, replacing in-memory state
    pub fn reload(&mut self) {
        self.language = self.read_code(LANGUAGE_KEY);
        self.record_mode = self.read_code(RECORD_MODE_KEY);
        self.records = self.read_records();
        self.setup_completed = self.language.is_some() && self.record_mode.is_some();
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn record_mode(&self) -> Option<RecordMode> {
        self.record_mode
    }

    /// Records, newest first
    pub fn records(&self) -> &[EmotionRecord] {
        &self.records
    }

    pub fn is_first_time(&self) -> bool {
        !self.onboarding_state().is_ready()
    }

    pub fn onboarding_state(&self) -> OnboardingState {
        OnboardingState::from_settings(self.language, self.record_mode, self.setup_completed)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
        self.write(LANGUAGE_KEY, language.code());
    }

    pub fn set_record_mode(&mut self, mode: RecordMode) {
        self.record_mode = Some(mode);
        self.write(RECORD_MODE_KEY, mode.code());
    }

    /// Prepend `record` and rewrite the whole log
    pub fn add_record(&mut self, record: EmotionRecord) {
        self.records.insert(0, record);
        match serde_json::to_string(&self.records) {
            Ok(blob) => self.write(RECORDS_KEY, &blob),
            Err(e) => tracing::warn!(error = %e, "failed to serialize records"),
        }
    }

    /// Leave onboarding. Only takes effect once language and mode are both set.
    pub fn complete_setup(&mut self) {
        if self.language.is_some() && self.record_mode.is_some() {
            self.setup_completed = true;
            tracing::info!("onboarding complete");
        } else {
            tracing::warn!(
                state = self.onboarding_state().describe(),
                "complete_setup called before language and mode were chosen"
            );
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!(key, error = %e, "storage write failed, keeping in-memory state");
        }
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage unavailable, using default");
                None
            }
        }
    }

    fn read_code<T: FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(key, value = %raw, "unknown code in storage, treating as unset");
                None
            }
        }
    }

    fn read_records(&self) -> Vec<EmotionRecord> {
        let Some(raw) = self.read_raw(RECORDS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                let err = MoodlogError::MalformedData {
                    key: RECORDS_KEY.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(error = %err, "starting with an empty record log");
                Vec::new()
            }
        }
    }
}
