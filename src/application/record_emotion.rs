//! Record emotion use case

use crate::domain::{translate, Emotion, EmotionRecord, Intensity};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::store::RECORDS_KEY;
use crate::infrastructure::{EmotionJournalStore, KeyValueStorage};
use chrono::{DateTime, TimeZone};

/// Builds a complete record and appends it to the journal
pub struct RecordEmotionService<'a, S: KeyValueStorage> {
    store: &'a mut EmotionJournalStore<S>,
}

impl<'a, S: KeyValueStorage> RecordEmotionService<'a, S> {
    pub fn new(store: &'a mut EmotionJournalStore<S>) -> Self {
        RecordEmotionService { store }
    }

    /// Record `emotion` as felt at `now`.
    ///
    /// The label is resolved in the current language. Ids stay strictly
    /// increasing even if the clock repeats or steps back.
    pub fn execute<Tz: TimeZone>(
        &mut self,
        emotion: Emotion,
        intensity: Intensity,
        trigger: &str,
        now: DateTime<Tz>,
    ) -> Result<EmotionRecord> {
        if self.store.is_first_time() {
            return Err(MoodlogError::SetupIncomplete(format!(
                "journal is {}",
                self.store.onboarding_state().describe()
            )));
        }

        let name = translate(self.store.language(), &emotion.label_key());
        let mut record = EmotionRecord::new(emotion, name, intensity, trigger, now);

        if let Some(newest) = self.store.records().first() {
            if newest.id() >= record.id() {
                let next = newest.id().checked_add(1).ok_or_else(|| MoodlogError::MalformedData {
                    key: RECORDS_KEY.to_string(),
                    reason: format!("newest record id {} leaves no room for another", newest.id()),
                })?;
                record = record.with_id(next);
            }
        }

        tracing::debug!(id = record.id(), %emotion, intensity = %intensity, "recording emotion");
        self.store.add_record(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::OnboardingService;
    use crate::domain::{Language, RecordMode};
    use crate::infrastructure::MemoryStorage;
    use chrono::Utc;

    fn ready_store(language: Language) -> EmotionJournalStore<MemoryStorage> {
        let mut store = EmotionJournalStore::load(MemoryStorage::new());
        OnboardingService::new(&mut store).execute(language, RecordMode::Festinger);
        store
    }

    #[test]
    fn test_record_resolves_label_in_current_language() {
        let mut store = ready_store(Language::Zh);
        let now = Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap();

        let record = RecordEmotionService::new(&mut store)
            .execute(Emotion::Happy, Intensity::new(8).unwrap(), "", now)
            .unwrap();

        assert_eq!(record.emotion_name(), "快乐");
        assert_eq!(record.id(), now.timestamp_millis());
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0], record);
    }

    #[test]
    fn test_record_requires_setup() {
        let mut store = EmotionJournalStore::load(MemoryStorage::new());
        let result = RecordEmotionService::new(&mut store).execute(
            Emotion::Sad,
            Intensity::new(3).unwrap(),
            "",
            Utc::now(),
        );

        assert!(matches!(result, Err(MoodlogError::SetupIncomplete(_))));
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_ids_stay_increasing_within_same_instant() {
        let mut store = ready_store(Language::En);
        let now = Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap();
        let mut service = RecordEmotionService::new(&mut store);

        let first = service
            .execute(Emotion::Calm, Intensity::new(5).unwrap(), "", now)
            .unwrap();
        let second = service
            .execute(Emotion::Anxious, Intensity::new(6).unwrap(), "deadline", now)
            .unwrap();

        assert_eq!(second.id(), first.id() + 1);
        assert_eq!(store.records()[0].emotion(), Emotion::Anxious);
        assert_eq!(store.records()[0].trigger(), "deadline");
    }

    #[test]
    fn test_exhausted_id_space_is_an_error_not_a_panic() {
        let blob = format!(
            r#"[{{"id":{},"emotion":"calm","emotionName":"Calm","intensity":5,"trigger":"",
                "timestamp":"2025-01-17T09:00:00Z","date":"2025-01-17"}}]"#,
            i64::MAX
        );
        let storage = MemoryStorage::new()
            .with_entry(crate::infrastructure::store::LANGUAGE_KEY, "en")
            .with_entry(crate::infrastructure::store::RECORD_MODE_KEY, "festinger")
            .with_entry(RECORDS_KEY, &blob);
        let mut store = EmotionJournalStore::load(storage);
        assert_eq!(store.records().len(), 1);

        let result = RecordEmotionService::new(&mut store).execute(
            Emotion::Happy,
            Intensity::new(5).unwrap(),
            "",
            Utc::now(),
        );

        assert!(matches!(result, Err(MoodlogError::MalformedData { .. })));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id(), i64::MAX);
    }
}
