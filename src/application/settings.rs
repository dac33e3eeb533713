//! Settings use case

use crate::domain::{Language, OnboardingState};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EmotionJournalStore, KeyValueStorage};

/// Changes settings after onboarding is done
pub struct SettingsService<'a, S: KeyValueStorage> {
    store: &'a mut EmotionJournalStore<S>,
}

impl<'a, S: KeyValueStorage> SettingsService<'a, S> {
    pub fn new(store: &'a mut EmotionJournalStore<S>) -> Self {
        SettingsService { store }
    }

    /// Switch the display language. Existing records keep the label they were
    /// created with.
    pub fn change_language(&mut self, language: Language) -> Result<()> {
        if self.store.onboarding_state() != OnboardingState::Ready {
            return Err(MoodlogError::SetupIncomplete(
                "choose a language and mode with 'moodlog setup' first".to_string(),
            ));
        }
        self.store.set_language(language);
        tracing::info!(%language, "language changed");
        Ok(())
    }
}
