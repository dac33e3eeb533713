//! Onboarding use case

use crate::domain::{Language, OnboardingState, RecordMode};
use crate::infrastructure::{EmotionJournalStore, KeyValueStorage};

/// Walks a store through language selection, mode selection and completion
pub struct OnboardingService<'a, S: KeyValueStorage> {
    store: &'a mut EmotionJournalStore<S>,
}

impl<'a, S: KeyValueStorage> OnboardingService<'a, S> {
    pub fn new(store: &'a mut EmotionJournalStore<S>) -> Self {
        OnboardingService { store }
    }

    pub fn choose_language(&mut self, language: Language) -> OnboardingState {
        self.store.set_language(language);
        tracing::info!(%language, "language selected");
        self.store.onboarding_state()
    }

    /// Select the record mode and close the setup flow
    pub fn choose_mode(&mut self, mode: RecordMode) -> OnboardingState {
        self.store.set_record_mode(mode);
        self.store.complete_setup();
        self.store.onboarding_state()
    }

    /// Run the whole flow in one go
    pub fn execute(&mut self, language: Language, mode: RecordMode) -> OnboardingState {
        self.choose_language(language);
        self.choose_mode(mode)
    }
}
