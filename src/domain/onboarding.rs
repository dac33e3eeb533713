//! Onboarding state machine

use crate::domain::{Language, RecordMode};

/// Where a user is in the one-time setup flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    AwaitingLanguage,
    AwaitingMode,
    Ready,
}

impl OnboardingState {
    /// Derive the state from persisted settings and whether setup was completed
    pub fn from_settings(
        language: Option<Language>,
        record_mode: Option<RecordMode>,
        setup_completed: bool,
    ) -> Self {
        match (language, record_mode) {
            (None, _) => OnboardingState::AwaitingLanguage,
            (Some(_), Some(_)) if setup_completed => OnboardingState::Ready,
            (Some(_), _) => OnboardingState::AwaitingMode,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, OnboardingState::Ready)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            OnboardingState::AwaitingLanguage => "awaiting language",
            OnboardingState::AwaitingMode => "awaiting record mode",
            OnboardingState::Ready => "ready",
        }
    }
}
