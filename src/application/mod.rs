//! Application layer - Use cases and orchestration

pub mod manage_config;
pub mod onboarding;
pub mod record_emotion;
pub mod review;
pub mod settings;

pub use manage_config::ConfigService;
pub use onboarding::OnboardingService;
pub use record_emotion::RecordEmotionService;
pub use review::{PastDay, ReviewService, TodayOverview};
pub use settings::SettingsService;
