//! Domain layer - Business logic and domain models

pub mod emotion;
pub mod language;
pub mod mode;
pub mod onboarding;
pub mod record;
pub mod summary;
pub mod translations;

pub use emotion::{Emotion, Intensity};
pub use language::Language;
pub use mode::RecordMode;
pub use onboarding::OnboardingState;
pub use record::EmotionRecord;
pub use summary::{group_by_date, records_on, DayGroup, DayStats};
pub use translations::translate;
