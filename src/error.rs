//! Error types for moodlog

use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Setup not complete: {0}")]
    SetupIncomplete(String),

    #[error("Invalid language: '{0}'")]
    InvalidLanguage(String),

    #[error("Invalid record mode: '{0}'")]
    InvalidMode(String),

    #[error("Invalid emotion: '{0}'")]
    InvalidEmotion(String),

    #[error("Invalid intensity: {0} (must be between 1 and 10)")]
    InvalidIntensity(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Malformed data under '{key}': {reason}")]
    MalformedData { key: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::SetupIncomplete(_) => 2,
            MoodlogError::InvalidLanguage(_)
            | MoodlogError::InvalidMode(_)
            | MoodlogError::InvalidEmotion(_)
            | MoodlogError::InvalidIntensity(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::SetupIncomplete(msg) => {
                format!(
                    "Setup not complete: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog setup --language en --mode festinger'\n\
                    • Check progress with 'moodlog status'",
                    msg
                )
            }
            MoodlogError::InvalidLanguage(code) => {
                format!(
                    "Invalid language: '{}'\n\n\
                    Supported languages: zh, en\n\
                    Example: moodlog language en",
                    code
                )
            }
            MoodlogError::InvalidMode(code) => {
                format!(
                    "Invalid record mode: '{}'\n\n\
                    Supported modes: festinger\n\
                    Example: moodlog setup --language en --mode festinger",
                    code
                )
            }
            MoodlogError::InvalidEmotion(code) => {
                format!(
                    "Invalid emotion: '{}'\n\n\
                    Valid emotions: happy, sad, angry, calm, anxious, excited, frustrated, peaceful\n\
                    Use 'moodlog emotions' to see them with labels",
                    code
                )
            }
            MoodlogError::InvalidIntensity(value) => {
                format!(
                    "Invalid intensity: {}\n\n\
                    Intensity is a whole number from 1 (mild) to 10 (intense)\n\
                    Example: moodlog record happy --intensity 7",
                    value
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_incomplete_suggestion() {
        let err = MoodlogError::SetupIncomplete("no language selected".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("moodlog setup"));
        assert!(msg.contains("moodlog status"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_emotion_lists_closed_set() {
        let err = MoodlogError::InvalidEmotion("bored".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'bored'"));
        assert!(msg.contains("happy, sad, angry"));
        assert!(msg.contains("moodlog emotions"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_intensity_suggestion() {
        let err = MoodlogError::InvalidIntensity(11);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("1 (mild) to 10 (intense)"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_language_suggestion() {
        let err = MoodlogError::InvalidLanguage("fr".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("zh, en"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = MoodlogError::Config("bad key".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: bad key");
        assert_eq!(err.exit_code(), 1);
    }
}
