//! Output formatting utilities

use crate::application::{PastDay, TodayOverview};
use crate::domain::{translate, DayStats, Emotion, EmotionRecord, Language, OnboardingState, RecordMode};
use chrono::Local;

/// Format the store's settings and progress
pub fn format_status(
    language: Option<Language>,
    mode: Option<RecordMode>,
    state: OnboardingState,
    record_count: usize,
) -> String {
    let or_unset = |value: Option<&'static str>| value.unwrap_or("(not set)");
    format!(
        "language = {}\nmode = {}\nonboarding = {}\nrecords = {}\n",
        or_unset(language.map(|l| l.code())),
        or_unset(mode.map(|m| m.code())),
        state.describe(),
        record_count
    )
}

/// One record as a single line, plus its trigger on a second line if any
pub fn format_record(record: &EmotionRecord, language: Option<Language>, time_pattern: &str) -> String {
    let time = record.timestamp().with_timezone(&Local).format(time_pattern);
    let mut line = format!(
        "{} {}  {}  {} {}",
        record.emotion().emoji(),
        record.emotion_name(),
        time,
        translate(language, "intensity"),
        record.intensity()
    );
    if !record.trigger().is_empty() {
        line.push_str(&format!("\n    {}", record.trigger()));
    }
    line
}

fn format_stats(stats: &DayStats, language: Option<Language>) -> String {
    format!(
        "{}: {}   {}: {:.1}",
        translate(language, "recordCount"),
        stats.count,
        translate(language, "avgIntensity"),
        stats.average_intensity
    )
}

/// Format today's track
pub fn format_today(overview: &TodayOverview<'_>, language: Option<Language>, time_pattern: &str) -> String {
    if overview.stats.count == 0 {
        return format!(
            "{}\n{}",
            translate(language, "noRecordsToday"),
            translate(language, "startRecording")
        );
    }

    let mut output = format!("{}\n", translate(language, "todayTrack"));
    for record in &overview.records {
        output.push_str(&format_record(record, language, time_pattern));
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&format_stats(&overview.stats, language));
    output.push('\n');
    output
}

/// Format the past log, one block per day
pub fn format_past(days: &[PastDay<'_>], language: Option<Language>, time_pattern: &str) -> String {
    if days.is_empty() {
        return format!(
            "{}\n{}",
            translate(language, "noRecords"),
            translate(language, "startRecording")
        );
    }

    let mut output = format!("{}\n", translate(language, "pastRecords"));
    for day in days {
        output.push_str(&format!("\n{}  ({})\n", day.label, day.group.date));
        for record in &day.group.records {
            output.push_str("  ");
            output.push_str(&format_record(record, language, time_pattern).replace('\n', "\n  "));
            output.push('\n');
        }
        output.push_str("  ");
        output.push_str(&format_stats(&day.stats, language));
        output.push('\n');
    }
    output
}

/// Format the emotion closed set with labels in `language`
pub fn format_emotions(language: Option<Language>) -> String {
    let mut output = String::new();
    for emotion in Emotion::ALL {
        output.push_str(&format!(
            "{} {:<11}{}\n",
            emotion.emoji(),
            emotion.code(),
            translate(language, &emotion.label_key())
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ReviewService;
    use crate::domain::Intensity;
    use crate::infrastructure::{EmotionJournalStore, MemoryStorage};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record(emotion: Emotion, name: &str, intensity: i64, trigger: &str, day: u32) -> EmotionRecord {
        EmotionRecord::new(
            emotion,
            name,
            Intensity::new(intensity).unwrap(),
            trigger,
            Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_format_status_unset() {
        let output = format_status(None, None, OnboardingState::AwaitingLanguage, 0);
        assert!(output.contains("language = (not set)"));
        assert!(output.contains("mode = (not set)"));
        assert!(output.contains("onboarding = awaiting language"));
        assert!(output.contains("records = 0"));
    }

    #[test]
    fn test_format_status_ready() {
        let output = format_status(
            Some(Language::En),
            Some(RecordMode::Festinger),
            OnboardingState::Ready,
            3,
        );
        assert_eq!(
            output,
            "language = en\nmode = festinger\nonboarding = ready\nrecords = 3\n"
        );
    }

    #[test]
    fn test_format_record_with_trigger() {
        let r = record(Emotion::Angry, "Angry", 7, "traffic", 17);
        let output = format_record(&r, Some(Language::En), "%H:%M");
        assert!(output.starts_with("😠 Angry"));
        assert!(output.contains("Intensity 7"));
        assert!(output.ends_with("\n    traffic"));
    }

    #[test]
    fn test_format_record_without_trigger_is_one_line() {
        let r = record(Emotion::Calm, "平静", 4, "", 17);
        let output = format_record(&r, Some(Language::Zh), "%H:%M");
        assert!(!output.contains('\n'));
        assert!(output.contains("强度 4"));
    }

    #[test]
    fn test_format_today_empty() {
        let overview = TodayOverview {
            records: vec![],
            stats: DayStats::from_records(std::iter::empty()),
        };
        let output = format_today(&overview, Some(Language::En), "%H:%M");
        assert_eq!(output, "No records today\nStart recording emotions!");
    }

    #[test]
    fn test_format_today_with_stats() {
        let mut store = EmotionJournalStore::load(MemoryStorage::new());
        store.add_record(record(Emotion::Happy, "Happy", 8, "", 17));
        store.add_record(record(Emotion::Sad, "Sad", 3, "", 17));

        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let overview = ReviewService::new(&store).today(today, 5);
        let output = format_today(&overview, Some(Language::En), "%H:%M");

        assert!(output.starts_with("Today's emotional track\n"));
        assert!(output.contains("Record Count: 2"));
        assert!(output.contains("Average Intensity: 5.5"));
    }

    #[test]
    fn test_format_today_with_zero_limit_keeps_stats() {
        let mut store = EmotionJournalStore::load(MemoryStorage::new());
        store.add_record(record(Emotion::Happy, "Happy", 6, "", 17));

        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let overview = ReviewService::new(&store).today(today, 0);
        let output = format_today(&overview, Some(Language::En), "%H:%M");

        assert!(overview.records.is_empty());
        assert!(!output.contains("No records today"));
        assert!(!output.contains("Happy"));
        assert!(output.contains("Record Count: 1"));
        assert!(output.contains("Average Intensity: 6.0"));
    }

    #[test]
    fn test_format_past_groups() {
        let mut store = EmotionJournalStore::load(MemoryStorage::new());
        store.set_language(Language::En);
        store.add_record(record(Emotion::Happy, "Happy", 8, "", 15));
        store.add_record(record(Emotion::Sad, "Sad", 2, "rain", 17));

        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let days = ReviewService::new(&store).past(today);
        let output = format_past(&days, Some(Language::En), "%H:%M");

        let today_pos = output.find("Today  (2025-01-17)").unwrap();
        let older_pos = output.find("(2025-01-15)").unwrap();
        assert!(today_pos < older_pos);
        assert!(output.contains("\n      rain"));
        assert!(output.contains("Average Intensity: 8.0"));
    }

    #[test]
    fn test_format_past_empty() {
        let output = format_past(&[], None, "%H:%M");
        assert_eq!(output, "还没有情绪记录\n开始记录你的情绪吧！");
    }

    #[test]
    fn test_format_emotions() {
        let output = format_emotions(Some(Language::En));
        assert_eq!(output.lines().count(), 8);
        assert!(output.contains("happy"));
        assert!(output.contains("Frustrated"));
    }
}
