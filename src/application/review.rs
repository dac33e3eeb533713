//! Review use cases: today's track and the past log

use crate::domain::{
    group_by_date, records_on, translate, DayGroup, DayStats, EmotionRecord, Language,
};
use crate::infrastructure::{EmotionJournalStore, KeyValueStorage};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Today's most recent records plus stats over the whole day
#[derive(Debug)]
pub struct TodayOverview<'a> {
    pub records: Vec<&'a EmotionRecord>,
    pub stats: DayStats,
}

/// One day of the past log with its display heading
#[derive(Debug)]
pub struct PastDay<'a> {
    pub label: String,
    pub group: DayGroup<'a>,
    pub stats: DayStats,
}

/// Read-only views over a store
pub struct ReviewService<'a, S: KeyValueStorage> {
    store: &'a EmotionJournalStore<S>,
}

impl<'a, S: KeyValueStorage> ReviewService<'a, S> {
    pub fn new(store: &'a EmotionJournalStore<S>) -> Self {
        ReviewService { store }
    }

    /// Records from `today`, newest first, capped at `limit`
    pub fn today(&self, today: NaiveDate, limit: usize) -> TodayOverview<'a> {
        let store: &'a EmotionJournalStore<S> = self.store;
        let all = records_on(store.records(), today);
        let stats = DayStats::from_records(all.iter().copied());
        TodayOverview {
            records: all.into_iter().take(limit).collect(),
            stats,
        }
    }

    /// Every record grouped by day, newest day first
    pub fn past(&self, today: NaiveDate) -> Vec<PastDay<'a>> {
        let store: &'a EmotionJournalStore<S> = self.store;
        let language = store.language();
        group_by_date(store.records())
            .into_iter()
            .map(|group| PastDay {
                label: day_label(language, group.date, today),
                stats: group.stats(),
                group,
            })
            .collect()
    }
}

/// Heading for a day: "Today", "Yesterday", or a short localized date
pub fn day_label(language: Option<Language>, date: &str, today: NaiveDate) -> String {
    let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return date.to_string();
    };

    if day == today {
        return translate(language, "today");
    }
    if day == today - Duration::days(1) {
        return translate(language, "yesterday");
    }

    match language {
        Some(Language::En) => day.format("%a, %b %-d").to_string(),
        _ => format!("{}月{}日 {}", day.month(), day.day(), zh_weekday(day.weekday())),
    }
}

fn zh_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "周一",
        Weekday::Tue => "周二",
        Weekday::Wed => "周三",
        Weekday::Thu => "周四",
        Weekday::Fri => "周五",
        Weekday::Sat => "周六",
        Weekday::Sun => "周日",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Emotion, Intensity};
    use crate::infrastructure::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn store_with(entries: &[(Emotion, i64, u32, u32)]) -> EmotionJournalStore<MemoryStorage> {
        let mut store = EmotionJournalStore::load(MemoryStorage::new());
        store.set_language(Language::En);
        for (emotion, intensity, day, hour) in entries {
            let created = Utc.with_ymd_and_hms(2025, 1, *day, *hour, 0, 0).unwrap();
            store.add_record(EmotionRecord::new(
                *emotion,
                emotion.code(),
                Intensity::new(*intensity).unwrap(),
                "",
                created,
            ));
        }
        store
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_today_limits_records_but_not_stats() {
        let store = store_with(&[
            (Emotion::Happy, 8, 17, 8),
            (Emotion::Sad, 2, 17, 9),
            (Emotion::Calm, 5, 17, 10),
            (Emotion::Angry, 9, 16, 10),
        ]);

        let overview = ReviewService::new(&store).today(jan(17), 2);
        assert_eq!(overview.records.len(), 2);
        assert_eq!(overview.records[0].emotion(), Emotion::Calm);
        assert_eq!(overview.stats.count, 3);
        assert!((overview.stats.average_intensity - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_today_empty() {
        let store = store_with(&[(Emotion::Happy, 8, 10, 8)]);
        let overview = ReviewService::new(&store).today(jan(17), 5);
        assert!(overview.records.is_empty());
        assert_eq!(overview.stats.count, 0);
    }

    #[test]
    fn test_past_labels_and_order() {
        let store = store_with(&[
            (Emotion::Happy, 8, 14, 8),
            (Emotion::Sad, 2, 16, 9),
            (Emotion::Calm, 6, 17, 10),
            (Emotion::Excited, 8, 17, 12),
        ]);

        let days = ReviewService::new(&store).past(jan(17));
        let labels: Vec<&str> = days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Yesterday", "Tue, Jan 14"]);
        assert_eq!(days[0].stats.count, 2);
        assert!((days[0].stats.average_intensity - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_day_label_chinese() {
        assert_eq!(day_label(Some(Language::Zh), "2025-01-17", jan(17)), "今天");
        assert_eq!(day_label(None, "2025-01-14", jan(17)), "1月14日 周二");
    }

    #[test]
    fn test_day_label_passes_through_foreign_dates() {
        assert_eq!(day_label(Some(Language::En), "1/17/2025", jan(17)), "1/17/2025");
    }
}
