//! Views derived from the record log
//!
//! Everything here is recomputed from the full newest-first sequence on each
//! call; nothing is cached.

use crate::domain::EmotionRecord;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// All records sharing one `date` value
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    pub date: &'a str,
    pub records: Vec<&'a EmotionRecord>,
}

impl DayGroup<'_> {
    pub fn stats(&self) -> DayStats {
        DayStats::from_records(self.records.iter().copied())
    }
}

/// Count and mean intensity over a set of records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayStats {
    pub count: usize,
    pub average_intensity: f64,
}

impl DayStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a EmotionRecord>) -> Self {
        let (count, total) = records.into_iter().fold((0usize, 0u64), |(n, sum), r| {
            (n + 1, sum + u64::from(r.intensity().value()))
        });
        let average_intensity = if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        };
        DayStats {
            count,
            average_intensity,
        }
    }
}

/// Records created on `day`, in log order (newest first)
pub fn records_on(records: &[EmotionRecord], day: NaiveDate) -> Vec<&EmotionRecord> {
    records
        .iter()
        .filter(|r| r.calendar_date() == Some(day))
        .collect()
}

/// Group records by their `date` field, newest date first.
///
/// Within a group, records are ordered newest timestamp first; ties keep log
/// order. Every record appears in exactly one group.
pub fn group_by_date(records: &[EmotionRecord]) -> Vec<DayGroup<'_>> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|g| g.date == record.date()) {
            Some(group) => group.records.push(record),
            None => groups.push(DayGroup {
                date: record.date(),
                records: vec![record],
            }),
        }
    }

    for group in &mut groups {
        group
            .records
            .sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    }
    groups.sort_by(|a, b| compare_dates_desc(a.date, b.date));
    groups
}

fn compare_dates_desc(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        // Unparseable dates sort after real ones
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}
