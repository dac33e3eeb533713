//! Display labels for the terminal front-end
//!
//! Lookups take a dotted key path such as `emotions.happy`. Without a chosen
//! language the Chinese table is used, and unknown keys resolve to themselves.

use crate::domain::Language;

pub fn translate(language: Option<Language>, key: &str) -> String {
    let table: fn(&str) -> Option<&'static str> = match language.unwrap_or(Language::Zh) {
        Language::Zh => zh,
        Language::En => en,
    };
    table(key).map(str::to_string).unwrap_or_else(|| key.to_string())
}

fn zh(key: &str) -> Option<&'static str> {
    let label = match key {
        "emotions.happy" => "快乐",
        "emotions.sad" => "悲伤",
        "emotions.angry" => "愤怒",
        "emotions.calm" => "平静",
        "emotions.anxious" => "焦虑",
        "emotions.excited" => "兴奋",
        "emotions.frustrated" => "沮丧",
        "emotions.peaceful" => "安详",
        "festingerMode" => "菲斯汀格法则模式",
        "festingerReminder" => "记住菲斯汀格法则：事件本身只占10%，你的反应占90%",
        "intensity" => "强度",
        "todayTrack" => "今天的情绪轨迹",
        "pastRecords" => "过往记录",
        "recordCount" => "记录次数",
        "avgIntensity" => "平均强度",
        "noRecords" => "还没有情绪记录",
        "noRecordsToday" => "今天还没有记录",
        "startRecording" => "开始记录你的情绪吧！",
        "saved" => "记录已保存",
        "today" => "今天",
        "yesterday" => "昨天",
        _ => return None,
    };
    Some(label)
}

fn en(key: &str) -> Option<&'static str> {
    let label = match key {
        "emotions.happy" => "Happy",
        "emotions.sad" => "Sad",
        "emotions.angry" => "Angry",
        "emotions.calm" => "Calm",
        "emotions.anxious" => "Anxious",
        "emotions.excited" => "Excited",
        "emotions.frustrated" => "Frustrated",
        "emotions.peaceful" => "Peaceful",
        "festingerMode" => "Festinger's Law Mode",
        "festingerReminder" => {
            "Remember Festinger's Law: Events account for only 10%, your reaction accounts for 90%"
        }
        "intensity" => "Intensity",
        "todayTrack" => "Today's emotional track",
        "pastRecords" => "Past Records",
        "recordCount" => "Record Count",
        "avgIntensity" => "Average Intensity",
        "noRecords" => "No emotion records yet",
        "noRecordsToday" => "No records today",
        "startRecording" => "Start recording emotions!",
        "saved" => "Record saved",
        "today" => "Today",
        "yesterday" => "Yesterday",
        _ => return None,
    };
    Some(label)
}
