//! Wellness Dashboard
//!
//! Daily mood check-in, the week at a glance, and achievement badges.
//! Check-ins are validated and echoed back; nothing is recorded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target number of wellness activities per day
pub const DAILY_ACTIVITY_GOAL: u32 = 4;

/// A mood rating on the 1..=5 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodValue(u8);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Mood value must be between 1 and 5, got {0}")]
pub struct InvalidMood(pub u8);

impl MoodValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Very Low",
            2 => "Low",
            3 => "Neutral",
            4 => "Good",
            _ => "Excellent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self.0 {
            1 => "😢",
            2 => "😟",
            3 => "😐",
            4 => "😊",
            _ => "😄",
        }
    }
}

impl TryFrom<u8> for MoodValue {
    type Error = InvalidMood;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(MoodValue(value))
        } else {
            Err(InvalidMood(value))
        }
    }
}

impl From<MoodValue> for u8 {
    fn from(value: MoodValue) -> Self {
        value.0
    }
}

/// A selected mood, as echoed back by the check-in
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MoodEntry {
    pub value: MoodValue,
    pub label: String,
    pub emoji: String,
}

impl From<MoodValue> for MoodEntry {
    fn from(value: MoodValue) -> Self {
        Self {
            value,
            label: value.label().to_string(),
            emoji: value.emoji().to_string(),
        }
    }
}

/// Validate a raw mood value into an entry
pub fn check_in(value: u8) -> Result<MoodEntry, InvalidMood> {
    MoodValue::try_from(value).map(MoodEntry::from)
}

/// All five mood buttons, lowest first
pub fn mood_options() -> Vec<MoodEntry> {
    (MoodValue::MIN..=MoodValue::MAX)
        .filter_map(|v| MoodValue::try_from(v).ok())
        .map(MoodEntry::from)
        .collect()
}

/// Colour band for a day's mood
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodTone {
    Good,
    Fair,
    Low,
}

impl MoodTone {
    pub fn for_mood(mood: u8) -> Self {
        match mood {
            m if m >= 4 => MoodTone::Good,
            3 => MoodTone::Fair,
            _ => MoodTone::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayStat {
    pub day: String,
    pub mood: u8,
    pub activities: u32,
    pub tone: MoodTone,
}

/// Progress bars shown above the weekly overview
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklySummary {
    /// Average mood rounded to one decimal
    pub mood_average: f64,
    pub mood_progress: u8,
    pub activities_done: u32,
    pub activities_goal: u32,
    pub activities_progress: u8,
    pub streak_days: u32,
    pub streak_progress: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuickAction {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WellnessView {
    pub mood_options: Vec<MoodEntry>,
    pub weekly_stats: Vec<DayStat>,
    pub summary: WeeklySummary,
    pub achievements: Vec<Achievement>,
    pub quick_actions: Vec<QuickAction>,
}

pub fn weekly_stats() -> Vec<DayStat> {
    [
        ("Mon", 4, 3),
        ("Tue", 3, 2),
        ("Wed", 5, 4),
        ("Thu", 4, 3),
        ("Fri", 2, 1),
        ("Sat", 4, 5),
        ("Sun", 5, 4),
    ]
    .into_iter()
    .map(|(day, mood, activities)| DayStat {
        day: day.to_string(),
        mood,
        activities,
        tone: MoodTone::for_mood(mood),
    })
    .collect()
}

fn percent(part: f64, whole: f64) -> u8 {
    if whole <= 0.0 {
        return 0;
    }
    ((part / whole) * 100.0).clamp(0.0, 100.0).floor() as u8
}

/// Derive the progress bars from a week of stats
pub fn summarize_week(days: &[DayStat]) -> WeeklySummary {
    let count = days.len() as u32;
    let mood_total: u32 = days.iter().map(|d| u32::from(d.mood)).sum();
    let mood_average = if count == 0 {
        0.0
    } else {
        (f64::from(mood_total) / f64::from(count) * 10.0).round() / 10.0
    };

    let activities_done: u32 = days.iter().map(|d| d.activities).sum();
    let activities_goal = count * DAILY_ACTIVITY_GOAL;

    // consecutive check-ins counted back from the latest day
    let streak_days = days.iter().rev().take_while(|d| d.mood > 0).count() as u32;

    WeeklySummary {
        mood_average,
        mood_progress: percent(mood_average, f64::from(MoodValue::MAX)),
        activities_done,
        activities_goal,
        activities_progress: percent(f64::from(activities_done), f64::from(activities_goal)),
        streak_days,
        streak_progress: percent(f64::from(streak_days.min(7)), 7.0),
    }
}

pub fn achievements() -> Vec<Achievement> {
    [
        ("7-Day Streak", "Completed daily check-ins", true),
        ("Mood Warrior", "Logged 50 mood entries", true),
        ("Goal Setter", "Set 5 wellness goals", false),
        ("Active Mind", "Completed 10 activities", true),
    ]
    .into_iter()
    .map(|(title, description, earned)| Achievement {
        title: title.to_string(),
        description: description.to_string(),
        earned,
    })
    .collect()
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("Meditation", "5-minute mindfulness"),
        ("Exercise", "Quick workout routine"),
        ("Gratitude", "Write 3 things you're grateful for"),
        ("Sleep", "Bedtime routine tracker"),
    ]
    .into_iter()
    .map(|(title, description)| QuickAction {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn view() -> WellnessView {
    let weekly_stats = weekly_stats();
    let summary = summarize_week(&weekly_stats);

    WellnessView {
        mood_options: mood_options(),
        weekly_stats,
        summary,
        achievements: achievements(),
        quick_actions: quick_actions(),
    }
}
