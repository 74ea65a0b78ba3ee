//! Appointment calendar
//!
//! Which dates a student may pick when booking a session. Past dates and
//! weekends are never offered; today is, as long as it is a weekday.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::Serialize;

use super::error::DateRejection;

/// Longest calendar window served in one request
pub const MAX_CALENDAR_DAYS: u32 = 62;

/// One cell of the rendered calendar
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub selectable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DateRejection>,
}

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check whether `date` may be booked, given the current date
pub fn check_date(date: NaiveDate, today: NaiveDate) -> Result<(), DateRejection> {
    if date < today {
        return Err(DateRejection::Past);
    }
    if is_weekend(date) {
        return Err(DateRejection::Weekend);
    }
    Ok(())
}

/// Boolean form of [`check_date`]
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    check_date(date, today).is_ok()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `days` consecutive dates starting at `from`, each marked selectable or not
pub fn month_view(from: NaiveDate, days: u32, today: NaiveDate) -> Vec<CalendarDay> {
    (0..days.min(MAX_CALENDAR_DAYS))
        .filter_map(|offset| from.checked_add_signed(Duration::days(i64::from(offset))))
        .map(|date| {
            let verdict = check_date(date, today);
            CalendarDay {
                date,
                weekday: date.format("%a").to_string(),
                selectable: verdict.is_ok(),
                reason: verdict.err(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_past_date_rejected() {
        let today = date("2026-10-19"); // Monday
        assert_eq!(
            check_date(date("2026-10-16"), today),
            Err(DateRejection::Past)
        );
        assert_eq!(
            check_date(date("2020-01-06"), today),
            Err(DateRejection::Past)
        );
    }

    #[test]
    fn test_weekend_rejected() {
        let today = date("2026-10-19");
        assert_eq!(
            check_date(date("2026-10-24"), today),
            Err(DateRejection::Weekend)
        );
        assert_eq!(
            check_date(date("2026-10-25"), today),
            Err(DateRejection::Weekend)
        );
    }

    #[test]
    fn test_today_and_future_weekdays_allowed() {
        let today = date("2026-10-19");
        assert!(is_selectable(today, today));
        assert!(is_selectable(date("2026-10-23"), today));
        assert!(is_selectable(date("2099-01-05"), today));
    }

    #[test]
    fn test_today_on_weekend() {
        let saturday = date("2026-10-24");
        assert_eq!(check_date(saturday, saturday), Err(DateRejection::Weekend));
    }

    #[test]
    fn test_month_view() {
        let today = date("2026-10-19");
        let view = month_view(date("2026-10-17"), 9, today);

        assert_eq!(view.len(), 9);
        assert_eq!(view[0].weekday, "Sat");
        assert_eq!(view[0].reason, Some(DateRejection::Past));
        assert_eq!(view[2].date, today);
        assert!(view[2].selectable);

        let selectable: Vec<_> = view.iter().filter(|d| d.selectable).map(|d| d.date).collect();
        assert_eq!(
            selectable,
            vec![
                date("2026-10-19"),
                date("2026-10-20"),
                date("2026-10-21"),
                date("2026-10-22"),
                date("2026-10-23"),
            ]
        );
    }

    #[test]
    fn test_month_view_clamped() {
        let today = date("2026-10-19");
        assert_eq!(month_view(today, 500, today).len(), MAX_CALENDAR_DAYS as usize);
        assert!(month_view(today, 0, today).is_empty());
    }
}
