//! Booking form state
//!
//! Four independent selections. The submit control is enabled only when all
//! four are set; submitting produces a summary and nothing else, there is no
//! appointment store behind it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::calendar::check_date;
use super::counselors::{find_counselor, Counselor};
use super::error::{BookingError, BookingResult};

/// Fixed appointment times offered every bookable day
pub const TIME_SLOTS: [&str; 8] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
];

/// How the session is held
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    InPerson,
    Video,
    Phone,
}

impl SessionType {
    pub fn all() -> &'static [SessionType] {
        &[SessionType::InPerson, SessionType::Video, SessionType::Phone]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::InPerson => "In-Person",
            SessionType::Video => "Video Call",
            SessionType::Phone => "Phone Call",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SessionType::InPerson => "Face-to-face counseling",
            SessionType::Video => "Online video session",
            SessionType::Phone => "Voice-only consultation",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::InPerson => write!(f, "in-person"),
            SessionType::Video => write!(f, "video"),
            SessionType::Phone => write!(f, "phone"),
        }
    }
}

impl FromStr for SessionType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in-person" => Ok(SessionType::InPerson),
            "video" => Ok(SessionType::Video),
            "phone" => Ok(SessionType::Phone),
            other => Err(BookingError::UnknownSessionType(other.to_string())),
        }
    }
}

/// One of the four form selections
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Date,
    Time,
    SessionType,
    Counselor,
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingField::Date => write!(f, "date"),
            BookingField::Time => write!(f, "time"),
            BookingField::SessionType => write!(f, "session_type"),
            BookingField::Counselor => write!(f, "counselor"),
        }
    }
}

/// What a completed form describes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingSummary {
    pub date: NaiveDate,
    pub time: String,
    pub session_type: SessionType,
    pub counselor_id: String,
    pub counselor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Transient booking selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    date: Option<NaiveDate>,
    time: Option<String>,
    session_type: Option<SessionType>,
    counselor_id: Option<String>,
    /// Free-text "Additional Information"; never required
    notes: Option<String>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a date; past dates and weekends are refused
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> BookingResult<()> {
        check_date(date, today).map_err(|reason| BookingError::InvalidDate { date, reason })?;
        self.date = Some(date);
        Ok(())
    }

    /// Pick one of the fixed time slots
    pub fn select_time(&mut self, time: &str) -> BookingResult<()> {
        let slot = TIME_SLOTS
            .iter()
            .find(|slot| slot.eq_ignore_ascii_case(time.trim()))
            .ok_or_else(|| BookingError::UnknownTimeSlot(time.to_string()))?;
        self.time = Some((*slot).to_string());
        Ok(())
    }

    pub fn select_session_type(&mut self, session_type: SessionType) {
        self.session_type = Some(session_type);
    }

    /// Pick a counselor; unavailable counselors cannot be chosen
    pub fn select_counselor(&mut self, counselors: &[Counselor], id: &str) -> BookingResult<()> {
        let counselor = find_counselor(counselors, id)
            .ok_or_else(|| BookingError::CounselorNotFound(id.to_string()))?;
        if !counselor.available {
            return Err(BookingError::CounselorUnavailable(id.to_string()));
        }
        self.counselor_id = Some(counselor.id.clone());
        Ok(())
    }

    /// Set the optional notes. Blank text clears them.
    pub fn set_notes(&mut self, notes: &str) {
        let notes = notes.trim();
        self.notes = (!notes.is_empty()).then(|| notes.to_string());
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn session_type(&self) -> Option<SessionType> {
        self.session_type
    }

    pub fn counselor_id(&self) -> Option<&str> {
        self.counselor_id.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Selections that are still unset, in form order
    pub fn missing(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push(BookingField::Date);
        }
        if self.time.is_none() {
            missing.push(BookingField::Time);
        }
        if self.session_type.is_none() {
            missing.push(BookingField::SessionType);
        }
        if self.counselor_id.is_none() {
            missing.push(BookingField::Counselor);
        }
        missing
    }

    /// Whether the "Book Appointment" control is enabled
    pub fn can_submit(&self) -> bool {
        self.missing().is_empty()
    }

    /// Summarise a complete form. Nothing is stored.
    pub fn submit(&self, counselors: &[Counselor]) -> BookingResult<BookingSummary> {
        match (&self.date, &self.time, &self.session_type, &self.counselor_id) {
            (Some(date), Some(time), Some(session_type), Some(counselor_id)) => {
                let counselor_name = find_counselor(counselors, counselor_id)
                    .map(|c| c.name.clone())
                    .ok_or_else(|| BookingError::CounselorNotFound(counselor_id.clone()))?;

                Ok(BookingSummary {
                    date: *date,
                    time: time.clone(),
                    session_type: *session_type,
                    counselor_id: counselor_id.clone(),
                    counselor_name,
                    notes: self.notes.clone(),
                })
            }
            _ => Err(BookingError::Incomplete(self.missing())),
        }
    }
}
