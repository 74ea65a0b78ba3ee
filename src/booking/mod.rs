//! Counseling Booking
//!
//! - **calendar**: which dates can be booked
//! - **form**: the four-part booking selection and its submit gate
//! - **counselors**: staff list, upcoming sessions, crisis lines
//! - **error**: `BookingError`, `DateRejection`

pub mod calendar;
pub mod counselors;
pub mod error;
pub mod form;

pub use calendar::{check_date, is_selectable, month_view, today, CalendarDay, MAX_CALENDAR_DAYS};
pub use counselors::{
    counselors, crisis_lines, find_counselor, upcoming_appointments, Counselor, CrisisLine,
    UpcomingAppointment,
};
pub use error::{BookingError, BookingResult, DateRejection};
pub use form::{BookingField, BookingForm, BookingSummary, SessionType, TIME_SLOTS};
