//! Counseling Routes
//!
//! Calendar and booking form checks. Bookings are summarised, never stored.
//!
//! - GET /api/v1/counseling/calendar?from=&days= - Selectable dates
//! - GET /api/v1/counseling/counselors - Counselor list
//! - POST /api/v1/counseling/booking/check - Which selections are missing
//! - POST /api/v1/counseling/bookings - Submit a complete form

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use chrono::NaiveDate;

use crate::api::dto::{
    BookingCheckResponse, BookingRequest, BookingResponse, CalendarQuery, CalendarResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::booking::{self, counselors, month_view, BookingForm, Counselor, SessionType};

/// Days returned when the request does not say
const DEFAULT_CALENDAR_DAYS: u32 = 14;

/// GET /api/v1/counseling/calendar
pub async fn calendar(
    params: Result<Query<CalendarQuery>, QueryRejection>,
) -> ApiResult<Json<CalendarResponse>> {
    let Query(params) = params?;
    let today = booking::today();
    let from = match params.from.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => today,
    };
    let days = params.days.unwrap_or(DEFAULT_CALENDAR_DAYS);

    Ok(Json(CalendarResponse {
        today,
        from,
        days: month_view(from, days, today),
    }))
}

/// GET /api/v1/counseling/counselors
pub async fn list_counselors() -> Json<Vec<Counselor>> {
    Json(counselors())
}

/// POST /api/v1/counseling/booking/check
///
/// Apply whatever selections were sent and report what is still missing.
/// An invalid selection is rejected outright.
pub async fn check_booking(
    request: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<Json<BookingCheckResponse>> {
    let Json(request) = request?;
    let form = build_form(&request, booking::today(), &counselors())?;

    Ok(Json(BookingCheckResponse {
        can_submit: form.can_submit(),
        missing: form.missing(),
    }))
}

/// POST /api/v1/counseling/bookings
pub async fn submit_booking(
    request: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<Json<BookingResponse>> {
    let Json(request) = request?;
    let staff = counselors();
    let form = build_form(&request, booking::today(), &staff)?;
    let summary = form.submit(&staff)?;

    tracing::info!(
        date = %summary.date,
        time = %summary.time,
        session_type = %summary.session_type,
        counselor = %summary.counselor_id,
        "Booking confirmed"
    );

    Ok(Json(BookingResponse {
        status: "confirmed".to_string(),
        booking: summary,
    }))
}

fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

fn build_form(
    request: &BookingRequest,
    today: NaiveDate,
    staff: &[Counselor],
) -> ApiResult<BookingForm> {
    let mut form = BookingForm::new();

    if let Some(raw) = &request.date {
        form.select_date(parse_date(raw)?, today)?;
    }
    if let Some(time) = &request.time {
        form.select_time(time)?;
    }
    if let Some(raw) = &request.session_type {
        form.select_session_type(raw.parse::<SessionType>()?);
    }
    if let Some(id) = &request.counselor_id {
        form.select_counselor(staff, id)?;
    }
    if let Some(notes) = &request.notes {
        form.set_notes(notes);
    }

    Ok(form)
}
