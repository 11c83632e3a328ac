use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::domain::{ExperienceEnd, ExperienceRecord, ExperienceSubmission, Requirement};

/// End markers (compared trimmed and case-insensitively) meaning "still working there".
pub const ONGOING_MARKERS: [&str; 5] = ["now", "現在", "継続中", "現在継続中", ""];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which of the two submitted dates failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => f.write_str("start"),
            DateField::End => f.write_str("end"),
        }
    }
}

/// Validation failures raised while accepting an experience interval.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceViolation {
    #[error("facilities without an installation filing do not count as experience")]
    UnreportedFacility,
    #[error("facility name is required")]
    MissingFacility,
    #[error("{field} date '{value}' is not a valid YYYY-MM-DD date")]
    MalformedDate { field: DateField, value: String },
    #[error("start date {start} is in the future")]
    FutureStartDate { start: NaiveDate },
    #[error("end date {end} is in the future")]
    FutureEndDate { end: NaiveDate },
    #[error("end date {end} must come after start date {start}")]
    NonPositiveInterval { start: NaiveDate, end: NaiveDate },
    #[error("period {start} to {end} is shorter than one month")]
    IntervalTooShort { start: NaiveDate, end: NaiveDate },
}

impl ExperienceViolation {
    pub fn kind(&self) -> &'static str {
        match self {
            ExperienceViolation::UnreportedFacility => "unreported_facility",
            ExperienceViolation::MissingFacility => "missing_facility",
            ExperienceViolation::MalformedDate { .. } => "malformed_date",
            ExperienceViolation::FutureStartDate { .. } => "future_start_date",
            ExperienceViolation::FutureEndDate { .. } => "future_end_date",
            ExperienceViolation::NonPositiveInterval { .. } => "non_positive_interval",
            ExperienceViolation::IntervalTooShort { .. } => "interval_too_short",
        }
    }
}

/// Turns raw submissions into category-tagged experience records.
///
/// Validation is pure: `today` is supplied by the caller and nothing is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceValidator;

impl ExperienceValidator {
    pub fn validate(
        &self,
        submission: ExperienceSubmission,
        requirement: &Requirement,
        today: NaiveDate,
    ) -> Result<ExperienceRecord, ExperienceViolation> {
        if !submission.reporting_compliant {
            return Err(ExperienceViolation::UnreportedFacility);
        }

        let facility_name = submission.facility_name.trim();
        if facility_name.is_empty() {
            return Err(ExperienceViolation::MissingFacility);
        }

        let start = parse_date(&submission.start_date, DateField::Start)?;
        let end = if is_ongoing_marker(&submission.end_marker) {
            ExperienceEnd::Ongoing { as_of: today }
        } else {
            ExperienceEnd::Dated {
                date: parse_date(&submission.end_marker, DateField::End)?,
            }
        };
        let end_date = end.effective_date();

        if start > today {
            return Err(ExperienceViolation::FutureStartDate { start });
        }
        if end_date > today {
            return Err(ExperienceViolation::FutureEndDate { end: end_date });
        }
        if start >= end_date {
            return Err(ExperienceViolation::NonPositiveInterval {
                start,
                end: end_date,
            });
        }

        let duration_months = elapsed_months(start, end_date);
        if duration_months == 0 {
            return Err(ExperienceViolation::IntervalTooShort {
                start,
                end: end_date,
            });
        }

        Ok(ExperienceRecord::new(
            facility_name.to_string(),
            start,
            end,
            duration_months,
            requirement.exam_category().experience_category(),
        ))
    }
}

pub fn is_ongoing_marker(raw: &str) -> bool {
    let marker = raw.trim();
    ONGOING_MARKERS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(marker))
}

/// Full calendar months between two dates, dropping any partial trailing month.
///
/// A month counts once the start day recurs; start days past the end of a shorter
/// month are clamped to that month's last day.
pub fn elapsed_months(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if span <= 0 {
        return 0;
    }

    let span = span.unsigned_abs();
    match start.checked_add_months(Months::new(span)) {
        Some(anniversary) if anniversary <= end => span,
        _ => span - 1,
    }
}

/// Parses `YYYY-MM-DD`; the year must be exactly four digits, month and day may be unpadded.
fn parse_date(raw: &str, field: DateField) -> Result<NaiveDate, ExperienceViolation> {
    let malformed = || ExperienceViolation::MalformedDate {
        field,
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let year = trimmed.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| malformed())
}
