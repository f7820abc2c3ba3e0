// Syntactic validation of tool arguments.
//
// Everything here runs before any network traffic. Checks against the set of
// calendars known upstream live next to the client, since they need a listing.

use chrono::{Datelike, NaiveDate};

use crate::error::{LitcalError, LitcalResult};
use crate::types::{
    CalendarTarget, CalendarType, DioceseId, Locale, NationCode, DEFAULT_LOCALE, MAX_YEAR,
    MIN_YEAR,
};

/// Expected format of date arguments.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve an optional year against an explicit fallback.
pub fn resolve_year(year: Option<i64>, fallback: i32) -> LitcalResult<i32> {
    let year = match year {
        Some(year) => year,
        None => return Ok(fallback),
    };

    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(LitcalError::invalid_parameter(
            "year",
            format!(
                "{} is out of range, year must be between {} and {}",
                year, MIN_YEAR, MAX_YEAR
            ),
        ));
    }

    Ok(year as i32)
}

/// Parse a year given as a string of digits.
pub fn parse_year_text(text: &str) -> LitcalResult<Option<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| LitcalError::invalid_parameter("year", format!("`{}` is not a year", text)))
}

/// Validate and normalize a nation code (`ca` becomes `CA`).
pub fn parse_nation(nation: &str) -> LitcalResult<NationCode> {
    let normalized = nation.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(LitcalError::invalid_parameter("nation", "nation code is required"));
    }
    if normalized.len() != 2 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(LitcalError::invalid_parameter(
            "nation",
            format!("`{}` is not a two-letter nation code", nation.trim()),
        ));
    }
    Ok(NationCode(normalized))
}

/// Validate and normalize a diocese identifier (`RomaMo_IT` becomes `romamo_it`).
pub fn parse_diocese(diocese: &str) -> LitcalResult<DioceseId> {
    let normalized = diocese.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(LitcalError::invalid_parameter("diocese", "diocese id is required"));
    }
    let well_formed = normalized
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && normalized.starts_with(|c: char| c.is_ascii_lowercase());
    if !well_formed {
        return Err(LitcalError::invalid_parameter(
            "diocese",
            format!(
                "`{}` is not a diocese id (lowercase letters, digits and underscores)",
                diocese.trim()
            ),
        ));
    }
    Ok(DioceseId(normalized))
}

/// Validate and normalize a locale, defaulting to `en`.
///
/// Accepts `ll`, `lll`, `ll_RR` and `ll-RR`; the language is lowercased and
/// the region uppercased.
pub fn parse_locale(locale: Option<&str>) -> LitcalResult<Locale> {
    let raw = match locale.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Locale(DEFAULT_LOCALE.to_string())),
    };

    let normalized = raw.replace('-', "_");
    let mut parts = normalized.splitn(2, '_');
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);

    let language_ok = (2..=3).contains(&language.len())
        && language.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = region
        .as_deref()
        .map_or(true, |r| r.len() == 2 && r.chars().all(|c| c.is_ascii_uppercase()));

    if !language_ok || !region_ok {
        return Err(LitcalError::invalid_parameter(
            "locale",
            format!("`{}` is not a locale code such as `en` or `fr_CA`", raw),
        ));
    }

    Ok(Locale(match region {
        Some(region) => format!("{}_{}", language, region),
        None => language,
    }))
}

/// Parse an ISO date against an explicit fallback.
pub fn resolve_date(date: Option<&str>, fallback: NaiveDate) -> LitcalResult<NaiveDate> {
    let raw = match date.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(fallback),
    };

    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        LitcalError::invalid_parameter(
            "date",
            format!("`{}` is not a date, expected YYYY-MM-DD", raw),
        )
    })?;

    resolve_year(Some(i64::from(parsed.year())), parsed.year()).map_err(|_| {
        LitcalError::invalid_parameter(
            "date",
            format!("year of `{}` must be between {} and {}", raw, MIN_YEAR, MAX_YEAR),
        )
    })?;

    Ok(parsed)
}

/// Build a calendar target from a type and an optional identifier.
///
/// The identifier is ignored for the general calendar and required otherwise.
pub fn parse_target(
    calendar_type: CalendarType,
    calendar_id: Option<&str>,
) -> LitcalResult<CalendarTarget> {
    let id = calendar_id.map(str::trim).filter(|id| !id.is_empty());

    match calendar_type {
        CalendarType::General => Ok(CalendarTarget::General),
        CalendarType::National => {
            let id = id.ok_or_else(|| {
                LitcalError::invalid_parameter(
                    "calendar_id",
                    "a nation code is required for national calendars",
                )
            })?;
            parse_nation(id)
                .map(CalendarTarget::National)
                .map_err(|e| rename_parameter(e, "calendar_id"))
        }
        CalendarType::Diocesan => {
            let id = id.ok_or_else(|| {
                LitcalError::invalid_parameter(
                    "calendar_id",
                    "a diocese id is required for diocesan calendars",
                )
            })?;
            parse_diocese(id)
                .map(CalendarTarget::Diocesan)
                .map_err(|e| rename_parameter(e, "calendar_id"))
        }
    }
}

fn rename_parameter(error: LitcalError, name: &str) -> LitcalError {
    match error {
        LitcalError::InvalidParameter { reason, .. } => LitcalError::invalid_parameter(name, reason),
        other => other,
    }
}
