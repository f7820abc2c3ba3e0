// Rendering of upstream payloads into annotated text blocks.
//
// Every function here is pure: the same document always renders to the same
// text, and events keep the order the upstream API sent them in.

mod calendar;
mod listing;
mod liturgy;
mod readings;

pub use calendar::format_calendar;
pub use listing::format_listing;
pub use liturgy::{celebrations_on, format_liturgy_of_the_day};
pub use readings::format_readings;

use crate::error::LitcalError;
use crate::types::{CalendarSettings, CalendarType, LiturgicalEvent};

/// Maximum number of event lines in a calendar block.
pub const MAX_EVENTS: usize = 50;

pub const SUCCESS_MARKER: &str = "✅";
pub const ERROR_MARKER: &str = "❌";
pub const EVENT_MARKER: &str = "📅";

pub(crate) fn separator() -> String {
    "=".repeat(60)
}

/// Render an error as the text block returned to the agent.
pub fn format_error(error: &LitcalError) -> String {
    let mut text = format!("{} Error [{}]: {}", ERROR_MARKER, error.kind(), error);

    if let LitcalError::UnknownCalendar {
        kind, available, ..
    } = error
    {
        let label = match kind {
            CalendarType::Diocesan => "dioceses",
            _ => "nations",
        };
        if available.is_empty() {
            text.push_str(&format!("\n💡 No {} are currently available", label));
        } else {
            text.push_str(&format!("\n💡 Available {}: {}", label, available.join(", ")));
        }
    }

    text
}

/// One-line summary of an event: date, name, grade, colors and season.
pub fn format_event_line(event: &LiturgicalEvent) -> String {
    let mut line = format!(
        "{} {} | {} | {} | {}",
        EVENT_MARKER,
        event.date,
        event.name,
        grade_text(event),
        color_text(event)
    );
    if let Some(season) = event.season() {
        line.push_str(" | ");
        line.push_str(season);
    }
    line
}

pub(crate) fn grade_text(event: &LiturgicalEvent) -> String {
    match event.grade_lcl.as_deref().filter(|g| !g.is_empty()) {
        Some(localized) if !localized.eq_ignore_ascii_case(event.grade.label()) => {
            format!("{} ({})", event.grade.label(), localized)
        }
        _ => event.grade.label().to_string(),
    }
}

pub(crate) fn color_text(event: &LiturgicalEvent) -> String {
    if !event.color.is_empty() {
        return event
            .color
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
    }
    if !event.color_lcl.is_empty() {
        return event.color_lcl.join(", ");
    }
    "N/A".to_string()
}

pub(crate) fn settings_lines(settings: &CalendarSettings) -> Vec<String> {
    let mut lines = vec![format!(
        "Locale: {}",
        settings.locale.as_deref().unwrap_or("N/A")
    )];
    if let Some(national) = settings.national_calendar.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("National Calendar: {}", national));
    }
    if let Some(diocesan) = settings.diocesan_calendar.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Diocesan Calendar: {}", diocesan));
    }
    lines
}
