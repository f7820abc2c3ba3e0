use chrono::{Datelike, NaiveDate};

use super::readings::format_readings;
use super::{color_text, grade_text, separator, settings_lines, EVENT_MARKER, SUCCESS_MARKER};
use crate::error::{LitcalError, LitcalResult};
use crate::types::{CalendarResponse, CalendarTarget, LiturgicalEvent};

/// Celebrations of a calendar that fall on `day`, in upstream order.
pub fn celebrations_on(response: &CalendarResponse, day: NaiveDate) -> Vec<&LiturgicalEvent> {
    response.litcal.iter().filter(|e| e.falls_on(day)).collect()
}

/// Render the celebrations of a single day with their readings.
///
/// Fails with `NoCelebrations` when the calendar has nothing on that day.
pub fn format_liturgy_of_the_day(
    target: &CalendarTarget,
    day: NaiveDate,
    response: &CalendarResponse,
) -> LitcalResult<String> {
    let celebrations = celebrations_on(response, day);
    if celebrations.is_empty() {
        return Err(LitcalError::NoCelebrations {
            date: day.format("%B %d, %Y").to_string(),
        });
    }

    let mut lines = vec![
        format!(
            "{} Liturgy of the Day: {}",
            SUCCESS_MARKER,
            day.format("%A, %B %d, %Y")
        ),
        separator(),
        format!("Calendar: {}", target.title(day.year())),
    ];
    lines.extend(settings_lines(&response.settings));
    lines.push(separator());

    for celebration in celebrations {
        lines.extend(celebration_block(celebration));
        lines.push(String::new());
    }
    lines.push(separator());

    Ok(lines.join("\n"))
}

fn celebration_block(event: &LiturgicalEvent) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", EVENT_MARKER, event.name),
        format!("   Grade: {}", grade_text(event)),
        format!("   Color: {}", color_text(event)),
    ];

    if let Some(season) = event.season() {
        lines.push(format!("   Season: {}", season));
    }
    if !event.common.is_empty() {
        let common = event
            .common_lcl
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| event.common.join(", "));
        lines.push(format!("   Common: {}", common));
    }
    if let Some(year) = event.liturgical_year.as_deref().filter(|y| !y.is_empty()) {
        lines.push(format!("   Liturgical Year: {}", year));
    }
    if event.is_vigil_mass {
        lines.push("   Vigil Mass".to_string());
    }
    if event.holy_day_of_obligation {
        lines.push("   Holy Day of Obligation".to_string());
    }
    if let Some(readings) = &event.readings {
        lines.extend(format_readings(readings));
    }

    lines
}
