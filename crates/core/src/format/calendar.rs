use super::{format_event_line, separator, settings_lines, MAX_EVENTS, SUCCESS_MARKER};
use crate::types::{CalendarResponse, CalendarTarget, LectionaryCycles, LiturgicalEvent};

/// Season boundaries, by event key. Epiphany is listed without a heading.
const SEASON_MARKERS: &[(&str, Option<&str>)] = &[
    ("Advent1", Some("Start of the Advent season")),
    ("Christmas", Some("Start of the Christmas season")),
    ("Epiphany", None),
    (
        "BaptismOfTheLord",
        Some("End of the Christmas season and start of Ordinary Time"),
    ),
    ("AshWednesday", Some("Start of the Lent season")),
    ("HolyThursday", Some("Start of the Easter Triduum")),
    ("Easter", Some("Start of the Easter season")),
    (
        "Pentecost",
        Some("End of the Easter season and start of Ordinary Time"),
    ),
    ("ChristKing", Some("Last Sunday of Ordinary Time")),
    ("OrdWeekday34Saturday", Some("Last day of the liturgical year")),
];

/// Render a whole calendar.
///
/// Only the first [`MAX_EVENTS`] events get a line; a longer list ends with a
/// note carrying the real total. The summary sections after the list are
/// drawn from every event.
pub fn format_calendar(target: &CalendarTarget, year: i32, response: &CalendarResponse) -> String {
    let events = &response.litcal;
    let mut lines = vec![
        format!("{} {}", SUCCESS_MARKER, target.title(year)),
        separator(),
    ];

    lines.extend(settings_lines(&response.settings));
    lines.push(separator());

    lines.extend(events.iter().take(MAX_EVENTS).map(format_event_line));
    if events.len() > MAX_EVENTS {
        lines.push(format!(
            "… showing the first {} of {} events (list truncated)",
            MAX_EVENTS,
            events.len()
        ));
    }

    lines.push(separator());
    lines.extend(holy_day_lines(events));
    lines.push(separator());
    lines.extend(season_lines(events));

    let particular = particular_lines(events);
    if !particular.is_empty() {
        lines.push(separator());
        lines.extend(particular);
    }

    let cycles = LectionaryCycles::for_year(response.settings.year.unwrap_or(year));
    lines.push(separator());
    lines.push(format!("Total events: {}", events.len()));
    lines.push(format!("Festive Lectionary cycle: YEAR {}", cycles.festive));
    lines.push(format!("Ferial Lectionary cycle: YEAR {}", cycles.ferial));

    lines.join("\n")
}

fn holy_day_lines(events: &[LiturgicalEvent]) -> Vec<String> {
    let mut lines = vec!["## Holy Days of Obligation".to_string()];
    let holy_days: Vec<String> = events
        .iter()
        .filter(|e| e.holy_day_of_obligation && !e.is_vigil_mass)
        .map(format_event_line)
        .collect();
    if holy_days.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(holy_days);
    lines
}

fn season_lines(events: &[LiturgicalEvent]) -> Vec<String> {
    let mut lines = vec!["## Start and end of liturgical seasons".to_string()];
    for (key, heading) in SEASON_MARKERS {
        let Some(event) = events
            .iter()
            .find(|e| e.event_key == *key && !e.is_vigil_mass)
        else {
            continue;
        };
        if let Some(heading) = heading {
            lines.push(format!("### {}", heading));
        }
        lines.push(format_event_line(event));
    }
    lines
}

/// Empty unless the upstream marks some events as particular to the calendar.
fn particular_lines(events: &[LiturgicalEvent]) -> Vec<String> {
    let particular: Vec<String> = events
        .iter()
        .filter(|e| e.is_particular && !e.is_vigil_mass)
        .map(format_event_line)
        .collect();
    if particular.is_empty() {
        return particular;
    }
    let mut lines = vec!["## Celebrations particular to this calendar".to_string()];
    lines.extend(particular);
    lines
}
