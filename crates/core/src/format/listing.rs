use super::{separator, SUCCESS_MARKER};
use crate::listing::CalendarListing;

/// Render the calendar listing, one bullet per upstream entry.
pub fn format_listing(listing: &CalendarListing) -> String {
    let mut lines = vec![
        format!("{} Available Liturgical Calendars", SUCCESS_MARKER),
        separator(),
        String::new(),
        format!("🌍 NATIONAL CALENDARS ({}):", listing.national_calendars.len()),
    ];

    for calendar in &listing.national_calendars {
        lines.push(format!("  • {}", calendar.calendar_id));
        push_locales(&mut lines, &calendar.locales);
        push_settings(&mut lines, &calendar.settings);
    }
    lines.push(String::new());

    lines.push(format!(
        "⛪ DIOCESAN CALENDARS ({}):",
        listing.diocesan_calendars.len()
    ));
    for calendar in &listing.diocesan_calendars {
        if calendar.diocese.is_empty() {
            lines.push(format!("  • {}", calendar.calendar_id));
        } else {
            lines.push(format!("  • {}: {}", calendar.calendar_id, calendar.diocese));
        }
        if !calendar.nation.is_empty() {
            lines.push(format!("    Nation: {}", calendar.nation));
        }
        push_locales(&mut lines, &calendar.locales);
        push_settings(&mut lines, &calendar.settings);
    }
    lines.push(String::new());

    lines.push("🌐 GENERAL ROMAN CALENDAR LOCALES:".to_string());
    if listing.locales.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        lines.push(format!("  {}", listing.locales.join(", ")));
    }
    lines.push(separator());

    lines.join("\n")
}

fn push_locales(lines: &mut Vec<String>, locales: &[String]) {
    if !locales.is_empty() {
        lines.push(format!("    Locales: {}", locales.join(", ")));
    }
}

fn push_settings(lines: &mut Vec<String>, settings: &serde_json::Map<String, serde_json::Value>) {
    if settings.is_empty() {
        return;
    }
    let rendered: Vec<String> = settings
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => format!("{}={}", key, s),
            other => format!("{}={}", key, other),
        })
        .collect();
    lines.push(format!("    Settings: {}", rendered.join(", ")));
}
