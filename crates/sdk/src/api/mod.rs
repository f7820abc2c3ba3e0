//! API endpoint groups.

mod calendars;

pub use calendars::CalendarsApi;
