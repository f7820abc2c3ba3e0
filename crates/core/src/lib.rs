// Core types and functionality for the Liturgical Calendar MCP server

pub mod error;
pub mod format;
pub mod listing;
pub mod types;
pub mod validation;

pub use error::{LitcalError, LitcalResult};
pub use listing::{CalendarListing, DiocesanCalendarInfo, NationalCalendarInfo};
pub use types::*;
