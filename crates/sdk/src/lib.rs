//! # Litcal SDK
//!
//! Async client for the Liturgical Calendar API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use litcal_sdk::{ApiResult, LitcalClient};
//! use litcal_sdk::{CalendarRequest, CalendarTarget, Locale};
//!
//! #[tokio::main]
//! async fn main() -> ApiResult<()> {
//!     let client = LitcalClient::builder().build()?;
//!
//!     // Which calendars exist?
//!     let listing = client.calendars().list().await?;
//!     println!("{} national calendars", listing.national_calendars.len());
//!
//!     // The General Roman Calendar for 2025
//!     let request = CalendarRequest::new(CalendarTarget::General, 2025, Locale::default());
//!     let calendar = client.calendars().fetch(&request).await?;
//!     println!("{} events", calendar.litcal.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Every call makes exactly one HTTP request; failures are never retried.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{LitcalClient, LitcalClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult};

// Re-export core types for convenience
pub use litcal_core::{
    listing::{CalendarListing, DiocesanCalendarInfo, NationalCalendarInfo},
    types::{CalendarRequest, CalendarResponse, CalendarTarget, Locale, TransferFlags},
};
