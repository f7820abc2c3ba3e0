//! Transport layer for the Litcal SDK.

pub mod http;

pub use http::HttpTransport;
