// MCP (Model Context Protocol) server for the Liturgical Calendar API.
// Exposes calendar lookups as tools to agent clients over stdio.

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use server::McpServer;
