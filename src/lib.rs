//! Terminal client for the Hacker News search API.
//!
//! The search state lives in [`app::App`]: a bounded history of distinct
//! searches ([`history`]), the accumulated stories with their fetch flags
//! ([`stories`]), and the fetch cycles that connect them to the network
//! ([`search`]). [`repl`] drives it from stdin.

pub mod app;
pub mod config;
pub mod history;
pub mod logging;
pub mod output;
pub mod repl;
pub mod request;
pub mod search;
pub mod sort;
pub mod store;
pub mod stories;
