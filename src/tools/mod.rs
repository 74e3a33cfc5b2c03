//! CupCount Tools module
//!
//! MCP tool implementations for the calculator screen.

pub mod calculator;
pub mod links;
pub mod status;
