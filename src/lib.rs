//! CupCount Library
//!
//! Converts a mass or volume of a baking ingredient into a count of bottle
//! caps, shot glasses or plastic cups.

pub mod build_info;
pub mod mcp;
pub mod measure;
pub mod models;
pub mod tools;
