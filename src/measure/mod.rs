//! Measurement module
//!
//! Ingredient and container catalogs plus the container-count converter.

pub mod converter;
pub mod units;

pub use converter::{
    calculate, container_count, format_count, parse_amount, result_label, ConversionError,
    ConversionRequest, ConversionResult,
};
pub use units::{
    container_volume_ml, density_of, find_container, find_ingredient, Container, Ingredient,
    Phase, CONTAINERS, DEFAULT_CONTAINER_ID, INGREDIENTS,
};
