//! Amount to container-count conversion
//!
//! Validates a request and turns a gram or milliliter amount into the number
//! of containers it fills.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{container_volume_ml, density_of, Phase, DEFAULT_CONTAINER_ID};

/// Why a request could not be converted.
///
/// The `Display` text is the label shown in place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionError {
    #[error("Invalid amount!")]
    InvalidAmount,

    #[error("No measurement selected!")]
    NoContainerSelected,

    #[error("No ingredient selected!")]
    NoIngredientSelected,
}

/// Formatted container count, or the reason there is none
pub type ConversionResult = Result<String, ConversionError>;

/// One calculation's inputs, assembled fresh each time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Raw amount text, grams when solid, milliliters when liquid
    pub amount: String,
    #[serde(default)]
    pub phase: Phase,
    /// Only consulted when solid
    #[serde(default)]
    pub ingredient_id: Option<String>,
    #[serde(default = "default_container_id")]
    pub container_id: String,
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            amount: String::new(),
            phase: Phase::default(),
            ingredient_id: None,
            container_id: default_container_id(),
        }
    }
}

impl ConversionRequest {
    pub fn liquid(amount: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            phase: Phase::Liquid,
            ingredient_id: None,
            container_id: container_id.into(),
        }
    }

    pub fn solid(
        amount: impl Into<String>,
        ingredient_id: Option<&str>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            phase: Phase::Solid,
            ingredient_id: ingredient_id.map(str::to_string),
            container_id: container_id.into(),
        }
    }
}

/// Parse the amount field.
///
/// Empty text, unparseable text, NaN and zero are all rejected. Negative and
/// infinite values are accepted.
pub fn parse_amount(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidAmount);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidAmount)?;

    if value.is_nan() || value == 0.0 {
        return Err(ConversionError::InvalidAmount);
    }

    Ok(value)
}

/// Validate a request and compute the raw container count.
///
/// Checks run in order and stop at the first failure: amount, container,
/// ingredient.
pub fn container_count(request: &ConversionRequest) -> Result<f64, ConversionError> {
    let amount = parse_amount(&request.amount)?;

    let volume_ml =
        container_volume_ml(&request.container_id).ok_or(ConversionError::NoContainerSelected)?;

    match request.phase {
        Phase::Solid => {
            let density = request
                .ingredient_id
                .as_deref()
                .and_then(density_of)
                .ok_or(ConversionError::NoIngredientSelected)?;
            Ok((amount / density) / volume_ml)
        }
        Phase::Liquid => Ok(amount / volume_ml),
    }
}

/// Run a full calculation: validate, convert, format
pub fn calculate(request: &ConversionRequest) -> ConversionResult {
    container_count(request).map(format_count)
}

/// Text shown for a result, either the count or the error label
pub fn result_label(result: &ConversionResult) -> String {
    match result {
        Ok(count) => count.clone(),
        Err(e) => e.to_string(),
    }
}

/// Format a count with exactly one fractional digit.
///
/// Rounds the exact binary value to nearest. Exact midpoints, which in binary
/// are the odd multiples of 0.25, round away from zero.
pub fn format_count(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format_midpoint(value);
    }

    format!("{:.1}", value)
}

/// Round an odd multiple of 0.25 away from zero.
///
/// Works on the integer and fractional parts separately, since `value * 10.0`
/// is no longer exact once |value| reaches 2^49. The fraction is 0.25 or 0.75,
/// so the rounded digit is 3 or 8 and never carries.
fn format_midpoint(value: f64) -> String {
    let whole = value.trunc();
    let digit = if (value - whole).abs() == 0.25 { 3 } else { 8 };
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{:.0}.{}", sign, whole.abs(), digit)
}
