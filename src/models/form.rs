//! Screen form model
//!
//! Holds the calculator screen's controlled inputs and the displayed result.
//! Each calculation snapshots the inputs into a fresh `ConversionRequest`.

use serde::Serialize;
use thiserror::Error;

use crate::measure::{
    calculate, find_container, find_ingredient, result_label, ConversionRequest,
    ConversionResult, Phase, DEFAULT_CONTAINER_ID,
};

/// Form selection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    #[error("Ingredient selection is disabled while the phase is liquid")]
    IngredientDisabled,
}

/// Current state of the calculator screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub phase: Phase,
    /// Kept while liquid, but only read when solid
    pub ingredient: Option<String>,
    pub container: String,
    pub amount: String,
    /// Last displayed result, empty until the first calculation
    pub result: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            phase: Phase::default(),
            ingredient: None,
            container: DEFAULT_CONTAINER_ID.to_string(),
            amount: String::new(),
            result: String::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between solid and liquid, returning the new phase
    pub fn toggle_phase(&mut self) -> Phase {
        self.set_phase(self.phase.toggled());
        self.phase
    }

    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::info!("Phase changed to {}", phase.as_str());
        }
        self.phase = phase;
    }

    /// Select an ingredient by id or label. Stores the canonical id.
    ///
    /// Only allowed while solid, matching the disabled dropdown.
    pub fn select_ingredient(&mut self, key: &str) -> Result<&'static str, FormError> {
        if !self.ingredient_enabled() {
            return Err(FormError::IngredientDisabled);
        }
        let ingredient =
            find_ingredient(key).ok_or_else(|| FormError::UnknownIngredient(key.to_string()))?;
        self.ingredient = Some(ingredient.id.to_string());
        tracing::info!("Ingredient selected: {}", ingredient.id);
        Ok(ingredient.id)
    }

    pub fn clear_ingredient(&mut self) {
        self.ingredient = None;
    }

    /// Select a container by id, alias or label. The previous selection is
    /// kept if the key is unknown.
    pub fn select_container(&mut self, key: &str) -> Result<&'static str, FormError> {
        let container =
            find_container(key).ok_or_else(|| FormError::UnknownContainer(key.to_string()))?;
        self.container = container.id.to_string();
        tracing::info!("Container selected: {}", container.id);
        Ok(container.id)
    }

    /// Store the amount text as typed
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
    }

    /// Whether the ingredient dropdown accepts input
    pub fn ingredient_enabled(&self) -> bool {
        self.phase == Phase::Solid
    }

    /// Hint shown in the empty amount field
    pub fn amount_placeholder(&self) -> String {
        format!("Enter Number ({})", self.phase.input_unit())
    }

    /// Snapshot the current inputs
    pub fn to_request(&self) -> ConversionRequest {
        ConversionRequest {
            amount: self.amount.clone(),
            phase: self.phase,
            ingredient_id: self.ingredient.clone(),
            container_id: self.container.clone(),
        }
    }

    /// Run the converter on the current inputs and replace the displayed result.
    ///
    /// Returns the request that was computed alongside its result.
    pub fn calculate(&mut self) -> (ConversionRequest, ConversionResult) {
        let request = self.to_request();
        let result = calculate(&request);
        self.result = result_label(&result);
        tracing::debug!(
            "Calculated {:?} {} in {} -> {}",
            request.amount,
            request.phase.input_unit(),
            request.container_id,
            self.result
        );
        (request, result)
    }

    /// Back to the defaults, clearing the result
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::ConversionError;

    #[test]
    fn test_defaults() {
        let form = FormState::new();
        assert_eq!(form.phase, Phase::Liquid);
        assert_eq!(form.container, "option1");
        assert_eq!(form.ingredient, None);
        assert!(form.result.is_empty());
        assert!(!form.ingredient_enabled());
        assert_eq!(form.amount_placeholder(), "Enter Number (ml)");
    }

    #[test]
    fn test_toggle_phase() {
        let mut form = FormState::new();
        assert_eq!(form.toggle_phase(), Phase::Solid);
        assert!(form.ingredient_enabled());
        assert_eq!(form.amount_placeholder(), "Enter Number (g)");
        assert_eq!(form.toggle_phase(), Phase::Liquid);
    }

    #[test]
    fn test_liquid_calculation() {
        let mut form = FormState::new();
        form.set_amount("25");
        assert_eq!(form.calculate().1, Ok("5.0".to_string()));
        assert_eq!(form.result, "5.0");
    }

    #[test]
    fn test_solid_calculation() {
        let mut form = FormState::new();
        form.toggle_phase();
        form.select_ingredient("sugar").unwrap();
        form.select_container("option2").unwrap();
        form.set_amount("34");
        form.calculate().1.unwrap();
        assert_eq!(form.result, "1.0");
    }

    #[test]
    fn test_solid_without_ingredient() {
        let mut form = FormState::new();
        form.set_phase(Phase::Solid);
        form.select_container("option3").unwrap();
        form.set_amount("10");
        assert_eq!(form.calculate().1, Err(ConversionError::NoIngredientSelected));
        assert_eq!(form.result, "No ingredient selected!");
    }

    #[test]
    fn test_back_to_liquid_ignores_ingredient() {
        let mut form = FormState::new();
        form.set_phase(Phase::Solid);
        form.select_ingredient("flour").unwrap();
        form.set_phase(Phase::Liquid);
        form.set_amount("10");
        assert_eq!(form.calculate().1, Ok("2.0".to_string()));
        // Selection survives for the next time solid is chosen
        assert_eq!(form.ingredient.as_deref(), Some("flour"));
    }

    #[test]
    fn test_result_replaced_each_calculation() {
        let mut form = FormState::new();
        form.set_amount("25");
        form.calculate().1.unwrap();
        form.set_amount("abc");
        assert!(form.calculate().1.is_err());
        assert_eq!(form.result, "Invalid amount!");
        form.set_amount("0");
        form.calculate().1.unwrap_err();
        assert_eq!(form.result, "Invalid amount!");
    }

    #[test]
    fn test_ingredient_disabled_while_liquid() {
        let mut form = FormState::new();
        assert_eq!(form.select_ingredient("sugar"), Err(FormError::IngredientDisabled));
        assert_eq!(form.ingredient, None);

        form.set_phase(Phase::Solid);
        assert_eq!(form.select_ingredient("sugar"), Ok("sugar"));
    }

    #[test]
    fn test_calculate_returns_computed_request() {
        let mut form = FormState::new();
        form.set_phase(Phase::Solid);
        form.select_ingredient("sugar").unwrap();
        form.select_container("option2").unwrap();
        form.set_amount("34");
        let (request, result) = form.calculate();
        assert_eq!(request, form.to_request());
        assert_eq!(request.amount, "34");
        assert_eq!(request.ingredient_id.as_deref(), Some("sugar"));
        assert_eq!(result, Ok("1.0".to_string()));
    }

    #[test]
    fn test_unknown_selections_rejected() {
        let mut form = FormState::new();
        form.set_phase(Phase::Solid);
        assert_eq!(
            form.select_ingredient("salt"),
            Err(FormError::UnknownIngredient("salt".to_string()))
        );
        assert_eq!(form.ingredient, None);

        form.select_container("option3").unwrap();
        assert!(form.select_container("bucket").is_err());
        assert_eq!(form.container, "option3");
    }

    #[test]
    fn test_selection_stores_canonical_ids() {
        let mut form = FormState::new();
        form.set_phase(Phase::Solid);
        assert_eq!(form.select_ingredient("Butter"), Ok("butter"));
        assert_eq!(form.select_container("shot-glass"), Ok("option2"));
        assert_eq!(form.to_request().container_id, "option2");
        assert_eq!(form.to_request().ingredient_id.as_deref(), Some("butter"));
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::new();
        form.toggle_phase();
        form.select_ingredient("yeast").unwrap();
        form.set_amount("12");
        form.calculate().1.unwrap();
        form.reset();
        assert_eq!(form, FormState::default());
    }
}
