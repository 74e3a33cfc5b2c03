//! Calculator Tools
//!
//! Response shapes and helpers behind the calculation and catalog tools.

use serde::Serialize;

use crate::measure::{
    calculate, find_container, ConversionError, ConversionRequest, ConversionResult, Container,
    Ingredient, Phase, CONTAINERS, DEFAULT_CONTAINER_ID, INGREDIENTS,
};
use crate::models::FormState;

/// Response for calculate and convert
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    /// Text to display, the count or the error label
    pub result: String,
    /// Count rounded to one decimal, absent on error
    pub containers: Option<String>,
    pub error: Option<ConversionError>,
    pub request: ConversionRequest,
    pub container_label: Option<&'static str>,
    pub calculated_at: String,
}

impl CalculateResponse {
    pub fn new(request: ConversionRequest, result: ConversionResult) -> Self {
        let container_label = find_container(&request.container_id).map(|c| c.label);
        let (success, result, containers, error) = match result {
            Ok(count) => (true, count.clone(), Some(count), None),
            Err(e) => (false, e.to_string(), None, Some(e)),
        };
        Self {
            success,
            result,
            containers,
            error,
            request,
            container_label,
            calculated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Stateless one-shot conversion
pub fn convert(request: ConversionRequest) -> CalculateResponse {
    let result = calculate(&request);
    CalculateResponse::new(request, result)
}

/// Calculate from the screen form, updating its displayed result
pub fn calculate_form(form: &mut FormState) -> CalculateResponse {
    let (request, result) = form.calculate();
    CalculateResponse::new(request, result)
}

/// View of the screen form for get_form and the setter tools
#[derive(Debug, Serialize)]
pub struct FormView {
    pub phase: Phase,
    pub phase_label: &'static str,
    pub input_unit: &'static str,
    pub amount: String,
    pub amount_placeholder: String,
    pub ingredient: Option<String>,
    pub ingredient_enabled: bool,
    pub container: String,
    pub container_label: Option<&'static str>,
    pub result: String,
}

impl From<&FormState> for FormView {
    fn from(form: &FormState) -> Self {
        Self {
            phase: form.phase,
            phase_label: form.phase.label(),
            input_unit: form.phase.input_unit(),
            amount: form.amount.clone(),
            amount_placeholder: form.amount_placeholder(),
            ingredient: form.ingredient.clone(),
            ingredient_enabled: form.ingredient_enabled(),
            container: form.container.clone(),
            container_label: find_container(&form.container).map(|c| c.label),
            result: form.result.clone(),
        }
    }
}

/// Response for list_ingredients
#[derive(Debug, Serialize)]
pub struct ListIngredientsResponse {
    pub items: Vec<Ingredient>,
    pub total: usize,
}

/// Response for list_containers
#[derive(Debug, Serialize)]
pub struct ListContainersResponse {
    pub items: Vec<Container>,
    pub default: &'static str,
    pub total: usize,
}

pub fn list_ingredients() -> ListIngredientsResponse {
    ListIngredientsResponse {
        items: INGREDIENTS.to_vec(),
        total: INGREDIENTS.len(),
    }
}

pub fn list_containers() -> ListContainersResponse {
    ListContainersResponse {
        items: CONTAINERS.to_vec(),
        default: DEFAULT_CONTAINER_ID,
        total: CONTAINERS.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_success() {
        let response = convert(ConversionRequest::liquid("25", "option1"));
        assert!(response.success);
        assert_eq!(response.result, "5.0");
        assert_eq!(response.containers.as_deref(), Some("5.0"));
        assert_eq!(response.container_label, Some("Bottle Cap"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_convert_failure_serializes_error() {
        let response = convert(ConversionRequest::solid("10", None, "option3"));
        assert!(!response.success);
        assert_eq!(response.result, "No ingredient selected!");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "no_ingredient_selected");
        assert_eq!(json["request"]["phase"], "solid");
        assert!(json["containers"].is_null());
    }

    #[test]
    fn test_calculate_form_updates_result() {
        let mut form = FormState::new();
        form.set_amount("abc");
        let response = calculate_form(&mut form);
        assert_eq!(response.result, "Invalid amount!");
        assert_eq!(form.result, "Invalid amount!");
        assert_eq!(response.request.amount, "abc");
    }

    #[test]
    fn test_calculate_form_reports_computed_request() {
        let mut form = FormState::new();
        form.select_container("plastic-cup").unwrap();
        form.set_amount("400");
        let response = calculate_form(&mut form);
        assert_eq!(response.request, form.to_request());
        assert_eq!(response.request.container_id, "option3");
        assert_eq!(response.container_label, Some("Plastic Cup"));
        assert_eq!(response.result, "2.0");
    }

    #[test]
    fn test_form_view() {
        let mut form = FormState::new();
        form.toggle_phase();
        let view = FormView::from(&form);
        assert_eq!(view.phase_label, "Solid");
        assert_eq!(view.input_unit, "g");
        assert!(view.ingredient_enabled);
        assert_eq!(view.container_label, Some("Bottle Cap"));
    }

    #[test]
    fn test_catalog_listings() {
        let ingredients = list_ingredients();
        assert_eq!(ingredients.total, 4);
        assert_eq!(ingredients.items[0].label, "Sugar");

        let containers = list_containers();
        assert_eq!(containers.total, 3);
        assert_eq!(containers.default, "option1");
        let json = serde_json::to_value(&containers).unwrap();
        assert_eq!(json["items"][1]["volume_ml"], 40.0);
    }
}
