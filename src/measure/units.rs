//! Phases, ingredient densities and container volumes
//!
//! Fixed lookup tables the converter reads from. Nothing here is mutable.

use serde::{Deserialize, Serialize};

/// How the entered amount is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Amount is a mass in grams
    Solid,
    /// Amount is a volume in milliliters
    #[default]
    Liquid,
}

impl Phase {
    /// Unit the amount field is entered in
    pub fn input_unit(&self) -> &'static str {
        match self {
            Phase::Solid => "g",
            Phase::Liquid => "ml",
        }
    }

    /// Display label used on the toggle
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Phase::Solid => Phase::Liquid,
            Phase::Liquid => Phase::Solid,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "solid" | "mass" | "g" => Some(Phase::Solid),
            "liquid" | "volume" | "ml" => Some(Phase::Liquid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Solid => "solid",
            Phase::Liquid => "liquid",
        }
    }
}

/// A baking ingredient with a known bulk density
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ingredient {
    pub id: &'static str,
    pub label: &'static str,
    /// Grams per milliliter
    pub density: f64,
}

/// A container the result is counted in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Container {
    pub id: &'static str,
    /// Slug accepted in place of the id
    pub alias: &'static str,
    pub label: &'static str,
    pub volume_ml: f64,
}

// ============================================================================
// Catalogs
// ============================================================================

/// Known ingredients, in dropdown order
pub static INGREDIENTS: [Ingredient; 4] = [
    Ingredient { id: "sugar", label: "Sugar", density: 0.85 },
    Ingredient { id: "flour", label: "Flour", density: 0.59 },
    Ingredient { id: "butter", label: "Butter", density: 0.96 },
    Ingredient { id: "yeast", label: "Yeast", density: 0.68 },
];

/// Container sizes. The first entry is the default selection.
pub static CONTAINERS: [Container; 3] = [
    Container { id: "option1", alias: "bottle-cap", label: "Bottle Cap", volume_ml: 5.0 },
    Container { id: "option2", alias: "shot-glass", label: "Shot Glass", volume_ml: 40.0 },
    Container { id: "option3", alias: "plastic-cup", label: "Plastic Cup", volume_ml: 200.0 },
];

/// Identifier of the container selected when nothing else has been chosen
pub const DEFAULT_CONTAINER_ID: &str = "option1";

// ============================================================================
// Lookup
// ============================================================================

/// Find an ingredient by id or label
pub fn find_ingredient(key: &str) -> Option<&'static Ingredient> {
    let lower = key.to_lowercase();
    let trimmed = lower.trim();

    INGREDIENTS
        .iter()
        .find(|i| i.id == trimmed || i.label.to_lowercase() == trimmed)
}

/// Find a container by id, alias or label
pub fn find_container(key: &str) -> Option<&'static Container> {
    let lower = key.to_lowercase();
    let trimmed = lower.trim();

    CONTAINERS.iter().find(|c| {
        c.id == trimmed || c.alias == trimmed || c.label.to_lowercase() == trimmed
    })
}

/// Density in g/ml for an ingredient
pub fn density_of(key: &str) -> Option<f64> {
    find_ingredient(key).map(|i| i.density)
}

/// Volume in ml for a container
pub fn container_volume_ml(key: &str) -> Option<f64> {
    find_container(key).map(|c| c.volume_ml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_liquid() {
        assert_eq!(Phase::default(), Phase::Liquid);
        assert_eq!(Phase::default().input_unit(), "ml");
    }

    #[test]
    fn test_phase_toggle() {
        assert_eq!(Phase::Liquid.toggled(), Phase::Solid);
        assert_eq!(Phase::Solid.toggled(), Phase::Liquid);
    }

    #[test]
    fn test_phase_from_str() {
        assert_eq!(Phase::from_str("Solid"), Some(Phase::Solid));
        assert_eq!(Phase::from_str(" liquid "), Some(Phase::Liquid));
        assert_eq!(Phase::from_str("gas"), None);
    }

    #[test]
    fn test_ingredient_densities() {
        assert_eq!(density_of("sugar"), Some(0.85));
        assert_eq!(density_of("flour"), Some(0.59));
        assert_eq!(density_of("butter"), Some(0.96));
        assert_eq!(density_of("yeast"), Some(0.68));
        assert_eq!(density_of("salt"), None);
    }

    #[test]
    fn test_ingredient_lookup_by_label() {
        assert_eq!(find_ingredient("Butter").map(|i| i.id), Some("butter"));
        assert_eq!(find_ingredient("  SUGAR ").map(|i| i.id), Some("sugar"));
    }

    #[test]
    fn test_ingredient_order() {
        let ids: Vec<_> = INGREDIENTS.iter().map(|i| i.id).collect();
        assert_eq!(ids, ["sugar", "flour", "butter", "yeast"]);
    }

    #[test]
    fn test_container_volumes() {
        assert_eq!(container_volume_ml("option1"), Some(5.0));
        assert_eq!(container_volume_ml("option2"), Some(40.0));
        assert_eq!(container_volume_ml("option3"), Some(200.0));
        assert_eq!(container_volume_ml("option4"), None);
    }

    #[test]
    fn test_container_aliases() {
        assert_eq!(find_container("shot-glass").map(|c| c.id), Some("option2"));
        assert_eq!(find_container("Plastic Cup").map(|c| c.id), Some("option3"));
    }

    #[test]
    fn test_default_container_is_first() {
        assert_eq!(CONTAINERS[0].id, DEFAULT_CONTAINER_ID);
        assert!(find_container(DEFAULT_CONTAINER_ID).is_some());
    }

    #[test]
    fn test_catalog_densities_positive() {
        assert!(INGREDIENTS.iter().all(|i| i.density > 0.0));
        assert!(CONTAINERS.iter().all(|c| c.volume_ml > 0.0));
    }
}
