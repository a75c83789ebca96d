//! Suspension model catalog.
//!
//! The catalog is embedded as CSV and parsed once on first use. It stays
//! immutable for the lifetime of the process.
//!
//! # Columns
//! - `brand`: `FOX`, `ROCKSHOX`, `PUSH` or `OHLINS`
//! - `product`: `fork` or `shock`
//! - `model`: display name, unique across the whole catalog
//! - `offset_km`: fixed distance added after the multiplicative factors
//! - `secondary_reservoir`: piggyback shock, selects the higher price tier

use crate::{Brand, ProductType};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const MODELS_CSV: &str = include_str!("models.csv");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub brand: Brand,
    pub product: ProductType,
    pub model: String,
    pub offset_km: i32,
    pub secondary_reservoir: bool,
}

#[derive(Debug)]
pub enum CatalogError {
    Csv(csv::Error),
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Csv(e) => write!(f, "Invalid model catalog: {}", e),
            CatalogError::Empty => write!(f, "Model catalog has no entries"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        CatalogError::Csv(e)
    }
}

/// Parse catalog rows. Duplicate model names keep their first occurrence.
pub fn read_models_from_csv_string(csv_content: &str) -> Result<Vec<ModelSpec>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut models = Vec::new();
    let mut seen = HashSet::new();

    for (i, row) in reader.deserialize::<ModelSpec>().enumerate() {
        let spec = row?;
        if !seen.insert(spec.model.clone()) {
            debug!(
                "Duplicate model '{}' on line {}, skipping",
                spec.model,
                i + 2
            );
            continue;
        }
        models.push(spec);
    }

    if models.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(models)
}

static MODEL_CATALOG: Lazy<Vec<ModelSpec>> =
    Lazy::new(|| match read_models_from_csv_string(MODELS_CSV) {
        Ok(models) => models,
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    });

/// Every catalog entry, in declaration order.
pub fn all_models() -> &'static [ModelSpec] {
    &MODEL_CATALOG
}

/// Models offered for a brand and product type, in declaration order.
pub fn models_for(brand: Brand, product: ProductType) -> Vec<&'static ModelSpec> {
    all_models()
        .iter()
        .filter(|m| m.brand == brand && m.product == product)
        .collect()
}

/// The model preselected when brand or product type changes.
pub fn default_model(brand: Brand, product: ProductType) -> Option<&'static ModelSpec> {
    all_models()
        .iter()
        .find(|m| m.brand == brand && m.product == product)
}

/// Look a model up by name. Names are unique across brands.
pub fn find_model(name: &str) -> Option<&'static ModelSpec> {
    let name = name.trim();
    all_models().iter().find(|m| m.model == name)
}

/// Whether `name` is offered for this brand and product type.
pub fn is_offered(brand: Brand, product: ProductType, name: &str) -> bool {
    find_model(name).is_some_and(|m| m.brand == brand && m.product == product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_completely() {
        let parsed = read_models_from_csv_string(MODELS_CSV).unwrap();
        assert_eq!(parsed.len(), MODELS_CSV.lines().count() - 1);
        assert_eq!(all_models().len(), parsed.len());
    }

    #[test]
    fn every_brand_and_product_has_models() {
        for brand in Brand::ALL {
            for product in ProductType::ALL {
                assert!(!models_for(brand, product).is_empty(), "{} {:?}", brand, product);
                assert!(default_model(brand, product).is_some());
            }
        }
    }

    #[test]
    fn model_lists_keep_declaration_order() {
        let names: Vec<&str> = models_for(Brand::Fox, ProductType::Fork)
            .iter()
            .map(|m| m.model.as_str())
            .collect();
        assert_eq!(names, ["32", "34", "36", "38", "40"]);

        let names: Vec<&str> = models_for(Brand::Push, ProductType::RearShock)
            .iter()
            .map(|m| m.model.as_str())
            .collect();
        assert_eq!(names, ["ElevenSix", "SV EIGHT", "VT/X"]);

        assert_eq!(default_model(Brand::RockShox, ProductType::RearShock).unwrap().model, "Deluxe");
        assert_eq!(default_model(Brand::Ohlins, ProductType::RearShock).unwrap().model, "TTX Air");
    }

    #[test]
    fn forks_are_neutral() {
        for m in all_models().iter().filter(|m| m.product == ProductType::Fork) {
            assert_eq!(m.offset_km, 0, "{}", m.model);
            assert!(!m.secondary_reservoir, "{}", m.model);
        }
    }

    #[test]
    fn shock_entries() {
        let eleven_six = find_model("ElevenSix").unwrap();
        assert_eq!(eleven_six.offset_km, -150);
        assert!(eleven_six.secondary_reservoir);

        let float = find_model("Float").unwrap();
        assert_eq!(float.offset_km, -80);
        assert!(!float.secondary_reservoir);

        assert!(find_model("Super Deluxe").unwrap().secondary_reservoir);
        assert!(!find_model("Deluxe").unwrap().secondary_reservoir);
        assert_eq!(find_model(" TTX Air ").unwrap().offset_km, -60);
    }

    #[test]
    fn offered_models() {
        assert!(is_offered(Brand::Fox, ProductType::RearShock, "DHX2"));
        assert!(!is_offered(Brand::Fox, ProductType::Fork, "DHX2"));
        assert!(!is_offered(Brand::Push, ProductType::Fork, "Unknown"));
    }

    #[test]
    fn duplicates_keep_first_row() {
        let data = "brand,product,model,offset_km,secondary_reservoir\n\
                    FOX,shock,Float,-80,false\n\
                    FOX,shock,Float,-10,true\n";
        let models = read_models_from_csv_string(data).unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].offset_km, -80);
    }

    #[test]
    fn malformed_rows_are_errors() {
        let data = "brand,product,model,offset_km,secondary_reservoir\n\
                    FOX,shock,Float,lots,false\n";
        assert!(matches!(read_models_from_csv_string(data), Err(CatalogError::Csv(_))));

        let header_only = "brand,product,model,offset_km,secondary_reservoir\n";
        assert!(matches!(read_models_from_csv_string(header_only), Err(CatalogError::Empty)));
    }
}
