//! Suspension service calculator: interval and price recommendation engine.
//!
//! The engine is a pure function from a [`ServiceInput`] to a [`Recommendation`].
//! Reference data lives in [`policy`] (manufacturer cadences) and [`catalog`]
//! (model list with offsets and reservoir flags).

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod policy;

use catalog::ModelSpec;

/// Engine constants
pub mod defaults {
    /// Recommended interval never drops below this distance.
    pub const FLOOR_KM: u32 = 600;
    /// Notional bike (15) + rider (80) system weight.
    pub const REFERENCE_WEIGHT_KG: f64 = 95.0;
    pub const WEIGHT_FACTOR_MIN: f64 = 0.8;
    pub const WEIGHT_FACTOR_MAX: f64 = 1.2;
    pub const EBIKE_FACTOR: f64 = 0.85;
    pub const LENIENCY_FACTOR: f64 = 1.1;
    /// Average speed used when the riding style is unknown.
    pub const FALLBACK_AVG_KPH: f64 = 14.0;
    pub const MONTHS_PER_1000_KM: f64 = 7.0;
    pub const MIN_MONTHS: u32 = 1;
    pub const MAX_MONTHS: u32 = 24;
    pub const FORK_PRICE_NIS: u32 = 550;
    pub const SHOCK_PRICE_NIS: u32 = 550;
    pub const PIGGYBACK_SHOCK_PRICE_NIS: u32 = 650;
}

// ──────────────────────────────────────────────────────────────────────────────
// Keys

/// Error returned when a free-form key does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseKeyError {}

fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Suspension manufacturer. Declaration order is the order shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    #[serde(rename = "FOX")]
    Fox,
    #[serde(rename = "ROCKSHOX")]
    RockShox,
    #[serde(rename = "PUSH")]
    Push,
    #[serde(rename = "OHLINS", alias = "Öhlins")]
    Ohlins,
}

impl Brand {
    pub const ALL: [Brand; 4] = [Brand::Fox, Brand::RockShox, Brand::Push, Brand::Ohlins];

    pub fn label(self) -> &'static str {
        match self {
            Brand::Fox => "FOX",
            Brand::RockShox => "ROCKSHOX",
            Brand::Push => "PUSH",
            Brand::Ohlins => "Öhlins",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Brand {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "fox" => Ok(Brand::Fox),
            "rockshox" | "rock shox" => Ok(Brand::RockShox),
            "push" => Ok(Brand::Push),
            "öhlins" | "ohlins" => Ok(Brand::Ohlins),
            _ => Err(ParseKeyError { kind: "brand", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductType {
    #[default]
    #[serde(rename = "fork")]
    Fork,
    #[serde(rename = "shock", alias = "rear-shock")]
    RearShock,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Fork, ProductType::RearShock];

    pub fn id(self) -> &'static str {
        match self {
            ProductType::Fork => "fork",
            ProductType::RearShock => "shock",
        }
    }

    /// Hebrew label used on the buttons and in the contact message.
    pub fn label_he(self) -> &'static str {
        match self {
            ProductType::Fork => "מזלג",
            ProductType::RearShock => "בולם אחורי",
        }
    }
}

impl FromStr for ProductType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "fork" | "מזלג" => Ok(ProductType::Fork),
            "shock" | "rear-shock" | "rear_shock" | "rear shock" | "בולם אחורי" => {
                Ok(ProductType::RearShock)
            }
            _ => Err(ParseKeyError { kind: "product type", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RidingStyle {
    #[serde(rename = "xc")]
    CrossCountry,
    Trail,
    AllMountain,
    Enduro,
    Downhill,
}

impl RidingStyle {
    pub const ALL: [RidingStyle; 5] = [
        RidingStyle::CrossCountry,
        RidingStyle::Trail,
        RidingStyle::AllMountain,
        RidingStyle::Enduro,
        RidingStyle::Downhill,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RidingStyle::CrossCountry => "xc",
            RidingStyle::Trail => "trail",
            RidingStyle::AllMountain => "all-mountain",
            RidingStyle::Enduro => "enduro",
            RidingStyle::Downhill => "downhill",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RidingStyle::CrossCountry => "XC – קרוס קאנטרי",
            RidingStyle::Trail => "Trail – טרייל",
            RidingStyle::AllMountain => "All Mountain – אל מאונטן",
            RidingStyle::Enduro => "Enduro – אנדורו",
            RidingStyle::Downhill => "Downhill – דאונהיל",
        }
    }

    /// Lower means a more aggressive style and a shorter interval.
    pub fn multiplier(self) -> f64 {
        match self {
            RidingStyle::CrossCountry => 1.25,
            RidingStyle::Trail => 1.05,
            RidingStyle::AllMountain => 0.9,
            RidingStyle::Enduro => 0.92,
            RidingStyle::Downhill => 0.65,
        }
    }

    /// Average trail speed in km/h, used to turn manufacturer hours into distance.
    pub fn average_speed_kph(self) -> f64 {
        match self {
            RidingStyle::CrossCountry => 18.0,
            RidingStyle::Trail => 14.0,
            RidingStyle::AllMountain => 12.0,
            RidingStyle::Enduro => 10.0,
            RidingStyle::Downhill => 8.0,
        }
    }
}

impl FromStr for RidingStyle {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        // Accept the full UI label, its English half, or the id.
        let head = key.split('–').next().unwrap_or("").trim();
        match head {
            "xc" | "cross-country" | "cross country" => Ok(RidingStyle::CrossCountry),
            "trail" => Ok(RidingStyle::Trail),
            "all-mountain" | "all mountain" | "am" => Ok(RidingStyle::AllMountain),
            "enduro" => Ok(RidingStyle::Enduro),
            "downhill" | "dh" => Ok(RidingStyle::Downhill),
            _ => Err(ParseKeyError { kind: "riding style", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiderLevel {
    Novice,
    NovicePlus,
    Expert,
    Racer,
}

impl RiderLevel {
    pub const ALL: [RiderLevel; 4] = [
        RiderLevel::Novice,
        RiderLevel::NovicePlus,
        RiderLevel::Expert,
        RiderLevel::Racer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RiderLevel::Novice => "novice",
            RiderLevel::NovicePlus => "novice-plus",
            RiderLevel::Expert => "expert",
            RiderLevel::Racer => "racer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiderLevel::Novice => "חובבן",
            RiderLevel::NovicePlus => "חובבן פלוס",
            RiderLevel::Expert => "מקצוען",
            RiderLevel::Racer => "מתחרה",
        }
    }

    /// Skilled riders ride harder, so they get shorter intervals.
    pub fn multiplier(self) -> f64 {
        match self {
            RiderLevel::Novice => 1.2,
            RiderLevel::NovicePlus => 1.1,
            RiderLevel::Expert => 0.95,
            RiderLevel::Racer => 0.85,
        }
    }
}

impl FromStr for RiderLevel {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RiderLevel::ALL
            .into_iter()
            .find(|level| level.label() == trimmed || level.id() == normalize_key(trimmed))
            .ok_or_else(|| ParseKeyError { kind: "rider level", value: s.to_string() })
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Input / output

/// One calculation request, built fresh for every form change.
///
/// `riding_style` and `rider_level` are `None` when the caller supplied a key
/// the engine does not know; the engine then applies neutral factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub brand: Brand,
    pub product_type: ProductType,
    pub model: String,
    pub riding_style: Option<RidingStyle>,
    pub rider_level: Option<RiderLevel>,
    pub is_ebike: bool,
    pub bike_weight_kg: Option<f64>,
    pub rider_weight_kg: Option<f64>,
    pub distance_since_service_km: f64,
}

impl Default for ServiceInput {
    fn default() -> Self {
        let brand = Brand::default();
        let product_type = ProductType::default();
        Self {
            brand,
            product_type,
            model: catalog::default_model(brand, product_type)
                .map(|m| m.model.clone())
                .unwrap_or_default(),
            riding_style: Some(RidingStyle::Trail),
            rider_level: Some(RiderLevel::Novice),
            is_ebike: false,
            bike_weight_kg: None,
            rider_weight_kg: None,
            distance_since_service_km: 0.0,
        }
    }
}

/// String-keyed form of [`ServiceInput`], as delivered by a JS host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawServiceInput {
    pub brand: String,
    pub product_type: String,
    pub model: String,
    pub riding_style: String,
    pub rider_level: String,
    pub is_ebike: bool,
    pub bike_weight_kg: Option<f64>,
    pub rider_weight_kg: Option<f64>,
    pub distance_since_service_km: Option<f64>,
}

fn parse_or_default<T: FromStr<Err = ParseKeyError> + Default + fmt::Debug>(raw: &str) -> T {
    raw.parse().unwrap_or_else(|err| {
        let fallback = T::default();
        debug!("{}, using {:?}", err, fallback);
        fallback
    })
}

fn parse_optional<T: FromStr<Err = ParseKeyError>>(raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(v) => Some(v),
        Err(err) => {
            debug!("{}, applying neutral factor", err);
            None
        }
    }
}

/// Absent, negative or non-finite numbers count as zero.
fn sanitize_number(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

impl From<RawServiceInput> for ServiceInput {
    fn from(raw: RawServiceInput) -> Self {
        Self {
            brand: parse_or_default(&raw.brand),
            product_type: parse_or_default(&raw.product_type),
            model: raw.model.trim().to_string(),
            riding_style: parse_optional(&raw.riding_style),
            rider_level: parse_optional(&raw.rider_level),
            is_ebike: raw.is_ebike,
            bike_weight_kg: raw.bike_weight_kg,
            rider_weight_kg: raw.rider_weight_kg,
            distance_since_service_km: sanitize_number(raw.distance_since_service_km),
        }
    }
}

/// The individual factors behind a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factors {
    pub style: f64,
    pub level: f64,
    pub weight: f64,
    pub ebike: f64,
    pub leniency: f64,
    pub model_offset_km: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub baseline_km: u32,
    pub recommended_km: u32,
    pub remaining_km: f64,
    pub is_due: bool,
    pub estimated_months: u32,
    pub manufacturer_hours_text: Option<String>,
    pub manufacturer_time_text: Option<String>,
    pub price_nis: u32,
    pub factors: Factors,
}

// ──────────────────────────────────────────────────────────────────────────────
// Engine

pub fn style_factor(style: Option<RidingStyle>) -> f64 {
    match style {
        Some(s) => s.multiplier(),
        None => 1.0,
    }
}

pub fn level_factor(level: Option<RiderLevel>) -> f64 {
    match level {
        Some(l) => l.multiplier(),
        None => 1.0,
    }
}

pub fn average_speed_kph(style: Option<RidingStyle>) -> f64 {
    match style {
        Some(s) => s.average_speed_kph(),
        None => defaults::FALLBACK_AVG_KPH,
    }
}

/// `clamp(95 / max(total, 1), 0.8, 1.2)`: heavier systems get shorter intervals.
pub fn weight_factor(bike_weight_kg: Option<f64>, rider_weight_kg: Option<f64>) -> f64 {
    let total = sanitize_number(bike_weight_kg) + sanitize_number(rider_weight_kg);
    (defaults::REFERENCE_WEIGHT_KG / total.max(1.0))
        .clamp(defaults::WEIGHT_FACTOR_MIN, defaults::WEIGHT_FACTOR_MAX)
}

pub fn ebike_factor(is_ebike: bool) -> f64 {
    if is_ebike {
        defaults::EBIKE_FACTOR
    } else {
        1.0
    }
}

/// Distance baseline before any personal factor.
///
/// Uses the manufacturer's full-service hours converted at the style's average
/// speed; brands without an hour cadence fall back to the legacy distance table.
pub fn baseline_km(brand: Brand, product: ProductType, style: Option<RidingStyle>) -> u32 {
    match policy::policy_for(brand, product).full_service_hours() {
        Some(hours) => (hours as f64 * average_speed_kph(style)).round() as u32,
        None => policy::legacy_base_km(brand, product),
    }
}

/// Rough calendar cadence: 1000 km is about 7 months of casual riding.
pub fn estimated_months(recommended_km: u32) -> u32 {
    let months = (recommended_km as f64 / 1000.0 * defaults::MONTHS_PER_1000_KM).round() as u32;
    months.clamp(defaults::MIN_MONTHS, defaults::MAX_MONTHS)
}

pub fn service_price_nis(product: ProductType, model: Option<&ModelSpec>) -> u32 {
    match product {
        ProductType::Fork => defaults::FORK_PRICE_NIS,
        ProductType::RearShock => {
            if model.is_some_and(|m| m.secondary_reservoir) {
                defaults::PIGGYBACK_SHOCK_PRICE_NIS
            } else {
                defaults::SHOCK_PRICE_NIS
            }
        }
    }
}

/// Compute the personalized service recommendation. Total and side-effect free.
pub fn recommend(input: &ServiceInput) -> Recommendation {
    let baseline = baseline_km(input.brand, input.product_type, input.riding_style);

    let model = catalog::find_model(&input.model);
    if model.is_none() {
        debug!("Model '{}' not in catalog, using neutral offset", input.model);
    }

    let factors = Factors {
        style: style_factor(input.riding_style),
        level: level_factor(input.rider_level),
        weight: weight_factor(input.bike_weight_kg, input.rider_weight_kg),
        ebike: ebike_factor(input.is_ebike),
        leniency: defaults::LENIENCY_FACTOR,
        model_offset_km: model.map(|m| m.offset_km).unwrap_or(0),
    };

    let raw_km = baseline as f64
        * factors.style
        * factors.level
        * factors.weight
        * factors.ebike
        * factors.leniency
        + factors.model_offset_km as f64;
    let recommended_km = raw_km.round().max(defaults::FLOOR_KM as f64) as u32;

    let since = sanitize_number(Some(input.distance_since_service_km));
    let remaining_km = (recommended_km as f64 - since).max(0.0);
    let is_due = remaining_km == 0.0 || since >= recommended_km as f64;

    let manufacturer = policy::policy_for(input.brand, input.product_type);

    debug!(
        "{} {} '{}': baseline {} km -> {:.1} km (factors {:?})",
        input.brand,
        input.product_type.id(),
        input.model,
        baseline,
        raw_km,
        factors
    );

    Recommendation {
        baseline_km: baseline,
        recommended_km,
        remaining_km,
        is_due,
        estimated_months: estimated_months(recommended_km),
        manufacturer_hours_text: manufacturer.hours_text(),
        manufacturer_time_text: manufacturer.time_text.map(str::to_string),
        price_nis: service_price_nis(input.product_type, model),
        factors,
    }
}

/// JS entry point for hosts that embed the engine without the Yew shell.
///
/// Accepts a [`RawServiceInput`]-shaped object and returns the serialized
/// [`Recommendation`], or an error string if the input cannot be read.
#[wasm_bindgen(js_name = recommend)]
pub fn recommend_js(input_js: JsValue) -> JsValue {
    let raw: RawServiceInput = match serde_wasm_bindgen::from_value(input_js) {
        Ok(r) => r,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize input: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    let result = recommend(&ServiceInput::from(raw));
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fox_fork_trail() -> ServiceInput {
        ServiceInput {
            brand: Brand::Fox,
            product_type: ProductType::Fork,
            model: "36".to_string(),
            riding_style: "Trail".parse().ok(),
            rider_level: "חובבן".parse().ok(),
            is_ebike: false,
            bike_weight_kg: Some(15.0),
            rider_weight_kg: Some(80.0),
            distance_since_service_km: 0.0,
        }
    }

    #[test]
    fn fox_fork_trail_novice_reference_case() {
        let rec = recommend(&fox_fork_trail());
        assert_eq!(rec.baseline_km, 1750);
        assert_eq!(rec.recommended_km, 2426);
        assert_eq!(rec.remaining_km, 2426.0);
        assert!(!rec.is_due);
        assert_eq!(rec.estimated_months, 17);
        assert_eq!(rec.price_nis, 550);
        assert_eq!(rec.factors.model_offset_km, 0);
        assert_relative_eq!(rec.factors.weight, 1.0);
        assert_eq!(rec.manufacturer_hours_text.as_deref(), Some("טיפול מלא: 125 שעות"));
        assert_eq!(rec.manufacturer_time_text.as_deref(), Some("או שנה (המוקדם)"));
    }

    #[test]
    fn piggyback_shock_offset_and_price() {
        let input = ServiceInput {
            product_type: ProductType::RearShock,
            model: "ElevenSix".to_string(),
            ..fox_fork_trail()
        };
        let rec = recommend(&input);
        assert_eq!(rec.price_nis, defaults::PIGGYBACK_SHOCK_PRICE_NIS);
        assert_eq!(rec.factors.model_offset_km, -150);
        // Same FOX 125h baseline, so the only difference is the offset.
        assert_eq!(rec.recommended_km, 2426 - 150);
    }

    #[test]
    fn shock_without_reservoir_uses_low_tier() {
        let input = ServiceInput {
            product_type: ProductType::RearShock,
            model: "Float".to_string(),
            ..fox_fork_trail()
        };
        assert_eq!(recommend(&input).price_nis, defaults::SHOCK_PRICE_NIS);
    }

    #[test]
    fn unmapped_model_is_neutral() {
        let input = ServiceInput {
            product_type: ProductType::RearShock,
            model: "Prototype 9000".to_string(),
            ..fox_fork_trail()
        };
        let rec = recommend(&input);
        assert_eq!(rec.factors.model_offset_km, 0);
        assert_eq!(rec.price_nis, defaults::SHOCK_PRICE_NIS);
        assert_eq!(rec.recommended_km, 2426);
    }

    #[test]
    fn push_uses_legacy_baseline() {
        for product in ProductType::ALL {
            let expected = policy::legacy_base_km(Brand::Push, product);
            assert_eq!(baseline_km(Brand::Push, product, Some(RidingStyle::Downhill)), expected);
        }
        assert_eq!(baseline_km(Brand::Push, ProductType::Fork, None), 1000);
    }

    #[test]
    fn rockshox_range_uses_lower_bound() {
        // 100-200h range: 100h x 14 km/h
        assert_eq!(
            baseline_km(Brand::RockShox, ProductType::RearShock, Some(RidingStyle::Trail)),
            1400
        );
    }

    #[test]
    fn baseline_positive_everywhere() {
        for brand in Brand::ALL {
            for product in ProductType::ALL {
                for style in RidingStyle::ALL.map(Some).into_iter().chain([None]) {
                    assert!(baseline_km(brand, product, style) > 0);
                }
            }
        }
    }

    #[test]
    fn floor_holds_for_harshest_inputs() {
        for brand in Brand::ALL {
            for product in ProductType::ALL {
                for model in catalog::models_for(brand, product) {
                    let input = ServiceInput {
                        brand,
                        product_type: product,
                        model: model.model.clone(),
                        riding_style: Some(RidingStyle::Downhill),
                        rider_level: Some(RiderLevel::Racer),
                        is_ebike: true,
                        bike_weight_kg: Some(30.0),
                        rider_weight_kg: Some(140.0),
                        distance_since_service_km: 0.0,
                    };
                    assert!(recommend(&input).recommended_km >= defaults::FLOOR_KM);
                }
            }
        }
    }

    #[test]
    fn floor_clamps_low_values() {
        let input = ServiceInput {
            brand: Brand::Push,
            product_type: ProductType::RearShock,
            model: "ElevenSix".to_string(),
            riding_style: Some(RidingStyle::Downhill),
            rider_level: Some(RiderLevel::Racer),
            is_ebike: true,
            bike_weight_kg: Some(25.0),
            rider_weight_kg: Some(120.0),
            distance_since_service_km: 0.0,
        };
        // 700 x 0.65 x 0.85 x 0.8 x 0.85 x 1.1 - 150 is well under the floor
        assert_eq!(recommend(&input).recommended_km, defaults::FLOOR_KM);
    }

    #[test]
    fn weight_factor_bounds_and_monotonicity() {
        assert_relative_eq!(weight_factor(None, None), 1.2);
        assert_relative_eq!(weight_factor(Some(15.0), Some(80.0)), 1.0);
        assert_relative_eq!(weight_factor(Some(40.0), Some(160.0)), 0.8);

        let mut previous = f64::INFINITY;
        for total in 0..300 {
            let w = weight_factor(Some(total as f64), None);
            assert!((0.8..=1.2).contains(&w));
            assert!(w <= previous);
            previous = w;
        }
    }

    #[test]
    fn missing_weights_give_maximal_factor() {
        let input = ServiceInput {
            bike_weight_kg: None,
            rider_weight_kg: None,
            ..fox_fork_trail()
        };
        // 1750 x 1.05 x 1.2 x 1.2 x 1.1 = 2910.6
        assert_eq!(recommend(&input).recommended_km, 2911);
    }

    #[test]
    fn ebike_strictly_shortens() {
        let regular = recommend(&fox_fork_trail());
        let ebike = recommend(&ServiceInput { is_ebike: true, ..fox_fork_trail() });
        assert!(ebike.recommended_km < regular.recommended_km);
        assert_eq!(ebike.recommended_km, 2062);
    }

    #[test]
    fn due_iff_nothing_remaining() {
        for since in [0.0, 1000.0, 2425.0, 2426.0, 5000.0] {
            let rec = recommend(&ServiceInput {
                distance_since_service_km: since,
                ..fox_fork_trail()
            });
            assert_eq!(rec.is_due, rec.remaining_km == 0.0, "since = {}", since);
        }
        let overdue = recommend(&ServiceInput {
            distance_since_service_km: 3000.0,
            ..fox_fork_trail()
        });
        assert!(overdue.is_due);
        assert_eq!(overdue.remaining_km, 0.0);
    }

    #[test]
    fn months_are_clamped() {
        assert_eq!(estimated_months(0), 1);
        assert_eq!(estimated_months(600), 4);
        assert_eq!(estimated_months(2426), 17);
        assert_eq!(estimated_months(100_000), 24);
    }

    #[test]
    fn unknown_style_and_level_are_neutral() {
        let raw = RawServiceInput {
            brand: "FOX".to_string(),
            product_type: "fork".to_string(),
            model: "36".to_string(),
            riding_style: "Freeride".to_string(),
            rider_level: "legend".to_string(),
            bike_weight_kg: Some(15.0),
            rider_weight_kg: Some(80.0),
            ..Default::default()
        };
        let input = ServiceInput::from(raw);
        assert_eq!(input.riding_style, None);
        assert_eq!(input.rider_level, None);

        let rec = recommend(&input);
        assert_relative_eq!(rec.factors.style, 1.0);
        assert_relative_eq!(rec.factors.level, 1.0);
        // 125h x 14 km/h fallback speed, only leniency applies
        assert_eq!(rec.recommended_km, 1925);
    }

    #[test]
    fn unknown_brand_falls_back_to_first() {
        let input = ServiceInput::from(RawServiceInput {
            brand: "Marzocchi".to_string(),
            product_type: "spring".to_string(),
            ..Default::default()
        });
        assert_eq!(input.brand, Brand::Fox);
        assert_eq!(input.product_type, ProductType::Fork);
    }

    #[test]
    fn raw_numbers_are_sanitized() {
        let input = ServiceInput::from(RawServiceInput {
            distance_since_service_km: Some(-40.0),
            ..Default::default()
        });
        assert_eq!(input.distance_since_service_km, 0.0);
    }

    #[test]
    fn keys_parse_from_labels_and_ids() {
        assert_eq!("Öhlins".parse::<Brand>(), Ok(Brand::Ohlins));
        assert_eq!("rockshox".parse::<Brand>(), Ok(Brand::RockShox));
        assert_eq!("rear-shock".parse::<ProductType>(), Ok(ProductType::RearShock));
        assert_eq!("בולם אחורי".parse::<ProductType>(), Ok(ProductType::RearShock));
        for style in RidingStyle::ALL {
            assert_eq!(style.label().parse::<RidingStyle>(), Ok(style));
            assert_eq!(style.id().parse::<RidingStyle>(), Ok(style));
        }
        for level in RiderLevel::ALL {
            assert_eq!(level.label().parse::<RiderLevel>(), Ok(level));
            assert_eq!(level.id().parse::<RiderLevel>(), Ok(level));
        }
        let err = "Slopestyle".parse::<RidingStyle>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized riding style: 'Slopestyle'");
    }

    #[test]
    fn recommend_is_idempotent() {
        let input = ServiceInput {
            is_ebike: true,
            distance_since_service_km: 812.5,
            ..fox_fork_trail()
        };
        assert_eq!(recommend(&input), recommend(&input));
    }

    #[test]
    fn serialized_shape_uses_camel_case() {
        let rec = recommend(&fox_fork_trail());
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["recommendedKm"], 2426);
        assert_eq!(json["isDue"], false);
        assert_eq!(json["factors"]["modelOffsetKm"], 0);

        let raw: RawServiceInput = serde_json::from_str(
            r#"{"brand":"PUSH","productType":"shock","model":"VT/X","ridingStyle":"enduro","riderLevel":"racer","isEbike":true}"#,
        )
        .unwrap();
        let input = ServiceInput::from(raw);
        assert_eq!(input.brand, Brand::Push);
        assert_eq!(input.riding_style, Some(RidingStyle::Enduro));
        assert_eq!(input.rider_level, Some(RiderLevel::Racer));
        assert!(input.is_ebike);
        assert_eq!(input.bike_weight_kg, None);
    }
}
