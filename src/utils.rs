use crate::config::{CONTACT_BASE_URL, CONTACT_PHONE};
use once_cell::sync::Lazy;
use regex::Regex;
use shock_service_calculator::{Brand, ProductType, Recommendation};

// Compiled regexes for measurement parsing
static GROUPED_MEASUREMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^(\d{1,3}(?:,\d{3})+)(?:\.(\d+))?\s*(?:kg|km|ק"ג|ק"מ|קג|קמ)?$"#).unwrap()
});
static PLAIN_MEASUREMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^(\d*)(?:\.(\d+))?\s*(?:kg|km|ק"ג|ק"מ|קג|קמ)?$"#).unwrap()
});

/// Measurement parsing error types
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementParseError {
    InvalidFormat(String),
}

impl std::fmt::Display for MeasurementParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementParseError::InvalidFormat(input) => {
                write!(f, "'{}' is not a number. Use e.g. 80, 12.5 or 1,200", input)
            }
        }
    }
}

impl std::error::Error for MeasurementParseError {}

/// Parse a weight or distance typed into a form field.
///
/// Empty input is `Ok(None)` (the field is absent). Supported formats:
/// - Plain numbers: "80", "12.5", ".5"
/// - Thousands separators: "1,200", "12,500.5"
/// - An optional unit: "80kg", "80 ק\"ג", "1,200 km"
///
/// # Examples
/// ```
/// assert_eq!(parse_measurement("1,200 km"), Ok(Some(1200.0)));
/// assert_eq!(parse_measurement("  "), Ok(None));
/// ```
pub fn parse_measurement(input: &str) -> Result<Option<f64>, MeasurementParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let captures = GROUPED_MEASUREMENT_REGEX
        .captures(trimmed)
        .or_else(|| PLAIN_MEASUREMENT_REGEX.captures(trimmed))
        .filter(|c| c.get(1).is_some_and(|m| !m.as_str().is_empty()) || c.get(2).is_some())
        .ok_or_else(|| MeasurementParseError::InvalidFormat(trimmed.to_string()))?;

    let whole = captures.get(1).map_or("", |m| m.as_str()).replace(',', "");
    let fraction = captures.get(2).map_or("", |m| m.as_str());
    let normalized = format!(
        "{}.{}",
        if whole.is_empty() { "0" } else { &whole },
        if fraction.is_empty() { "0" } else { fraction }
    );

    normalized
        .parse::<f64>()
        .map(Some)
        .map_err(|_| MeasurementParseError::InvalidFormat(trimmed.to_string()))
}

/// Format a number the way he-IL renders it: comma thousands separators and
/// at most three fraction digits.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let fraction = format!("{:.3}", abs - abs.trunc());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction == "." || fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}", sign, grouped, fraction)
    }
}

/// Build the pre-filled booking link for the selected product.
pub fn contact_url(brand: Brand, model: &str, product: ProductType) -> String {
    let message = format!(
        "היי, אני מעוניין לקבוע טיפול לבולם מסוג {} דגם {} ({}) אשמח לקבוע טיפול",
        brand,
        model,
        product.label_he()
    );
    format!(
        "{}/{}?text={}",
        CONTACT_BASE_URL,
        CONTACT_PHONE,
        urlencoding::encode(&message)
    )
}

/// Status line under the personalized recommendation.
pub fn remaining_text(rec: &Recommendation) -> String {
    if rec.is_due {
        "הגיע הזמן לטיפול!".to_string()
    } else {
        format!("נותרו ~{} ק\"מ עד הטיפול הבא", format_number(rec.remaining_km))
    }
}

pub fn months_text(rec: &Recommendation) -> String {
    if rec.estimated_months == 1 {
        "≈ כל חודש בשימוש רגיל".to_string()
    } else {
        format!("≈ כל {} חודשים בשימוש רגיל", rec.estimated_months)
    }
}
