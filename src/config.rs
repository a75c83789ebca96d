//! Application-level configuration constants.

// UI Behavior
pub const DEBOUNCE_MS: u32 = 300;

// Booking link
pub const CONTACT_BASE_URL: &str = "https://wa.me";
pub const CONTACT_PHONE: &str = "972522567888";

// Min/Max hints for input fields
pub const MIN_BIKE_WEIGHT_KG: f64 = 8.0;
pub const MAX_BIKE_WEIGHT_KG: f64 = 35.0;
pub const BIKE_WEIGHT_STEP: f64 = 0.1;
pub const MIN_RIDER_WEIGHT_KG: f64 = 35.0;
pub const MAX_RIDER_WEIGHT_KG: f64 = 140.0;
pub const RIDER_WEIGHT_STEP: f64 = 0.5;
pub const DISTANCE_STEP_KM: f64 = 10.0;

// Branding
pub const HERO_LOGO_URL: &str = "https://www.simonline.co.il/Uploads/%D7%A8%D7%90%D7%A9%D7%99/%D7%90%D7%97%D7%95%D7%A8%D7%99%20%D7%97%D7%AA%D7%95%D7%9A.png";
pub const COMPANY_NAME: &str = "ShocKing Suspension";
