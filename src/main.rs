//! Main module for the suspension service calculator using Yew.
//! Wires form state, the recommendation engine, and the view components.

use gloo_timers::callback::Timeout;
use log::info;
use shock_service_calculator::{
    catalog, recommend, Brand, ProductType, Recommendation, RiderLevel, RidingStyle,
    ServiceInput,
};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{render_faq, EbikeToggle, Footer, NumberField, ResultBox, SelectField};
use config::*;
use hooks::use_optional_number_input;
use utils::contact_url;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Create a debounced callback that cancels any previous pending call
fn debounce_callback<T: 'static>(
    timer_handle: &UseStateHandle<Option<Timeout>>,
    callback: Callback<T>,
    value: T,
    delay_ms: u32,
) {
    // Cancel any existing timer by replacing it
    timer_handle.set(None);

    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(delay_ms, move || {
        callback.emit(value);
        timer_handle_clone.set(None);
    });
    timer_handle.set(Some(handle));
}

fn brand_options() -> Vec<(String, String)> {
    Brand::ALL
        .iter()
        .map(|b| (b.label().to_string(), b.label().to_string()))
        .collect()
}

fn model_options(brand: Brand, product: ProductType) -> Vec<(String, String)> {
    catalog::models_for(brand, product)
        .into_iter()
        .map(|m| (m.model.clone(), m.model.clone()))
        .collect()
}

fn style_options() -> Vec<(String, String)> {
    RidingStyle::ALL
        .iter()
        .map(|s| (s.id().to_string(), s.label().to_string()))
        .collect()
}

fn level_options() -> Vec<(String, String)> {
    RiderLevel::ALL
        .iter()
        .map(|l| (l.id().to_string(), l.label().to_string()))
        .collect()
}

/// Mark the document as right-to-left Hebrew.
fn set_document_direction() {
    if let Some(root) = gloo_utils::document().document_element() {
        let _ = root.set_attribute("dir", "rtl");
        let _ = root.set_attribute("lang", "he");
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Calculator)]
fn calculator() -> Html {
    let defaults = ServiceInput::default();

    let product_type = use_state(|| defaults.product_type);
    let brand = use_state(|| defaults.brand);
    let model = use_state(|| defaults.model.clone());
    let riding_style = use_state(|| defaults.riding_style);
    let rider_level = use_state(|| defaults.rider_level);
    let is_ebike = use_state(|| defaults.is_ebike);
    let bike_weight = use_optional_number_input(defaults.bike_weight_kg);
    let rider_weight = use_optional_number_input(defaults.rider_weight_kg);
    let distance_since = use_optional_number_input(None);
    // Debounce timer for logging the settled recommendation
    let log_timer = use_state(|| None::<Timeout>);

    // Set page direction on mount
    use_effect_with((), |_| {
        set_document_direction();
        || ()
    });

    // Keep the selected model valid for the current brand and product type
    {
        let model = model.clone();
        use_effect_with((*brand, *product_type), move |&(brand, product)| {
            if !catalog::is_offered(brand, product, &model) {
                let fallback = catalog::default_model(brand, product)
                    .map(|m| m.model.clone())
                    .unwrap_or_default();
                model.set(fallback);
            }
            || ()
        });
    }

    let input = ServiceInput {
        brand: *brand,
        product_type: *product_type,
        model: (*model).clone(),
        riding_style: *riding_style,
        rider_level: *rider_level,
        is_ebike: *is_ebike,
        bike_weight_kg: bike_weight.value,
        rider_weight_kg: rider_weight.value,
        distance_since_service_km: distance_since.value.unwrap_or(0.0),
    };
    let recommendation = recommend(&input);
    let booking_url = contact_url(input.brand, &input.model, input.product_type);

    // Log once the form stops changing
    {
        let log_timer = log_timer.clone();
        use_effect_with(recommendation.clone(), move |rec| {
            let log_settled = Callback::from(|rec: Recommendation| {
                info!(
                    "Recommendation settled: {} km (baseline {} km), {} months, ₪{}",
                    rec.recommended_km, rec.baseline_km, rec.estimated_months, rec.price_nis
                );
            });
            debounce_callback(&log_timer, log_settled, rec.clone(), DEBOUNCE_MS);
            || ()
        });
    }

    let on_product = |product: ProductType| {
        let product_type = product_type.clone();
        Callback::from(move |_: MouseEvent| product_type.set(product))
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="app" dir="rtl">
            <section class="hero">
                <img class="hero-logo" src={HERO_LOGO_URL} alt="ShocKing Hero Logo" />
                <h1>{ "מחשבון טיפולי בולמים" }</h1>
                <div class="subtitle">{ "SSC – ShocKIng Service Calculator" }</div>
                <p class="intro">
                    { "קבלו המלצה חכמה מתי לבצע טיפול תקופתי למזלג או לבולם האחורי, לפי היצרן, הדגם, סגנון הרכיבה והמשקל הכולל." }
                </p>
            </section>

            <main class="layout">
                { render_faq() }

                <div class="calculator-card">
                    <form class="form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <div class="form-group">
                            <div class="step-badge">{ "שלב 1" }</div>
                            <label>{ "סוג מוצר" }</label>
                            <div class="toggle-buttons">
                                { ProductType::ALL.iter().map(|&p| html! {
                                    <button type="button"
                                        class={classes!("toggle", (*product_type == p).then_some("active"))}
                                        aria-pressed={(*product_type == p).to_string()}
                                        onclick={on_product(p)}
                                    >
                                        { p.label_he() }
                                    </button>
                                }).collect::<Html>() }
                            </div>
                        </div>

                        <SelectField
                            id="brand"
                            label="יצרן"
                            step={Some(AttrValue::from("שלב 2"))}
                            options={brand_options()}
                            selected={brand.label().to_string()}
                            onchange={
                                let brand = brand.clone();
                                Callback::from(move |value: String| {
                                    brand.set(value.parse().unwrap_or_default());
                                })
                            }
                        />

                        <SelectField
                            id="model"
                            label="דגם"
                            step={Some(AttrValue::from("שלב 3"))}
                            options={model_options(*brand, *product_type)}
                            selected={(*model).clone()}
                            onchange={
                                let model = model.clone();
                                Callback::from(move |value: String| model.set(value))
                            }
                        />

                        <SelectField
                            id="riding_style"
                            label="בחר סגנון רכיבה"
                            options={style_options()}
                            selected={riding_style.map(|s| s.id().to_string()).unwrap_or_default()}
                            onchange={
                                let riding_style = riding_style.clone();
                                Callback::from(move |value: String| riding_style.set(value.parse().ok()))
                            }
                        />

                        <SelectField
                            id="rider_level"
                            label="בחר רמת רכיבה"
                            options={level_options()}
                            selected={rider_level.map(|l| l.id().to_string()).unwrap_or_default()}
                            onchange={
                                let rider_level = rider_level.clone();
                                Callback::from(move |value: String| rider_level.set(value.parse().ok()))
                            }
                        />

                        <EbikeToggle
                            checked={*is_ebike}
                            onchange={
                                let is_ebike = is_ebike.clone();
                                Callback::from(move |checked: bool| is_ebike.set(checked))
                            }
                        />

                        <NumberField
                            id="rider_weight"
                            label="בחר משקל רוכב (ק\"ג)"
                            text={rider_weight.text.clone()}
                            error={rider_weight.error.clone()}
                            min={MIN_RIDER_WEIGHT_KG}
                            max={MAX_RIDER_WEIGHT_KG}
                            step={RIDER_WEIGHT_STEP}
                            oninput={rider_weight.on_input.clone()}
                        />

                        <NumberField
                            id="bike_weight"
                            label="בחר משקל אופניים (ק\"ג)"
                            text={bike_weight.text.clone()}
                            error={bike_weight.error.clone()}
                            min={MIN_BIKE_WEIGHT_KG}
                            max={MAX_BIKE_WEIGHT_KG}
                            step={BIKE_WEIGHT_STEP}
                            oninput={bike_weight.on_input.clone()}
                        />

                        <NumberField
                            id="distance_since_service"
                            label="ק\"מ מאז הטיפול האחרון"
                            text={distance_since.text.clone()}
                            error={distance_since.error.clone()}
                            min={0.0}
                            max={recommendation.recommended_km as f64}
                            step={DISTANCE_STEP_KM}
                            oninput={distance_since.on_input.clone()}
                        />

                        <div class="result-area">
                            <ResultBox recommendation={recommendation.clone()} />
                            <a class="btn-primary" href={booking_url.clone()}
                                target="_blank" rel="noopener noreferrer">
                                { "קבע לי טיפול בולמים" }
                            </a>
                        </div>
                    </form>
                </div>
            </main>

            <Footer year={year} contact_url={booking_url} />
        </div>
    }
}

/// App wrapper for the calculator.
#[function_component]
pub fn App() -> Html {
    html! {
        <Calculator />
    }
}

/// Entry point: installs the panic hook and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
