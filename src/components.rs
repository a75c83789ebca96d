//! Pure Yew view components for the calculator UI.
//!
//! These components render from props only; all state lives in `main.rs`.

use crate::config::COMPANY_NAME;
use crate::utils::{format_number, months_text, remaining_text};
use shock_service_calculator::Recommendation;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Manufacturer guidance next to the personalized recommendation.
#[derive(Properties, PartialEq)]
pub struct ResultBoxProps {
    pub recommendation: Recommendation,
}

#[function_component(ResultBox)]
pub fn result_box(props: &ResultBoxProps) -> Html {
    let rec = &props.recommendation;

    html! {
        <div class="result-box">
            <div class="result-title">{ "תוצאת המחשבון" }</div>
            <div class="result-section">
                <div class="result-heading">{ "המלצת יצרן:" }</div>
                if let Some(ref hours) = rec.manufacturer_hours_text {
                    <div class="mfg-hours" dir="rtl">{ hours }</div>
                }
                if let Some(ref time) = rec.manufacturer_time_text {
                    <div class="mfg-time">{ time }</div>
                }
            </div>
            <div class="result-section">
                <div class="result-heading">{ "המלצה משוקללת על פי נתוני רוכב:" }</div>
                <div class="personal-km">
                    { format!("~{} ק\"מ", format_number(rec.recommended_km as f64)) }
                </div>
                <div class={classes!("remaining", rec.is_due.then_some("due"))}>
                    { remaining_text(rec) }
                </div>
                <div class="months">{ months_text(rec) }</div>
            </div>
            <div class="result-section">
                <div class="result-heading">{ "מחיר טיפול משוער:" }</div>
                <div class="price">{ format!("₪{}", format_number(rec.price_nis as f64)) }</div>
                <div class="price-note">{ "* פירוק והרכבה ללא עלות נוספת" }</div>
            </div>
        </div>
    }
}

/// Labelled `<select>` whose options are `(value, text)` pairs.
#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<(String, String)>,
    pub selected: String,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            if let Some(ref step) = props.step {
                <div class="step-badge">{ step.to_string() }</div>
            }
            <label for={props.id.clone()}>{ props.label.to_string() }</label>
            <select id={props.id.clone()} {onchange}>
                { props.options.iter().map(|(value, text)| {
                    html! {
                        <option value={value.clone()} selected={*value == props.selected}>
                            { text }
                        </option>
                    }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Free-text numeric field; parsing happens in the owning hook.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub text: String,
    pub error: Option<String>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub oninput: Callback<InputEvent>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let placeholder = format!("{}–{}", format_number(props.min), format_number(props.max));
    let oninput = props.oninput.clone();

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.to_string() }</label>
            <input
                type="text"
                inputmode="decimal"
                id={props.id.clone()}
                value={props.text.clone()}
                placeholder={placeholder}
                data-step={props.step.to_string()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                {oninput}
            />
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// On/off switch for the e-bike flag.
#[derive(Properties, PartialEq)]
pub struct EbikeToggleProps {
    pub checked: bool,
    pub onchange: Callback<bool>,
}

#[function_component(EbikeToggle)]
pub fn ebike_toggle(props: &EbikeToggleProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };

    html! {
        <div class="form-group checkbox-group">
            <label>
                <input type="checkbox" checked={props.checked} {onchange} />
                { "E-Bike?" }
            </label>
            <span class="toggle-state">{ if props.checked { "כן (E-Bike)" } else { "לא" } }</span>
        </div>
    }
}

const FAQ: [(&str, &str); 5] = [
    (
        "הבולם כבר לא טופל מעל שנה והוא עדיין מרגיש טוב, לטפל?",
        "כן. גם אם הבולם מרגיש תקין, השמנים והאטמים מתיישנים עם הזמן ומאבדים מהיעילות שלהם. מומלץ לבצע טיפול לפחות פעם בשנה כדי למנוע שחיקה יקרה ונזקים עתידיים.",
    ),
    (
        "איך אדע שהבולם צריך טיפול אם אני לא מרגיש שינוי?",
        "לא תמיד מרגישים ירידה בביצועים מיד, הגוף מתרגל. סימנים: פחות רגישות למהמורות קטנות, חוסר יציבות במהירות, נקישות בתחילת מהלך, איבוד לחץ אוויר.",
    ),
    (
        "כמה זמן לוקח טיפול במעבדה?",
        "בדרך כלל 1–3 ימי עסקים, בהתאם לעומס ולדגם. בדחוף אפשר לקצר בתיאום מראש.",
    ),
    (
        "מה קורה אם מתעלמים מטיפול תקופתי?",
        "בלאי מואץ של אטמים/בושינגים ופגיעה בדפנות פנימיות. הזנחה ממושכת עלולה להוביל לשיפוץ יקר במקום טיפול שגרתי.",
    ),
    (
        "אפשר לבצע טיפול לבד בבית?",
        "כן, חלק מהטיפולים הבסיסיים אפשריים, אבל לא מומלץ לרוב הרוכבים ולא בהכרח משתלם: הסיכוי לנזק יקר גדול יותר מהחיסכון.",
    ),
];

const BRAND_NOTES: [(&str, &[&str]); 4] = [
    (
        "למה 50/100 שעות אצל RockShox?",
        &[
            "שמן בלוארס מאבד צמיגות סביב 40–60 שעות → עולה חיכוך (סטיקשן).",
            "שומן/אבק בבושינגים ואטמים → שחיקה מוקדמת.",
            "שמן דמפר מתחמצן/סופח לחות סביב 80–120 שעות → שינוי שיכוך.",
            "מבוסס גם על נתוני אחריות ובדיקות שטח.",
        ],
    ),
    (
        "Öhlins – עקרונות תחזוקה",
        &[
            "מזלג: ניקוי רגליים תחתונות ~50 שעות, טיפול מלא ~100 שעות או שנה.",
            "בולם: שירות קפיץ אוויר ~100 שעות, שירות דמפר ~100 שעות או עד שנתיים.",
            "מטרה: לשמור על אטימה, יציבות שמן ושיכוך עקבי.",
        ],
    ),
    (
        "FOX – למה 125 שעות או שנה?",
        &[
            "125 שעות ≈ סף בו יורדת יציבות שמן הדמפר והאטמים מתייבשים.",
            "ההמלצה הרשמית: \"125 שעות או שנה, המוקדם מביניהם\".",
            "ניקוי חיצוני עדין מומלץ אחרי כל רכיבה.",
        ],
    ),
    (
        "PUSH – למה לפי זמן?",
        &[
            "התיישנות שמנים ואטמים מתרחשת גם ללא רכיבה.",
            "לכן ההמלצה: טיפול מלא אחת לשנה (בשימוש אגרסיבי: 6–9 חודשים).",
        ],
    ),
];

/// Renders the FAQ sidebar with the per-brand maintenance notes.
pub fn render_faq() -> Html {
    html! {
        <aside class="faq" dir="rtl">
            <h3>{ "שאלות נפוצות" }</h3>
            { FAQ.iter().map(|(question, answer)| html! {
                <details>
                    <summary>{ *question }</summary>
                    <p>{ *answer }</p>
                </details>
            }).collect::<Html>() }
            { BRAND_NOTES.iter().map(|(title, bullets)| html! {
                <>
                    <h3>{ *title }</h3>
                    <ul>
                        { bullets.iter().map(|b| html! { <li>{ *b }</li> }).collect::<Html>() }
                    </ul>
                </>
            }).collect::<Html>() }
            <div class="faq-tip">{ "רכיבה אגרסיבית/בוץ/גשם? מומלץ לקצר מרווחים." }</div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: u32,
    pub contact_url: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <>
            <div class="disclaimer">
                { "* המחשבון מספק הערכה כללית בלבד. השימוש בו על אחריות המשתמש. " }
                { "שוקינג אינה נושאת באחריות לכל נזק שייגרם עקב שימוש או הסתמכות על התוצאות." }
            </div>
            <footer>
                <span>{ format!("© {} {} — SSC", props.year, COMPANY_NAME) }</span>
                <a href={props.contact_url.clone()} target="_blank" rel="noopener noreferrer"
                    title="צור קשר להזמנת טיפול">
                    { "קביעת תור לטיפול" }
                </a>
            </footer>
        </>
    }
}
