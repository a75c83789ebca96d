use crate::utils::parse_measurement;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callback for an optional numeric input field.
#[derive(Clone)]
pub struct OptionalNumberInput {
    /// The current text content of the input field.
    pub text: String,
    /// The parsed value. `None` when the field is empty or unparsable.
    pub value: Option<f64>,
    /// An error message when the text is not empty but cannot be parsed.
    pub error: Option<String>,
    /// Callback for the input's `oninput` event. Parses on every keystroke.
    pub on_input: Callback<InputEvent>,
}

/// Custom hook for weight/distance fields that recompute on every keystroke.
#[hook]
pub fn use_optional_number_input(initial_value: Option<f64>) -> OptionalNumberInput {
    let text_state = use_state(|| initial_value.map(|v| v.to_string()).unwrap_or_default());
    let value_state = use_state(|| initial_value);
    let error_state = use_state(|| None::<String>);

    let on_input = {
        let text_setter = text_state.clone();
        let value_setter = value_state.clone();
        let error_setter = error_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            match parse_measurement(&text) {
                Ok(parsed) => {
                    value_setter.set(parsed);
                    error_setter.set(None);
                }
                Err(err) => {
                    // Unparsable text counts as an absent value
                    value_setter.set(None);
                    error_setter.set(Some(err.to_string()));
                }
            }
            text_setter.set(text);
        })
    };

    OptionalNumberInput {
        text: (*text_state).clone(),
        value: *value_state,
        error: (*error_state).clone(),
        on_input,
    }
}
