use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a raw text input field.
///
/// Unlike a validated input, the text is stored verbatim: empty or
/// non-numeric content is legal here and interpreted downstream, at
/// classification time.
#[derive(Clone)]
pub struct TextInput {
    /// The current text content of the input field, exactly as typed.
    pub text: String,
    /// Callback for the input's `oninput` event.
    pub oninput: Callback<InputEvent>,
}

/// Custom hook to manage state for a verbatim text input field.
#[hook]
pub fn use_text_input(initial: &'static str) -> TextInput {
    let text_handle: UseStateHandle<String> = use_state(|| initial.to_string());

    let oninput = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    TextInput {
        text: (*text_handle).clone(),
        oninput,
    }
}
