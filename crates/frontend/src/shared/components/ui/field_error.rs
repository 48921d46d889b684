use leptos::prelude::*;

/// Inline validation message under a form control
#[component]
pub fn FieldErrorText(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <div class="form__error">{message}</div> })
    }
}
