use leptos::prelude::*;

use super::field_error::FieldErrorText;

/// Select with label, placeholder option and inline validation message
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; empty string selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Shows a search box that filters options by label
    #[prop(optional)]
    searchable: bool,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Marks the label as mandatory
    #[prop(optional)]
    required: bool,
    /// Validation message shown under the select
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let has_error = move || error.get().is_some();
    let query = RwSignal::new(String::new());
    let visible_options = move || filter_options(&options.get(), &query.get(), &value.get());

    view! {
        <div class={move || if has_error() { "form__group form__group--error" } else { "form__group" }}>
            {move || label.get().map(|l| view! {
                <label class={if required { "form__label form__label--required" } else { "form__label" }} for=select_id>
                    {l}
                </label>
            })}
            {searchable.then(|| view! {
                <input
                    class="form__input form__select-search"
                    type="search"
                    placeholder="搜索"
                    prop:value=move || query.get()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=visible_options
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldErrorText error=error />
        </div>
    }
}

/// Options whose label contains `query` (case-insensitive); the selected
/// option is always kept so the current value stays visible
pub fn filter_options(
    options: &[(String, String)],
    query: &str,
    selected: &str,
) -> Vec<(String, String)> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|(val, label)| {
            needle.is_empty() || val == selected || label.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, String)> {
        vec![
            ("3".into(), "dw(MySQL)".into()),
            ("5".into(), "lake(Hive)".into()),
            ("7".into(), "报表库(MySQL)".into()),
        ]
    }

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(filter_options(&options(), "  ", ""), options());
    }

    #[test]
    fn test_filters_by_label_case_insensitive() {
        let values: Vec<String> = filter_options(&options(), "mysql", "")
            .into_iter()
            .map(|(v, _)| v)
            .collect();
        assert_eq!(values, vec!["3", "7"]);

        let values: Vec<String> = filter_options(&options(), "报表", "")
            .into_iter()
            .map(|(v, _)| v)
            .collect();
        assert_eq!(values, vec!["7"]);
    }

    #[test]
    fn test_selected_option_survives_filter() {
        let values: Vec<String> = filter_options(&options(), "hive", "3")
            .into_iter()
            .map(|(v, _)| v)
            .collect();
        assert_eq!(values, vec!["3", "5"]);
    }
}
