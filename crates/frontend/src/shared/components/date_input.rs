use crate::shared::date_utils::{from_input_value, to_input_value};
use chrono::NaiveDate;
use leptos::prelude::*;

/// Поле даты на нативном date picker; пустое поле означает "нет даты"
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional)]
    id: Option<&'static str>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form-input"
            id=id
            prop:value=move || to_input_value(value.get())
            disabled=move || disabled.get()
            on:input=move |ev| {
                on_change.run(from_input_value(&event_target_value(&ev)));
            }
        />
    }
}
