use contactform::{Field, FormStore, InputKind};
use leptos::*;

use crate::SignalStore;

const INPUT_CLASS: &str = "block w-full px-4 py-3 text-white rounded-xl \
    appearance-none peer focus:outline-none focus:ring-0 shadow-inner \
    bg-transparent border-none";
const TEXTAREA_CLASS: &str = "block w-full px-4 py-3 text-white rounded-xl \
    appearance-none peer focus:outline-none focus:ring-0 resize-none \
    shadow-inner border border-white bg-transparent";
// label floats above the field once it has a value or focus
const LABEL_CLASS: &str = "absolute text-white duration-300 transform \
    -translate-y-4 scale-75 top-4 z-10 origin-[0] left-4 \
    peer-placeholder-shown:scale-100 peer-placeholder-shown:translate-y-0 \
    peer-focus:scale-75 peer-focus:-translate-y-4";

#[component]
pub fn FormFieldView(field: Field, store: SignalStore) -> impl IntoView {
    let name = field.as_str();
    let label = field.label();
    let value = store.field_value(field);

    let input = match field.input_kind() {
        InputKind::TextArea => view! {
            <textarea
                id=name
                name=name
                rows=6
                placeholder=" "
                required=true
                class=TEXTAREA_CLASS
                prop:value=value
                on:input=move |ev| store.set_field(field, event_target_value(&ev))
            ></textarea>
        }
        .into_view(),
        kind => {
            let input_type = match kind {
                InputKind::Email => "email",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=name
                    name=name
                    placeholder=" "
                    required=true
                    class=INPUT_CLASS
                    prop:value=value
                    on:input=move |ev| store.set_field(field, event_target_value(&ev))
                />
            }
            .into_view()
        }
    };

    view! {
        <div class="relative">
            {input}
            <label for=name class=LABEL_CLASS>
                {label}
            </label>
        </div>
    }
}
