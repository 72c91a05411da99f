use std::rc::Rc;

use contactform::{ContactForm, FetchTransport, Field};
use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::FormFieldView;
use crate::components::buttons::SubmitButton;
use crate::{SignalStore, ToastNotifier};

pub type WebContactForm =
    ContactForm<SignalStore, FetchTransport, ToastNotifier>;

#[component]
pub fn ContactFormView(form: Rc<WebContactForm>) -> impl IntoView {
    let store = *form.store();
    let is_submitting = store.is_submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = Rc::clone(&form);
        spawn_local(async move {
            let outcome = form.submit().await;
            log::debug!("contact form submission: {:?}", outcome);
        });
    };

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div class="grid md:grid-cols-2 gap-6">
                <div class="border rounded-2xl border-white">
                    <FormFieldView field=Field::Name store=store/>
                </div>
                <div class="border rounded-2xl border-white">
                    <FormFieldView field=Field::Email store=store/>
                </div>
            </div>
            <FormFieldView field=Field::Message store=store/>
            <SubmitButton is_submitting=is_submitting/>
        </form>
    }
}
