use std::rc::Rc;

use contactform::{ContactForm, FetchTransport, SubmissionClient};
use leptos::*;

use super::forms::ContactFormView;
use super::{ContactDetails, ContactDetailsView, ToastView};
use crate::base::config::relay_config;
use crate::{SignalStore, ToastNotifier};

#[component]
pub fn ContactSection() -> impl IntoView {
    let notifier = ToastNotifier::new();
    let details = ContactDetails::from_build_env();

    let form_view = match relay_config() {
        Ok(config) => {
            let form = ContactForm::new(
                SignalStore::new(),
                SubmissionClient::new(config, FetchTransport::new()),
                notifier,
            );
            view! { <ContactFormView form=Rc::new(form)/> }.into_view()
        }
        Err(err) => {
            log::error!("contact form disabled: {}", err);
            view! { <NotConfiguredView/> }.into_view()
        }
    };

    view! {
        <section id="contact" class="container mx-auto px-4 lg:px-20 mt-20 relative overflow-hidden">
            <div class="absolute inset-0 backdrop-blur-md rounded-3xl -z-10"></div>
            <ToastView toast=notifier.toast()/>
            <div class="container mx-auto grid lg:grid-cols-2 gap-12 items-start">
                <div class="p-8 rounded-3xl space-y-6 bg-gray-900/50 border border-gray-700">
                    <ContactDetailsView details=details/>
                </div>
                <div class="p-8 rounded-3xl bg-gray-900/50 border border-gray-700">
                    {form_view}
                </div>
            </div>
        </section>
    }
}

#[component]
fn NotConfiguredView() -> impl IntoView {
    view! {
        <div class="text-red-500">
            "The contact form is not available right now."
        </div>
    }
}
