use leptos::*;
use leptos_meta::*;

use crate::components::ContactSection;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Contact"/>
        <Stylesheet id="contactform" href="/pkg/tailwind.css"/>
        <main class="my-0 mx-auto max-w-7xl text-left">
            <ContactSection/>
        </main>
    }
}
