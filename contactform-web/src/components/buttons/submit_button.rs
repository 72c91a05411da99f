use leptos::*;

use crate::components::icons::SendIcon;

#[component]
pub fn SubmitButton(is_submitting: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || is_submitting.get()
            class="w-full py-4 rounded-xl font-bold text-lg text-white border border-white disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-200"
        >
            {move || if is_submitting.get() {
                view! {
                    <div class="flex items-center justify-center space-x-2">
                        <div class="w-6 h-6 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                        <span>"Sending..."</span>
                    </div>
                }
            } else {
                view! {
                    <div class="flex items-center justify-center space-x-2">
                        <span>"Send Message"</span>
                        <SendIcon/>
                    </div>
                }
            }}
        </button>
    }
}
