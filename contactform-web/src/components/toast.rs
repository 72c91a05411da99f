use leptos::*;

use crate::base::state::Toast;
use crate::vars::TOAST_DURATION;

#[component]
pub fn ToastView(toast: RwSignal<Option<Toast>>) -> impl IntoView {
    // clear the toast after a while, unless a newer one replaced it
    create_effect(move |_| {
        if let Some(id) = toast.with(|t| t.as_ref().map(|t| t.id)) {
            set_timeout(
                move || {
                    toast.update(|current| {
                        if current.as_ref().map(|t| t.id) == Some(id) {
                            *current = None;
                        }
                    })
                },
                TOAST_DURATION,
            );
        }
    });

    view! {
        {move || toast.get().map(|Toast { notification, .. }| {
            let class = if notification.is_error() {
                "fixed top-4 left-1/2 -translate-x-1/2 z-50 px-4 py-3 rounded-xl bg-white text-red-600 shadow-lg"
            } else {
                "fixed top-4 left-1/2 -translate-x-1/2 z-50 px-4 py-3 rounded-xl bg-white text-green-700 shadow-lg"
            };
            view! {
                <div class=class role="status">
                    {notification.message()}
                </div>
            }
        })}
    }
}
