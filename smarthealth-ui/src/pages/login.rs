//! Login Page
//!
//! Minimal sign-in form. Signing in creates the session the dashboard
//! guard checks.

use leptos::*;
use leptos_router::*;

use crate::state::session::use_session_state;

#[component]
pub fn Login() -> impl IntoView {
    let session_state = use_session_state();
    let navigate = use_navigate();
    let (name, set_name) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            return;
        }
        session_state.sign_in(&name);
        navigate(smarthealth::DASHBOARD_PATH, Default::default());
    };

    view! {
        <div class="max-w-md mx-auto mt-16 bg-white rounded-xl shadow-sm p-8 border border-slate-200">
            <h1 class="text-2xl font-bold mb-2">"Sign in"</h1>
            <p class="text-slate-600 mb-6">"Track your health metrics in one place."</p>

            <form on:submit=on_submit class="space-y-4">
                <label class="block text-sm text-slate-500">"Your name"</label>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-slate-300 focus:border-blue-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || name.get().trim().is_empty()
                    class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-300
                           text-white rounded-lg font-medium transition-colors"
                >
                    "Continue"
                </button>
            </form>
        </div>
    }
}
