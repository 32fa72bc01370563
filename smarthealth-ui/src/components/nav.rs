//! Navigation Component
//!
//! Header navigation bar with logo and the signed-in user.

use leptos::*;
use leptos_router::*;

use crate::state::session::use_session_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session_state = use_session_state();
    let navigate = use_navigate();

    let sign_out = move |_: ev::MouseEvent| {
        session_state.sign_out();
        navigate(smarthealth::LOGIN_PATH, Default::default());
    };

    view! {
        <nav class="bg-white border-b border-slate-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=smarthealth::DASHBOARD_PATH class="flex items-center space-x-3">
                        <span class="text-2xl">"❤️"</span>
                        <span class="text-xl font-bold">"SmartHealth"</span>
                    </A>

                    {move || match session_state.user_name() {
                        Some(name) => view! {
                            <div class="flex items-center space-x-4">
                                <span class="text-slate-600">{name}</span>
                                <button
                                    on:click=sign_out.clone()
                                    class="px-4 py-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-colors"
                                >
                                    "Sign out"
                                </button>
                            </div>
                        }.into_view(),
                        None => view! {
                            <A
                                href=smarthealth::LOGIN_PATH
                                class="px-4 py-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-colors"
                            >
                                "Sign in"
                            </A>
                        }.into_view(),
                    }}
                </div>
            </div>
        </nav>
    }
}
