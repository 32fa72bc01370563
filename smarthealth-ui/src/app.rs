//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Dashboard, Login};
use crate::state::session::provide_session_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session_state();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path=smarthealth::DASHBOARD_PATH /> } />
                        <Route path=smarthealth::LOGIN_PATH view=Login />
                        <Route path=smarthealth::DASHBOARD_PATH view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=smarthealth::DASHBOARD_PATH
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
