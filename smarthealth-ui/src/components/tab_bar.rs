//! Tab Bar Component
//!
//! Dashboard tab strip. Clicking a tab hands it to `on_select`, which
//! navigates; the highlight follows the composed page.

use leptos::*;
use smarthealth::{Tab, TabLink};

#[component]
pub fn TabBar(tabs: Vec<TabLink>, on_select: Callback<Tab>) -> impl IntoView {
    view! {
        <nav class="flex space-x-2 border-b border-slate-200 overflow-x-auto pb-px">
            {tabs.into_iter().map(|link| {
                let tab = link.tab;
                let class = if link.active {
                    "border-blue-600 text-blue-600"
                } else {
                    "border-transparent text-slate-600 hover:text-slate-900 hover:border-slate-300"
                };

                view! {
                    <a
                        href=link.href
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            on_select.call(tab);
                        }
                        class=format!(
                            "flex items-center space-x-2 px-4 py-2 border-b-2 transition-colors whitespace-nowrap {}",
                            class
                        )
                    >
                        <span>{tab_icon(tab)}</span>
                        <span>{link.label}</span>
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "📊",
        Tab::Heart => "💓",
        Tab::Sleep => "🌙",
        Tab::Bmi => "⚖️",
        Tab::Water => "💧",
        Tab::Nutrition => "🍽️",
        Tab::Workout => "🏋️",
        Tab::Profile => "👤",
    }
}
