//! Profile Card Component
//!
//! Read-only identity card and fixed health goals.

use leptos::*;
use smarthealth::ProfileCard as Card;

#[component]
pub fn ProfileCard(card: Card) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm p-6 border border-slate-200">
            <div class="flex flex-col md:flex-row gap-8">
                <div class="flex-shrink-0 flex flex-col items-center">
                    <div class="w-24 h-24 rounded-full bg-blue-100 flex items-center justify-center text-5xl">
                        "👤"
                    </div>
                </div>

                <div class="flex-1 space-y-6">
                    <div>
                        <h2 class="text-2xl font-bold">{card.name}</h2>
                        <p class="text-slate-600">"Member since " {card.member_since}</p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {card.facts.into_iter().map(|fact| view! {
                            <div class="border border-slate-200 rounded-lg p-4">
                                <p class="text-sm text-slate-500 mb-1">{fact.label}</p>
                                <p class="text-lg font-medium">{fact.value}</p>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="pt-4 border-t border-slate-200">
                        <h3 class="text-lg font-semibold mb-4">"Health Goals"</h3>
                        <div class="space-y-3">
                            {card.goals.into_iter().map(|goal| view! {
                                <div class="flex justify-between items-center">
                                    <span>{goal.label}</span>
                                    <span class="text-blue-600 font-medium">{goal.target}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
