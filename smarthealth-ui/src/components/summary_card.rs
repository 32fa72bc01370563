//! Summary Card Component
//!
//! One headline figure with its goal and trend.

use leptos::*;
use smarthealth::{SummaryFigure, Trend};

#[component]
pub fn SummaryCard(figure: SummaryFigure) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm p-5 border border-slate-200">
            <span class="text-slate-500 text-sm">{figure.title}</span>

            <div class="text-3xl font-bold mt-2">{figure.value}</div>

            <p class="text-sm text-slate-500 mt-1">{figure.description}</p>

            {figure.trend.map(|indicator| {
                let color = match indicator.trend {
                    Trend::Up => "text-green-600",
                    Trend::Down => "text-red-500",
                    Trend::Neutral => "text-slate-500",
                };
                view! {
                    <div class=format!("mt-2 text-sm {}", color)>
                        {indicator.trend.arrow()}
                        " "
                        {indicator.label}
                    </div>
                }
            })}
        </div>
    }
}
