//! Dashboard Page
//!
//! Mounts the core dashboard controller and renders whatever it composes.
//!
//! The browser location is the only input for the active tab: tab clicks
//! navigate, and the location effect feeds every change (clicks, back
//! button, deep links) through the controller in order.

use leptos::*;
use leptos_router::*;
use smarthealth::{Dashboard as Controller, Layout, Navigator, Page, Render, Tab};

use crate::components::{ProfileCard, SummaryCard, TabBar, TrackerView};
use crate::state::session::use_session_state;

/// Navigation requests raised while the controller is borrowed
///
/// They are flushed to the router afterwards, so a navigation that
/// re-triggers the location effect never re-enters the controller.
#[derive(Default)]
struct PendingNavigation(Vec<String>);

impl Navigator for PendingNavigation {
    fn navigate(&mut self, href: &str) {
        self.0.push(href.to_string());
    }
}

impl PendingNavigation {
    fn flush(self, navigate: &impl Fn(&str, NavigateOptions)) {
        for href in self.0 {
            navigate(&href, Default::default());
        }
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session_state = use_session_state();
    let navigate = use_navigate();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);

    let current_href = move || {
        let search = search.get();
        match search.trim_start_matches('?') {
            "" => pathname.get(),
            query => format!("{}?{}", pathname.get(), query),
        }
    };

    let controller = store_value(Controller::mount(&untrack(current_href)));
    let (render, set_render) = create_signal(Render::Nothing);

    // Re-derive the tab and re-check the session whenever either changes
    create_effect({
        let navigate = navigate.clone();
        move |_| {
            let href = current_href();
            let session = session_state.session.get();

            let mut pending = PendingNavigation::default();
            let mut next = Render::Nothing;
            controller.update_value(|c| {
                c.on_location(&href);
                next = c.render(&session, &mut pending);
            });

            set_render.set(next);
            pending.flush(&navigate);
        }
    });

    let on_select = Callback::new(move |tab: Tab| {
        let mut pending = PendingNavigation::default();
        controller.update_value(|c| {
            c.select(tab, &mut pending);
        });
        pending.flush(&navigate);
    });

    view! {
        {move || match render.get() {
            Render::Page(page) => view! { <DashboardView page=page on_select=on_select /> }.into_view(),
            Render::Redirect { .. } | Render::Nothing => ().into_view(),
        }}
    }
}

/// Header, tab strip and the active layout
#[component]
fn DashboardView(page: Page, on_select: Callback<Tab>) -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{page.greeting}</h1>
                <p class="text-slate-600 mt-1">{page.subtitle}</p>
            </div>

            <div class="mb-8">
                <TabBar tabs=page.tabs on_select=on_select />
            </div>

            <LayoutView layout=page.layout />
        </div>
    }
}

#[component]
fn LayoutView(layout: Layout) -> impl IntoView {
    match layout {
        Layout::Overview { figures, rows } => view! {
            <div class="space-y-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    {figures.into_iter().map(|figure| view! { <SummaryCard figure=figure /> }).collect_view()}
                </div>

                {rows.into_iter().map(|[left, right]| view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div><TrackerView tracker=left /></div>
                        <div><TrackerView tracker=right /></div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_view(),
        Layout::Single { tracker } => view! {
            <div class="grid grid-cols-1 gap-6">
                <TrackerView tracker=tracker />
            </div>
        }
        .into_view(),
        Layout::Profile(card) => view! { <ProfileCard card=card /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_pending_navigation_flushes_in_order() {
        let mut pending = PendingNavigation::default();
        pending.navigate("/login");
        pending.navigate("/dashboard?tab=sleep");

        let seen = RefCell::new(Vec::new());
        pending.flush(&|href: &str, _: NavigateOptions| seen.borrow_mut().push(href.to_string()));

        assert_eq!(seen.into_inner(), ["/login", "/dashboard?tab=sleep"]);
    }
}
