//! Tab strip for the host dashboard.

use leptos::prelude::*;

use crate::state::dashboard::DashboardTab;

#[component]
pub fn DashboardTabs(#[prop(into)] active: Signal<DashboardTab>, on_select: Callback<DashboardTab>) -> impl IntoView {
    view! {
        <nav class="dashboard-tabs" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="dashboard-tabs__tab"
                            class:dashboard-tabs__tab--active=move || active.get() == tab
                            aria-selected=move || if active.get() == tab { "true" } else { "false" }
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
