use crate::i18n::use_i18n;
use leptos::prelude::*;

/// Static navigation rail. Only the monitoring entry is live; the other
/// sections belong to sibling applications reachable from here.
#[component]
pub fn Sidebar() -> impl IntoView {
    let i18n = use_i18n();

    let nav_items = move || {
        let msg = i18n.messages();
        vec![
            (msg.nav_monitoring, true),
            (msg.nav_remote_control, false),
            (msg.nav_registration, false),
            (msg.nav_decommission, false),
            (msg.nav_reports, false),
            (msg.nav_requests, false),
        ]
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__region">
                <div class="sidebar__region-name">
                    {move || i18n.messages().sidebar_region_district}
                </div>
                <div class="sidebar__location">{move || i18n.messages().sidebar_location}</div>
            </div>
            <div class="sidebar__section-title">
                {move || i18n.messages().sidebar_admin_monitoring}
            </div>
            <nav class="sidebar__nav">
                {move || {
                    nav_items()
                        .into_iter()
                        .map(|(label, active)| {
                            let class = if active {
                                "sidebar__nav-item sidebar__nav-item--active"
                            } else {
                                "sidebar__nav-item"
                            };
                            view! { <a class=class href="#">{label}</a> }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
