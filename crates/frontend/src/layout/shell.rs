use super::sidebar::Sidebar;
use super::topbar::Topbar;
use leptos::prelude::*;

/// Application frame: fixed sidebar on the left, topbar over the content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Topbar />
                <main class="shell__content">
                    <div class="shell__content-inner">{children()}</div>
                </main>
            </div>
        </div>
    }
}
