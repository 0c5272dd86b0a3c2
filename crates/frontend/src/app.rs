use crate::dashboard::ui::page::DashboardPage;
use crate::i18n::I18n;
use crate::layout::shell::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the localization handle to the whole app via context. The
    // locale lives behind this handle, never in a module-level global.
    provide_context(I18n::new());

    view! {
        <Shell>
            <DashboardPage />
        </Shell>
    }
}
