use crate::i18n::use_i18n;
use leptos::prelude::*;

/// "Go to report" footer link every card carries. The report pages
/// themselves live outside this dashboard.
#[component]
pub fn GoToReportButton() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <button type="button" class="go-to-report">
            {move || i18n.messages().go_to_report}
            <span class="go-to-report__arrow" aria-hidden="true">"\u{2192}"</span>
        </button>
    }
}
