use crate::i18n::{use_i18n, Locale};
use leptos::prelude::*;

/// Top chrome: search box, refresh stamp, locale switch, profile stub.
#[component]
pub fn Topbar() -> impl IntoView {
    let i18n = use_i18n();

    let other_locale = move || match i18n.locale() {
        Locale::Ru => Locale::En,
        Locale::En => Locale::Ru,
    };

    view! {
        <header class="topbar">
            <input
                class="topbar__search"
                type="search"
                placeholder=move || i18n.messages().topbar_search
                aria-label=move || i18n.messages().topbar_search
            />
            <div class="topbar__right">
                <span class="topbar__refreshed">{move || i18n.messages().topbar_refreshed}</span>
                <button
                    type="button"
                    class="topbar__lang"
                    aria-label=move || i18n.messages().topbar_language
                    on:click=move |_| i18n.set_locale(other_locale())
                >
                    {move || other_locale().code().to_uppercase()}
                </button>
                <button
                    type="button"
                    class="topbar__bell"
                    aria-label=move || i18n.messages().topbar_notifications
                >
                    "\u{1f514}"
                </button>
                <div class="topbar__profile">
                    <span class="topbar__profile-name">
                        {move || i18n.messages().topbar_admin}
                    </span>
                    <span class="topbar__profile-city">
                        {move || i18n.messages().topbar_city}
                    </span>
                </div>
            </div>
        </header>
    }
}
