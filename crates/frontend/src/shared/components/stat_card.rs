use super::card::Card;
use super::progress_bar::Tone;
use super::skeleton::Skeleton;
use crate::i18n::use_i18n;
use leptos::prelude::*;

/// Overview counter card: label, big value, optional share pill.
///
/// `value = None` renders the loading skeleton; the share pill is hidden
/// while the percentage cannot be computed yet.
#[component]
pub fn StatCard(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<Option<u32>>,
    #[prop(default = Tone::Primary)] tone: Tone,
    #[prop(into, optional)] pct: Signal<Option<i32>>,
) -> impl IntoView {
    let i18n = use_i18n();

    let value_class = match tone {
        Tone::Good => "stat-card__value stat-card__value--good",
        Tone::Warn => "stat-card__value stat-card__value--warn",
        Tone::Bad => "stat-card__value stat-card__value--bad",
        Tone::Primary => "stat-card__value",
    };

    view! {
        <Card class="stat-card">
            <div class="stat-card__top">
                <div class="stat-card__label">{move || label.get()}</div>
                <button
                    type="button"
                    class="stat-card__open"
                    aria-label=move || i18n.messages().open
                >
                    "\u{2197}"
                </button>
            </div>
            <div class="stat-card__bottom">
                {move || match value.get() {
                    Some(v) => view! { <div class=value_class>{v}</div> }.into_any(),
                    None => view! { <Skeleton class="skeleton--stat-value" /> }.into_any(),
                }}
                {move || {
                    pct.get()
                        .map(|p| view! { <div class="stat-card__pct">{p}"%"</div> })
                }}
            </div>
        </Card>
    }
}
