use leptos::prelude::*;

/// Pill-style tab strip bound to a signal.
///
/// Options are a reactive list so labels follow locale switches; the value
/// type is whatever enum the caller keys its tabs with.
#[component]
pub fn Segmented<T>(
    /// `(value, label)` pairs in display order.
    #[prop(into)]
    options: Signal<Vec<(T, String)>>,
    /// Currently selected value; clicking a tab writes it back.
    value: RwSignal<T>,
    #[prop(into)] aria_label: Signal<String>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="tabs" role="tablist" aria-label=move || aria_label.get()>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(option_value, label)| {
                        let selected_value = option_value.clone();
                        let is_selected = move || value.get() == selected_value;
                        let class = {
                            let is_selected = is_selected.clone();
                            move || {
                                if is_selected() {
                                    "tabs__tab tabs__tab--selected"
                                } else {
                                    "tabs__tab"
                                }
                            }
                        };
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=class
                                aria-selected=move || is_selected().to_string()
                                on:click=move |_| value.set(option_value.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
