use leptos::prelude::*;

/// Shimmering placeholder shown while a query has no data yet.
#[component]
pub fn Skeleton(#[prop(optional)] class: &'static str) -> impl IntoView {
    let full_class = if class.is_empty() {
        "skeleton".to_string()
    } else {
        format!("skeleton {}", class)
    };
    view! { <div class=full_class aria-hidden="true"></div> }
}
