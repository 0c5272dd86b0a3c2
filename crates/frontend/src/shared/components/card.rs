use leptos::prelude::*;

/// Rounded surface every dashboard widget sits on.
#[component]
pub fn Card(
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };
    view! { <div class=full_class>{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card__header">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <div class="card__title">{children()}</div> }
}

#[component]
pub fn CardContent(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card__content".to_string()
    } else {
        format!("card__content {}", class)
    };
    view! { <div class=full_class>{children()}</div> }
}
