use leptos::prelude::*;

/// Class for a single-letter machine-type chip. Only the two known fleet
/// types get distinct colors; anything else falls back to the neutral chip.
pub fn chip_class(machine_type: &str) -> &'static str {
    match machine_type {
        "B" => "chip chip--b",
        "M" => "chip chip--m",
        _ => "chip chip--other",
    }
}

/// Colored single-letter machine-type badge.
#[component]
pub fn MachineChip(machine_type: String) -> impl IntoView {
    let class = chip_class(&machine_type);
    view! { <span class=class>{machine_type}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_get_their_own_tone() {
        assert_eq!(chip_class("B"), "chip chip--b");
        assert_eq!(chip_class("M"), "chip chip--m");
        assert_eq!(chip_class("A"), "chip chip--other");
        assert_eq!(chip_class(""), "chip chip--other");
    }
}
