use leptos::prelude::*;

/// Color tone of a progress bar or stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Good,
    Warn,
    Bad,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Primary => "progress__bar--primary",
            Tone::Good => "progress__bar--good",
            Tone::Warn => "progress__bar--warn",
            Tone::Bad => "progress__bar--bad",
        }
    }
}

/// Tone for a 0–100 health value: green from 70, amber from 40, red below.
pub fn health_tone(percentage: i32) -> Tone {
    if percentage >= 70 {
        Tone::Good
    } else if percentage >= 40 {
        Tone::Warn
    } else {
        Tone::Bad
    }
}

/// Clamps a backend percentage into the renderable 0–100 range. The source
/// does not guarantee the bound, so every consumer clamps before rendering.
pub fn clamp_pct(value: i32) -> i32 {
    value.clamp(0, 100)
}

#[component]
pub fn ProgressBar(
    /// 0–100; out-of-range input is clamped.
    #[prop(into)]
    value: Signal<i32>,
    #[prop(default = Tone::Primary)] tone: Tone,
    /// Thin variant for dense rows.
    #[prop(optional)]
    small: bool,
) -> impl IntoView {
    let track_class = if small {
        "progress progress--thin"
    } else {
        "progress"
    };
    let bar_class = move || format!("progress__bar {}", tone.class());
    let width = move || format!("width: {}%", clamp_pct(value.get()));

    view! {
        <div
            class=track_class
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || clamp_pct(value.get()).to_string()
        >
            <div class=bar_class style=width></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_percentages() {
        assert_eq!(clamp_pct(-5), 0);
        assert_eq!(clamp_pct(0), 0);
        assert_eq!(clamp_pct(55), 55);
        assert_eq!(clamp_pct(140), 100);
    }

    #[test]
    fn health_tone_thresholds() {
        assert_eq!(health_tone(70), Tone::Good);
        assert_eq!(health_tone(69), Tone::Warn);
        assert_eq!(health_tone(40), Tone::Warn);
        assert_eq!(health_tone(39), Tone::Bad);
    }
}
