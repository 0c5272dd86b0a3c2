use crate::i18n::use_i18n;
use crate::shared::components::segmented::Segmented;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

/// Reporting-period presets. Only a display control for now: the data
/// queries take no period parameter yet, so switching presets does not
/// refetch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKey {
    Today,
    Yesterday,
    Week,
    Month,
    Quarter,
}

/// "01.08.2026 - 30.08.2026" style label for the custom-range button,
/// spanning the first day of the current month through today.
fn current_month_range_label() -> String {
    let today = Utc::now().date_naive();
    let first = today.with_day(1).unwrap_or(today);
    format!(
        "{} - {}",
        first.format("%d.%m.%Y"),
        today.format("%d.%m.%Y")
    )
}

#[component]
pub fn DashboardControlsBar() -> impl IntoView {
    let i18n = use_i18n();
    let period = RwSignal::new(PeriodKey::Month);

    let options = Signal::derive(move || {
        let msg = i18n.messages();
        vec![
            (PeriodKey::Today, msg.period_today.to_string()),
            (PeriodKey::Yesterday, msg.period_yesterday.to_string()),
            (PeriodKey::Week, msg.period_week.to_string()),
            (PeriodKey::Month, msg.period_month.to_string()),
            (PeriodKey::Quarter, msg.period_quarter.to_string()),
        ]
    });
    let aria_label = Signal::derive(move || i18n.messages().segmented_aria.to_string());
    let range_label = current_month_range_label();

    view! {
        <div class="controls-bar">
            <Segmented options=options value=period aria_label=aria_label />
            <button class="controls-bar__range" type="button">
                {range_label}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_spans_month_start_to_today() {
        let label = current_month_range_label();
        let (from, to) = label.split_once(" - ").unwrap();
        assert!(from.starts_with("01."));
        assert_eq!(&from[2..], &to[2..]);
    }
}
