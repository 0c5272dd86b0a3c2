use crate::i18n::use_i18n;
use crate::shared::components::progress_bar::Tone;
use crate::shared::components::stat_card::StatCard;
use contracts::dashboard::{percent_of, MachinesOverview};
use leptos::prelude::*;

/// Four headline counters for the fleet, each with its share of the fleet
/// as a pill. Shares hide (no pill) while the overview is still loading or
/// when the fleet size is zero.
#[component]
pub fn OverviewStatsGrid(overview: RwSignal<Option<MachinesOverview>>) -> impl IntoView {
    let i18n = use_i18n();

    let total = Signal::derive(move || overview.get().map(|o| o.total));
    let working = Signal::derive(move || overview.get().map(|o| o.working));
    let low_supply = Signal::derive(move || overview.get().map(|o| o.low_supply));
    let needs_repair = Signal::derive(move || overview.get().map(|o| o.needs_repair));

    let working_pct = Signal::derive(move || percent_of(working.get(), total.get()));
    let low_supply_pct = Signal::derive(move || percent_of(low_supply.get(), total.get()));
    let needs_repair_pct = Signal::derive(move || percent_of(needs_repair.get(), total.get()));

    view! {
        <div class="stats-grid">
            <StatCard
                label=Signal::derive(move || i18n.messages().stat_total_machines.to_string())
                value=total
            />
            <StatCard
                label=Signal::derive(move || i18n.messages().stat_working.to_string())
                value=working
                tone=Tone::Good
                pct=working_pct
            />
            <StatCard
                label=Signal::derive(move || i18n.messages().stat_low_supply.to_string())
                value=low_supply
                tone=Tone::Warn
                pct=low_supply_pct
            />
            <StatCard
                label=Signal::derive(move || i18n.messages().stat_needs_repair.to_string())
                value=needs_repair
                tone=Tone::Bad
                pct=needs_repair_pct
            />
        </div>
    }
}
