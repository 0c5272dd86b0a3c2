use crate::i18n::{interpolate, use_i18n};
use crate::shared::charts::bar_chart::{BarChart, BarDatum};
use crate::shared::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::shared::components::chip::MachineChip;
use crate::shared::components::go_to_report::GoToReportButton;
use crate::shared::components::progress_bar::{clamp_pct, health_tone, ProgressBar, Tone};
use crate::shared::components::skeleton::Skeleton;
use contracts::dashboard::{FillChartEntry, MoneyStatus, SalesIndexItem};
use leptos::prelude::*;

/// Tone for a cash compartment level. Unlike machine health, a low level is
/// not an alarm on its own, so the bottom band stays in the primary color.
fn money_tone(percentage: i32) -> Tone {
    if percentage >= 70 {
        Tone::Good
    } else if percentage >= 40 {
        Tone::Warn
    } else {
        Tone::Primary
    }
}

/// Machines whose fill dropped below this render as muted bars.
const LOW_FILL_THRESHOLD: i32 = 10;

fn fill_bar_data(entries: &[FillChartEntry], fill_label: &str) -> Vec<BarDatum> {
    entries
        .iter()
        .map(|e| BarDatum {
            name: e.name.clone(),
            value: e.item_count,
            pct: Some(e.fill_percentage),
            pill: Some(e.item_count),
            rank: None,
            muted: e.fill_percentage < LOW_FILL_THRESHOLD,
            title: format!("{}: {} ({}%)", e.name, fill_label, e.fill_percentage),
        })
        .collect()
}

#[component]
pub fn MachinesHealthSection(
    sales_index_loading: Signal<bool>,
    sales_index_top: Signal<Vec<SalesIndexItem>>,
    product_fill_loading: Signal<bool>,
    product_fill_total: Signal<Option<u32>>,
    product_fill_pct: Signal<Option<i32>>,
    product_fill_chart: Signal<Vec<FillChartEntry>>,
    money_fill_loading: Signal<bool>,
    money_fill_top: Signal<Vec<MoneyStatus>>,
) -> impl IntoView {
    let i18n = use_i18n();

    let fill_bars = Signal::derive(move || {
        fill_bar_data(&product_fill_chart.get(), i18n.messages().tooltip_fill)
    });

    view! {
        <section class="section">
            <h2 class="section__title">
                {move || i18n.messages().section_machines_health}
            </h2>
            <div class="section__grid section__grid--health">
                <Card>
                    <CardHeader>
                        <CardTitle>
                            {move || i18n.messages().card_sales_index_title}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <Show
                            when=move || !sales_index_loading.get()
                            fallback=|| view! { <Skeleton class="skeleton--list" /> }
                        >
                            <div class="index-list">
                                {move || {
                                    sales_index_top
                                        .get()
                                        .into_iter()
                                        .map(|item| {
                                            let pct = clamp_pct(item.percentage);
                                            view! {
                                                <div class="index-list__row">
                                                    <MachineChip machine_type=item.machine_type />
                                                    <span class="index-list__id">
                                                        {format!("#{}", item.machine_id)}
                                                    </span>
                                                    <span class="index-list__pct">{pct}"%"</span>
                                                    <ProgressBar value=pct tone=health_tone(pct) />
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                        <GoToReportButton />
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>
                            {move || i18n.messages().card_product_fill_title}
                        </CardTitle>
                        <div class="card__subtitle">
                            {move || i18n.messages().card_product_fill_subtitle}
                            {move || {
                                product_fill_total
                                    .get()
                                    .map(|total| {
                                        let pct = product_fill_pct.get();
                                        view! {
                                            <span class="card__subtitle-stat">
                                                {total}
                                                {pct.map(|p| format!(" ({p}%)"))}
                                            </span>
                                        }
                                    })
                            }}
                        </div>
                    </CardHeader>
                    <CardContent>
                        <Show
                            when=move || !product_fill_loading.get()
                            fallback=|| view! { <Skeleton class="skeleton--chart" /> }
                        >
                            <BarChart
                                data=fill_bars
                                pct_suffix=" %"
                                pill_bottom_offset=10.0
                                pill_min_top_inset=6.0
                            />
                        </Show>
                        <GoToReportButton />
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>
                            {move || i18n.messages().card_money_fill_title}
                        </CardTitle>
                        <div class="card__subtitle">
                            {move || i18n.messages().card_money_fill_subtitle}
                        </div>
                    </CardHeader>
                    <CardContent>
                        <Show
                            when=move || !money_fill_loading.get()
                            fallback=|| view! { <Skeleton class="skeleton--list" /> }
                        >
                            <div class="money-list">
                                {move || {
                                    let msg = i18n.messages();
                                    money_fill_top
                                        .get()
                                        .into_iter()
                                        .map(|item| money_row(&item, msg.money_coins, msg.money_banknotes, msg.map_vm_title))
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                        <GoToReportButton />
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}

fn money_row(
    item: &MoneyStatus,
    coins_label: &'static str,
    banknotes_label: &'static str,
    vm_title: &'static str,
) -> impl IntoView {
    let title = interpolate(
        vm_title,
        &[
            ("type", item.machine_type.clone()),
            ("id", item.machine_id.to_string()),
        ],
    );
    let coins = clamp_pct(item.coin_fill_percentage);
    let banknotes = clamp_pct(item.banknotes_fill_percentage);
    let machine_type = item.machine_type.clone();

    view! {
        <div class="money-list__row">
            <MachineChip machine_type=machine_type />
            <span class="money-list__title">{title}</span>
            <div class="money-list__bars">
                <span class="money-list__label">{coins_label}</span>
                <ProgressBar value=coins tone=money_tone(coins) small=true />
                <span class="money-list__pct">{coins}"%"</span>
                <span class="money-list__label">{banknotes_label}</span>
                <ProgressBar value=banknotes tone=money_tone(banknotes) small=true />
                <span class="money-list__pct">{banknotes}"%"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_fill_machines_are_muted_in_the_chart() {
        let entries = vec![
            FillChartEntry { name: "#1".into(), item_count: 3, fill_percentage: 8 },
            FillChartEntry { name: "#2".into(), item_count: 40, fill_percentage: 55 },
        ];
        let bars = fill_bar_data(&entries, "fill");
        assert!(bars[0].muted);
        assert!(!bars[1].muted);
        assert_eq!(bars[0].pill, Some(3));
        assert_eq!(bars[1].pct, Some(55));
        assert_eq!(bars[1].title, "#2: fill (55%)");
    }

    #[test]
    fn money_tone_never_alarms_on_empty_compartments() {
        assert_eq!(money_tone(85), Tone::Good);
        assert_eq!(money_tone(50), Tone::Warn);
        assert_eq!(money_tone(5), Tone::Primary);
    }
}
