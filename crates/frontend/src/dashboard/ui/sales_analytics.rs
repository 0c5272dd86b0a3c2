use crate::i18n::{interpolate, use_i18n};
use crate::shared::charts::bar_chart::{BarChart, BarDatum};
use crate::shared::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::shared::components::go_to_report::GoToReportButton;
use crate::shared::components::segmented::Segmented;
use crate::shared::components::skeleton::Skeleton;
use contracts::dashboard::{
    percent_of, rank_top3, ChartEntry, MachineSalesOverview, ProductSalesOverview,
};
use leptos::prelude::*;

/// Tabs of the "popular" card. Category analytics is not served by the
/// backend yet, so that tab renders a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularTabKey {
    Products,
    Categories,
}

/// Turns ranked chart entries into bars. The "other" bucket renders muted
/// and never carries a medal; `with_pills` additionally prints the raw
/// totals near the bar bottoms.
fn sales_bar_data(entries: &[ChartEntry], sales_label: &str, with_pills: bool) -> Vec<BarDatum> {
    let ranks = rank_top3(entries);
    entries
        .iter()
        .zip(ranks)
        .map(|(e, rank)| BarDatum {
            name: e.name.clone(),
            value: e.total,
            pct: Some(e.pct),
            pill: with_pills.then_some(e.total),
            rank,
            muted: e.is_other,
            title: format!("{}: {} ({}%)", sales_label, e.total, e.pct),
        })
        .collect()
}

#[component]
pub fn SalesAnalyticsSection(
    sales_by_vm: RwSignal<Option<MachineSalesOverview>>,
    #[prop(into)] vm_chart: Signal<Vec<ChartEntry>>,
    sales_by_product: RwSignal<Option<ProductSalesOverview>>,
    #[prop(into)] product_chart: Signal<Vec<ChartEntry>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let popular_tab = RwSignal::new(PopularTabKey::Products);

    let vm_bars = Signal::derive(move || {
        sales_bar_data(&vm_chart.get(), i18n.messages().tooltip_sales, false)
    });
    let product_bars = Signal::derive(move || {
        sales_bar_data(&product_chart.get(), i18n.messages().tooltip_sales, true)
    });

    let vm_top5_pct = Signal::derive(move || {
        let data = sales_by_vm.get();
        percent_of(
            data.as_ref().map(|d| d.sold_in_top_five),
            data.as_ref().map(|d| d.total_sales),
        )
    });
    let product_top5_pct = Signal::derive(move || {
        let data = sales_by_product.get();
        percent_of(
            data.as_ref().map(|d| d.sold_in_top_five),
            data.as_ref().map(|d| d.total_sold),
        )
    });

    let popular_options = Signal::derive(move || {
        let msg = i18n.messages();
        vec![
            (PopularTabKey::Products, msg.tab_products.to_string()),
            (PopularTabKey::Categories, msg.tab_categories.to_string()),
        ]
    });
    let aria_label = Signal::derive(move || i18n.messages().segmented_aria.to_string());

    view! {
        <section class="section">
            <h2 class="section__title">
                {move || i18n.messages().section_sales_analytics}
            </h2>
            <div class="section__grid section__grid--sales">
                <Card>
                    <CardHeader>
                        <CardTitle>
                            {move || i18n.messages().card_sales_by_vm_title}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="stat-tiles">
                            {move || {
                                stat_tile(
                                    i18n.messages().card_total_sold_units,
                                    sales_by_vm.get().map(|d| d.total_sales),
                                    None,
                                )
                            }}
                            {move || {
                                stat_tile(
                                    i18n.messages().card_sold_in_top5_machines,
                                    sales_by_vm.get().map(|d| d.sold_in_top_five),
                                    vm_top5_pct.get(),
                                )
                            }}
                        </div>
                        <Show
                            when=move || sales_by_vm.get().is_some()
                            fallback=|| view! { <Skeleton class="skeleton--chart" /> }
                        >
                            <BarChart data=vm_bars />
                        </Show>
                        <GoToReportButton />
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>
                            {move || i18n.messages().card_popular_title}
                        </CardTitle>
                        <Segmented options=popular_options value=popular_tab aria_label=aria_label />
                    </CardHeader>
                    <CardContent>
                        {move || match popular_tab.get() {
                            PopularTabKey::Products => view! {
                                <div class="stat-tiles">
                                    {move || {
                                        stat_tile(
                                            i18n.messages().card_sold_in_top5_products,
                                            sales_by_product.get().map(|d| d.sold_in_top_five),
                                            product_top5_pct.get(),
                                        )
                                    }}
                                    {move || {
                                        stat_tile(
                                            i18n.messages().card_categories_in_top5,
                                            sales_by_product
                                                .get()
                                                .map(|d| d.different_product_categories_count),
                                            None,
                                        )
                                    }}
                                </div>
                                <Show
                                    when=move || sales_by_product.get().is_some()
                                    fallback=|| view! { <Skeleton class="skeleton--chart" /> }
                                >
                                    <BarChart data=product_bars />
                                </Show>
                            }
                            .into_any(),
                            PopularTabKey::Categories => view! {
                                <div class="card__placeholder">
                                    {move || {
                                        let msg = i18n.messages();
                                        interpolate(
                                            msg.demo_tab,
                                            &[("tab", msg.tab_categories.to_string())],
                                        )
                                    }}
                                </div>
                            }
                            .into_any(),
                        }}
                        <GoToReportButton />
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}

fn stat_tile(label: &'static str, value: Option<u32>, pct: Option<i32>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-tile__label">{label}</div>
            <div class="stat-tile__value">
                {match value {
                    Some(v) => view! { <span>{v}</span> }.into_any(),
                    None => view! { <Skeleton class="skeleton--stat-value" /> }.into_any(),
                }}
                {pct.map(|p| view! { <span class="stat-tile__pct">{p}"%"</span> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<ChartEntry> {
        vec![
            ChartEntry { name: "VM 1".into(), total: 30, pct: 12, is_other: false },
            ChartEntry { name: "VM 2".into(), total: 90, pct: 36, is_other: false },
            ChartEntry { name: "VM 3".into(), total: 10, pct: 4, is_other: false },
            ChartEntry { name: "Other".into(), total: 120, pct: 48, is_other: true },
        ]
    }

    #[test]
    fn bars_carry_ranks_and_mute_the_other_bucket() {
        let bars = sales_bar_data(&entries(), "Sales", false);
        assert_eq!(bars[1].rank, Some(0));
        assert_eq!(bars[0].rank, Some(1));
        assert_eq!(bars[2].rank, Some(2));
        assert_eq!(bars[3].rank, None);
        assert!(bars[3].muted);
        assert!(bars.iter().all(|b| b.pill.is_none()));
    }

    #[test]
    fn pills_show_raw_totals_when_requested() {
        let bars = sales_bar_data(&entries(), "Sales", true);
        assert_eq!(bars[0].pill, Some(30));
        assert_eq!(bars[0].title, "Sales: 30 (12%)");
    }
}
