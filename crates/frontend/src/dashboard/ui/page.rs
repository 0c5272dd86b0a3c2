use crate::dashboard::api;
use crate::dashboard::ui::controls_bar::DashboardControlsBar;
use crate::dashboard::ui::machines_health::MachinesHealthSection;
use crate::dashboard::ui::map_card::VendingMapCard;
use crate::dashboard::ui::overview_stats::OverviewStatsGrid;
use crate::dashboard::ui::peak_sales::PeakSalesSection;
use crate::dashboard::ui::sales_analytics::SalesAnalyticsSection;
use crate::i18n::use_i18n;
use contracts::dashboard::{
    chart_data, peak_time, ItemFillOverview, MachineSalesOverview, MachinesOverview, MoneyStatus,
    PeakSaleTimeAtDay, ProductSalesOverview, SalesIndexItem,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fires one query and parks the result in its signal. A failed query is
/// logged and leaves the signal `None`, which the widgets render as a
/// skeleton; the other queries are unaffected.
macro_rules! load_query {
    ($signal:ident, $query:path, $what:literal) => {
        spawn_local(async move {
            match $query().await {
                Ok(data) => $signal.set(Some(data)),
                Err(err) => log::error!(concat!("Failed to load ", $what, ": {}"), err),
            }
        });
    };
}

/// The single dashboard page: seven independent queries, each feeding the
/// derived chart signals below. Re-deriving is idempotent, so widgets can
/// refresh in any order as responses arrive.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();

    let overview = RwSignal::new(None::<MachinesOverview>);
    let sales_index = RwSignal::new(None::<Vec<SalesIndexItem>>);
    let product_fill = RwSignal::new(None::<ItemFillOverview>);
    let money_fill = RwSignal::new(None::<Vec<MoneyStatus>>);
    let sales_by_vm = RwSignal::new(None::<MachineSalesOverview>);
    let sales_by_product = RwSignal::new(None::<ProductSalesOverview>);
    let peak_times = RwSignal::new(None::<Vec<PeakSaleTimeAtDay>>);

    load_query!(overview, api::machines_overview, "machines overview");
    load_query!(sales_index, api::sales_index_by_historic_avg, "sales index");
    load_query!(product_fill, api::machines_product_fill, "product fill");
    load_query!(money_fill, api::machines_money_fill, "money fill");
    load_query!(sales_by_vm, api::sales_by_vending_machine, "sales by machine");
    load_query!(sales_by_product, api::sales_by_product_type, "sales by product");
    load_query!(peak_times, api::peak_sale_count_per_day, "peak sale times");

    let sales_index_top = Signal::derive(move || {
        sales_index
            .get()
            .map(|items| chart_data::sales_index_top(&items))
            .unwrap_or_default()
    });

    let product_fill_chart = Signal::derive(move || {
        product_fill
            .get()
            .map(|data| chart_data::product_fill_chart(&data))
            .unwrap_or_default()
    });

    // share of the fleet that needs restocking
    let product_fill_pct = Signal::derive(move || {
        chart_data::percent_of(
            product_fill.get().map(|data| data.total),
            overview.get().map(|o| o.total),
        )
    });

    let money_fill_top = Signal::derive(move || {
        money_fill
            .get()
            .map(|items| chart_data::money_fill_top(&items))
            .unwrap_or_default()
    });

    let vm_chart = Signal::derive(move || {
        sales_by_vm
            .get()
            .map(|data| {
                let msg = i18n.messages();
                chart_data::machine_sales_chart(&data, msg.tooltip_vm, msg.other)
            })
            .unwrap_or_default()
    });

    let product_chart = Signal::derive(move || {
        sales_by_product
            .get()
            .map(|data| chart_data::product_sales_chart(&data, i18n.messages().other))
            .unwrap_or_default()
    });

    let peak_points = Signal::derive(move || {
        peak_times
            .get()
            .map(|items| peak_time::peak_chart(&items))
            .unwrap_or_default()
    });
    let peak_loading = Signal::derive(move || peak_times.get().is_none());

    view! {
        <div class="dashboard">
            <DashboardControlsBar />
            <OverviewStatsGrid overview=overview />
            <VendingMapCard sales_index=sales_index money_fill=money_fill />
            <MachinesHealthSection
                sales_index_loading=Signal::derive(move || sales_index.get().is_none())
                sales_index_top=sales_index_top
                product_fill_loading=Signal::derive(move || product_fill.get().is_none())
                product_fill_total=Signal::derive(move || {
                    product_fill.get().map(|data| data.total)
                })
                product_fill_pct=product_fill_pct
                product_fill_chart=product_fill_chart
                money_fill_loading=Signal::derive(move || money_fill.get().is_none())
                money_fill_top=money_fill_top
            />
            <SalesAnalyticsSection
                sales_by_vm=sales_by_vm
                vm_chart=vm_chart
                sales_by_product=sales_by_product
                product_chart=product_chart
            />
            <PeakSalesSection peak_loading=peak_loading peak_points=peak_points />
        </div>
    }
}
