use crate::dashboard::ui::vending_map::VendingMap;
use crate::i18n::{interpolate, use_i18n};
use crate::shared::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::shared::components::segmented::Segmented;
use contracts::dashboard::{MoneyStatus, SalesIndexItem};
use leptos::prelude::*;

/// Map overlay modes. Only the status layer is wired to data; the other
/// three are demo placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTabKey {
    Status,
    AvgRevenue,
    Downtime,
    FillLevel,
}

#[component]
pub fn VendingMapCard(
    sales_index: RwSignal<Option<Vec<SalesIndexItem>>>,
    money_fill: RwSignal<Option<Vec<MoneyStatus>>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let tab = RwSignal::new(MapTabKey::Status);

    let options = Signal::derive(move || {
        let msg = i18n.messages();
        vec![
            (MapTabKey::Status, msg.map_tab_status.to_string()),
            (MapTabKey::AvgRevenue, msg.map_tab_avg_revenue.to_string()),
            (MapTabKey::Downtime, msg.map_tab_downtime.to_string()),
            (MapTabKey::FillLevel, msg.map_tab_fill_level.to_string()),
        ]
    });
    let aria_label = Signal::derive(move || i18n.messages().segmented_aria.to_string());

    view! {
        <Card class="map-card">
            <CardHeader>
                <CardTitle>
                    {move || i18n.messages().section_machines_health}
                </CardTitle>
            </CardHeader>
            <CardContent>
                {move || match tab.get() {
                    MapTabKey::Status => view! {
                        <VendingMap sales_index=sales_index money_fill=money_fill />
                    }
                    .into_any(),
                    _ => view! {
                        <div class="map-card__placeholder">
                            {move || {
                                let msg = i18n.messages();
                                let tab_name = match tab.get() {
                                    MapTabKey::Status => msg.map_tab_status,
                                    MapTabKey::AvgRevenue => msg.map_tab_avg_revenue,
                                    MapTabKey::Downtime => msg.map_tab_downtime,
                                    MapTabKey::FillLevel => msg.map_tab_fill_level,
                                };
                                interpolate(msg.demo_tab, &[("tab", tab_name.to_string())])
                            }}
                        </div>
                    }
                    .into_any(),
                }}
                <div class="map-card__tabs">
                    <Segmented options=options value=tab aria_label=aria_label />
                </div>
            </CardContent>
        </Card>
    }
}
