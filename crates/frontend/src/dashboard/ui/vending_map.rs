use crate::i18n::{interpolate, use_i18n};
use contracts::dashboard::{MoneyStatus, SalesIndexItem};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 300.0;

/// Projection bounds around the demo cluster in central St. Petersburg.
const LAT_MIN: f64 = 59.915;
const LAT_MAX: f64 = 59.945;
const LNG_MIN: f64 = 30.285;
const LNG_MAX: f64 = 30.355;

/// Demo machine placements. The status endpoints carry no coordinates, so
/// the map joins these fixed points to the live lists by machine id.
const MAP_POINTS: [MapPoint; 5] = [
    MapPoint { machine_id: 1, machine_type: "A", lat: 59.9286, lng: 30.2929 },
    MapPoint { machine_id: 16, machine_type: "M", lat: 59.9304, lng: 30.3156 },
    MapPoint { machine_id: 124, machine_type: "B", lat: 59.9257, lng: 30.3354 },
    MapPoint { machine_id: 6512, machine_type: "B", lat: 59.942, lng: 30.3472 },
    MapPoint { machine_id: 62010, machine_type: "M", lat: 59.9189, lng: 30.3142 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct MapPoint {
    machine_id: u32,
    machine_type: &'static str,
    lat: f64,
    lng: f64,
}

/// Equirectangular projection into the SVG viewBox. Latitude grows north,
/// SVG y grows down, hence the flip.
fn project(lat: f64, lng: f64) -> (f64, f64) {
    let x = (lng - LNG_MIN) / (LNG_MAX - LNG_MIN) * VIEW_WIDTH;
    let y = (1.0 - (lat - LAT_MIN) / (LAT_MAX - LAT_MIN)) * VIEW_HEIGHT;
    (x, y)
}

/// Marker color from the machine's sales index. Grey until the index has
/// loaded or when the machine is missing from the response.
fn marker_color(sales_index: Option<i32>) -> &'static str {
    match sales_index {
        None => "#94a3b8",
        Some(p) if p >= 70 => "#16a34a",
        Some(p) if p >= 40 => "#f59e0b",
        Some(_) => "#ef4444",
    }
}

/// Mean of the two money compartments, rounded.
fn money_fill_mean(status: &MoneyStatus) -> i32 {
    let sum = status.coin_fill_percentage + status.banknotes_fill_percentage;
    (f64::from(sum) / 2.0).round() as i32
}

#[component]
pub fn VendingMap(
    sales_index: RwSignal<Option<Vec<SalesIndexItem>>>,
    money_fill: RwSignal<Option<Vec<MoneyStatus>>>,
) -> impl IntoView {
    let i18n = use_i18n();

    let markers = move || {
        let msg = i18n.messages();
        let index = sales_index.get();
        let money = money_fill.get();
        MAP_POINTS
            .iter()
            .map(|point| {
                let (cx, cy) = project(point.lat, point.lng);
                let pct = index.as_ref().and_then(|items| {
                    items
                        .iter()
                        .find(|x| x.machine_id == point.machine_id)
                        .map(|x| x.percentage)
                });
                let fill = marker_color(pct);

                let mut title = interpolate(
                    msg.map_vm_title,
                    &[
                        ("type", point.machine_type.to_string()),
                        ("id", point.machine_id.to_string()),
                    ],
                );
                if let Some(p) = pct {
                    title.push('\n');
                    title.push_str(&interpolate(
                        msg.map_sales_index,
                        &[("value", p.to_string())],
                    ));
                }
                if let Some(status) = money.as_ref().and_then(|items| {
                    items.iter().find(|x| x.machine_id == point.machine_id)
                }) {
                    title.push('\n');
                    title.push_str(&interpolate(
                        msg.map_money_fill,
                        &[("value", money_fill_mean(status).to_string())],
                    ));
                }

                view! {
                    <g class="map__marker">
                        <circle cx=cx cy=cy r=9.0 fill=fill stroke="#ffffff" stroke-width=2.0>
                            <title>{title}</title>
                        </circle>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg
            class="map"
            viewBox="0 0 600 300"
            role="img"
            preserveAspectRatio="xMidYMid meet"
        >
            <rect x=0.0 y=0.0 width=VIEW_WIDTH height=VIEW_HEIGHT rx=12.0 fill="#eef2f6" />
            {markers}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_flips_latitude() {
        let (_, y_north) = project(LAT_MAX, LNG_MIN);
        let (_, y_south) = project(LAT_MIN, LNG_MIN);
        assert!(y_north < y_south);
        assert_eq!(y_north, 0.0);
        assert_eq!(y_south, VIEW_HEIGHT);
    }

    #[test]
    fn all_demo_points_land_inside_the_viewbox() {
        for point in MAP_POINTS {
            let (x, y) = project(point.lat, point.lng);
            assert!((0.0..=VIEW_WIDTH).contains(&x), "x out of bounds: {x}");
            assert!((0.0..=VIEW_HEIGHT).contains(&y), "y out of bounds: {y}");
        }
    }

    #[test]
    fn marker_color_follows_health_thresholds() {
        assert_eq!(marker_color(None), "#94a3b8");
        assert_eq!(marker_color(Some(85)), "#16a34a");
        assert_eq!(marker_color(Some(70)), "#16a34a");
        assert_eq!(marker_color(Some(55)), "#f59e0b");
        assert_eq!(marker_color(Some(12)), "#ef4444");
    }

    #[test]
    fn money_fill_mean_rounds_half_up() {
        let status = MoneyStatus {
            machine_id: 1,
            machine_type: "A".to_string(),
            coin_fill_percentage: 40,
            banknotes_fill_percentage: 45,
        };
        assert_eq!(money_fill_mean(&status), 43);
    }
}
