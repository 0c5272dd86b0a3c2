use super::geometry::{
    bar_height, pct_label_on_fill, rank_badge_origin, value_pill_frame, LabelBox,
};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 220.0;
/// Chart margin reserved for the percent-label row.
const TOP_MARGIN: f64 = 34.0;
/// Floor for bar height so tiny values stay visible under their pill.
const MIN_BAR_HEIGHT: f64 = 34.0;
const PCT_LABEL_Y: f64 = 20.0;
const TRACK_FILL: &str = "rgba(0,0,0,0.04)";
const PRIMARY_FILL: &str = "var(--primary)";
const MUTED_FILL: &str = "rgba(71,84,103,0.78)";

/// One bar with its optional overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub name: String,
    /// Drives the bar height.
    pub value: u32,
    /// Percent label pinned to the top row, when present.
    pub pct: Option<i32>,
    /// Value pill near the bar bottom, when present.
    pub pill: Option<u32>,
    /// Medal badge rank 0/1/2, when present.
    pub rank: Option<u8>,
    /// Muted fill for the "other" bucket / lowlighted bars.
    pub muted: bool,
    /// Native tooltip text.
    pub title: String,
}

/// Generic SVG bar chart with rounded tracks and the three label overlays.
/// Bars render in data order; the data is expected pre-ranked.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<BarDatum>>,
    /// Maximum bar width; narrow slots shrink below it.
    #[prop(default = 56.0)]
    bar_size: f64,
    /// Suffix of the percent labels ("%" or " %").
    #[prop(default = "%")]
    pct_suffix: &'static str,
    #[prop(default = 8.0)] pill_bottom_offset: f64,
    /// Keeps pills inside very short bars, see `geometry::value_pill_frame`.
    #[prop(optional)]
    pill_min_top_inset: Option<f64>,
) -> impl IntoView {
    let bars = move || {
        let data = data.get();
        if data.is_empty() {
            return Vec::new();
        }
        let max_value = data.iter().map(|d| d.value).max().unwrap_or(0);
        let slot = VIEW_WIDTH / data.len() as f64;
        let width = bar_size.min(slot * 0.8);
        let track_height = VIEW_HEIGHT - TOP_MARGIN;

        data.into_iter()
            .enumerate()
            .map(|(i, d)| {
                let height =
                    bar_height(d.value, max_value, VIEW_HEIGHT - TOP_MARGIN, MIN_BAR_HEIGHT);
                let bar = LabelBox {
                    x: slot * i as f64 + (slot - width) / 2.0,
                    y: VIEW_HEIGHT - height,
                    width,
                    height,
                };
                let fill = if d.muted { MUTED_FILL } else { PRIMARY_FILL };

                let pct_label = d.pct.map(|p| {
                    let on_fill = pct_label_on_fill(PCT_LABEL_Y, bar.y);
                    let (text_fill, stroke, stroke_width) = if on_fill {
                        ("rgba(255,255,255,0.96)", "rgba(0,0,0,0.18)", 2.0)
                    } else {
                        ("rgba(71,84,103,0.55)", "transparent", 0.0)
                    };
                    view! {
                        <text
                            x=bar.cx()
                            y=PCT_LABEL_Y
                            text-anchor="middle"
                            font-size="12"
                            font-weight="600"
                            fill=text_fill
                            stroke=stroke
                            stroke-width=stroke_width
                            paint-order="stroke"
                        >
                            {format!("{}{}", p, pct_suffix)}
                        </text>
                    }
                });

                let pill = d.pill.map(|v| {
                    let label = v.to_string();
                    let frame =
                        value_pill_frame(bar, &label, pill_bottom_offset, pill_min_top_inset);
                    view! {
                        <rect
                            x=frame.x
                            y=frame.y
                            width=frame.width
                            height=frame.height
                            rx="10"
                            ry="10"
                            fill="#ffffff"
                            stroke="rgba(16,24,40,0.08)"
                        ></rect>
                        <text
                            x=frame.text_x
                            y=frame.text_y
                            text-anchor="middle"
                            font-size="12"
                            font-weight="600"
                            fill="rgba(16,24,40,0.92)"
                        >
                            {label}
                        </text>
                    }
                });

                let badge = d
                    .rank
                    .filter(|_| !d.muted)
                    .map(|rank| rank_badge(rank, rank_badge_origin(bar, PCT_LABEL_Y)));

                view! {
                    <g>
                        <rect
                            x=bar.x
                            y=TOP_MARGIN
                            width=bar.width
                            height=track_height
                            rx="16"
                            fill=TRACK_FILL
                        ></rect>
                        <rect
                            x=bar.x
                            y=bar.y
                            width=bar.width
                            height=bar.height
                            rx="16"
                            fill=fill
                        >
                            <title>{d.title.clone()}</title>
                        </rect>
                        {pct_label}
                        {pill}
                        {badge}
                    </g>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <svg
            class="chart chart--bar"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            {bars}
        </svg>
    }
}

/// Gold, silver and bronze medals for the top-3 bars.
fn rank_badge(rank: u8, origin: (f64, f64)) -> AnyView {
    let transform = format!("translate({},{})", origin.0, origin.1);
    match rank {
        0 => view! {
            <g transform=transform>
                <circle cx="8" cy="8" r="8" fill="#FEC84B"></circle>
                <rect x="7.4" y="3.6" width="1.2" height="8.4" fill="#F79009"></rect>
            </g>
        }
        .into_any(),
        1 => view! {
            <g transform=transform>
                <circle cx="8" cy="8" r="8" fill="#D0D5DD"></circle>
                <rect x="5.545" y="3.6" width="1.2" height="8.4" fill="#98A2B3"></rect>
                <rect x="9.26" y="3.6" width="1.2" height="8.4" fill="#98A2B3"></rect>
            </g>
        }
        .into_any(),
        _ => view! {
            <g transform=transform>
                <circle cx="8" cy="8" r="8" fill="#93370D"></circle>
                <rect x="3.688" y="3.6" width="1.2" height="8.4" fill="#F77416"></rect>
                <rect x="7.403" y="3.6" width="1.2" height="8.4" fill="#F77416"></rect>
                <rect x="11.117" y="3.6" width="1.2" height="8.4" fill="#F77416"></rect>
            </g>
        }
        .into_any(),
    }
}
