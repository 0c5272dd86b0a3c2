use leptos::prelude::*;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 240.0;
/// Margin reserved for the day-part band labels on the left.
const LEFT_MARGIN: f64 = 96.0;
const RIGHT_MARGIN: f64 = 8.0;
const TOP_MARGIN: f64 = 8.0;
/// Margin reserved for day ticks along the bottom.
const BOTTOM_MARGIN: f64 = 20.0;

const PLOT_WIDTH: f64 = VIEW_WIDTH - LEFT_MARGIN - RIGHT_MARGIN;
const PLOT_HEIGHT: f64 = VIEW_HEIGHT - TOP_MARGIN - BOTTOM_MARGIN;

/// One point of the banded area chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPoint {
    /// X-axis tick label (calendar day).
    pub x_label: String,
    /// Band index, `0..band_count`; 0 renders at the bottom.
    pub band: usize,
    /// Native tooltip text on the dot.
    pub title: String,
}

/// Evenly spread x coordinates across the plot; a single point centers.
fn x_positions(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![LEFT_MARGIN + PLOT_WIDTH / 2.0],
        _ => (0..count)
            .map(|i| LEFT_MARGIN + PLOT_WIDTH * i as f64 / (count - 1) as f64)
            .collect(),
    }
}

fn band_y(band: usize, band_count: usize) -> f64 {
    let top_band = (band_count.max(2) - 1) as f64;
    let clamped = (band as f64).min(top_band);
    TOP_MARGIN + PLOT_HEIGHT * (1.0 - clamped / top_band)
}

/// Area/line chart over a small fixed set of ordinal bands.
///
/// Built for the peak-sales view: y is not a continuous scale but the six
/// day-part bands, labeled on the left; x ticks are calendar days.
#[component]
pub fn BandAreaChart(
    #[prop(into)] data: Signal<Vec<AreaPoint>>,
    /// Band labels, bottom to top. Their count fixes the y scale.
    band_labels: Vec<&'static str>,
) -> impl IntoView {
    let band_count = band_labels.len();

    let tick_x = LEFT_MARGIN - 8.0;
    let y_ticks = band_labels
        .into_iter()
        .enumerate()
        .map(|(band, label)| {
            view! {
                <text
                    x=tick_x
                    y=band_y(band, band_count)
                    text-anchor="end"
                    dominant-baseline="central"
                    class="chart__tick"
                    font-size="11"
                    fill="rgba(71,84,103,0.7)"
                >
                    {label}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let body = move || {
        let data = data.get();
        let xs = x_positions(data.len());
        let baseline = TOP_MARGIN + PLOT_HEIGHT;

        let line_points = xs
            .iter()
            .zip(&data)
            .map(|(x, p)| format!("{:.1},{:.1}", x, band_y(p.band, band_count)))
            .collect::<Vec<_>>()
            .join(" ");
        let area_points = if xs.is_empty() {
            String::new()
        } else {
            format!(
                "{} {:.1},{:.1} {:.1},{:.1}",
                line_points,
                xs[xs.len() - 1],
                baseline,
                xs[0],
                baseline
            )
        };

        let grid = xs
            .iter()
            .map(|&x| {
                view! {
                    <line
                        x1=x
                        y1=TOP_MARGIN
                        x2=x
                        y2=baseline
                        stroke="rgba(0,0,0,0.06)"
                    ></line>
                }
            })
            .collect::<Vec<_>>();

        let x_tick_y = VIEW_HEIGHT - 4.0;
        let x_ticks = xs
            .iter()
            .zip(&data)
            .map(|(&x, p)| {
                view! {
                    <text
                        x=x
                        y=x_tick_y
                        text-anchor="middle"
                        font-size="12"
                        fill="rgba(71,84,103,0.7)"
                    >
                        {p.x_label.clone()}
                    </text>
                }
            })
            .collect::<Vec<_>>();

        let dots = xs
            .iter()
            .zip(&data)
            .map(|(&x, p)| {
                view! {
                    <circle cx=x cy=band_y(p.band, band_count) r="3" fill="rgba(71,85,105,0.95)">
                        <title>{p.title.clone()}</title>
                    </circle>
                }
            })
            .collect::<Vec<_>>();

        view! {
            {grid}
            <polygon points=area_points fill="url(#peak-fill)"></polygon>
            <polyline
                points=line_points
                fill="none"
                stroke="rgba(71,85,105,0.95)"
                stroke-width="2.5"
            ></polyline>
            {dots}
            {x_ticks}
        }
    };

    view! {
        <svg
            class="chart chart--area"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            <defs>
                <linearGradient id="peak-fill" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color="rgba(17,24,39,0.12)"></stop>
                    <stop offset="100%" stop-color="rgba(17,24,39,0.0)"></stop>
                </linearGradient>
            </defs>
            {y_ticks}
            {body}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_positions_span_the_plot() {
        let xs = x_positions(31);
        assert_eq!(xs.len(), 31);
        assert_eq!(xs[0], LEFT_MARGIN);
        assert_eq!(xs[30], LEFT_MARGIN + PLOT_WIDTH);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_point_centers() {
        assert_eq!(x_positions(1), vec![LEFT_MARGIN + PLOT_WIDTH / 2.0]);
        assert!(x_positions(0).is_empty());
    }

    #[test]
    fn band_zero_is_the_baseline_and_top_band_the_ceiling() {
        assert_eq!(band_y(0, 6), TOP_MARGIN + PLOT_HEIGHT);
        assert_eq!(band_y(5, 6), TOP_MARGIN);
        // out-of-range bands clamp instead of escaping the plot
        assert_eq!(band_y(9, 6), TOP_MARGIN);
    }
}
