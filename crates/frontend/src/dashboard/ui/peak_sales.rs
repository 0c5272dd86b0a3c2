use crate::i18n::{interpolate, use_i18n, I18n};
use crate::shared::charts::area_chart::{AreaPoint, BandAreaChart};
use crate::shared::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::shared::components::go_to_report::GoToReportButton;
use crate::shared::components::segmented::Segmented;
use crate::shared::components::skeleton::Skeleton;
use contracts::dashboard::{band_index, format_minutes_to_clock, PeakPoint, PEAK_TIME_BANDS};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakViewKey {
    Line,
    Heat,
}

fn area_points(points: &[PeakPoint], day_title: &str) -> Vec<AreaPoint> {
    points
        .iter()
        .map(|p| AreaPoint {
            x_label: p.day.to_string(),
            band: band_index(p.minutes),
            title: interpolate(
                day_title,
                &[
                    ("day", p.day.to_string()),
                    ("time", format_minutes_to_clock(p.minutes)),
                ],
            ),
        })
        .collect()
}

/// Cell intensity of the heat view. Later peak hours render darker; the
/// alpha stays in a readable 0.15..0.70 range.
fn heat_alpha(minutes: i32) -> f64 {
    let hour = (minutes.clamp(0, 1439) / 60) as f64;
    0.15 + hour / 23.0 * 0.55
}

#[component]
pub fn PeakSalesSection(
    peak_loading: Signal<bool>,
    #[prop(into)] peak_points: Signal<Vec<PeakPoint>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let peak_view = RwSignal::new(PeakViewKey::Line);

    let options = Signal::derive(move || {
        let msg = i18n.messages();
        vec![
            (PeakViewKey::Line, msg.peak_view_line.to_string()),
            (PeakViewKey::Heat, msg.peak_view_heat.to_string()),
        ]
    });
    let aria_label = Signal::derive(move || i18n.messages().segmented_aria.to_string());

    let chart_points = Signal::derive(move || {
        area_points(&peak_points.get(), i18n.messages().map_day_title)
    });

    view! {
        <section class="section">
            <h2 class="section__title">
                {move || i18n.messages().section_peak_sales_time}
            </h2>
            <Card class="peak-card">
                <CardHeader>
                    <CardTitle>
                        {move || i18n.messages().section_peak_sales_time}
                    </CardTitle>
                    <Segmented options=options value=peak_view aria_label=aria_label />
                </CardHeader>
                <CardContent>
                    <Show
                        when=move || !peak_loading.get()
                        fallback=|| view! { <Skeleton class="skeleton--chart" /> }
                    >
                        {move || match peak_view.get() {
                            PeakViewKey::Line => {
                                let band_labels: Vec<&'static str> =
                                    PEAK_TIME_BANDS.iter().map(|b| b.label).collect();
                                view! {
                                    <BandAreaChart data=chart_points band_labels=band_labels />
                                }
                                .into_any()
                            }
                            PeakViewKey::Heat => heat_view(peak_points, i18n),
                        }}
                    </Show>
                    <GoToReportButton />
                </CardContent>
            </Card>
        </section>
    }
}

fn heat_view(peak_points: Signal<Vec<PeakPoint>>, i18n: I18n) -> AnyView {
    view! {
        <div class="heat-grid">
            {move || {
                let day_title = i18n.messages().map_day_title;
                peak_points
                    .get()
                    .into_iter()
                    .map(|p| {
                        let style = format!(
                            "background: rgba(216,11,58,{:.3})",
                            heat_alpha(p.minutes)
                        );
                        let title = interpolate(
                            day_title,
                            &[
                                ("day", p.day.to_string()),
                                ("time", format_minutes_to_clock(p.minutes)),
                            ],
                        );
                        view! {
                            <div class="heat-grid__cell" style=style title=title>
                                {p.day}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_points_carry_band_and_formatted_tooltip() {
        let input = vec![PeakPoint { day: 3, minutes: 845, label: "14:05:00".into() }];
        let points = area_points(&input, "Day {day}: {time}");
        assert_eq!(points[0].x_label, "3");
        assert_eq!(points[0].band, 3);
        assert_eq!(points[0].title, "Day 3: 14:05");
    }

    #[test]
    fn heat_alpha_grows_with_the_hour_and_stays_bounded() {
        assert!(heat_alpha(0) >= 0.15);
        assert!(heat_alpha(1439) <= 0.70 + 1e-9);
        assert!(heat_alpha(14 * 60) > heat_alpha(6 * 60));
        // out-of-range input clamps instead of escaping the alpha range
        assert!(heat_alpha(-50) >= 0.15);
        assert!(heat_alpha(5000) <= 0.70 + 1e-9);
    }
}
