//! Wall-clock codec for the peak-sales chart.
//!
//! The BFF reports peak times as "HH:MM:SS" strings (a serialized .NET
//! TimeSpan). The chart works in minutes since midnight and groups them
//! into six fixed day-part bands for the y axis.

use super::dto::PeakSaleTimeAtDay;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses "HH:MM:SS" (or "HH:MM") into minutes since midnight.
///
/// Only the first two `:`-separated fields are read. Malformed input falls
/// back to 0 silently; a bad sample must not take the whole chart down.
pub fn parse_time_to_minutes(time: &str) -> i32 {
    let mut parts = time.split(':');
    let hours = parts.next().and_then(|p| p.trim().parse::<i32>().ok());
    let minutes = parts.next().and_then(|p| p.trim().parse::<i32>().ok());
    match (hours, minutes) {
        (Some(h), Some(m)) => h * 60 + m,
        _ => 0,
    }
}

/// Formats minutes since midnight as a zero-padded "HH:MM" string.
///
/// Wraps modulo 24 hours, so `1440` renders as "00:00". Negative input is
/// normalized with a Euclidean remainder first and therefore wraps
/// backwards from midnight: `-10` renders as "23:50".
pub fn format_minutes_to_clock(minutes: i32) -> String {
    let m = ((minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// One day-part band of the peak-sales y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBand {
    /// Inclusive lower bound, minutes since midnight.
    pub from: i32,
    /// Inclusive upper bound, minutes since midnight.
    pub to: i32,
    pub label: &'static str,
}

/// Fixed day-part bands, ascending from midnight. Index 0 is the bottom
/// tick of the chart.
pub const PEAK_TIME_BANDS: [TimeBand; 6] = [
    TimeBand { from: 0, to: 359, label: "00:00 \u{2013} 05:59" },
    TimeBand { from: 360, to: 599, label: "06:00 \u{2013} 09:59" },
    TimeBand { from: 600, to: 719, label: "10:00 \u{2013} 11:59" },
    TimeBand { from: 720, to: 959, label: "12:00 \u{2013} 15:59" },
    TimeBand { from: 960, to: 1199, label: "16:00 \u{2013} 19:59" },
    TimeBand { from: 1200, to: 1439, label: "20:00 \u{2013} 23:59" },
];

/// Maps minutes since midnight to a band index in `0..=5`.
pub fn band_index(minutes: i32) -> usize {
    match minutes {
        i32::MIN..=359 => 0,
        360..=599 => 1,
        600..=719 => 2,
        720..=959 => 3,
        960..=1199 => 4,
        _ => 5,
    }
}

/// One plotted point of the peak-sales chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakPoint {
    pub day: u32,
    pub minutes: i32,
    /// Raw backend time string, shown in tooltips as-is.
    pub label: String,
}

/// Shapes the `sales/peak-sale-count-per-day` response for the chart.
/// One point per input row, input order preserved.
pub fn peak_chart(items: &[PeakSaleTimeAtDay]) -> Vec<PeakPoint> {
    items
        .iter()
        .map(|x| PeakPoint {
            day: x.day,
            minutes: parse_time_to_minutes(&x.peak_sales_time),
            label: x.peak_sales_time.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm_ss() {
        assert_eq!(parse_time_to_minutes("14:05:00"), 845);
        assert_eq!(parse_time_to_minutes("00:00:00"), 0);
        assert_eq!(parse_time_to_minutes("23:59:59"), 1439);
    }

    #[test]
    fn parses_hh_mm_without_seconds() {
        assert_eq!(parse_time_to_minutes("14:05"), 845);
    }

    #[test]
    fn malformed_input_falls_back_to_zero() {
        assert_eq!(parse_time_to_minutes(""), 0);
        assert_eq!(parse_time_to_minutes("xx:yy"), 0);
        assert_eq!(parse_time_to_minutes("14"), 0);
        assert_eq!(parse_time_to_minutes("14:xx:00"), 0);
    }

    #[test]
    fn formats_and_wraps_at_24h() {
        assert_eq!(format_minutes_to_clock(845), "14:05");
        assert_eq!(format_minutes_to_clock(0), "00:00");
        assert_eq!(format_minutes_to_clock(1440), "00:00");
        assert_eq!(format_minutes_to_clock(1500), "01:00");
    }

    #[test]
    fn negative_minutes_wrap_backwards_from_midnight() {
        assert_eq!(format_minutes_to_clock(-10), "23:50");
        assert_eq!(format_minutes_to_clock(-1440), "00:00");
    }

    #[test]
    fn round_trips_every_minute_of_a_day() {
        for m in 0..1440 {
            assert_eq!(parse_time_to_minutes(&format_minutes_to_clock(m)), m);
        }
    }

    #[test]
    fn band_index_covers_the_day() {
        assert_eq!(band_index(0), 0);
        assert_eq!(band_index(359), 0);
        assert_eq!(band_index(360), 1);
        assert_eq!(band_index(845), 3);
        assert_eq!(band_index(1200), 5);
        assert_eq!(band_index(1439), 5);
        for (i, band) in PEAK_TIME_BANDS.iter().enumerate() {
            assert_eq!(band_index(band.from), i);
            assert_eq!(band_index(band.to), i);
        }
    }

    #[test]
    fn peak_chart_keeps_order_and_raw_labels() {
        let items = vec![
            PeakSaleTimeAtDay { day: 1, peak_sales_time: "14:05:00".into() },
            PeakSaleTimeAtDay { day: 2, peak_sales_time: "broken".into() },
        ];
        let chart = peak_chart(&items);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].minutes, 845);
        assert_eq!(chart[1].minutes, 0);
        assert_eq!(chart[1].label, "broken");
        assert_eq!(chart, peak_chart(&items));
    }
}
