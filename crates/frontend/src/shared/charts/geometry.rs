//! Label placement math for the SVG charts.
//!
//! Chart overlays (value pills, percent labels, medal badges) position
//! themselves relative to the bar they annotate. Instead of loosely-typed
//! render props, every helper takes an explicit [`LabelBox`] and returns
//! plain frames, so the placement rules are testable without a DOM.

/// Rectangle of the annotated bar in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBox {
    /// Horizontal center of the box.
    pub fn cx(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

pub const PILL_HEIGHT: f64 = 20.0;
const PILL_PADDING_X: f64 = 10.0;
const PILL_MIN_WIDTH: f64 = 34.0;
/// Rough per-character advance of the 12px semibold pill font.
const PILL_CHAR_WIDTH: f64 = 7.0;

/// Computed frame of a value pill: the rounded rect plus its text anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text_x: f64,
    pub text_y: f64,
}

/// Places the white value pill near the bottom of a bar.
///
/// Width grows with the label but never below the minimum, so one-digit
/// values still read as a pill. `min_top_inset` keeps the pill inside very
/// short bars instead of letting it escape above them.
pub fn value_pill_frame(
    bar: LabelBox,
    label: &str,
    bottom_offset: f64,
    min_top_inset: Option<f64>,
) -> PillFrame {
    let width = PILL_MIN_WIDTH.max(label.chars().count() as f64 * PILL_CHAR_WIDTH + PILL_PADDING_X * 2.0);
    let unclamped_y = bar.bottom() - PILL_HEIGHT - bottom_offset;
    let y = match min_top_inset {
        Some(inset) => (bar.y + inset).max(unclamped_y),
        None => unclamped_y,
    };
    let cx = bar.cx();
    PillFrame {
        x: cx - width / 2.0,
        y,
        width,
        height: PILL_HEIGHT,
        text_x: cx,
        text_y: y + 14.0,
    }
}

/// Whether a fixed-y percent label sits on the bar fill (needs the light
/// text treatment) or above it in the chart margin.
pub fn pct_label_on_fill(label_y: f64, bar_top: f64) -> bool {
    label_y >= bar_top + 2.0
}

pub const BADGE_SIZE: f64 = 16.0;

/// Origin of a medal badge above its bar.
///
/// The badge wants to float just above the bar top, but is clamped below
/// the percent-label row and above the value pill so the three overlays
/// never collide on short bars.
pub fn rank_badge_origin(bar: LabelBox, pct_label_y: f64) -> (f64, f64) {
    let min_y = pct_label_y + 14.0;
    let value_pill_top = bar.bottom() - 28.0;
    let desired_y = bar.y - BADGE_SIZE - 6.0;
    let y = min_y.max(desired_y.min(value_pill_top - BADGE_SIZE - 4.0));
    (bar.cx() - BADGE_SIZE / 2.0, y)
}

/// Height of a bar scaled against the chart maximum, with a floor so tiny
/// values stay visible (and keep their pill readable).
pub fn bar_height(value: u32, max_value: u32, plot_height: f64, min_height: f64) -> f64 {
    if max_value == 0 {
        return min_height;
    }
    let scaled = plot_height * value as f64 / max_value as f64;
    scaled.max(min_height).min(plot_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> LabelBox {
        LabelBox { x: 100.0, y: 60.0, width: 56.0, height: 160.0 }
    }

    #[test]
    fn pill_is_centered_and_near_the_bottom() {
        let frame = value_pill_frame(bar(), "400", 8.0, None);
        assert_eq!(frame.width, 41.0);
        assert_eq!(frame.text_x, 128.0);
        assert_eq!(frame.y, 60.0 + 160.0 - 20.0 - 8.0);
        assert_eq!(frame.x + frame.width / 2.0, frame.text_x);
    }

    #[test]
    fn pill_width_never_drops_below_minimum() {
        let frame = value_pill_frame(bar(), "4", 8.0, None);
        assert_eq!(frame.width, PILL_MIN_WIDTH);
    }

    #[test]
    fn pill_respects_min_top_inset_on_short_bars() {
        let short = LabelBox { x: 0.0, y: 180.0, width: 56.0, height: 34.0 };
        let frame = value_pill_frame(short, "9", 10.0, Some(6.0));
        // unclamped would be 180+34-20-10 = 184; inset clamp keeps it at 186
        assert_eq!(frame.y, 186.0);
    }

    #[test]
    fn pct_label_contrast_flips_at_the_bar_top() {
        assert!(pct_label_on_fill(20.0, 10.0));
        assert!(!pct_label_on_fill(20.0, 19.0));
    }

    #[test]
    fn badge_floats_above_tall_bars_and_clamps_on_short_ones() {
        let (x, y) = rank_badge_origin(bar(), 20.0);
        assert_eq!(x, 128.0 - BADGE_SIZE / 2.0);
        assert_eq!(y, 60.0 - BADGE_SIZE - 6.0);

        // a bar whose top is above the percent row gets pushed down
        let tall = LabelBox { x: 0.0, y: 10.0, width: 56.0, height: 210.0 };
        let (_, y) = rank_badge_origin(tall, 20.0);
        assert_eq!(y, 34.0);
    }

    #[test]
    fn bar_height_scales_with_a_floor() {
        assert_eq!(bar_height(50, 100, 180.0, 34.0), 90.0);
        assert_eq!(bar_height(1, 100, 180.0, 34.0), 34.0);
        assert_eq!(bar_height(0, 0, 180.0, 34.0), 34.0);
        assert_eq!(bar_height(200, 100, 180.0, 34.0), 180.0);
    }
}
