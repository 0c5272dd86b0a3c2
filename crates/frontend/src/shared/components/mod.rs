pub mod card;
pub mod chip;
pub mod go_to_report;
pub mod progress_bar;
pub mod segmented;
pub mod skeleton;
pub mod stat_card;
