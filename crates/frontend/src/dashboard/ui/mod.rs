pub mod controls_bar;
pub mod machines_health;
pub mod map_card;
pub mod overview_stats;
pub mod page;
pub mod peak_sales;
pub mod sales_analytics;
pub mod vending_map;
