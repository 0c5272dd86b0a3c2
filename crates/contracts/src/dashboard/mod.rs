//! Shared contract for the vending dashboard: the BFF response shapes and
//! the pure transformations that turn them into chart-ready data.
//!
//! Everything here is plain values and total functions. Nothing fetches,
//! caches or mutates; the frontend owns the query lifecycle.

pub mod chart_data;
pub mod dto;
pub mod peak_time;

pub use chart_data::{
    machine_sales_chart, money_fill_top, percent_of, product_fill_chart, product_sales_chart,
    rank_top3, sales_index_top, with_other_bucket, ChartEntry, FillChartEntry,
};
pub use dto::{
    ItemFill, ItemFillOverview, MachineSales, MachineSalesOverview, MachinesOverview, MoneyStatus,
    PeakSaleTimeAtDay, ProductSales, ProductSalesOverview, SalesIndexItem,
};
pub use peak_time::{
    band_index, format_minutes_to_clock, parse_time_to_minutes, peak_chart, PeakPoint, TimeBand,
    PEAK_TIME_BANDS,
};
