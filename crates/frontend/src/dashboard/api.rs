//! Read-only queries against the BFF proxy, one per dashboard widget.
//!
//! Every query is independent: a failing endpoint leaves its widget on the
//! loading skeleton and the rest of the page alive. No retries here; the
//! proxy and upstream own availability.

use crate::shared::api_utils::bff_url;
use contracts::dashboard::{
    ItemFillOverview, MachineSalesOverview, MachinesOverview, MoneyStatus, PeakSaleTimeAtDay,
    ProductSalesOverview, SalesIndexItem,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&bff_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fleet status counters.
pub async fn machines_overview() -> Result<MachinesOverview, String> {
    get_json("/machines/overview").await
}

/// Per-machine sales index against historical average activity.
pub async fn sales_index_by_historic_avg() -> Result<Vec<SalesIndexItem>, String> {
    get_json("/sales/index-by-historic-avg").await
}

/// Machines most in need of restocking.
pub async fn machines_product_fill() -> Result<ItemFillOverview, String> {
    get_json("/machines/product-fill").await
}

/// Coin and banknote fill levels.
pub async fn machines_money_fill() -> Result<Vec<MoneyStatus>, String> {
    get_json("/machines/money-fill").await
}

/// Top-5 machines by sales volume plus fleet totals.
pub async fn sales_by_vending_machine() -> Result<MachineSalesOverview, String> {
    get_json("/sales/by-vending-machine").await
}

/// Top-5 products by units sold plus totals.
pub async fn sales_by_product_type() -> Result<ProductSalesOverview, String> {
    get_json("/sales/by-product-type").await
}

/// Peak sale time for each day of the period.
pub async fn peak_sale_count_per_day() -> Result<Vec<PeakSaleTimeAtDay>, String> {
    get_json("/sales/peak-sale-count-per-day").await
}
