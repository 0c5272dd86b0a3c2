use serde::{Deserialize, Serialize};

/// Response of `GET machines/overview`: fleet status counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachinesOverview {
    pub total: u32,
    pub working: u32,
    pub low_supply: u32,
    pub needs_repair: u32,
}

/// One row of `GET sales/index-by-historic-avg`.
///
/// `percentage` compares current sales to the machine's historical average
/// activity. The backend reports it as a plain integer; widgets clamp it to
/// 0–100 when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesIndexItem {
    pub machine_id: u32,
    /// Single-letter machine type code ("B", "M", ...).
    pub machine_type: String,
    pub percentage: i32,
}

/// One entry of [`ItemFillOverview::top_filled`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFill {
    pub item_count: u32,
    pub fill_percentage: i32,
}

/// Response of `GET machines/product-fill`.
///
/// `top_filled` comes ranked by the backend and is rendered in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFillOverview {
    pub total: u32,
    pub top_filled: Vec<ItemFill>,
}

/// One row of `GET machines/money-fill`: cash receptacle levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyStatus {
    pub machine_id: u32,
    pub machine_type: String,
    pub coin_fill_percentage: i32,
    pub banknotes_fill_percentage: i32,
}

/// One entry of [`MachineSalesOverview::top_vending_machines`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSales {
    pub total_sales: u32,
    pub percentage_of_all_sales: i32,
}

/// Response of `GET sales/by-vending-machine`.
///
/// `sold_in_top_five <= total_sales`; the per-entity percentages are not
/// required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSalesOverview {
    pub total_sales: u32,
    pub sold_in_top_five: u32,
    pub top_vending_machines: Vec<MachineSales>,
}

/// One entry of [`ProductSalesOverview::top_products`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: u32,
    pub sold_total: u32,
    pub percentage_of_all_sales: i32,
}

/// Response of `GET sales/by-product-type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesOverview {
    pub total_sold: u32,
    pub sold_in_top_five: u32,
    pub different_product_categories_count: u32,
    pub top_products: Vec<ProductSales>,
}

/// One row of `GET sales/peak-sale-count-per-day`.
///
/// `peak_sales_time` is a .NET TimeSpan serialized as "HH:MM:SS"
/// (e.g. "14:05:00"); `day` is a 1-based calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakSaleTimeAtDay {
    pub day: u32,
    pub peak_sales_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn machines_overview_uses_camel_case_wire_names() {
        let parsed: MachinesOverview = serde_json::from_value(json!({
            "total": 120,
            "working": 100,
            "lowSupply": 12,
            "needsRepair": 8
        }))
        .unwrap();
        assert_eq!(parsed.low_supply, 12);
        assert_eq!(parsed.needs_repair, 8);

        let back = serde_json::to_value(&parsed).unwrap();
        assert!(back.get("lowSupply").is_some());
        assert!(back.get("low_supply").is_none());
    }

    #[test]
    fn machine_sales_overview_decodes() {
        let parsed: MachineSalesOverview = serde_json::from_value(json!({
            "totalSales": 1000,
            "soldInTopFive": 600,
            "topVendingMachines": [
                { "totalSales": 200, "percentageOfAllSales": 20 },
                { "totalSales": 180, "percentageOfAllSales": 18 }
            ]
        }))
        .unwrap();
        assert_eq!(parsed.sold_in_top_five, 600);
        assert_eq!(parsed.top_vending_machines[1].percentage_of_all_sales, 18);
    }

    #[test]
    fn product_sales_overview_decodes() {
        let parsed: ProductSalesOverview = serde_json::from_value(json!({
            "totalSold": 800,
            "soldInTopFive": 500,
            "differentProductCategoriesCount": 4,
            "topProducts": [
                { "productId": 17, "soldTotal": 300, "percentageOfAllSales": 37 }
            ]
        }))
        .unwrap();
        assert_eq!(parsed.different_product_categories_count, 4);
        assert_eq!(parsed.top_products[0].product_id, 17);
    }

    #[test]
    fn money_status_and_peak_time_decode() {
        let money: Vec<MoneyStatus> = serde_json::from_value(json!([
            {
                "machineId": 16,
                "machineType": "M",
                "coinFillPercentage": 72,
                "banknotesFillPercentage": 41
            }
        ]))
        .unwrap();
        assert_eq!(money[0].coin_fill_percentage, 72);

        let peaks: Vec<PeakSaleTimeAtDay> = serde_json::from_value(json!([
            { "day": 1, "peakSalesTime": "14:05:00" }
        ]))
        .unwrap();
        assert_eq!(peaks[0].peak_sales_time, "14:05:00");
    }
}
