//! Chart-data shaping for the dashboard widgets.
//!
//! Every function here is a single pass over a backend response: label the
//! ranked entities, optionally synthesize the residual "other" bucket, and
//! hand the chart a flat list. Backend-supplied ranking is trusted and never
//! re-sorted; the only ordering done here is the top-3 badge assignment,
//! which does not reorder the entries themselves.

use super::dto::{
    ItemFillOverview, MachineSalesOverview, MoneyStatus, ProductSalesOverview, SalesIndexItem,
};

/// Lists the backend does not already cap are truncated to this many rows.
const TOP_LIST_LIMIT: usize = 5;

/// One bar of a sales chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub name: String,
    pub total: u32,
    /// Share of all sales, as reported by the backend (plain 0–100 integer).
    pub pct: i32,
    /// True only for the synthetic trailing "everything else" bar.
    pub is_other: bool,
}

/// Ratio as a rounded percentage, or `None` while either side is missing
/// or the denominator is zero. Callers render a loading placeholder on
/// `None`; a zero denominator is not an error state.
pub fn percent_of(numerator: Option<u32>, denominator: Option<u32>) -> Option<i32> {
    let n = numerator?;
    let d = denominator?;
    if d == 0 {
        return None;
    }
    Some((n as f64 / d as f64 * 100.0).round() as i32)
}

/// Appends the residual "other" bucket to a list of top entities.
///
/// `other_total` is what the independently-reported grand total leaves
/// outside the top five; `other_pct` is what the reported per-entity shares
/// leave of 100%. The two are not reconciled against each other; the
/// backend's figures are taken as-is, so a backend inconsistency shows up
/// as a slightly off "other" percentage.
///
/// When either scalar is absent (response still loading) the entities are
/// returned unchanged; that is the defined degraded mode, not an error.
pub fn with_other_bucket(
    mut entries: Vec<ChartEntry>,
    total_all: Option<u32>,
    sold_in_top_five: Option<u32>,
    other_label: &str,
) -> Vec<ChartEntry> {
    let (Some(total_all), Some(sold_in_top_five)) = (total_all, sold_in_top_five) else {
        return entries;
    };

    let top_pct: i32 = entries.iter().map(|e| e.pct).sum();
    let other_total = total_all.saturating_sub(sold_in_top_five);
    let other_pct = (100 - top_pct).max(0);

    if other_total > 0 {
        entries.push(ChartEntry {
            name: other_label.to_string(),
            total: other_total,
            pct: other_pct,
            is_other: true,
        });
    }
    entries
}

/// Shapes `sales/by-vending-machine` into chart bars.
///
/// Machines carry no human label, so bars get positional names like
/// "VM 1".."VM 5" from the caller-supplied (localized) `vm_label`.
pub fn machine_sales_chart(
    data: &MachineSalesOverview,
    vm_label: &str,
    other_label: &str,
) -> Vec<ChartEntry> {
    let entries = data
        .top_vending_machines
        .iter()
        .enumerate()
        .map(|(idx, x)| ChartEntry {
            name: format!("{} {}", vm_label, idx + 1),
            total: x.total_sales,
            pct: x.percentage_of_all_sales,
            is_other: false,
        })
        .collect();
    with_other_bucket(
        entries,
        Some(data.total_sales),
        Some(data.sold_in_top_five),
        other_label,
    )
}

/// Shapes `sales/by-product-type` into chart bars, labeled by product id.
pub fn product_sales_chart(data: &ProductSalesOverview, other_label: &str) -> Vec<ChartEntry> {
    let entries = data
        .top_products
        .iter()
        .map(|x| ChartEntry {
            name: format!("#{}", x.product_id),
            total: x.sold_total,
            pct: x.percentage_of_all_sales,
            is_other: false,
        })
        .collect();
    with_other_bucket(
        entries,
        Some(data.total_sold),
        Some(data.sold_in_top_five),
        other_label,
    )
}

/// Medal ranks for a chart: `Some(0)`/`Some(1)`/`Some(2)` on the three
/// largest non-"other" bars, `None` everywhere else. Ties keep the
/// backend's relative order (stable sort). Purely an annotation: entry
/// order, totals and percentages are untouched.
pub fn rank_top3(entries: &[ChartEntry]) -> Vec<Option<u8>> {
    let mut order: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.is_other)
        .map(|(i, _)| i)
        .collect();
    order.sort_by(|&a, &b| entries[b].total.cmp(&entries[a].total));

    let mut ranks = vec![None; entries.len()];
    for (rank, &idx) in order.iter().take(3).enumerate() {
        ranks[idx] = Some(rank as u8);
    }
    ranks
}

/// One bar of the product-fill chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FillChartEntry {
    /// Positional label "#1".."#5"; the backend supplies none.
    pub name: String,
    pub item_count: u32,
    pub fill_percentage: i32,
}

/// Shapes `machines/product-fill` into chart bars, backend order preserved.
pub fn product_fill_chart(data: &ItemFillOverview) -> Vec<FillChartEntry> {
    data.top_filled
        .iter()
        .enumerate()
        .map(|(idx, x)| FillChartEntry {
            name: format!("#{}", idx + 1),
            item_count: x.item_count,
            fill_percentage: x.fill_percentage,
        })
        .collect()
}

/// Top rows of the sales-index list. The backend does not cap this list,
/// so the widget takes the first five in reported order.
pub fn sales_index_top(items: &[SalesIndexItem]) -> Vec<SalesIndexItem> {
    items.iter().take(TOP_LIST_LIMIT).cloned().collect()
}

/// Top rows of the money-fill list, same capping rule as the sales index.
pub fn money_fill_top(items: &[MoneyStatus]) -> Vec<MoneyStatus> {
    items.iter().take(TOP_LIST_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::dto::{MachineSales, ProductSales};

    fn entry(total: u32, pct: i32) -> ChartEntry {
        ChartEntry {
            name: format!("e{}", total),
            total,
            pct,
            is_other: false,
        }
    }

    #[test]
    fn percent_of_rounds_half_up() {
        assert_eq!(percent_of(Some(23), Some(100)), Some(23));
        assert_eq!(percent_of(Some(1), Some(3)), Some(33));
        assert_eq!(percent_of(Some(2), Some(3)), Some(67));
        assert_eq!(percent_of(Some(1), Some(8)), Some(13));
    }

    #[test]
    fn percent_of_guards_missing_and_zero_denominator() {
        assert_eq!(percent_of(Some(5), Some(0)), None);
        assert_eq!(percent_of(None, Some(10)), None);
        assert_eq!(percent_of(Some(5), None), None);
    }

    #[test]
    fn other_bucket_fills_the_remainder() {
        let entries = vec![
            entry(200, 20),
            entry(150, 15),
            entry(100, 10),
            entry(80, 6),
            entry(70, 4),
        ];
        let out = with_other_bucket(entries, Some(1000), Some(600), "Other");
        assert_eq!(out.len(), 6);
        let other = out.last().unwrap();
        assert!(other.is_other);
        assert_eq!(other.name, "Other");
        assert_eq!(other.total, 400);
        assert_eq!(other.pct, 45);
        assert!(out[..5].iter().all(|e| !e.is_other));
    }

    #[test]
    fn other_bucket_degrades_without_scalars() {
        let entries = vec![entry(200, 20), entry(150, 15)];
        let out = with_other_bucket(entries.clone(), None, Some(600), "Other");
        assert_eq!(out, entries);
        let out = with_other_bucket(entries.clone(), Some(1000), None, "Other");
        assert_eq!(out, entries);
    }

    #[test]
    fn other_bucket_is_omitted_when_empty_or_negative() {
        let entries = vec![entry(200, 60), entry(150, 40)];
        // top five cover everything
        let out = with_other_bucket(entries.clone(), Some(350), Some(350), "Other");
        assert_eq!(out.len(), 2);
        // inconsistent backend scalars must not underflow
        let out = with_other_bucket(entries, Some(300), Some(350), "Other");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn other_pct_never_goes_negative() {
        let out = with_other_bucket(vec![entry(90, 120)], Some(100), Some(90), "Other");
        assert_eq!(out.last().unwrap().pct, 0);
    }

    #[test]
    fn rank_top3_marks_three_largest() {
        let entries = vec![
            entry(30, 0),
            entry(90, 0),
            entry(10, 0),
            entry(70, 0),
            entry(50, 0),
        ];
        let ranks = rank_top3(&entries);
        assert_eq!(
            ranks,
            vec![None, Some(0), None, Some(1), Some(2)]
        );
    }

    #[test]
    fn rank_top3_skips_other_and_keeps_tie_order() {
        let mut entries = vec![entry(50, 0), entry(50, 0), entry(40, 0)];
        entries.push(ChartEntry {
            name: "Other".into(),
            total: 999,
            pct: 0,
            is_other: true,
        });
        let ranks = rank_top3(&entries);
        // the huge "other" bar gets no medal; equal totals rank in input order
        assert_eq!(ranks, vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn machine_sales_chart_labels_positionally() {
        let data = MachineSalesOverview {
            total_sales: 1000,
            sold_in_top_five: 600,
            top_vending_machines: vec![
                MachineSales { total_sales: 350, percentage_of_all_sales: 35 },
                MachineSales { total_sales: 250, percentage_of_all_sales: 25 },
            ],
        };
        let chart = machine_sales_chart(&data, "VM", "Other");
        assert_eq!(chart[0].name, "VM 1");
        assert_eq!(chart[1].name, "VM 2");
        assert_eq!(chart[2].name, "Other");
        assert_eq!(chart[2].total, 400);
        assert_eq!(chart[2].pct, 40);
        // same input, same output
        assert_eq!(chart, machine_sales_chart(&data, "VM", "Other"));
    }

    #[test]
    fn product_sales_chart_labels_by_product_id() {
        let data = ProductSalesOverview {
            total_sold: 800,
            sold_in_top_five: 800,
            different_product_categories_count: 3,
            top_products: vec![ProductSales {
                product_id: 17,
                sold_total: 800,
                percentage_of_all_sales: 100,
            }],
        };
        let chart = product_sales_chart(&data, "Other");
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].name, "#17");
    }

    #[test]
    fn product_fill_chart_preserves_backend_ranking() {
        let data = ItemFillOverview {
            total: 12,
            top_filled: vec![
                crate::dashboard::dto::ItemFill { item_count: 9, fill_percentage: 4 },
                crate::dashboard::dto::ItemFill { item_count: 30, fill_percentage: 80 },
            ],
        };
        let chart = product_fill_chart(&data);
        assert_eq!(chart[0].name, "#1");
        assert_eq!(chart[0].item_count, 9);
        assert_eq!(chart[1].name, "#2");
        assert_eq!(chart[1].fill_percentage, 80);
    }

    #[test]
    fn top_lists_truncate_to_five_in_order() {
        let items: Vec<SalesIndexItem> = (0..8)
            .map(|i| SalesIndexItem {
                machine_id: i,
                machine_type: "B".into(),
                percentage: i as i32 * 10,
            })
            .collect();
        let top = sales_index_top(&items);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].machine_id, 0);
        assert_eq!(top[4].machine_id, 4);
    }
}
