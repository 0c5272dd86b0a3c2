//! Static message tables for the two supported locales.
//!
//! Templates use `{name}` placeholders resolved by [`super::interpolate`].

/// All user-facing strings of the dashboard for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    // common
    pub other: &'static str,
    pub open: &'static str,
    /// `{tab}`
    pub demo_tab: &'static str,
    pub go_to_report: &'static str,
    pub change_metric: &'static str,
    pub segmented_aria: &'static str,

    // period control
    pub period_today: &'static str,
    pub period_yesterday: &'static str,
    pub period_week: &'static str,
    pub period_month: &'static str,
    pub period_quarter: &'static str,

    // overview stats
    pub stat_total_machines: &'static str,
    pub stat_working: &'static str,
    pub stat_low_supply: &'static str,
    pub stat_needs_repair: &'static str,

    // map card
    pub map_tab_status: &'static str,
    pub map_tab_avg_revenue: &'static str,
    pub map_tab_downtime: &'static str,
    pub map_tab_fill_level: &'static str,
    /// `{type}` `{id}`
    pub map_vm_title: &'static str,
    /// `{value}`
    pub map_sales_index: &'static str,
    /// `{value}`
    pub map_money_fill: &'static str,
    /// `{day}` `{time}`
    pub map_day_title: &'static str,

    // section titles
    pub section_machines_health: &'static str,
    pub section_sales_analytics: &'static str,
    pub section_peak_sales_time: &'static str,

    // cards
    pub card_sales_index_title: &'static str,
    pub card_product_fill_title: &'static str,
    pub card_product_fill_subtitle: &'static str,
    pub card_money_fill_title: &'static str,
    pub card_money_fill_subtitle: &'static str,
    pub card_sales_by_vm_title: &'static str,
    pub card_total_sold_units: &'static str,
    pub card_sold_in_top5_machines: &'static str,
    pub card_popular_title: &'static str,
    pub card_categories_in_top5: &'static str,
    pub card_sold_in_top5_products: &'static str,

    pub tab_products: &'static str,
    pub tab_categories: &'static str,
    pub peak_view_line: &'static str,
    pub peak_view_heat: &'static str,

    pub tooltip_vm: &'static str,
    pub tooltip_sales: &'static str,
    pub tooltip_peak: &'static str,
    pub tooltip_fill: &'static str,

    pub money_coins: &'static str,
    pub money_banknotes: &'static str,

    // chrome
    pub topbar_search: &'static str,
    pub topbar_refreshed: &'static str,
    pub topbar_notifications: &'static str,
    pub topbar_language: &'static str,
    pub topbar_admin: &'static str,
    pub topbar_city: &'static str,
    pub sidebar_region_district: &'static str,
    pub sidebar_location: &'static str,
    pub sidebar_admin_monitoring: &'static str,
    pub nav_monitoring: &'static str,
    pub nav_remote_control: &'static str,
    pub nav_registration: &'static str,
    pub nav_decommission: &'static str,
    pub nav_reports: &'static str,
    pub nav_requests: &'static str,
}

pub const RU: Messages = Messages {
    other: "Прочее",
    open: "Открыть",
    demo_tab: "Демо-вкладка: {tab}",
    go_to_report: "Перейти в отчёт",
    change_metric: "Сменить метрику",
    segmented_aria: "Переключатель",

    period_today: "Сегодня",
    period_yesterday: "Вчера",
    period_week: "Неделя",
    period_month: "Месяц",
    period_quarter: "Квартал",

    stat_total_machines: "Всего автоматов",
    stat_working: "Работают",
    stat_low_supply: "Мало товара",
    stat_needs_repair: "Нужен ремонт",

    map_tab_status: "Статус автоматов",
    map_tab_avg_revenue: "Средняя выручка",
    map_tab_downtime: "Простой",
    map_tab_fill_level: "Заполненность",
    map_vm_title: "ТА {type}-{id}",
    map_sales_index: "Индекс продаж: {value}%",
    map_money_fill: "Наполнение кассы: {value}%",
    map_day_title: "День {day}: {time}",

    section_machines_health: "Обзор состояния автоматов",
    section_sales_analytics: "Аналитика продаж и поведения покупателей",
    section_peak_sales_time: "Пиковое время продаж",

    card_sales_index_title: "Индекс продаж к средней исторической активности",
    card_product_fill_title: "Заполненность товаром",
    card_product_fill_subtitle: "Автоматы, требующие пополнения",
    card_money_fill_title: "Состояние денег",
    card_money_fill_subtitle: "Сигналы пополнения",
    card_sales_by_vm_title: "Автоматы по объёму продаж",
    card_total_sold_units: "Всего продано",
    card_sold_in_top5_machines: "Продано в топ-5 автоматах",
    card_popular_title: "Популярное",
    card_categories_in_top5: "Категорий в топ-5",
    card_sold_in_top5_products: "Продано в топ-5 товарах",

    tab_products: "Товары",
    tab_categories: "Категории",
    peak_view_line: "Линейный график",
    peak_view_heat: "Тепловая карта",

    tooltip_vm: "ТА",
    tooltip_sales: "Продажи",
    tooltip_peak: "Пик",
    tooltip_fill: "заполнение",

    money_coins: "Монеты",
    money_banknotes: "Купюры",

    topbar_search: "Поиск",
    topbar_refreshed: "Обновлено",
    topbar_notifications: "Уведомления",
    topbar_language: "Язык",
    topbar_admin: "Администратор",
    topbar_city: "Санкт-Петербург",
    sidebar_region_district: "Санкт-Петербург / Адмиралтейский",
    sidebar_location: "Семёновская",
    sidebar_admin_monitoring: "Администрирование и мониторинг",
    nav_monitoring: "Мониторинг парка автоматов",
    nav_remote_control: "Удалённое управление автоматами",
    nav_registration: "Регистрация автоматов",
    nav_decommission: "Списание автоматов",
    nav_reports: "Отчёты",
    nav_requests: "Заявки",
};

pub const EN: Messages = Messages {
    other: "Other",
    open: "Open",
    demo_tab: "Demo tab: {tab}",
    go_to_report: "Go to report",
    change_metric: "Change metric",
    segmented_aria: "Segmented control",

    period_today: "Today",
    period_yesterday: "Yesterday",
    period_week: "Week",
    period_month: "Month",
    period_quarter: "Quarter",

    stat_total_machines: "Total machines",
    stat_working: "Working",
    stat_low_supply: "Low stock",
    stat_needs_repair: "Needs service",

    map_tab_status: "Machine status",
    map_tab_avg_revenue: "Average revenue",
    map_tab_downtime: "Downtime",
    map_tab_fill_level: "Fill level",
    map_vm_title: "VM {type}-{id}",
    map_sales_index: "Sales index: {value}%",
    map_money_fill: "Cash fill: {value}%",
    map_day_title: "Day {day}: {time}",

    section_machines_health: "Machine health overview",
    section_sales_analytics: "Sales and customer behavior analytics",
    section_peak_sales_time: "Peak sales time",

    card_sales_index_title: "Sales index vs historical average activity",
    card_product_fill_title: "Product fill",
    card_product_fill_subtitle: "Machines that need restocking",
    card_money_fill_title: "Cash status",
    card_money_fill_subtitle: "Refill signals",
    card_sales_by_vm_title: "Machines by sales volume",
    card_total_sold_units: "Total units sold",
    card_sold_in_top5_machines: "Sold in top-5 machines",
    card_popular_title: "Popular",
    card_categories_in_top5: "Categories in top-5",
    card_sold_in_top5_products: "Sold in top-5 products",

    tab_products: "Products",
    tab_categories: "Categories",
    peak_view_line: "Line chart",
    peak_view_heat: "Heat map",

    tooltip_vm: "VM",
    tooltip_sales: "Sales",
    tooltip_peak: "Peak",
    tooltip_fill: "fill",

    money_coins: "Coins",
    money_banknotes: "Banknotes",

    topbar_search: "Search",
    topbar_refreshed: "Updated",
    topbar_notifications: "Notifications",
    topbar_language: "Language",
    topbar_admin: "Admin",
    topbar_city: "Saint Petersburg",
    sidebar_region_district: "Saint Petersburg / Admiralteysky",
    sidebar_location: "Semyonovskaya",
    sidebar_admin_monitoring: "Administration and monitoring",
    nav_monitoring: "Machine fleet monitoring",
    nav_remote_control: "Remote machine control",
    nav_registration: "Machine registration",
    nav_decommission: "Decommission machines",
    nav_reports: "Reports",
    nav_requests: "Requests",
};
