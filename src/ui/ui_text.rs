pub const ICON_CHECK: &str = "✔";
pub const ICON_CROSS: &str = "✖";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_UP: &str = "⬆";
pub const ICON_IMAGE: &str = "🖼";

pub struct UiText {
    // --- Window ---
    pub window_title: &'static str,
    pub page_title: &'static str,
    pub footer: &'static str,

    // --- Left panel ---
    pub lp_navigation: &'static str,
    pub lp_parameters: &'static str,
    pub lp_actions: &'static str,
    pub param_start_date: &'static str,
    pub param_end_date: &'static str,
    pub param_category: &'static str,
    pub param_region: &'static str,
    pub param_threshold: &'static str,
    pub warn_inverted_dates: &'static str,

    // --- Action buttons ---
    pub action_sales_report: &'static str,
    pub action_update_inventory: &'static str,
    pub action_analyze_customer_data: &'static str,
    pub action_sales_analysis: &'static str,
    pub action_inventory_check: &'static str,
    pub action_customer_analysis: &'static str,
    pub action_sales_prediction: &'static str,
    pub action_unavailable_suffix: &'static str,

    // --- Action banners ---
    pub done_sales_report: &'static str,
    pub done_update_inventory: &'static str,
    pub done_analyze_customer_data: &'static str,
    pub done_sales_analysis: &'static str,
    pub done_inventory_check: &'static str,
    pub done_customer_analysis: &'static str,
    pub done_sales_prediction: &'static str,

    // --- KPI tiles ---
    pub kpi_total_sales: &'static str,
    pub kpi_total_orders: &'static str,
    pub kpi_satisfaction: &'static str,

    // --- Sales table ---
    pub table_heading: &'static str,
    pub col_order_id: &'static str,
    pub col_product: &'static str,
    pub col_category: &'static str,
    pub col_order_date: &'static str,
    pub col_sales: &'static str,

    // --- Charts ---
    pub market_cap_heading: &'static str,
    pub market_cap_x_axis: &'static str,
    pub market_cap_y_axis: &'static str,
    pub prediction_heading: &'static str,
    pub prediction_running: &'static str,
    pub prediction_title: &'static str,
    pub prediction_x_axis: &'static str,
    pub prediction_y_axis: &'static str,

    // --- Gallery ---
    pub gallery_heading: &'static str,
    pub gallery_hint: &'static str,
    pub gallery_drop_zone: &'static str,
    pub gallery_clear: &'static str,
    pub gallery_caption_prefix: &'static str,

    // --- Static sections ---
    pub settings_heading: &'static str,
    pub settings_body: &'static str,
    pub contracts_heading: &'static str,
    pub contracts_body: &'static str,

    // --- Errors ---
    pub degraded_title: &'static str,
    pub degraded_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "GenceCom",
    page_title: "E-Commerce Dashboard",
    footer: "© 2024 Made by Yoluko Solutions - Alexandre Kocev",

    lp_navigation: "Navigation",
    lp_parameters: "Dashboard Parameters",
    lp_actions: "Actions",
    param_start_date: "Start date",
    param_end_date: "End date",
    param_category: "Select Category",
    param_region: "Select Region",
    param_threshold: "Sales Threshold",
    warn_inverted_dates: "Start date is after end date.",

    action_sales_report: "Generate Sales Report",
    action_update_inventory: "Update Inventory",
    action_analyze_customer_data: "Analyze Customer Data",
    action_sales_analysis: "Run Sales Analysis",
    action_inventory_check: "Run Inventory Check",
    action_customer_analysis: "Run Customer Analysis",
    action_sales_prediction: "Run Sales Prediction",
    action_unavailable_suffix: "is only available on the Dashboard.",

    done_sales_report: "Sales Report Generated Successfully!",
    done_update_inventory: "Inventory Updated Successfully!",
    done_analyze_customer_data: "Customer Data Analyzed Successfully!",
    done_sales_analysis: "Sales Analysis Completed Successfully!",
    done_inventory_check: "Inventory Check Completed Successfully!",
    done_customer_analysis: "Customer Analysis Completed Successfully!",
    done_sales_prediction: "Sales prediction completed successfully!",

    kpi_total_sales: "Total Sales",
    kpi_total_orders: "Total Orders",
    kpi_satisfaction: "Customer Satisfaction",

    table_heading: "Sales Data",
    col_order_id: "Order ID",
    col_product: "Product",
    col_category: "Category",
    col_order_date: "Order Date",
    col_sales: "Sales",

    market_cap_heading: "Market Caps Per Field",
    market_cap_x_axis: "Fields",
    market_cap_y_axis: "Market Cap ($)",
    prediction_heading: "Sales Prediction",
    prediction_running: "Running sales prediction algorithm...",
    prediction_title: "Sales Prediction for Next 3 Months",
    prediction_x_axis: "Month",
    prediction_y_axis: "Predicted Sales",

    gallery_heading: "Images",
    gallery_hint: "Upload images to be displayed here.",
    gallery_drop_zone: "Drop image files onto this window to upload them.",
    gallery_clear: "Remove all",
    gallery_caption_prefix: "Uploaded Image:",

    settings_heading: "Settings",
    settings_body: "Settings page content goes here.",
    contracts_heading: "Contracts",
    contracts_body: "Contracts page content goes here.",

    degraded_title: "Dashboard unavailable",
    degraded_hint: "Change a parameter or press an action to retry.",
};
