use {
    crate::ui::UI_TEXT,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Where a trigger's button lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Always visible, whatever section is active.
    Sidebar,
    /// Only rendered on the dashboard section.
    Dashboard,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionId {
    SidebarSalesReport,
    SidebarUpdateInventory,
    SidebarAnalyzeCustomerData,
    MainSalesAnalysis,
    MainInventoryCheck,
    MainCustomerAnalysis,
    MainSalesPrediction,
}

impl ActionId {
    pub fn placement(&self) -> Placement {
        match self {
            ActionId::SidebarSalesReport
            | ActionId::SidebarUpdateInventory
            | ActionId::SidebarAnalyzeCustomerData => Placement::Sidebar,
            _ => Placement::Dashboard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionId::SidebarSalesReport => UI_TEXT.action_sales_report,
            ActionId::SidebarUpdateInventory => UI_TEXT.action_update_inventory,
            ActionId::SidebarAnalyzeCustomerData => UI_TEXT.action_analyze_customer_data,
            ActionId::MainSalesAnalysis => UI_TEXT.action_sales_analysis,
            ActionId::MainInventoryCheck => UI_TEXT.action_inventory_check,
            ActionId::MainCustomerAnalysis => UI_TEXT.action_customer_analysis,
            ActionId::MainSalesPrediction => UI_TEXT.action_sales_prediction,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ActionId::SidebarSalesReport => UI_TEXT.done_sales_report,
            ActionId::SidebarUpdateInventory => UI_TEXT.done_update_inventory,
            ActionId::SidebarAnalyzeCustomerData => UI_TEXT.done_analyze_customer_data,
            ActionId::MainSalesAnalysis => UI_TEXT.done_sales_analysis,
            ActionId::MainInventoryCheck => UI_TEXT.done_inventory_check,
            ActionId::MainCustomerAnalysis => UI_TEXT.done_customer_analysis,
            ActionId::MainSalesPrediction => UI_TEXT.done_sales_prediction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum ActionStatus {
    #[default]
    None,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub action_id: ActionId,
    pub status: ActionStatus,
    pub message: String,
}

impl ActionResult {
    /// What a control shows on a pass where it did not fire.
    pub fn none(action_id: ActionId) -> Self {
        Self {
            action_id,
            status: ActionStatus::None,
            message: String::new(),
        }
    }

    pub fn success(action_id: ActionId, message: impl Into<String>) -> Self {
        Self {
            action_id,
            status: ActionStatus::Success,
            message: message.into(),
        }
    }

    pub fn failure(action_id: ActionId, message: impl Into<String>) -> Self {
        Self {
            action_id,
            status: ActionStatus::Failure,
            message: message.into(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.status != ActionStatus::None
    }
}
