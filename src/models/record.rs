use {
    crate::domain::Category,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// One row of the sales table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub order_id: String,
    pub product: String,
    pub category: Category,
    pub order_date: NaiveDate,
    pub sales_amount: u32,
}
