use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Product categories. Closed set; the sales table and the market cap chart carry one entry each, in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Ord,
    PartialOrd,
    Default,
)]
pub enum Category {
    #[default]
    Electronics,
    Clothing,
    #[strum(to_string = "Home & Kitchen")]
    HomeAndKitchen,
    Sports,
    Toys,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_names_round_trip_through_from_str() {
        for c in Category::iter() {
            assert_eq!(Category::from_str(&c.to_string()), Ok(c));
        }
        assert_eq!(Category::HomeAndKitchen.to_string(), "Home & Kitchen");
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(Category::from_str("Groceries").is_err());
    }
}
