use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

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
pub enum Region {
    #[default]
    #[strum(to_string = "North America")]
    NorthAmerica,
    Europe,
    Asia,
    #[strum(to_string = "South America")]
    SouthAmerica,
    Africa,
}
