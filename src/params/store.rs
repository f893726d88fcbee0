use {
    crate::{
        config::{DASHBOARD, DF},
        domain::{Category, Region},
        errors::DashboardError,
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::{
        collections::hash_map::DefaultHasher,
        fmt,
        hash::{Hash, Hasher},
        str::FromStr,
    },
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter, EnumString},
};

/// Every control in the sidebar's parameter block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ParamName {
    StartDate,
    EndDate,
    Category,
    Region,
    Threshold,
}

/// Declared type and valid range of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    Date,
    Enum(Vec<String>),
    NumericRange { min: i64, max: i64 },
}

impl ParamName {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamName::StartDate | ParamName::EndDate => ParamKind::Date,
            ParamName::Category => ParamKind::Enum(Category::iter().map(|c| c.to_string()).collect()),
            ParamName::Region => ParamKind::Enum(Region::iter().map(|r| r.to_string()).collect()),
            ParamName::Threshold => ParamKind::NumericRange {
                min: DASHBOARD.threshold.min as i64,
                max: DASHBOARD.threshold.max as i64,
            },
        }
    }
}

/// Value as it crosses the UI boundary. Enum choices travel as their display names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamValue {
    Date(NaiveDate),
    Choice(String),
    Number(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            ParamValue::Choice(s) => write!(f, "{}", s),
            ParamValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Current filter values for one session.
///
/// Date ordering is not checked: `start_date > end_date` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterStore {
    start_date: NaiveDate,
    end_date: NaiveDate,
    category: Category,
    region: Region,
    threshold: u32,
    revision: u64,
}

impl Default for ParameterStore {
    fn default() -> Self {
        let (sy, sm, sd) = DASHBOARD.dates.start;
        let (ey, em, ed) = DASHBOARD.dates.end;
        Self {
            start_date: NaiveDate::from_ymd_opt(sy, sm, sd).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(ey, em, ed).unwrap_or(NaiveDate::MAX),
            category: Category::default(),
            region: Region::default(),
            threshold: DASHBOARD.threshold.default,
            revision: 0,
        }
    }
}

/// A validated edit, ready to be written without any further failure.
enum Checked {
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    Category(Category),
    Region(Region),
    Threshold(u32),
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: ParamName) -> ParamValue {
        match name {
            ParamName::StartDate => ParamValue::Date(self.start_date),
            ParamName::EndDate => ParamValue::Date(self.end_date),
            ParamName::Category => ParamValue::Choice(self.category.to_string()),
            ParamName::Region => ParamValue::Choice(self.region.to_string()),
            ParamName::Threshold => ParamValue::Number(self.threshold as i64),
        }
    }

    /// All-or-nothing: on error the store is untouched.
    pub fn set(&mut self, name: ParamName, value: ParamValue) -> Result<(), DashboardError> {
        let checked = match Self::check(name, &value) {
            Ok(c) => c,
            Err(err) => {
                if DF.log_params {
                    log::warn!("Rejected edit {} = {}: {}", name, value, err);
                }
                return Err(err);
            }
        };

        let before = self.fingerprint();
        match checked {
            Checked::StartDate(d) => self.start_date = d,
            Checked::EndDate(d) => self.end_date = d,
            Checked::Category(c) => self.category = c,
            Checked::Region(r) => self.region = r,
            Checked::Threshold(t) => self.threshold = t,
        }
        if self.fingerprint() != before {
            self.revision += 1;
        }
        if DF.log_params {
            log::info!("{} = {} (rev {})", name, value, self.revision);
        }
        Ok(())
    }

    /// Validates against [`ParamName::kind`], then converts to the typed field.
    fn check(name: ParamName, value: &ParamValue) -> Result<Checked, DashboardError> {
        let invalid = |reason: &str| DashboardError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match (name.kind(), value) {
            (ParamKind::Date, ParamValue::Date(_)) => {}
            (ParamKind::Date, _) => return Err(invalid("expected a date")),
            (ParamKind::Enum(options), ParamValue::Choice(s)) => {
                if !options.iter().any(|o| o == s) {
                    return Err(invalid("not one of the listed options"));
                }
            }
            (ParamKind::Enum(_), _) => return Err(invalid("expected a choice")),
            (ParamKind::NumericRange { min, max }, ParamValue::Number(n)) => {
                if !(min..=max).contains(n) {
                    return Err(DashboardError::OutOfRange {
                        name,
                        value: *n,
                        min,
                        max,
                    });
                }
            }
            (ParamKind::NumericRange { .. }, _) => return Err(invalid("expected a number")),
        }

        match (name, value) {
            (ParamName::StartDate, ParamValue::Date(d)) => Ok(Checked::StartDate(*d)),
            (ParamName::EndDate, ParamValue::Date(d)) => Ok(Checked::EndDate(*d)),
            (ParamName::Category, ParamValue::Choice(s)) => Category::from_str(s)
                .map(Checked::Category)
                .map_err(|_| invalid("not one of the listed options")),
            (ParamName::Region, ParamValue::Choice(s)) => Region::from_str(s)
                .map(Checked::Region)
                .map_err(|_| invalid("not one of the listed options")),
            (ParamName::Threshold, ParamValue::Number(n)) => u32::try_from(*n)
                .map(Checked::Threshold)
                .map_err(|_| invalid("does not fit the threshold")),
            _ => Err(invalid("value does not match the parameter type")),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Bumped by every set that actually changed a value.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// UI hint only; nothing in the core rejects an inverted range.
    pub fn has_inverted_dates(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Hash over parameter values only (the revision counter is excluded).
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.start_date.hash(&mut hasher);
        self.end_date.hash(&mut hasher);
        self.category.hash(&mut hasher);
        self.region.hash(&mut hasher);
        self.threshold.hash(&mut hasher);
        hasher.finish()
    }
}
