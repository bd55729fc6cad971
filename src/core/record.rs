use serde::{Deserialize, Serialize};

/// Binary launch outcome, the CSV `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Self::Failure),
            1 => Some(Self::Success),
            _ => None,
        }
    }

    /// The numeric class the original dataset encodes: 1 success, 0 failure.
    #[must_use]
    pub fn class(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }
}

/// One launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl LaunchRecord {
    #[must_use]
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

/// Inclusive payload interval in kilograms.
///
/// A range with `low > high` is representable and matches nothing; the
/// slider never produces one, but resolvers stay total if it appears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub fn contains(self, payload_kg: f64) -> bool {
        payload_kg >= self.low && payload_kg <= self.high
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.low > self.high
    }
}

/// Dropdown domain: all sites, or one known site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

/// Wire value the dropdown sends for the all-sites option.
pub const ALL_SITES_VALUE: &str = "ALL";

impl SiteSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            Self::All
        } else {
            Self::Site(value.to_owned())
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_SITES_VALUE,
            Self::Site(site) => site,
        }
    }

    #[must_use]
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(selected) => selected == site,
        }
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
