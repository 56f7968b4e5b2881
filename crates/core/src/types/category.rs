//! Grocery item categories.

use serde::{Deserialize, Serialize};

/// The section of the store a grocery item belongs to.
///
/// The set is fixed at design time; `Other` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Produce,
    Deli,
    Bakery,
    Pantry,
    Frozen,
    #[default]
    Other,
}

impl ItemCategory {
    /// All categories, in the order they appear in form selects.
    pub const ALL: [Self; 6] = [
        Self::Produce,
        Self::Deli,
        Self::Bakery,
        Self::Pantry,
        Self::Frozen,
        Self::Other,
    ];

    /// Stable identifier used in form values and database rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Produce => "PRODUCE",
            Self::Deli => "DELI",
            Self::Bakery => "BAKERY",
            Self::Pantry => "PANTRY",
            Self::Frozen => "FROZEN",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Deli => "Deli",
            Self::Bakery => "Bakery",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRODUCE" => Ok(Self::Produce),
            "DELI" => Ok(Self::Deli),
            "BAKERY" => Ok(Self::Bakery),
            "PANTRY" => Ok(Self::Pantry),
            "FROZEN" => Ok(Self::Frozen),
            "OTHER" => Ok(Self::Other),
            _ => Err(format!("invalid item category: {s}")),
        }
    }
}
