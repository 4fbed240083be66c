//! The fixed top-level budget buckets
//!
//! Categories form the 50/25/25 allocation model: Essential (50%),
//! Wants (25%), Investment (25%), plus Income for inflows. The set is a
//! closed enum; user-defined labels live one level below as sub-categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed top-level budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Essential,
    Wants,
    Investment,
    Income,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Essential,
        Category::Wants,
        Category::Investment,
        Category::Income,
    ];

    /// The three spending buckets (Income excluded)
    pub const SPENDING: [Category; 3] =
        [Category::Essential, Category::Wants, Category::Investment];

    /// Share of net income allocated to this bucket (Income has none)
    pub fn target_share(&self) -> f64 {
        match self {
            Category::Essential => 0.50,
            Category::Wants => 0.25,
            Category::Investment => 0.25,
            Category::Income => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Essential => "Essential",
            Category::Wants => "Wants",
            Category::Investment => "Investment",
            Category::Income => "Income",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "essential" => Ok(Category::Essential),
            "wants" => Ok(Category::Wants),
            "investment" => Ok(Category::Investment),
            "income" => Ok(Category::Income),
            other => Err(format!("Unknown category: '{}'", other)),
        }
    }
}
