use serde::{Deserialize, Serialize};

use super::series::Series;

/// A named group of spending categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
        }
    }
}

/// A spending envelope with its assignment and target history.
///
/// The assigned series records the cumulative amount allocated to the
/// category as of each month, not per-month deltas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub assigned: Series<f64>,
    pub target: Series<Target>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assigned: Series::new(),
            target: Series::new(),
        }
    }
}

/// A recurring or one-time goal attached to a category, in effect from
/// the month it is set forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target {
    EveryXWeek {
        amount: f64,
        every: u32,
        #[serde(rename = "dayOfWeek")]
        day_of_week: u8,
    },
    EveryXMonth {
        amount: f64,
        every: u32,
        #[serde(rename = "dayOfMonth")]
        day_of_month: u8,
    },
    EveryXYear {
        amount: f64,
    },
    Builder {
        amount: f64,
    },
    Saving {
        amount: f64,
        /// Goal date as epoch milliseconds.
        date: i64,
    },
}

impl Target {
    pub fn amount(&self) -> f64 {
        match self {
            Target::EveryXWeek { amount, .. }
            | Target::EveryXMonth { amount, .. }
            | Target::EveryXYear { amount }
            | Target::Builder { amount }
            | Target::Saving { amount, .. } => *amount,
        }
    }
}
