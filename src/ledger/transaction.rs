use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A dated money movement. Amounts are stored as non-negative
/// magnitudes; the variant determines the sign applied during
/// aggregation. Only outflows are linked to a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transaction {
    Inflow {
        id: String,
        amount: f64,
        /// Epoch milliseconds.
        date: i64,
        description: String,
    },
    Outflow {
        id: String,
        amount: f64,
        date: i64,
        description: String,
        #[serde(rename = "categoryId")]
        category_id: String,
    },
}

impl Transaction {
    pub fn id(&self) -> &str {
        match self {
            Transaction::Inflow { id, .. } | Transaction::Outflow { id, .. } => id,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Transaction::Inflow { amount, .. } | Transaction::Outflow { amount, .. } => *amount,
        }
    }

    pub fn date(&self) -> i64 {
        match self {
            Transaction::Inflow { date, .. } | Transaction::Outflow { date, .. } => *date,
        }
    }

    /// The calendar month the transaction falls in.
    pub fn month(&self) -> Month {
        Month::from_timestamp_millis(self.date())
    }

    pub fn direction(&self) -> Direction {
        match self {
            Transaction::Inflow { .. } => Direction::Inflow,
            Transaction::Outflow { .. } => Direction::Outflow,
        }
    }

    /// The category an outflow is linked to; inflows are never linked.
    pub fn category_id(&self) -> Option<&str> {
        match self {
            Transaction::Inflow { .. } => None,
            Transaction::Outflow { category_id, .. } => Some(category_id),
        }
    }

    /// Amount signed for balance aggregation: inflows count positive,
    /// outflows negative.
    pub fn signed_amount(&self) -> f64 {
        match self.direction() {
            Direction::Inflow => self.amount(),
            Direction::Outflow => -self.amount(),
        }
    }
}

/// Direction selector for ledger aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inflow,
    Outflow,
}

/// Request payload for recording a transaction.
#[derive(Debug, Clone)]
pub struct TransactOptions {
    pub account_id: String,
    pub flow: Flow,
    pub amount: f64,
    pub description: String,
    /// Defaults to the current time when absent.
    pub date: Option<i64>,
    /// Defaults to a freshly generated id when absent.
    pub id: Option<String>,
}

/// Flow of a requested transaction; an outflow always names the category
/// it spends from.
#[derive(Debug, Clone)]
pub enum Flow {
    Inflow,
    Outflow { category_id: String },
}
