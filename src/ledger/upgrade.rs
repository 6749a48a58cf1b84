//! Upgrade path from the previous document generation.
//!
//! Version 1 kept a single flat transaction list and named the group
//! list `categories`. The upgrade wraps the transactions in one
//! generated "Main" account, renames the group list, and maps the old
//! target variants onto their current names.

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::BudgetError;

use super::account::Account;
use super::budget::{Budget, BudgetDocument, SCHEMA_VERSION};
use super::category::{Category, CategoryGroup, Target};
use super::series::Series;
use super::transaction::Transaction;

/// A budget document at schema version 1.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyDocument {
    pub categories: Vec<LegacyCategoryGroup>,
    pub transactions: Vec<Transaction>,
    pub version: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCategoryGroup {
    pub id: String,
    pub name: String,
    pub categories: Vec<LegacyCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCategory {
    pub id: String,
    pub name: String,
    pub assigned: Series<f64>,
    pub target: Series<LegacyTarget>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LegacyTarget {
    Weekly {
        amount: f64,
        #[serde(default = "default_every")]
        every: u32,
        day: u8,
    },
    Monthly {
        amount: f64,
        #[serde(default = "default_every")]
        every: u32,
        day: u8,
    },
    Yearly {
        amount: f64,
    },
}

fn default_every() -> u32 {
    1
}

impl From<LegacyTarget> for Target {
    fn from(legacy: LegacyTarget) -> Self {
        match legacy {
            LegacyTarget::Weekly { amount, every, day } => Target::EveryXWeek {
                amount,
                every,
                day_of_week: day,
            },
            LegacyTarget::Monthly { amount, every, day } => Target::EveryXMonth {
                amount,
                every,
                day_of_month: day,
            },
            LegacyTarget::Yearly { amount } => Target::EveryXYear { amount },
        }
    }
}

impl From<LegacyCategory> for Category {
    fn from(legacy: LegacyCategory) -> Self {
        Self {
            id: legacy.id,
            name: legacy.name,
            assigned: legacy.assigned,
            target: legacy
                .target
                .into_iter()
                .map(|(month, target)| (month, Target::from(target)))
                .collect(),
        }
    }
}

impl Budget {
    /// Accepts a document at the previous schema version and produces a
    /// budget at the current one.
    pub fn upgrade(legacy: LegacyDocument) -> Result<Self, BudgetError> {
        if legacy.version != 1 {
            return Err(BudgetError::UnsupportedVersion(legacy.version));
        }
        let category_groups = legacy
            .categories
            .into_iter()
            .map(|group| CategoryGroup {
                id: group.id,
                name: group.name,
                categories: group.categories.into_iter().map(Category::from).collect(),
            })
            .collect();
        let mut main = Account::new(Uuid::new_v4().to_string(), "Main");
        main.transactions = legacy.transactions;
        tracing::info!(
            transactions = main.transactions.len(),
            "upgraded legacy document to the current schema version"
        );
        Self::from_document(BudgetDocument {
            category_groups,
            accounts: vec![main],
            version: SCHEMA_VERSION,
        })
    }
}
