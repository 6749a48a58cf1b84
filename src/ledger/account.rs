use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// A financial account holding an ordered list of transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            transactions: Vec::new(),
        }
    }
}
