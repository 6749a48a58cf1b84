use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BudgetError;
use crate::month::Month;

use super::{
    account::Account,
    category::{Category, CategoryGroup, Target},
    transaction::{Flow, TransactOptions, Transaction},
};

/// Current generation of the persisted document shape.
pub const SCHEMA_VERSION: u32 = 2;

/// The persisted shape of a whole budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDocument {
    pub category_groups: Vec<CategoryGroup>,
    pub accounts: Vec<Account>,
    pub version: u32,
}

impl Default for BudgetDocument {
    fn default() -> Self {
        Self {
            category_groups: Vec::new(),
            accounts: Vec::new(),
            version: SCHEMA_VERSION,
        }
    }
}

/// How an assigned-series lookup resolves the queried month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignedLookup {
    /// Only the exact entry recorded at the queried month.
    Exact,
    /// The entry in effect at the queried month (carry-forward).
    Latest,
    /// Sum of every entry recorded at or before the queried month.
    CumulativeToDate,
}

/// Aggregate root owning the category tree, the accounts with their
/// transactions, and the schema version tag.
///
/// Mutations follow a silent-null policy: creating an entity whose id is
/// already taken returns `None`, and mutating or deleting a missing
/// entity leaves state unchanged. Malformed input is only rejected
/// loudly at validating construction ([`Budget::from_json`]).
#[derive(Debug, Clone, Default)]
pub struct Budget {
    document: BudgetDocument,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- category tree -----

    pub fn add_category_group(
        &mut self,
        name: impl Into<String>,
        id: Option<String>,
    ) -> Option<String> {
        let id = id.unwrap_or_else(generate_id);
        if self.get_category_group(&id).is_some() {
            return None;
        }
        self.document
            .category_groups
            .push(CategoryGroup::new(id.clone(), name));
        Some(id)
    }

    pub fn add_category(
        &mut self,
        group_id: &str,
        name: impl Into<String>,
        id: Option<String>,
    ) -> Option<String> {
        let id = id.unwrap_or_else(generate_id);
        if self.get_category(&id).is_some() {
            return None;
        }
        let name = name.into();
        let group = self
            .document
            .category_groups
            .iter_mut()
            .find(|group| group.id == group_id)?;
        group.categories.push(Category::new(id.clone(), name));
        Some(id)
    }

    /// Removes the group and every category it contains.
    pub fn delete_category_group(&mut self, id: &str) {
        self.document.category_groups.retain(|group| group.id != id);
    }

    pub fn delete_category(&mut self, id: &str) {
        for group in &mut self.document.category_groups {
            group.categories.retain(|category| category.id != id);
        }
    }

    pub fn get_category_group(&self, id: &str) -> Option<&CategoryGroup> {
        self.document
            .category_groups
            .iter()
            .find(|group| group.id == id)
    }

    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories().find(|category| category.id == id)
    }

    /// Overwrites the assigned-series entry at `month` with the new
    /// cumulative total `amount`. Callers pass the running total, not a
    /// delta.
    pub fn assign(&mut self, category_id: &str, month: Month, amount: f64) {
        if let Some(category) = self.category_mut(category_id) {
            category.assigned.insert(month, amount);
            tracing::debug!(category_id, %month, amount, "assigned");
        }
    }

    pub fn set_target(&mut self, category_id: &str, month: Month, target: Target) {
        if let Some(category) = self.category_mut(category_id) {
            category.target.insert(month, target);
        }
    }

    /// Removes exactly that month's target entry; entries at other
    /// months, and their carried-forward effect, are unaffected.
    pub fn delete_target(&mut self, category_id: &str, month: Month) {
        if let Some(category) = self.category_mut(category_id) {
            category.target.remove(month);
        }
    }

    pub fn get_assigned(
        &self,
        category_id: &str,
        month: Month,
        lookup: AssignedLookup,
    ) -> Option<f64> {
        let category = self.get_category(category_id)?;
        match lookup {
            AssignedLookup::Exact => category.assigned.get(month).copied(),
            AssignedLookup::Latest => category.assigned.latest_at(month).copied(),
            AssignedLookup::CumulativeToDate => {
                Some(category.assigned.up_to(month).map(|(_, amount)| amount).sum())
            }
        }
    }

    /// The target in effect at `month` (always carry-forward).
    pub fn get_target(&self, category_id: &str, month: Month) -> Option<&Target> {
        self.get_category(category_id)?.target.latest_at(month)
    }

    // ----- accounts & ledger -----

    pub fn add_account(&mut self, name: impl Into<String>, id: Option<String>) -> Option<String> {
        let id = id.unwrap_or_else(generate_id);
        if self.get_account(&id).is_some() {
            return None;
        }
        self.document.accounts.push(Account::new(id.clone(), name));
        Some(id)
    }

    pub fn delete_account(&mut self, id: &str) {
        self.document.accounts.retain(|account| account.id != id);
    }

    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.document.accounts.iter().find(|account| account.id == id)
    }

    /// Records a transaction against the named account. Returns `None`
    /// when the supplied id is already taken or the account does not
    /// exist.
    pub fn transact(&mut self, options: TransactOptions) -> Option<String> {
        let id = options.id.unwrap_or_else(generate_id);
        if self.get_transaction(&id).is_some() {
            return None;
        }
        let date = options
            .date
            .unwrap_or_else(|| Utc::now().timestamp_millis());
        let transaction = match options.flow {
            Flow::Inflow => Transaction::Inflow {
                id: id.clone(),
                amount: options.amount,
                date,
                description: options.description,
            },
            Flow::Outflow { category_id } => Transaction::Outflow {
                id: id.clone(),
                amount: options.amount,
                date,
                description: options.description,
                category_id,
            },
        };
        let account = self
            .document
            .accounts
            .iter_mut()
            .find(|account| account.id == options.account_id)?;
        account.transactions.push(transaction);
        tracing::debug!(%id, account_id = %options.account_id, "recorded transaction");
        Some(id)
    }

    /// Removes the transaction from whichever account holds it.
    pub fn delete_transaction(&mut self, id: &str) {
        for account in &mut self.document.accounts {
            account.transactions.retain(|transaction| transaction.id() != id);
        }
    }

    pub fn get_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions_scoped(None)
            .find(|transaction| transaction.id() == id)
    }

    /// Outflow transactions linked to the category whose month is at or
    /// before `month` (cumulative to date, not "in that month only").
    pub fn get_transactions_of_category(
        &self,
        category_id: &str,
        month: Month,
    ) -> Vec<&Transaction> {
        self.transactions_scoped(None)
            .filter(|transaction| {
                transaction.category_id() == Some(category_id) && transaction.month() <= month
            })
            .collect()
    }

    // ----- serialization -----

    /// A deep, independent copy of the current document; mutating the
    /// returned value never affects this budget.
    pub fn to_document(&self) -> BudgetDocument {
        self.document.clone()
    }

    pub fn to_json_string(&self) -> Result<String, BudgetError> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// Validating construction: the document must carry the current
    /// schema version and unique ids per entity kind. The validated
    /// document becomes the internal state without a further copy.
    pub fn from_document(document: BudgetDocument) -> Result<Self, BudgetError> {
        if document.version != SCHEMA_VERSION {
            return Err(BudgetError::UnsupportedVersion(document.version));
        }
        validate_unique_ids(&document)?;
        Ok(Self { document })
    }

    /// Parses and validates a serialized document. Shape violations
    /// (missing fields, wrong field types, malformed month tokens) fail
    /// loudly here; everything downstream assumes a well-formed
    /// document.
    pub fn from_json(json: &str) -> Result<Self, BudgetError> {
        let document: BudgetDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    // ----- internal -----

    pub(crate) fn categories(&self) -> impl Iterator<Item = &Category> {
        self.document
            .category_groups
            .iter()
            .flat_map(|group| group.categories.iter())
    }

    fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.document
            .category_groups
            .iter_mut()
            .flat_map(|group| group.categories.iter_mut())
            .find(|category| category.id == id)
    }

    pub(crate) fn transactions_scoped<'a>(
        &'a self,
        account: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.document
            .accounts
            .iter()
            .filter(move |candidate| account.map_or(true, |id| candidate.id == id))
            .flat_map(|account| account.transactions.iter())
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

fn validate_unique_ids(document: &BudgetDocument) -> Result<(), BudgetError> {
    let mut groups = HashSet::new();
    let mut categories = HashSet::new();
    for group in &document.category_groups {
        if !groups.insert(group.id.as_str()) {
            return Err(BudgetError::Validation(format!(
                "duplicate category group id: {}",
                group.id
            )));
        }
        for category in &group.categories {
            if !categories.insert(category.id.as_str()) {
                return Err(BudgetError::Validation(format!(
                    "duplicate category id: {}",
                    category.id
                )));
            }
        }
    }
    let mut accounts = HashSet::new();
    let mut transactions = HashSet::new();
    for account in &document.accounts {
        if !accounts.insert(account.id.as_str()) {
            return Err(BudgetError::Validation(format!(
                "duplicate account id: {}",
                account.id
            )));
        }
        for transaction in &account.transactions {
            if !transactions.insert(transaction.id()) {
                return Err(BudgetError::Validation(format!(
                    "duplicate transaction id: {}",
                    transaction.id()
                )));
            }
        }
    }
    Ok(())
}
