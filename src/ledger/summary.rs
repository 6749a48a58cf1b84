//! Derived envelope metrics over the category tree and the ledger.
//!
//! Reads flow one way: ledger and category tree feed these computations,
//! which return plain scalars and never mutate state.

use crate::month::Month;

use super::budget::{AssignedLookup, Budget};
use super::transaction::{Direction, Transaction};

impl Budget {
    /// Sum over every category of its assigned value at `month`: the
    /// exact entry when `include_past` is false, the cumulative sum of
    /// all entries to date when true. Categories with no matching entry
    /// contribute zero.
    pub fn get_assigned_sum(&self, month: Month, include_past: bool) -> f64 {
        let lookup = if include_past {
            AssignedLookup::CumulativeToDate
        } else {
            AssignedLookup::Exact
        };
        self.categories()
            .map(|category| {
                self.get_assigned(&category.id, month, lookup)
                    .unwrap_or(0.0)
            })
            .sum()
    }

    /// Money not yet allocated to any category: cumulative inflow minus
    /// cumulative assigned. Negative when more has been assigned than
    /// has flowed in.
    pub fn get_assign_limit(&self, month: Month) -> f64 {
        self.sum_by_direction(Direction::Inflow, month, None) - self.get_assigned_sum(month, true)
    }

    /// What the category still has to spend: its assigned amount in
    /// effect at `month` (carry-forward latest, deliberately not the
    /// cumulative sum used by [`Budget::get_assign_limit`]) minus its
    /// outflow to date.
    pub fn get_available(&self, category_id: &str, month: Month) -> f64 {
        let assigned = self
            .get_assigned(category_id, month, AssignedLookup::Latest)
            .unwrap_or(0.0);
        let spent: f64 = self
            .get_transactions_of_category(category_id, month)
            .iter()
            .map(|transaction| transaction.amount())
            .sum();
        assigned - spent
    }

    /// Signed running balance over every transaction dated at or before
    /// `month`, optionally restricted to one account.
    pub fn get_balance(&self, month: Month, account: Option<&str>) -> f64 {
        self.transactions_scoped(account)
            .filter(|transaction| transaction.month() <= month)
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Sum of transaction magnitudes with the given direction dated at
    /// or before `month`, optionally restricted to one account.
    pub fn sum_by_direction(
        &self,
        direction: Direction,
        month: Month,
        account: Option<&str>,
    ) -> f64 {
        self.transactions_scoped(account)
            .filter(|transaction| {
                transaction.direction() == direction && transaction.month() <= month
            })
            .map(Transaction::amount)
            .sum()
    }
}
