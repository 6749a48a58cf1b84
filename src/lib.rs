//! Envelope Core offers the calculation engine behind a zero-based
//! ("envelope") budgeting workflow: a month-indexed, carry-forward data
//! model over spending categories and a ledger of dated transactions,
//! with the derived metrics built on top of it (assigned sums, assign
//! limits, category availability, running balances).
//!
//! The crate is a pure in-memory core: callers own persistence and
//! transport and hand documents in and out through [`Budget::from_json`]
//! and [`Budget::to_document`].

pub mod errors;
pub mod ledger;
pub mod month;

pub use errors::BudgetError;
pub use ledger::{
    Account, AssignedLookup, Budget, BudgetDocument, Category, CategoryGroup, Direction, Flow,
    LegacyDocument, Series, Target, TransactOptions, Transaction, SCHEMA_VERSION,
};
pub use month::Month;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with sensible defaults and emits a startup
/// info log. Safe to call more than once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("envelope_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Envelope Core tracing initialized.");
    });
}
