//! Pure expense-splitting engine for group trips.
//!
//! The caller (a presentation layer of some kind) owns the member roster and
//! the expense list and hands both in wholesale on every query; the engine
//! derives net balances, category totals, and headline summaries from that
//! snapshot and holds no state of its own.
//!
//! Amounts are integer cents ([`MoneyCents`]). Even splits distribute
//! leftover cents deterministically, so member balances over a consistent
//! roster conserve money exactly: they always sum to zero.
//!
//! ```rust
//! use engine::{balance_report, samples::sample_trip, MoneyCents};
//!
//! let trip = sample_trip();
//! let report = balance_report(&trip.members, &trip.expenses)?;
//!
//! let total: MoneyCents = report.entries().iter().map(|(_, b)| *b).sum();
//! assert!(total.is_zero());
//! # Ok::<(), engine::EngineError>(())
//! ```

pub use categories::{Category, CategoryFilter};
pub use error::EngineError;
pub use expenses::{Expense, ExpenseId};
pub use members::{Member, MemberId, display_name};
pub use money::MoneyCents;
pub use ops::{
    BalanceReport, CategoryBreakdown, FilteredExpenses, SpendSummary, balance_for_member,
    balance_report, category_breakdown, filtered_expenses, spend_summary, total_for_category,
};

mod categories;
mod error;
mod expenses;
mod members;
mod money;
mod ops;
pub mod samples;

type ResultEngine<T> = Result<T, EngineError>;
