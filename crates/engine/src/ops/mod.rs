//! Pure query operations over caller-supplied snapshots.
//!
//! Every function here takes the member roster and expense list wholesale
//! and derives its result in one pass. Nothing is cached: the surrounding
//! application re-runs a query whenever its collections change, which the
//! observed data volumes make entirely adequate.

mod balances;
mod categories;
mod filter;
mod summary;

pub use balances::{BalanceReport, balance_for_member, balance_report};
pub use categories::{CategoryBreakdown, category_breakdown, total_for_category};
pub use filter::{FilteredExpenses, filtered_expenses};
pub use summary::{SpendSummary, spend_summary};
