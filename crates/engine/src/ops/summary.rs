use tracing::debug;

use crate::{CategoryFilter, MoneyCents, expenses::Expense, members::Member, ops::total_for_category};

/// Headline numbers for a set of expenses: the original UI's three summary
/// cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpendSummary {
    /// Sum over every recorded expense.
    pub total: MoneyCents,
    /// Number of recorded expenses.
    pub expense_count: usize,
    /// Grand total divided evenly across the roster, zero for an empty
    /// roster. This is a headline figure, not anyone's actual debt; real
    /// shares follow each expense's split group.
    pub per_person: MoneyCents,
}

/// Computes the headline totals for a roster and expense list.
#[must_use]
pub fn spend_summary(members: &[Member], expenses: &[Expense]) -> SpendSummary {
    let total = total_for_category(expenses, CategoryFilter::All);
    let per_person = if members.is_empty() {
        MoneyCents::ZERO
    } else {
        MoneyCents::new(total.cents() / members.len() as i64)
    };

    debug!(
        total = total.cents(),
        expenses = expenses.len(),
        "spend summary computed"
    );

    SpendSummary {
        total,
        expense_count: expenses.len(),
        per_person,
    }
}
