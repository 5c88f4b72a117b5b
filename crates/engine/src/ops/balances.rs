use std::collections::HashMap;

use tracing::debug;

use crate::{
    EngineError, MoneyCents, ResultEngine,
    expenses::Expense,
    members::{Member, MemberId},
};

/// Per-member net balances derived from one pass over the expense list.
///
/// Entries follow the roster order. A positive balance means the group owes
/// the member; negative means the member owes the group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalanceReport {
    entries: Vec<(MemberId, MoneyCents)>,
}

impl BalanceReport {
    /// Net balance of a member, zero for an id outside the roster.
    #[must_use]
    pub fn balance(&self, member_id: MemberId) -> MoneyCents {
        self.entries
            .iter()
            .find(|(id, _)| *id == member_id)
            .map(|(_, balance)| *balance)
            .unwrap_or(MoneyCents::ZERO)
    }

    /// Balances in roster order.
    #[must_use]
    pub fn entries(&self) -> &[(MemberId, MoneyCents)] {
        &self.entries
    }

    /// Mapping view of the balances.
    #[must_use]
    pub fn as_map(&self) -> HashMap<MemberId, MoneyCents> {
        self.entries.iter().copied().collect()
    }
}

/// Net balance of a single member: everything they paid minus their share of
/// every expense that splits across them.
///
/// A member who neither paid nor appears in any split group nets to exactly
/// zero. Shares come from [`crate::MoneyCents::split_even`], so summing the
/// balances of a roster that covers every payer and split participant gives
/// zero to the cent.
///
/// # Errors
///
/// [`EngineError::InvalidSplit`] if any expense carries an empty split
/// group; such a record contributes to no balance.
pub fn balance_for_member(expenses: &[Expense], member_id: MemberId) -> ResultEngine<MoneyCents> {
    let mut balance = MoneyCents::ZERO;
    for expense in expenses {
        if expense.split_between.is_empty() {
            return Err(EngineError::InvalidSplit(format!(
                "expense '{}' has an empty split group",
                expense.title
            )));
        }
        if expense.paid_by == member_id {
            balance += expense.amount;
        }
        balance -= expense.share_of(member_id)?;
    }
    Ok(balance)
}

/// Computes every roster member's net balance in a single pass.
///
/// Payers or split participants missing from the roster are tolerated: their
/// paid amounts and shares simply have no entry to land in.
///
/// # Errors
///
/// [`EngineError::InvalidSplit`] if any expense carries an empty split group.
pub fn balance_report(members: &[Member], expenses: &[Expense]) -> ResultEngine<BalanceReport> {
    let mut balances: Vec<(MemberId, MoneyCents)> = members
        .iter()
        .map(|member| (member.id, MoneyCents::ZERO))
        .collect();

    for expense in expenses {
        if expense.split_between.is_empty() {
            return Err(EngineError::InvalidSplit(format!(
                "expense '{}' has an empty split group",
                expense.title
            )));
        }

        if let Some(entry) = balances.iter_mut().find(|(id, _)| *id == expense.paid_by) {
            entry.1 += expense.amount;
        }

        let shares = expense.amount.split_even(expense.split_count());
        for (participant, share) in expense.split_between.iter().zip(shares) {
            if let Some(entry) = balances.iter_mut().find(|(id, _)| id == participant) {
                entry.1 -= share;
            }
        }
    }

    debug!(
        members = members.len(),
        expenses = expenses.len(),
        "balance report computed"
    );

    Ok(BalanceReport { entries: balances })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_trip;

    #[test]
    fn report_matches_per_member_queries() {
        let trip = sample_trip();
        let report = balance_report(&trip.members, &trip.expenses).unwrap();

        for member in &trip.members {
            assert_eq!(
                report.balance(member.id),
                balance_for_member(&trip.expenses, member.id).unwrap(),
                "balance mismatch for {}",
                member.name
            );
        }
    }

    #[test]
    fn balance_is_zero_for_uninvolved_member() {
        let trip = sample_trip();
        let outsider = MemberId::new();
        assert_eq!(
            balance_for_member(&trip.expenses, outsider).unwrap(),
            MoneyCents::ZERO
        );
        let report = balance_report(&trip.members, &trip.expenses).unwrap();
        assert_eq!(report.balance(outsider), MoneyCents::ZERO);
    }

    #[test]
    fn empty_expense_list_yields_all_zero() {
        let trip = sample_trip();
        let report = balance_report(&trip.members, &[]).unwrap();
        assert!(report.entries().iter().all(|(_, b)| b.is_zero()));
    }
}
