//! The module contains the `Expense` type, a single recorded cost split
//! across part of the trip roster.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, MoneyCents, members::MemberId};

/// Stable identifier of a recorded expense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ExpenseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A recorded expense: who paid, how much, and across whom the cost splits.
///
/// Construct through [`Expense::new`], which upholds the invariants the
/// balance computation relies on: a non-negative amount and a non-empty,
/// de-duplicated split group. The split group is not checked against the
/// roster; an id the roster never mentions simply carries a share nobody
/// reports on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: MoneyCents,
    pub paid_by: MemberId,
    pub category: Category,
    /// Members the cost is divided across, in the order they were ticked.
    pub split_between: Vec<MemberId>,
    pub date: NaiveDate,
}

impl Expense {
    /// Creates a validated expense.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidSplit`] if `split_between` is empty.
    /// - [`EngineError::InvalidAmount`] if `amount` is negative.
    pub fn new(
        title: impl Into<String>,
        amount: MoneyCents,
        paid_by: MemberId,
        category: Category,
        split_between: Vec<MemberId>,
        date: NaiveDate,
    ) -> Result<Self, EngineError> {
        let title = title.into();
        if split_between.is_empty() {
            return Err(EngineError::InvalidSplit(format!(
                "expense '{title}' has an empty split group"
            )));
        }
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "expense '{title}' has a negative amount"
            )));
        }

        Ok(Self {
            id: ExpenseId::new(),
            title,
            amount,
            paid_by,
            category,
            split_between: dedup_preserving_order(split_between),
            date,
        })
    }

    /// Number of members the cost divides across.
    #[must_use]
    pub fn split_count(&self) -> usize {
        self.split_between.len()
    }

    /// The share owed by `member_id` for this expense, zero when the member
    /// is not part of the split group.
    ///
    /// Shares follow [`MoneyCents::split_even`]: leftover cents land on the
    /// earliest split participants, so the shares of the whole group sum to
    /// the amount exactly.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSplit`] if the split group is empty, which only
    /// a record built without [`Expense::new`] (e.g. deserialized) can be.
    pub fn share_of(&self, member_id: MemberId) -> Result<MoneyCents, EngineError> {
        if self.split_between.is_empty() {
            return Err(EngineError::InvalidSplit(format!(
                "expense '{}' has an empty split group",
                self.title
            )));
        }

        let Some(position) = self
            .split_between
            .iter()
            .position(|id| *id == member_id)
        else {
            return Ok(MoneyCents::ZERO);
        };

        Ok(self.amount.split_even(self.split_count())[position])
    }
}

/// Drops repeated ids, keeping first occurrences, so a member cannot owe two
/// shares of one expense.
fn dedup_preserving_order(ids: Vec<MemberId>) -> Vec<MemberId> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn new_rejects_empty_split_group() {
        let err = Expense::new(
            "Hotel",
            MoneyCents::new(120_000),
            MemberId::new(),
            Category::Accommodation,
            vec![],
            date(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSplit(_)));
    }

    #[test]
    fn new_rejects_negative_amount() {
        let payer = MemberId::new();
        let err = Expense::new(
            "Refund?",
            MoneyCents::new(-100),
            payer,
            Category::Other,
            vec![payer],
            date(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }

    #[test]
    fn new_dedups_split_group_preserving_order() {
        let a = MemberId::new();
        let b = MemberId::new();
        let expense = Expense::new(
            "Dinner",
            MoneyCents::new(28_000),
            a,
            Category::Food,
            vec![a, b, a, b],
            date(),
        )
        .unwrap();
        assert_eq!(expense.split_between, vec![a, b]);
    }

    #[test]
    fn share_of_is_zero_outside_split_group() {
        let a = MemberId::new();
        let expense = Expense::new(
            "Souvenirs",
            MoneyCents::new(8_500),
            a,
            Category::Shopping,
            vec![a],
            date(),
        )
        .unwrap();
        assert_eq!(expense.share_of(MemberId::new()).unwrap(), MoneyCents::ZERO);
        assert_eq!(expense.share_of(a).unwrap(), MoneyCents::new(8_500));
    }

    #[test]
    fn serde_round_trips_with_cents_as_plain_integers() {
        let a = MemberId::new();
        let b = MemberId::new();
        let expense = Expense::new(
            "Dinner",
            MoneyCents::new(28_000),
            a,
            Category::Food,
            vec![a, b],
            date(),
        )
        .unwrap();

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["amount"], 28_000);
        assert_eq!(json["category"], "food");

        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn share_of_spreads_remainder_to_earliest_members() {
        let a = MemberId::new();
        let b = MemberId::new();
        let c = MemberId::new();
        let expense = Expense::new(
            "Taxi",
            MoneyCents::new(100),
            a,
            Category::Transport,
            vec![a, b, c],
            date(),
        )
        .unwrap();
        assert_eq!(expense.share_of(a).unwrap(), MoneyCents::new(34));
        assert_eq!(expense.share_of(b).unwrap(), MoneyCents::new(33));
        assert_eq!(expense.share_of(c).unwrap(), MoneyCents::new(33));
    }
}
