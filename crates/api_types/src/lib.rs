//! Plain serializable records exchanged with the presentation layer.
//!
//! The engine's contract is a function call over in-memory snapshots; these
//! types are the JSON-friendly shapes a UI or export feature would hold on
//! its side of that boundary. Money crosses the boundary as decimal strings
//! in major units (`"1200.00"`), dates as ISO `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod member {
    use super::*;

    /// A roster member as displayed by the UI.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MemberView {
        pub id: Uuid,
        pub name: String,
        pub contact: String,
        pub avatar: String,
    }

    impl From<&engine::Member> for MemberView {
        fn from(member: &engine::Member) -> Self {
            Self {
                id: member.id.as_uuid(),
                name: member.name.clone(),
                contact: member.contact.clone(),
                avatar: member.avatar.clone(),
            }
        }
    }
}

pub mod expense {
    use super::*;

    /// Payload of the add-expense form.
    ///
    /// Validation funnels through [`engine::Expense::new`]: an empty split
    /// selection or a negative/unparsable amount is rejected here, before
    /// the record ever reaches a computation.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub title: String,
        /// Decimal string in major units, `.` or `,` separator.
        pub amount: String,
        pub paid_by: Uuid,
        /// Category code (`accommodation`, `food`, ...).
        pub category: String,
        pub split_between: Vec<Uuid>,
        pub date: NaiveDate,
    }

    impl ExpenseNew {
        /// Builds the validated engine record.
        pub fn into_expense(self) -> Result<engine::Expense, engine::EngineError> {
            let amount: engine::MoneyCents = self.amount.parse()?;
            let category = engine::Category::try_from(self.category.as_str())?;
            engine::Expense::new(
                self.title,
                amount,
                engine::MemberId::from(self.paid_by),
                category,
                self.split_between
                    .into_iter()
                    .map(engine::MemberId::from)
                    .collect(),
                self.date,
            )
        }
    }

    /// A recorded expense as listed by the UI.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub title: String,
        /// Decimal string in major units.
        pub amount: String,
        pub paid_by: Uuid,
        pub category: String,
        pub split_between: Vec<Uuid>,
        pub date: NaiveDate,
        /// Even share per split participant, as the list renders "x each".
        /// Leftover cents make the true shares differ by at most one cent.
        pub share_each: String,
    }

    impl From<&engine::Expense> for ExpenseView {
        fn from(expense: &engine::Expense) -> Self {
            let share = expense
                .amount
                .split_even(expense.split_count())
                .last()
                .copied()
                .unwrap_or(engine::MoneyCents::ZERO);
            Self {
                id: expense.id.as_uuid(),
                title: expense.title.clone(),
                amount: expense.amount.to_string(),
                paid_by: expense.paid_by.as_uuid(),
                category: expense.category.code().to_string(),
                split_between: expense
                    .split_between
                    .iter()
                    .map(|id| id.as_uuid())
                    .collect(),
                date: expense.date,
                share_each: share.to_string(),
            }
        }
    }
}

pub mod report {
    use super::*;

    /// One member's net balance.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BalanceEntry {
        pub member_id: Uuid,
        /// Signed cents; positive means the group owes the member.
        pub balance_cents: i64,
    }

    /// Balances for the whole roster, in roster order.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BalancesResponse {
        pub balances: Vec<BalanceEntry>,
    }

    impl From<&engine::BalanceReport> for BalancesResponse {
        fn from(report: &engine::BalanceReport) -> Self {
            Self {
                balances: report
                    .entries()
                    .iter()
                    .map(|(id, balance)| BalanceEntry {
                        member_id: id.as_uuid(),
                        balance_cents: balance.cents(),
                    })
                    .collect(),
            }
        }
    }

    /// Spend recorded under one category.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub category: String,
        pub total_cents: i64,
        /// Unrounded share of the grand total, in percent.
        pub percent: f64,
    }

    /// Per-category totals plus the grand total.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct BreakdownResponse {
        pub categories: Vec<CategoryTotal>,
        pub grand_total_cents: i64,
    }

    impl From<&engine::CategoryBreakdown> for BreakdownResponse {
        fn from(breakdown: &engine::CategoryBreakdown) -> Self {
            Self {
                categories: breakdown
                    .totals()
                    .iter()
                    .map(|(category, total)| CategoryTotal {
                        category: category.code().to_string(),
                        total_cents: total.cents(),
                        percent: breakdown.percent_of_total(*category),
                    })
                    .collect(),
                grand_total_cents: breakdown.grand_total().cents(),
            }
        }
    }

    /// Headline numbers for the summary cards.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Summary {
        pub total_cents: i64,
        pub expense_count: usize,
        pub per_person_cents: i64,
    }

    impl From<engine::SpendSummary> for Summary {
        fn from(summary: engine::SpendSummary) -> Self {
            Self {
                total_cents: summary.total.cents(),
                expense_count: summary.expense_count,
                per_person_cents: summary.per_person.cents(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::samples::sample_trip;

    #[test]
    fn expense_new_round_trips_through_the_engine() {
        let trip = sample_trip();
        let payload = expense::ExpenseNew {
            title: "Karaoke Night".to_string(),
            amount: "96,40".to_string(),
            paid_by: trip.members[1].id.as_uuid(),
            category: "activities".to_string(),
            split_between: trip.members.iter().map(|m| m.id.as_uuid()).collect(),
            date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
        };

        let expense = payload.into_expense().unwrap();
        assert_eq!(expense.amount.cents(), 9_640);
        assert_eq!(expense.category, engine::Category::Activities);
        assert_eq!(expense.split_count(), 4);
    }

    #[test]
    fn expense_new_rejects_bad_payloads() {
        let trip = sample_trip();
        let base = expense::ExpenseNew {
            title: "Broken".to_string(),
            amount: "10.00".to_string(),
            paid_by: trip.members[0].id.as_uuid(),
            category: "food".to_string(),
            split_between: vec![trip.members[0].id.as_uuid()],
            date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
        };

        let mut no_split = base.clone();
        no_split.split_between.clear();
        assert!(matches!(
            no_split.into_expense(),
            Err(engine::EngineError::InvalidSplit(_))
        ));

        let mut bad_amount = base.clone();
        bad_amount.amount = "ten".to_string();
        assert!(matches!(
            bad_amount.into_expense(),
            Err(engine::EngineError::InvalidAmount(_))
        ));

        let mut bad_category = base;
        bad_category.category = "snacks".to_string();
        assert!(matches!(
            bad_category.into_expense(),
            Err(engine::EngineError::UnknownCategory(_))
        ));
    }

    #[test]
    fn balances_response_serializes_snake_case_cents() {
        let trip = sample_trip();
        let report = engine::balance_report(&trip.members, &trip.expenses).unwrap();
        let response = report::BalancesResponse::from(&report);

        // Member 0 paid 1320.00 (hotel + Skytree) and owes 550.00 in shares.
        let json = serde_json::to_value(&response).unwrap();
        let first = &json["balances"][0];
        assert_eq!(first["balance_cents"], 77_000);
        assert!(first["member_id"].is_string());
    }

    #[test]
    fn expense_view_formats_money_and_share() {
        let trip = sample_trip();
        let view = expense::ExpenseView::from(&trip.expenses[0]);
        assert_eq!(view.amount, "1200.00");
        assert_eq!(view.share_each, "300.00");
        assert_eq!(view.category, "accommodation");
        assert_eq!(view.split_between.len(), 4);
    }

    #[test]
    fn breakdown_response_carries_percentages() {
        let trip = sample_trip();
        let breakdown = engine::category_breakdown(&trip.expenses);
        let response = report::BreakdownResponse::from(&breakdown);

        assert_eq!(response.grand_total_cents, 224_500);
        assert_eq!(response.categories.len(), 6);
        let percent_sum: f64 = response.categories.iter().map(|c| c.percent).sum();
        assert!((percent_sum - 100.0).abs() < 1e-9);
    }
}
