//! The Tokyo trip fixture: four members, five expenses. Seed data for tests
//! and documentation examples.

use chrono::NaiveDate;

use crate::{Category, Expense, Member, MoneyCents};

/// A roster plus its recorded expenses, as the caller would hold them.
#[derive(Clone, Debug)]
pub struct SampleTrip {
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    // Fixture dates are hardcoded valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Builds the sample Tokyo trip.
///
/// Totals worth knowing when asserting against it: 2245.00 spent overall,
/// member 0 nets +900.00 from the hotel booking alone, and the souvenirs
/// expense splits across its own payer only, netting zero.
#[must_use]
pub fn sample_trip() -> SampleTrip {
    let members = vec![
        Member::new("Alex Chen", "alex@example.com", "AC"),
        Member::new("Sarah Kim", "sarah@example.com", "SK"),
        Member::new("Mike Johnson", "mike@example.com", "MJ"),
        Member::new("Emma Wilson", "emma@example.com", "EW"),
    ];
    let everyone: Vec<_> = members.iter().map(|m| m.id).collect();

    let expenses = vec![
        expense(
            "Tokyo Hotel Booking",
            120_000,
            members[0].id,
            Category::Accommodation,
            everyone.clone(),
            day(2024, 1, 10),
        ),
        expense(
            "Group Dinner at Sushi Restaurant",
            28_000,
            members[1].id,
            Category::Food,
            everyone.clone(),
            day(2024, 1, 12),
        ),
        expense(
            "Train Tickets (JR Pass)",
            56_000,
            members[2].id,
            Category::Transport,
            everyone.clone(),
            day(2024, 1, 8),
        ),
        expense(
            "Tokyo Skytree Tickets",
            12_000,
            members[0].id,
            Category::Activities,
            vec![members[0].id, members[1].id, members[2].id],
            day(2024, 1, 15),
        ),
        expense(
            "Souvenirs Shopping",
            8_500,
            members[3].id,
            Category::Shopping,
            vec![members[3].id],
            day(2024, 1, 18),
        ),
    ];

    SampleTrip { members, expenses }
}

// The fixture satisfies every Expense::new invariant.
#[allow(clippy::unwrap_used)]
fn expense(
    title: &str,
    cents: i64,
    paid_by: crate::MemberId,
    category: Category,
    split_between: Vec<crate::MemberId>,
    date: NaiveDate,
) -> Expense {
    Expense::new(
        title,
        MoneyCents::new(cents),
        paid_by,
        category,
        split_between,
        date,
    )
    .unwrap()
}
