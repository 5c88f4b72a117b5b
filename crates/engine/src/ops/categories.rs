use crate::{Category, CategoryFilter, MoneyCents, expenses::Expense, ops::filtered_expenses};

/// Sum of expense amounts matching the filter.
///
/// Zero for an empty list or an unmatched category; never an error.
#[must_use]
pub fn total_for_category(expenses: &[Expense], filter: CategoryFilter) -> MoneyCents {
    filtered_expenses(expenses, filter)
        .map(|expense| expense.amount)
        .sum()
}

/// Per-category spend totals plus the grand total.
///
/// Categories are listed in [`Category::ALL`] order, including tags no
/// expense uses (their total is zero), which is how the original category
/// picker renders its rows.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBreakdown {
    totals: Vec<(Category, MoneyCents)>,
    grand_total: MoneyCents,
}

impl CategoryBreakdown {
    /// Total recorded under one category.
    #[must_use]
    pub fn total(&self, category: Category) -> MoneyCents {
        self.totals
            .iter()
            .find(|(tag, _)| *tag == category)
            .map(|(_, total)| *total)
            .unwrap_or(MoneyCents::ZERO)
    }

    /// All per-category totals in [`Category::ALL`] order.
    #[must_use]
    pub fn totals(&self) -> &[(Category, MoneyCents)] {
        &self.totals
    }

    /// Sum over every category.
    #[must_use]
    pub fn grand_total(&self) -> MoneyCents {
        self.grand_total
    }

    /// Share of the grand total recorded under one category, in percent.
    ///
    /// Zero when nothing is recorded at all. Returned unrounded; display
    /// rounding is the caller's concern.
    #[must_use]
    pub fn percent_of_total(&self, category: Category) -> f64 {
        if self.grand_total.is_zero() {
            return 0.0;
        }
        self.total(category).cents() as f64 * 100.0 / self.grand_total.cents() as f64
    }
}

/// Aggregates spend per category over the whole expense list.
#[must_use]
pub fn category_breakdown(expenses: &[Expense]) -> CategoryBreakdown {
    let totals: Vec<(Category, MoneyCents)> = Category::ALL
        .into_iter()
        .map(|category| {
            (
                category,
                total_for_category(expenses, CategoryFilter::Only(category)),
            )
        })
        .collect();
    let grand_total = totals.iter().map(|(_, total)| *total).sum();

    CategoryBreakdown {
        totals,
        grand_total,
    }
}
