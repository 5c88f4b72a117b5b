use crate::{CategoryFilter, expenses::Expense};

/// Lazy, order-preserving iterator over the expenses matching a category
/// filter.
///
/// The adapter is `Clone`, so a caller can restart the traversal without
/// touching the underlying list.
#[derive(Clone, Debug)]
pub struct FilteredExpenses<'a> {
    expenses: std::slice::Iter<'a, Expense>,
    filter: CategoryFilter,
}

impl<'a> Iterator for FilteredExpenses<'a> {
    type Item = &'a Expense;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.expenses.by_ref().find(|expense| filter.matches(expense))
    }
}

/// Filters expenses by category, preserving the original order.
///
/// [`CategoryFilter::All`] is the identity filter; filtering twice by the
/// same category is idempotent.
#[must_use]
pub fn filtered_expenses(expenses: &[Expense], filter: CategoryFilter) -> FilteredExpenses<'_> {
    FilteredExpenses {
        expenses: expenses.iter(),
        filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_trip;
    use crate::{Category, CategoryFilter};

    #[test]
    fn all_is_the_identity_filter() {
        let trip = sample_trip();
        let filtered: Vec<_> = filtered_expenses(&trip.expenses, CategoryFilter::All).collect();
        let original: Vec<_> = trip.expenses.iter().collect();
        assert_eq!(filtered, original);
    }

    #[test]
    fn filter_preserves_order_and_is_idempotent() {
        let trip = sample_trip();
        let filter = CategoryFilter::Only(Category::Food);

        let once: Vec<_> = filtered_expenses(&trip.expenses, filter).collect();
        let twice: Vec<_> = filtered_expenses(&trip.expenses, filter)
            .filter(|expense| filter.matches(expense))
            .collect();

        assert_eq!(once, twice);
        assert!(once.iter().all(|e| e.category == Category::Food));
    }

    #[test]
    fn clone_restarts_the_traversal() {
        let trip = sample_trip();
        let mut iter = filtered_expenses(&trip.expenses, CategoryFilter::All);
        let restart = iter.clone();
        iter.next();

        assert_eq!(restart.count(), trip.expenses.len());
    }

    #[test]
    fn unmatched_category_yields_nothing() {
        let trip = sample_trip();
        let none: Vec<_> =
            filtered_expenses(&trip.expenses, CategoryFilter::Only(Category::Other)).collect();
        assert!(none.is_empty());
    }
}
