use serde::{Deserialize, Serialize};

use crate::{EngineError, expenses::Expense};

/// Classification tag attached to every expense, used for aggregate
/// reporting.
///
/// The set is closed: the add-expense form offers exactly these choices, and
/// anything else falls back to [`Category::Other`] at the caller's
/// discretion. Parsing an unrecognized code is a boundary error
/// ([`EngineError::UnknownCategory`]); the aggregation operations themselves
/// never fail on category values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accommodation,
    Food,
    Transport,
    Activities,
    Shopping,
    Other,
}

impl Category {
    /// Every category, in the order reports list them.
    pub const ALL: [Category; 6] = [
        Category::Accommodation,
        Category::Food,
        Category::Transport,
        Category::Activities,
        Category::Shopping,
        Category::Other,
    ];

    /// Canonical category code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Category::Accommodation => "accommodation",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Activities => "activities",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "accommodation" => Ok(Category::Accommodation),
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "activities" => Ok(Category::Activities),
            "shopping" => Ok(Category::Shopping),
            "other" => Ok(Category::Other),
            other => Err(EngineError::UnknownCategory(format!(
                "unsupported category: {other}"
            ))),
        }
    }
}

/// Category selector for totals and expense listings.
///
/// `All` is the identity filter; `Only` narrows to a single tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if the expense passes the filter.
    #[must_use]
    pub fn matches(self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => expense.category == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl TryFrom<&str> for CategoryFilter {
    type Error = EngineError;

    /// Parses the selector codes the original category picker offers:
    /// `"all"` or any category code.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::try_from(value).map(CategoryFilter::Only)
    }
}
