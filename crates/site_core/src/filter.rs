use shared::{content::PortfolioItem, domain::CategoryFilter};

/// Stable sub-sequence of `items` matching `filter`; `All` returns every item.
pub fn filter_items(items: &[PortfolioItem], filter: CategoryFilter) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .cloned()
        .collect()
}

/// Selected category on the portfolio page. Only the selector is stored; the
/// filtered list is derived from the full collection on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    category: CategoryFilter,
}

impl FilterState {
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn select(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn apply(&self, items: &[PortfolioItem]) -> Vec<PortfolioItem> {
        filter_items(items, self.category)
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
