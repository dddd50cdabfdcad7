use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// A business classification. Titles are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            title: title.into(),
        }
    }
}

/// One arm of a category lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryClause {
    Title(String),
    Id(CategoryId),
}

impl CategoryClause {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryClause::Title(title) => &category.title == title,
            CategoryClause::Id(id) => &category.id == id,
        }
    }
}

/// Disjunctive category lookup: a category matches when any clause matches.
///
/// Stores evaluate the whole filter at once and hand back the first match in their own
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    any_of: Vec<CategoryClause>,
}

impl CategoryFilter {
    pub fn any_of(clauses: Vec<CategoryClause>) -> Self {
        Self { any_of: clauses }
    }

    pub fn by_id(id: CategoryId) -> Self {
        Self::any_of(vec![CategoryClause::Id(id)])
    }

    pub fn clauses(&self) -> &[CategoryClause] {
        &self.any_of
    }

    pub fn matches(&self, category: &Category) -> bool {
        self.any_of.iter().any(|clause| clause.matches(category))
    }
}
