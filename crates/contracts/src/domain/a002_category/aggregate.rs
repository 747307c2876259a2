use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;

/// Route segment that selects every category
pub const CATEGORY_ALL: &str = "all";

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        <u32 as AggregateId>::from_string(s).map(CategoryId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog category card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub product_count: usize,
    pub image: String,
    /// CSS gradient overlay, e.g. `linear-gradient(135deg, #a855f7, #ec4899)`
    pub gradient: String,
}

impl Category {
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.trim().to_lowercase())
    }
}

/// `/category/:id` parameter: a concrete category or all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn from_route(segment: &str) -> Result<Self, String> {
        if segment.trim().eq_ignore_ascii_case(CATEGORY_ALL) {
            return Ok(Self::All);
        }
        CategoryId::from_string(segment).map(Self::Only)
    }

    pub fn as_route(&self) -> String {
        match self {
            Self::All => CATEGORY_ALL.to_string(),
            Self::Only(id) => id.as_string(),
        }
    }

    pub fn includes(&self, id: CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_from_route() {
        assert_eq!(CategoryFilter::from_route("all"), Ok(CategoryFilter::All));
        assert_eq!(CategoryFilter::from_route("ALL"), Ok(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_route("3"),
            Ok(CategoryFilter::Only(CategoryId(3)))
        );
        assert!(CategoryFilter::from_route("phones").is_err());
        assert_eq!(CategoryFilter::Only(CategoryId(3)).as_route(), "3");
    }

    #[test]
    fn test_category_filter_includes() {
        assert!(CategoryFilter::All.includes(CategoryId(9)));
        assert!(CategoryFilter::Only(CategoryId(2)).includes(CategoryId(2)));
        assert!(!CategoryFilter::Only(CategoryId(2)).includes(CategoryId(9)));
    }
}
