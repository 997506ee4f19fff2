//! Catalog item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed category set for catalog items.
///
/// Stored as text; the datastore only constrains column width, so the
/// enumeration is enforced at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Protein,
    Bread,
    Fruit,
    Vegetable,
    Beverage,
}

impl Category {
    /// All categories in display order, used for form choice lists.
    pub const ALL: [Category; 6] = [
        Category::Dairy,
        Category::Protein,
        Category::Bread,
        Category::Fruit,
        Category::Vegetable,
        Category::Beverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Protein => "Protein",
            Self::Bread => "Bread",
            Self::Fruit => "Fruit",
            Self::Vegetable => "Vegetable",
            Self::Beverage => "Beverage",
        }
    }

    /// Parse a stored or submitted category value. Returns `None` for
    /// anything outside the fixed set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stocked catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: Category,
    /// Blank cost means "not set", never zero.
    pub cost: Option<Decimal>,
    pub amount: i32,
}

impl Item {
    /// Canonical detail-page locator, carried as `url` in rendered contexts.
    pub fn detail_path(&self) -> String {
        item_detail_path(self.id)
    }
}

/// Detail-page locator for an item id.
pub fn item_detail_path(id: i64) -> String {
    format!("/inventory/{id}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn should_parse_every_fixed_category() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn should_reject_unknown_category() {
        assert_eq!(Category::parse("Snacks"), None);
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("dairy"), None);
    }

    #[test]
    fn should_display_category_as_stored_value() {
        assert_eq!(Category::Dairy.to_string(), "Dairy");
        assert_eq!(Category::Beverage.to_string(), "Beverage");
    }

    #[test]
    fn should_build_detail_path_from_id() {
        let item = Item {
            id: 17,
            name: "Milk".into(),
            category: Category::Dairy,
            cost: Some(Decimal::new(35, 1)),
            amount: 20,
        };
        assert_eq!(item.detail_path(), "/inventory/17/");
    }
}
