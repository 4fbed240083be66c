//! Sub-category model
//!
//! User-defined labels nested under exactly one fixed category. The hierarchy
//! is flat by construction: `parent` is the closed `Category` enum, so a
//! sub-category can never reference another sub-category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::SubCategoryId;

/// A user-defined label under one of the fixed categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    /// Unique identifier
    pub id: SubCategoryId,

    /// Display name
    pub name: String,

    /// The fixed category this label belongs to
    #[serde(rename = "parentId")]
    pub parent: Category,
}

impl SubCategory {
    /// Create a new sub-category under a category
    pub fn new(name: impl Into<String>, parent: Category) -> Self {
        Self {
            id: SubCategoryId::new(),
            name: name.into(),
            parent,
        }
    }

    /// Validate the sub-category
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Sub-category name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_parent_id() {
        let sub = SubCategory::new("Grocery", Category::Essential);
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["parentId"], "Essential");
        assert_eq!(json["name"], "Grocery");
    }

    #[test]
    fn test_deserialize_from_exchange_format() {
        let json = r#"{"id": "sub-3", "name": "Grocery", "parentId": "Essential"}"#;
        let sub: SubCategory = serde_json::from_str(json).unwrap();
        assert_eq!(sub.id.as_str(), "sub-3");
        assert_eq!(sub.parent, Category::Essential);
    }
}
