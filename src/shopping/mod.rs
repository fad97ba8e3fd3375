pub mod assembler;
pub mod splitter;

pub use assembler::build_shopping_info;
pub use splitter::{is_category_header, split_lines, structure_lines};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A header line paired with the lines that follow it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBlock {
    pub category: String,
    pub items: Vec<String>,
}

impl CategoryBlock {
    pub fn new(category: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            category: category.into(),
            items,
        }
    }
}

/// One shopping-info section.
///
/// A section whose source text was empty serializes as `""`, not `[]`;
/// the menus page relies on that distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    Empty,
    Items(Vec<T>),
}

impl<T> Section<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Section::Empty)
    }

    pub fn items(&self) -> &[T] {
        match self {
            Section::Empty => &[],
            Section::Items(items) => items,
        }
    }
}

impl<T: Serialize> Serialize for Section<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Section::Empty => serializer.serialize_str(""),
            Section::Items(items) => items.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingSections {
    pub rules_and_tips: Section<String>,
    pub preparations: Section<String>,
    pub shopping_list: Section<CategoryBlock>,
    pub meat_marinades: Section<CategoryBlock>,
    pub dressings: Section<CategoryBlock>,
}

/// Structured shopping information of a menu.
///
/// `sections` is `None` when the menu has no shopping record at all,
/// which serializes as an object without keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingInfo {
    pub sections: Option<ShoppingSections>,
}

impl ShoppingInfo {
    pub fn is_missing(&self) -> bool {
        self.sections.is_none()
    }
}

impl Serialize for ShoppingInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.sections {
            Some(sections) => sections.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_section_serializes_as_empty_string() {
        let section: Section<String> = Section::Empty;
        assert_eq!(serde_json::to_value(&section).unwrap(), json!(""));

        let section = Section::Items(Vec::<String>::new());
        assert_eq!(serde_json::to_value(&section).unwrap(), json!([]));
    }

    #[test]
    fn test_missing_shopping_info_serializes_without_keys() {
        let info = ShoppingInfo::default();
        assert!(info.is_missing());
        assert_eq!(serde_json::to_string(&info).unwrap(), "{}");
    }
}
