use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a tag. Unknown kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagType {
    DayOfWeek,
    MealType,
    MenuName,
    MyRecipe,
    Other(String),
}

impl TagType {
    pub fn as_str(&self) -> &str {
        match self {
            TagType::DayOfWeek => "day_of_week",
            TagType::MealType => "meal_type",
            TagType::MenuName => "menu_name",
            TagType::MyRecipe => "my_recipe",
            TagType::Other(name) => name,
        }
    }
}

impl From<&str> for TagType {
    fn from(value: &str) -> Self {
        match value {
            "day_of_week" => TagType::DayOfWeek,
            "meal_type" => TagType::MealType,
            "menu_name" => TagType::MenuName,
            "my_recipe" => TagType::MyRecipe,
            other => TagType::Other(other.to_string()),
        }
    }
}

impl From<String> for TagType {
    fn from(value: String) -> Self {
        TagType::from(value.as_str())
    }
}

impl From<TagType> for String {
    fn from(value: TagType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>, tag_type: TagType) -> Self {
        Self {
            id,
            name: name.into(),
            tag_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Recipe {
    pub fn has_tag_type(&self, tag_type: &TagType) -> bool {
        self.tags.iter().any(|t| &t.tag_type == tag_type)
    }

    pub fn has_tag_id(&self, tag_id: i64) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }

    /// Whether the recipe belongs on the weekly grid of the given menu:
    /// tagged with the menu, a day and a meal, and not a personal recipe.
    pub fn is_scheduled_in(&self, menu_tag_id: i64) -> bool {
        self.has_tag_id(menu_tag_id)
            && self.has_tag_type(&TagType::DayOfWeek)
            && self.has_tag_type(&TagType::MealType)
            && !self.has_tag_type(&TagType::MyRecipe)
    }
}

/// A recipe as it appears inside a weekly grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub id: i64,
    pub title: String,
}

impl From<&Recipe> for RecipeRef {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: capitalize(&recipe.title),
        }
    }
}

/// Raw shopping texts stored for one menu.
/// Any field can be missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuShoppingInfo {
    pub menu_tag_id: i64,
    #[serde(default)]
    pub shopping_list_text: Option<String>,
    #[serde(default)]
    pub preparations_text: Option<String>,
    #[serde(default)]
    pub meat_marinades_text: Option<String>,
    #[serde(default)]
    pub dressings_text: Option<String>,
    #[serde(default)]
    pub rules_and_tips_text: Option<String>,
}

/// Title-case the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Titlecase of a single character.
///
/// Multi-letter uppercase expansions keep only their first letter upper
/// (`ß` → `Ss`, `ﬁ` → `Fi`). The Latin digraphs have dedicated titlecase forms.
fn titlecase(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ".to_string(),
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ".to_string(),
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ".to_string(),
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ".to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut out = String::new();
            if let Some(head) = upper.next() {
                out.push(head);
            }
            out.extend(upper.flat_map(char::to_lowercase));
            out
        }
    }
}
