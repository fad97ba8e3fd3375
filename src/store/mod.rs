mod json_catalog;

pub use json_catalog::JsonCatalog;

use crate::error::MenuError;
use crate::model::{MenuShoppingInfo, Recipe, Tag, TagType};
use async_trait::async_trait;

/// Read access to the menu data the weekly menu service needs
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Find the tag of type `menu_name` with the given name
    async fn find_menu_tag(&self, name: &str) -> Result<Option<Tag>, MenuError>;

    /// Shopping texts stored for a menu, if any
    async fn shopping_info(&self, menu_tag_id: i64)
        -> Result<Option<MenuShoppingInfo>, MenuError>;

    /// All tags of one type, in storage order
    async fn tags_of_type(&self, tag_type: &TagType) -> Result<Vec<Tag>, MenuError>;

    /// Recipes that belong on the weekly grid of a menu,
    /// see [`Recipe::is_scheduled_in`]
    async fn menu_recipes(&self, menu_tag_id: i64) -> Result<Vec<Recipe>, MenuError>;

    /// Every tag, in storage order
    async fn all_tags(&self) -> Result<Vec<Tag>, MenuError>;
}
