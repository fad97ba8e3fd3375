pub mod config;
pub mod error;
pub mod menus;
pub mod model;
pub mod shopping;
pub mod store;

use std::path::Path;

pub use crate::config::MenuConfig;
pub use error::{ErrorBody, MenuError};
pub use menus::{
    menu_categories, menu_response, organize_recipes_by_day, tag_options, weekly_menu,
    MenuCategory, MenuResponse, TagOptions, WeeklyGrid, WeeklyMenu,
};
pub use model::{MenuShoppingInfo, Recipe, RecipeRef, Tag, TagType};
pub use shopping::{build_shopping_info, structure_lines, CategoryBlock, Section, ShoppingInfo};
pub use store::{JsonCatalog, MenuStore};

/// Load a catalog file and build one weekly menu from it.
pub async fn weekly_menu_from_file(
    catalog_path: impl AsRef<Path>,
    menu_name: &str,
) -> Result<WeeklyMenu, MenuError> {
    let catalog = JsonCatalog::load(catalog_path).await?;
    weekly_menu(&catalog, menu_name).await
}

/// Split a whole text blob into category blocks, without dropping a header line.
pub fn structure_text(text: &str) -> Vec<CategoryBlock> {
    structure_lines(&shopping::split_lines(text))
}
