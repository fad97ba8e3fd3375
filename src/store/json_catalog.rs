use super::MenuStore;
use crate::error::MenuError;
use crate::model::{MenuShoppingInfo, Recipe, Tag, TagType};
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Catalog file layout. Recipes reference their tags by id.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    recipes: Vec<RecipeRow>,
    #[serde(default)]
    shopping_infos: Vec<MenuShoppingInfo>,
}

#[derive(Debug, Deserialize)]
struct RecipeRow {
    id: i64,
    title: String,
    #[serde(default)]
    tag_ids: Vec<i64>,
}

/// In-memory menu store backed by a JSON catalog
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    tags: Vec<Tag>,
    recipes: Vec<Recipe>,
    shopping_infos: Vec<MenuShoppingInfo>,
}

impl JsonCatalog {
    pub fn new(tags: Vec<Tag>, recipes: Vec<Recipe>, shopping_infos: Vec<MenuShoppingInfo>) -> Self {
        Self {
            tags,
            recipes,
            shopping_infos,
        }
    }

    /// Read and parse a catalog file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&content)?;
        info!(
            "Loaded catalog {} ({} tags, {} recipes)",
            path.display(),
            catalog.tags.len(),
            catalog.recipes.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from its JSON text, resolving recipe tag ids
    pub fn from_json(content: &str) -> Result<Self, MenuError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        let by_id: HashMap<i64, &Tag> = file.tags.iter().map(|t| (t.id, t)).collect();

        let recipes = file
            .recipes
            .into_iter()
            .map(|row| {
                let tags = row
                    .tag_ids
                    .iter()
                    .map(|id| {
                        by_id.get(id).map(|t| (*t).clone()).ok_or_else(|| {
                            MenuError::InvalidCatalog(format!(
                                "recipe {} references unknown tag {}",
                                row.id, id
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Recipe {
                    id: row.id,
                    title: row.title,
                    tags,
                })
            })
            .collect::<Result<Vec<_>, MenuError>>()?;

        Ok(Self::new(file.tags, recipes, file.shopping_infos))
    }
}

#[async_trait]
impl MenuStore for JsonCatalog {
    async fn find_menu_tag(&self, name: &str) -> Result<Option<Tag>, MenuError> {
        Ok(self
            .tags
            .iter()
            .find(|t| t.tag_type == TagType::MenuName && t.name == name)
            .cloned())
    }

    async fn shopping_info(
        &self,
        menu_tag_id: i64,
    ) -> Result<Option<MenuShoppingInfo>, MenuError> {
        Ok(self
            .shopping_infos
            .iter()
            .find(|s| s.menu_tag_id == menu_tag_id)
            .cloned())
    }

    async fn tags_of_type(&self, tag_type: &TagType) -> Result<Vec<Tag>, MenuError> {
        Ok(self
            .tags
            .iter()
            .filter(|t| &t.tag_type == tag_type)
            .cloned()
            .collect())
    }

    async fn menu_recipes(&self, menu_tag_id: i64) -> Result<Vec<Recipe>, MenuError> {
        let recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|r| r.is_scheduled_in(menu_tag_id))
            .cloned()
            .collect();
        debug!("Menu tag {} has {} scheduled recipes", menu_tag_id, recipes.len());
        Ok(recipes)
    }

    async fn all_tags(&self) -> Result<Vec<Tag>, MenuError> {
        Ok(self.tags.clone())
    }
}
