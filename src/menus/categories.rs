use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::model::TagType;
use crate::store::MenuStore;
use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuCategory {
    pub name: String,
    pub image_url: String,
}

/// Menu names in alphabetical order, each with a cover image.
///
/// Images are handed out in configuration order; once they run out the
/// fallback image is used.
pub async fn menu_categories(
    store: &dyn MenuStore,
    config: &MenuConfig,
) -> Result<Vec<MenuCategory>, MenuError> {
    let mut menus = store.tags_of_type(&TagType::MenuName).await?;
    menus.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(menus
        .into_iter()
        .enumerate()
        .map(|(i, tag)| {
            let image_url = match config.category_images.get(i) {
                Some(url) => url.clone(),
                None => {
                    warn!(
                        "No image available for menu category '{}', using fallback image.",
                        tag.name
                    );
                    config.fallback_image.clone()
                }
            };
            MenuCategory {
                name: tag.name,
                image_url,
            }
        })
        .collect())
}
