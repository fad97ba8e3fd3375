use super::grid::WeeklyGrid;
use super::organizer::organize_recipes_by_day;
use crate::error::{ErrorBody, MenuError};
use crate::model::TagType;
use crate::shopping::{build_shopping_info, ShoppingInfo};
use crate::store::MenuStore;
use log::{info, warn};
use serde::Serialize;

/// Everything the menus page shows for one menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyMenu {
    pub menu: String,
    pub recipes_by_day: WeeklyGrid,
    pub shopping_info: ShoppingInfo,
}

/// Build the weekly menu named `menu_name`.
///
/// Fails with [`MenuError::MenuNotFound`] when no menu tag has that name, and
/// with [`MenuError::RecipesNotFound`] when the menu has no scheduled recipes
/// or the store holds no day or meal tags.
pub async fn weekly_menu(store: &dyn MenuStore, menu_name: &str) -> Result<WeeklyMenu, MenuError> {
    let Some(menu_tag) = store.find_menu_tag(menu_name).await? else {
        warn!("Menu '{}' not found.", menu_name);
        return Err(MenuError::MenuNotFound(menu_name.to_string()));
    };

    let shopping_info = store.shopping_info(menu_tag.id).await?;

    let meal_types = store.tags_of_type(&TagType::MealType).await?;
    let mut days_of_week = store.tags_of_type(&TagType::DayOfWeek).await?;
    days_of_week.sort_by_key(|t| t.id);

    let recipes = store.menu_recipes(menu_tag.id).await?;

    if recipes.is_empty() || meal_types.is_empty() || days_of_week.is_empty() {
        warn!("No recipes found for menu '{}'.", menu_name);
        return Err(MenuError::RecipesNotFound(menu_name.to_string()));
    }

    let recipes_by_day = organize_recipes_by_day(&recipes, &days_of_week, &meal_types);
    info!(
        "Built menu '{}': {} recipes over {} days",
        menu_name,
        recipes_by_day.recipe_count(),
        days_of_week.len()
    );

    Ok(WeeklyMenu {
        menu: menu_name.to_string(),
        recipes_by_day,
        shopping_info: build_shopping_info(shopping_info.as_ref()),
    })
}

/// Exit code the CLI uses for a menu that does not exist or has no recipes
pub const NOT_FOUND_EXIT: i32 = 4;

/// Outcome of a menu request: the menu itself or the not-found error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuResponse {
    Found(WeeklyMenu),
    NotFound(ErrorBody),
}

impl MenuResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            MenuResponse::Found(_) => 200,
            MenuResponse::NotFound(_) => 404,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            MenuResponse::Found(_) => 0,
            MenuResponse::NotFound(_) => NOT_FOUND_EXIT,
        }
    }
}

/// Like [`weekly_menu`], but a missing menu or empty schedule becomes a
/// [`MenuResponse::NotFound`] body. Any other failure is still an error.
pub async fn menu_response(store: &dyn MenuStore, menu_name: &str) -> Result<MenuResponse, MenuError> {
    match weekly_menu(store, menu_name).await {
        Ok(menu) => Ok(MenuResponse::Found(menu)),
        Err(e) if e.is_not_found() => Ok(MenuResponse::NotFound(e.to_error_body())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Recipe, Tag};
    use crate::store::JsonCatalog;

    fn catalog(with_recipe: bool) -> JsonCatalog {
        let menu = Tag::new(1, "Fast", TagType::MenuName);
        let tuesday = Tag::new(3, "Tuesday", TagType::DayOfWeek);
        let monday = Tag::new(2, "Monday", TagType::DayOfWeek);
        let dinner = Tag::new(4, "Dinner", TagType::MealType);
        let recipes = if with_recipe {
            vec![Recipe {
                id: 7,
                title: "salad".to_string(),
                tags: vec![menu.clone(), tuesday.clone(), dinner.clone()],
            }]
        } else {
            vec![]
        };
        JsonCatalog::new(vec![menu, tuesday, monday, dinner], recipes, vec![])
    }

    #[tokio::test]
    async fn test_days_are_ordered_by_tag_id() {
        let menu = weekly_menu(&catalog(true), "Fast").await.unwrap();
        let days: Vec<&str> = menu
            .recipes_by_day
            .days()
            .iter()
            .map(|d| d.day.as_str())
            .collect();
        assert_eq!(days, ["Monday", "Tuesday"]);
        assert_eq!(menu.recipes_by_day.cell("Tuesday", "Dinner").unwrap()[0].title, "Salad");
        assert!(menu.shopping_info.is_missing());
    }

    #[tokio::test]
    async fn test_unknown_menu() {
        let err = weekly_menu(&catalog(true), "Slow").await.unwrap_err();
        assert!(matches!(err, MenuError::MenuNotFound(ref name) if name == "Slow"));
    }

    #[tokio::test]
    async fn test_menu_without_recipes() {
        let err = weekly_menu(&catalog(false), "Fast").await.unwrap_err();
        assert!(matches!(err, MenuError::RecipesNotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_menu_response_status_and_exit_code() {
        let found = menu_response(&catalog(true), "Fast").await.unwrap();
        assert!(matches!(found, MenuResponse::Found(_)));
        assert_eq!((found.status_code(), found.exit_code()), (200, 0));

        let empty = menu_response(&catalog(false), "Fast").await.unwrap();
        assert_eq!(
            empty,
            MenuResponse::NotFound(ErrorBody {
                error: "Recipes for 'Fast' were not found.".to_string()
            })
        );
        assert_eq!((empty.status_code(), empty.exit_code()), (404, NOT_FOUND_EXIT));
    }
}
