use super::grid::WeeklyGrid;
use crate::model::{Recipe, RecipeRef, Tag, TagType};
use log::debug;

/// Lay recipes out on a day × meal grid.
///
/// The grid has a cell for every day and meal tag given, empty or not.
/// Each recipe goes to the cell named by its `day_of_week` and `meal_type`
/// tags, in the order the recipes are given. When a recipe carries several
/// tags of the same type, the last one wins. Recipes without a day or a meal
/// (an empty tag name counts as none), or naming one that is not on the grid,
/// are left out.
pub fn organize_recipes_by_day(recipes: &[Recipe], days: &[Tag], meals: &[Tag]) -> WeeklyGrid {
    let day_names: Vec<&str> = days.iter().map(|t| t.name.as_str()).collect();
    let meal_names: Vec<&str> = meals.iter().map(|t| t.name.as_str()).collect();
    let mut grid = WeeklyGrid::with_cells(&day_names, &meal_names);

    for recipe in recipes {
        let day = last_tag_name(recipe, &TagType::DayOfWeek);
        let meal = last_tag_name(recipe, &TagType::MealType);

        match (day, meal) {
            (Some(day), Some(meal)) if !day.is_empty() && !meal.is_empty() => {
                if !grid.push(day, meal, RecipeRef::from(recipe)) {
                    debug!(
                        "Recipe {} is scheduled for {} / {}, which is not on the grid",
                        recipe.id, day, meal
                    );
                }
            }
            _ => debug!("Recipe {} has no day or meal tag, skipping", recipe.id),
        }
    }

    grid
}

fn last_tag_name<'a>(recipe: &'a Recipe, tag_type: &TagType) -> Option<&'a str> {
    recipe
        .tags
        .iter()
        .rev()
        .find(|t| &t.tag_type == tag_type)
        .map(|t| t.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, title: &str, tags: &[&Tag]) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            tags: tags.iter().map(|t| (*t).clone()).collect(),
        }
    }

    #[test]
    fn test_empty_inputs() {
        let grid = organize_recipes_by_day(&[], &[], &[]);
        assert!(grid.is_empty());
        assert_eq!(serde_json::to_string(&grid).unwrap(), "{}");
    }

    #[test]
    fn test_no_days_gives_empty_grid() {
        let dinner = Tag::new(1, "Dinner", TagType::MealType);
        let soup = recipe(1, "soup", &[&dinner]);
        let grid = organize_recipes_by_day(&[soup], &[], &[dinner]);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_last_tag_of_a_type_wins() {
        let monday = Tag::new(1, "Monday", TagType::DayOfWeek);
        let tuesday = Tag::new(2, "Tuesday", TagType::DayOfWeek);
        let lunch = Tag::new(3, "Lunch", TagType::MealType);
        let stew = recipe(10, "stew", &[&monday, &lunch, &tuesday]);

        let grid = organize_recipes_by_day(
            &[stew],
            &[monday.clone(), tuesday.clone()],
            &[lunch.clone()],
        );
        assert_eq!(grid.cell("Monday", "Lunch").unwrap().len(), 0);
        assert_eq!(grid.cell("Tuesday", "Lunch").unwrap()[0].title, "Stew");
    }

    #[test]
    fn test_unknown_day_is_dropped() {
        let monday = Tag::new(1, "Monday", TagType::DayOfWeek);
        let saturday = Tag::new(6, "Saturday", TagType::DayOfWeek);
        let lunch = Tag::new(3, "Lunch", TagType::MealType);
        let brunch = recipe(10, "brunch", &[&saturday, &lunch]);

        let grid = organize_recipes_by_day(&[brunch], &[monday], &[lunch]);
        assert_eq!(grid.recipe_count(), 0);
        assert!(grid.day("Saturday").is_none());
    }

    #[test]
    fn test_empty_tag_name_counts_as_missing() {
        let blank_day = Tag::new(1, "", TagType::DayOfWeek);
        let lunch = Tag::new(3, "Lunch", TagType::MealType);
        let ghost = recipe(10, "ghost", &[&blank_day, &lunch]);

        let grid = organize_recipes_by_day(&[ghost], &[blank_day], &[lunch]);
        assert!(grid.cell("", "Lunch").unwrap().is_empty());
        assert_eq!(grid.recipe_count(), 0);
    }

    #[test]
    fn test_recipes_keep_input_order_within_a_cell() {
        let monday = Tag::new(1, "Monday", TagType::DayOfWeek);
        let lunch = Tag::new(3, "Lunch", TagType::MealType);
        let first = recipe(2, "omelette", &[&monday, &lunch]);
        let second = recipe(1, "toast", &[&lunch, &monday]);

        let grid = organize_recipes_by_day(&[first, second], &[monday], &[lunch]);
        let titles: Vec<&str> = grid
            .cell("Monday", "Lunch")
            .unwrap()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["Omelette", "Toast"]);
    }
}
