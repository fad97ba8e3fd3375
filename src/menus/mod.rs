mod categories;
mod grid;
mod organizer;
mod tag_options;
mod weekly;

pub use categories::{menu_categories, MenuCategory};
pub use grid::{DayMeals, MealSlot, WeeklyGrid};
pub use organizer::organize_recipes_by_day;
pub use tag_options::{tag_options, TagOptionGroup, TagOptions};
pub use weekly::{menu_response, weekly_menu, MenuResponse, WeeklyMenu, NOT_FOUND_EXIT};
