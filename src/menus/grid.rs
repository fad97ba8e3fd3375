use crate::model::RecipeRef;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Day → meal → recipes, keeping the order in which days and meals were given.
///
/// Serializes as nested JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyGrid {
    days: Vec<DayMeals>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMeals {
    pub day: String,
    pub meals: Vec<MealSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSlot {
    pub meal: String,
    pub recipes: Vec<RecipeRef>,
}

impl WeeklyGrid {
    /// Every day × meal cell, all empty. Repeated names keep their first position.
    pub fn with_cells<D, M>(days: &[D], meals: &[M]) -> Self
    where
        D: AsRef<str>,
        M: AsRef<str>,
    {
        let mut meal_names: Vec<&str> = Vec::with_capacity(meals.len());
        for meal in meals {
            let meal: &str = meal.as_ref();
            if !meal_names.contains(&meal) {
                meal_names.push(meal);
            }
        }

        let mut grid = WeeklyGrid::default();
        for day in days {
            let day: &str = day.as_ref();
            if grid.day(day).is_some() {
                continue;
            }
            grid.days.push(DayMeals {
                day: day.to_string(),
                meals: meal_names
                    .iter()
                    .map(|meal| MealSlot {
                        meal: meal.to_string(),
                        recipes: Vec::new(),
                    })
                    .collect(),
            });
        }
        grid
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[DayMeals] {
        &self.days
    }

    pub fn day(&self, day: &str) -> Option<&DayMeals> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn cell(&self, day: &str, meal: &str) -> Option<&[RecipeRef]> {
        self.day(day)?
            .meals
            .iter()
            .find(|m| m.meal == meal)
            .map(|m| m.recipes.as_slice())
    }

    /// Append to an existing cell. Returns `false` when the cell does not exist.
    pub fn push(&mut self, day: &str, meal: &str, recipe: RecipeRef) -> bool {
        let slot = self
            .days
            .iter_mut()
            .find(|d| d.day == day)
            .and_then(|d| d.meals.iter_mut().find(|m| m.meal == meal));

        match slot {
            Some(slot) => {
                slot.recipes.push(recipe);
                true
            }
            None => false,
        }
    }

    pub fn recipe_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.meals.iter())
            .map(|m| m.recipes.len())
            .sum()
    }
}

impl Serialize for DayMeals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.meals.len()))?;
        for slot in &self.meals {
            map.serialize_entry(&slot.meal, &slot.recipes)?;
        }
        map.end()
    }
}

impl Serialize for WeeklyGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.day, day)?;
        }
        map.end()
    }
}
