use crate::model::{Tag, TagType};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

const WEEK_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
const MEAL_ORDER: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Dessert"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptionGroup {
    pub label: String,
    pub names: Vec<String>,
}

/// Tag names offered by the recipe filter panel, grouped per tag type.
///
/// Serializes as an object of label → names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    pub groups: Vec<TagOptionGroup>,
}

impl TagOptions {
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.names.as_slice())
    }
}

impl Serialize for TagOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.label, &group.names)?;
        }
        map.end()
    }
}

/// Group distinct tag names by type, in order of first appearance of each type.
///
/// The label comes from the type name: one containing `day` is a day group,
/// then `meal`, `menu` and `my` are checked in that order; any other type is
/// labelled with its own name. Days follow the working week and meals follow
/// the day; names outside those lists go last, in their original order. Menus
/// and personal tags are sorted alphabetically. When two types end up with the
/// same label, the later type's names replace the earlier ones in place.
pub fn tag_options(tags: &[Tag]) -> TagOptions {
    let mut types: Vec<&TagType> = Vec::new();
    for tag in tags {
        if !types.contains(&&tag.tag_type) {
            types.push(&tag.tag_type);
        }
    }

    let mut options = TagOptions::default();
    for tag_type in types {
        let mut names: Vec<String> = Vec::new();
        for tag in tags.iter().filter(|t| &t.tag_type == tag_type) {
            if !names.contains(&tag.name) {
                names.push(tag.name.clone());
            }
        }

        let raw = tag_type.as_str();
        let label = if raw.contains("day") {
            names.sort_by_key(|n| rank(&WEEK_DAYS, n));
            "Day of the week"
        } else if raw.contains("meal") {
            names.sort_by_key(|n| rank(&MEAL_ORDER, n));
            "Meals"
        } else if raw.contains("menu") {
            names.sort();
            "Menu"
        } else if raw.contains("my") {
            names.sort();
            "My recipes"
        } else {
            raw
        };

        match options.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.names = names,
            None => options.groups.push(TagOptionGroup {
                label: label.to_string(),
                names,
            }),
        }
    }

    options
}

fn rank(order: &[&str], name: &str) -> usize {
    order
        .iter()
        .position(|candidate| *candidate == name)
        .unwrap_or(order.len())
}
