use super::splitter::{split_lines, structure_lines};
use super::{CategoryBlock, Section, ShoppingInfo, ShoppingSections};
use crate::model::MenuShoppingInfo;

/// Build the structured shopping info of a menu.
///
/// Returns an info without sections when the menu has no shopping record.
/// Within a record, an empty or missing text becomes [`Section::Empty`].
pub fn build_shopping_info(info: Option<&MenuShoppingInfo>) -> ShoppingInfo {
    let Some(info) = info else {
        return ShoppingInfo::default();
    };

    ShoppingInfo {
        sections: Some(ShoppingSections {
            rules_and_tips: text_section(&info.rules_and_tips_text, rules_and_tips),
            preparations: text_section(&info.preparations_text, preparations),
            shopping_list: text_section(&info.shopping_list_text, categories),
            meat_marinades: text_section(&info.meat_marinades_text, categories),
            dressings: text_section(&info.dressings_text, categories),
        }),
    }
}

fn text_section<T>(text: &Option<String>, parse: fn(&str) -> Vec<T>) -> Section<T> {
    match text.as_deref() {
        Some(text) if !text.is_empty() => Section::Items(parse(text)),
        _ => Section::Empty,
    }
}

/// Bullet lines (`*`) mixed with prose; only the bullets survive, untrimmed.
fn rules_and_tips(text: &str) -> Vec<String> {
    split_lines(text)
        .into_iter()
        .filter(|line| line.trim().starts_with('*'))
        .collect()
}

/// Header line followed by free items.
fn preparations(text: &str) -> Vec<String> {
    split_lines(text)
        .into_iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Header line followed by category blocks.
fn categories(text: &str) -> Vec<CategoryBlock> {
    let lines = split_lines(text);
    structure_lines(lines.get(1..).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_info() -> MenuShoppingInfo {
        MenuShoppingInfo {
            menu_tag_id: 1,
            rules_and_tips_text: Some("* One\n* Two\nNormal line".to_string()),
            preparations_text: Some("PREPARATIONS\n1) Chop\n2) Marinate".to_string()),
            shopping_list_text: Some(
                "SHOPPING LIST\nVEGETABLES AND FRUITS:\nCabbage – 500 g\nCarrot – 500 g"
                    .to_string(),
            ),
            meat_marinades_text: Some(
                "MEAT MARINADES\nFRENCH MARINADE:\nLemon juice – 2 tbsp".to_string(),
            ),
            dressings_text: Some("DRESSINGS:\nFRENCH:\nOlive oil – 3 tbsp".to_string()),
        }
    }

    #[test]
    fn test_full_structure() {
        let info = build_shopping_info(Some(&full_info()));
        let sections = info.sections.unwrap();

        assert_eq!(sections.rules_and_tips.items(), ["* One", "* Two"]);
        assert_eq!(sections.preparations.items(), ["1) Chop", "2) Marinate"]);
        assert_eq!(
            sections.shopping_list.items(),
            [CategoryBlock::new(
                "VEGETABLES AND FRUITS:",
                vec!["Cabbage – 500 g".to_string(), "Carrot – 500 g".to_string()]
            )]
        );
        assert_eq!(
            sections.meat_marinades.items(),
            [CategoryBlock::new(
                "FRENCH MARINADE:",
                vec!["Lemon juice – 2 tbsp".to_string()]
            )]
        );
        assert_eq!(
            sections.dressings.items(),
            [CategoryBlock::new(
                "FRENCH:",
                vec!["Olive oil – 3 tbsp".to_string()]
            )]
        );
    }

    #[test]
    fn test_empty_fields_become_empty_strings() {
        let info = MenuShoppingInfo {
            menu_tag_id: 1,
            rules_and_tips_text: Some(String::new()),
            preparations_text: Some(String::new()),
            shopping_list_text: Some(String::new()),
            meat_marinades_text: Some(String::new()),
            dressings_text: Some(String::new()),
        };

        let value = serde_json::to_value(build_shopping_info(Some(&info))).unwrap();
        assert_eq!(
            value,
            json!({
                "rules_and_tips": "",
                "preparations": "",
                "shopping_list": "",
                "meat_marinades": "",
                "dressings": ""
            })
        );
    }

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let info = MenuShoppingInfo {
            menu_tag_id: 1,
            ..Default::default()
        };
        let sections = build_shopping_info(Some(&info)).sections.unwrap();
        assert!(sections.rules_and_tips.is_empty());
        assert!(sections.dressings.is_empty());
    }

    #[test]
    fn test_none_input() {
        let info = build_shopping_info(None);
        assert!(info.is_missing());
        assert_eq!(serde_json::to_value(info).unwrap(), json!({}));
    }

    #[test]
    fn test_escaped_newlines_are_split() {
        let info = MenuShoppingInfo {
            menu_tag_id: 1,
            preparations_text: Some("PREPARATIONS\\n1) Soak beans\\n\\n2) Boil".to_string()),
            rules_and_tips_text: Some("Tips\\n  * Drink water".to_string()),
            ..Default::default()
        };
        let sections = build_shopping_info(Some(&info)).sections.unwrap();
        assert_eq!(sections.preparations.items(), ["1) Soak beans", "2) Boil"]);
        assert_eq!(sections.rules_and_tips.items(), ["  * Drink water"]);
    }

    #[test]
    fn test_header_only_text_gives_empty_list() {
        let info = MenuShoppingInfo {
            menu_tag_id: 1,
            shopping_list_text: Some("SHOPPING LIST".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(build_shopping_info(Some(&info))).unwrap();
        assert_eq!(value["shopping_list"], json!([]));
    }
}
