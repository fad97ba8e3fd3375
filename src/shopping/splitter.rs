use super::CategoryBlock;
use log::debug;

/// Turn stored text into lines.
///
/// Texts saved through some admin forms carry a literal backslash-n
/// instead of a newline; both are treated as line breaks.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// A trimmed line is a category header when it contains no lowercase letters.
///
/// Lines made only of digits or punctuation therefore count as headers too.
pub fn is_category_header(line: &str) -> bool {
    !line.chars().any(char::is_lowercase)
}

/// Group lines into category blocks.
///
/// Blank lines are skipped. A header closes the previous category even if
/// that category collected no items, but a trailing header without items is
/// dropped.
pub fn structure_lines<S: AsRef<str>>(lines: &[S]) -> Vec<CategoryBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<CategoryBlock> = None;

    for line in lines {
        let stripped = line.as_ref().trim();
        if stripped.is_empty() {
            continue;
        }

        if is_category_header(stripped) {
            if let Some(block) = current.take() {
                debug!(
                    "Closing category '{}' with {} items",
                    block.category,
                    block.items.len()
                );
                blocks.push(block);
            }
            current = Some(CategoryBlock::new(stripped, Vec::new()));
        } else if let Some(block) = current.as_mut() {
            block.items.push(stripped.to_string());
        } else {
            debug!("Skipping line outside of any category: {}", stripped);
        }
    }

    if let Some(block) = current {
        if !block.items.is_empty() {
            blocks.push(block);
        }
    }

    blocks
}
