//! Category display formatting

use crate::models::Category;

/// Format a list of categories as a table, grouped by kind
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut kinds: Vec<&str> = Vec::new();
    for category in categories {
        if !kinds.contains(&category.kind.as_str()) {
            kinds.push(&category.kind);
        }
    }

    let mut output = String::new();
    for kind in kinds {
        let heading = if kind.is_empty() { "(no kind)" } else { kind };
        output.push_str(&format!("{}\n", heading));

        for category in categories.iter().filter(|c| c.kind == kind) {
            output.push_str(&format!("  {:>8}  {}\n", category.id, category.title));
        }
    }

    output
}
