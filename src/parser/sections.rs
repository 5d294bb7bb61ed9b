use crate::catalog::Catalog;

use super::blocks::Block;

/// Group classified lines under the heading that precedes them.
pub fn cluster_categories(blocks: Vec<Block>) -> Catalog {
    let mut catalog = Catalog::default();
    let mut current: Option<String> = None;

    for block in blocks {
        match block {
            // A blank title is still registered, but nothing can attach to it.
            Block::Heading(title) if title.is_empty() => {
                catalog.declare(&title);
                current = None;
            }
            Block::Heading(title) => {
                catalog.declare(&title);
                current = Some(title);
            }
            // Rows before the first heading have nowhere to go.
            Block::Row(entry) => {
                if let Some(category) = current.as_deref() {
                    catalog.push(category, entry);
                }
            }
            _ => {}
        }
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::blocks::classify_lines;

    fn category_names(md: &str) -> Vec<String> {
        let catalog = cluster_categories(classify_lines(md));
        catalog.categories().map(|(name, _)| name.to_string()).collect()
    }

    #[test]
    fn categories_in_heading_order() {
        let md = "### Weather\n### Animals\n### Books";
        assert_eq!(category_names(md), vec!["Weather", "Animals", "Books"]);
    }

    #[test]
    fn empty_categories_survive() {
        let md = "### Animals\n\n### Books\n| Dogs | Pictures of dogs | no | no | yes |";
        let catalog = cluster_categories(classify_lines(md));
        assert!(catalog.entries("Animals").is_empty());
        assert_eq!(catalog.entries("Books").len(), 1);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rows_before_first_heading_dropped() {
        let md = "| Dogs | Pictures of dogs | no | no | yes |\n### Animals\n| Cats | Pictures of cats | no | no | yes |";
        let catalog = cluster_categories(classify_lines(md));
        let names: Vec<&str> = catalog.all().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cats"]);
    }

    #[test]
    fn blank_heading_registers_empty_category() {
        let md = "### Animals\n| Cats | Pictures of cats | no | no | yes |\n###\t #\n| Dogs | Pictures of dogs | no | no | yes |\n### Books";
        let catalog = cluster_categories(classify_lines(md));
        assert_eq!(category_names(md), vec!["Animals", "", "Books"]);
        assert_eq!(catalog.entries("Animals").len(), 1);
        assert!(catalog.entries("").is_empty());
        assert_eq!(catalog.stats().entries, 1);
    }

    #[test]
    fn repeated_heading_restarts_its_list() {
        let md = "### Animals\n| Cats | Pictures of cats | no | no | yes |\n### Books\n### Animals\n| Dogs | Pictures of dogs | no | no | yes |";
        let catalog = cluster_categories(classify_lines(md));
        assert_eq!(category_names(md), vec!["Animals", "Books"]);
        let names: Vec<&str> = catalog.entries("Animals").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Dogs"]);
    }
}
