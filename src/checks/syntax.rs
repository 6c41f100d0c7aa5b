//! Python syntax validation via the tree-sitter grammar.

use crate::models::SyntaxCheck;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Check Python syntax for a file.
///
/// Never returns an error: unreadable files and parse failures both
/// become failed check results carrying a diagnostic message.
pub fn check_syntax(path: &Path) -> SyntaxCheck {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return SyntaxCheck::fail(format!("Read Error: {}", e)),
    };

    parse_source(&source)
}

/// Parse Python source in memory and report the first error location.
pub fn parse_source(source: &str) -> SyntaxCheck {
    let mut parser = Parser::new();
    if parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .is_err()
    {
        return SyntaxCheck::fail("Parser Error: failed to load Python grammar");
    }

    let tree = match parser.parse(source, None) {
        Some(t) => t,
        None => return SyntaxCheck::fail("Parser Error: parse aborted"),
    };

    let root = tree.root_node();
    if !root.has_error() {
        return SyntaxCheck::ok();
    }

    match first_error_node(root) {
        Some(node) => {
            let point = node.start_position();
            SyntaxCheck::fail(format!(
                "Syntax Error: invalid syntax at line {}, column {}",
                point.row + 1,
                point.column + 1
            ))
        }
        None => SyntaxCheck::fail("Syntax Error: invalid syntax"),
    }
}

/// Depth-first search for the first ERROR or missing node.
fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(err) = first_error_node(child) {
                return Some(err);
            }
        }
    }

    None
}
