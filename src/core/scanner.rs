//! Go syntax scanning.
//!
//! Each source unit is parsed with tree-sitter and every node is visited.
//! Call expressions and constant declarations are lowered into
//! [`Argument`]s and handed to the pattern matcher.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use tree_sitter::{Node, Parser, Tree};

use super::{
    DiscoveredSet,
    patterns::{Argument, match_call, match_constant},
};

/// Parse Go source into a syntax tree.
///
/// tree-sitter recovers from syntax errors, so the tree is checked for
/// ERROR and MISSING nodes and rejected if any are present.
pub fn parse_go_source(source: &str, file_path: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| anyhow!("Failed to load Go grammar: {}", e))?;

    let tree = parser
        .parse(source, None)
        .with_context(|| format!("Failed to parse Go file: {}", file_path))?;

    if let Some(bad) = first_syntax_error(tree.root_node()) {
        let pos = bad.start_position();
        bail!(
            "Failed to parse Go file: {}:{}:{}: unexpected syntax near {:?}",
            file_path,
            pos.row + 1,
            pos.column + 1,
            snippet(bad, source)
        );
    }

    Ok(tree)
}

/// Scan one source unit, inserting every identifier it introduces.
pub fn scan_source(source: &str, file_path: &str, discovered: &mut DiscoveredSet) -> Result<()> {
    let tree = parse_go_source(source, file_path)?;
    IdentifierCollector { source, discovered }.walk(&tree);
    Ok(())
}

/// Read and scan a file, returning the identifiers it introduces.
pub fn scan_file(path: &Path) -> Result<DiscoveredSet> {
    let file_path = path.to_string_lossy();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read Go file: {}", file_path))?;

    let mut discovered = DiscoveredSet::new();
    scan_source(&source, &file_path, &mut discovered)?;
    tracing::debug!(file = %file_path, identifiers = discovered.len(), "scanned");
    Ok(discovered)
}

struct IdentifierCollector<'a> {
    source: &'a str,
    discovered: &'a mut DiscoveredSet,
}

impl<'a> IdentifierCollector<'a> {
    fn walk(&mut self, tree: &Tree) {
        let mut cursor = tree.walk();
        loop {
            self.visit(cursor.node());

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "call_expression" => self.visit_call(node),
            "const_spec" => self.visit_const_spec(node),
            _ => {}
        }
    }

    fn visit_call(&mut self, node: Node) {
        let Some(function) = node
            .child_by_field_name("function")
            .and_then(|callee| self.callee_name(callee))
        else {
            return;
        };
        let Some(arguments) = node.child_by_field_name("arguments") else {
            return;
        };

        let args: Vec<Argument> = expressions(arguments)
            .into_iter()
            .map(|arg| self.lower(arg))
            .collect();

        if let Some(id) = match_call(function, &args) {
            self.discovered.insert(id);
        }
    }

    /// Terminal name of a callee: `T` for `T(..)`, `c.T(..)` and `a.b.T(..)`.
    fn callee_name(&self, callee: Node) -> Option<&'a str> {
        match callee.kind() {
            "identifier" => Some(self.text(callee)),
            "selector_expression" => callee
                .child_by_field_name("field")
                .map(|field| self.text(field)),
            _ => None,
        }
    }

    fn visit_const_spec(&mut self, node: Node) {
        let mut cursor = node.walk();
        let names: Vec<Node> = node
            .children_by_field_name("name", &mut cursor)
            .filter(|name| name.kind() == "identifier")
            .collect();
        let values = node
            .child_by_field_name("value")
            .map(expressions)
            .unwrap_or_default();

        for (name, value) in names.into_iter().zip(values) {
            let value = self.lower(value);
            if let Some(id) = match_constant(self.text(name), &value) {
                self.discovered.insert(id);
            }
        }
    }

    fn lower(&self, node: Node) -> Argument<'a> {
        match node.kind() {
            "interpreted_string_literal" | "raw_string_literal" => {
                Argument::StringLiteral(self.text(node))
            }
            _ => Argument::Computed,
        }
    }

    fn text(&self, node: Node) -> &'a str {
        &self.source[node.byte_range()]
    }
}

/// Named children of an argument or expression list, without comments.
fn expressions(list: Node) -> Vec<Node> {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn first_syntax_error(root: Node) -> Option<Node> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only descend into subtrees that contain the error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn snippet<'a>(node: Node, source: &'a str) -> &'a str {
    let text = &source[node.byte_range()];
    let line = text.lines().next().unwrap_or_default();
    match line.char_indices().nth(40) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}
