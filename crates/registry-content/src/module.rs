//! Parsed TSX source module

use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use crate::dialect::Dialect;
use crate::edit::{Edit, EditKind};
use crate::error::{Error, Result};

/// A source file parsed with the grammar of its [`Dialect`].
///
/// Every module owns its parser and tree, so independent modules can be
/// processed without sharing state. Edits are applied to the text and the
/// tree is re-parsed afterwards; text that was never edited is returned
/// byte for byte.
pub struct SourceModule {
    original: String,
    source: String,
    parser: Parser,
    tree: Tree,
    edits: Vec<Edit>,
}

impl SourceModule {
    /// Parse `source` as `dialect`, failing on any syntax error.
    pub fn parse(source: &str, dialect: Dialect) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&dialect.language())?;
        let tree = parse_tree(&mut parser, source)?;

        Ok(Self {
            original: source.to_string(),
            source: source.to_string(),
            parser,
            tree,
            edits: Vec::new(),
        })
    }

    /// Current source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether any edit changed the text.
    pub fn is_modified(&self) -> bool {
        self.source != self.original
    }

    /// Edits applied so far, in application order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Consume the module and return the current text.
    pub fn into_source(self) -> String {
        self.source
    }

    /// Names bound by top-level `const`/`let`/`var` statements, exported or not.
    pub fn top_level_variable_names(&self) -> Vec<String> {
        top_level_declarations(&self.tree)
            .into_iter()
            .flat_map(|statement| statement.declarators)
            .filter_map(|declarator| declarator.name)
            .map(|range| self.source[range].to_string())
            .collect()
    }

    /// Whether a top-level variable named `name` is declared.
    pub fn has_variable_declaration(&self, name: &str) -> bool {
        self.top_level_variable_names().iter().any(|n| n == name)
    }

    /// Remove every top-level variable declarator named `name`.
    ///
    /// A statement left without declarators is removed as a whole, together
    /// with the rest of its line when nothing else follows it. Returns the
    /// edits applied; an empty list when `name` is not declared.
    pub fn remove_variable_declaration(&mut self, name: &str) -> Result<Vec<Edit>> {
        let mut planned = Vec::new();

        for statement in top_level_declarations(&self.tree) {
            let matches: Vec<bool> = statement
                .declarators
                .iter()
                .map(|d| d.name.as_ref().is_some_and(|r| &self.source[r.clone()] == name))
                .collect();

            if !matches.contains(&true) {
                continue;
            }

            if matches.iter().all(|m| *m) {
                planned.push((
                    EditKind::DeleteStatement,
                    line_range(&self.source, statement.range),
                ));
                continue;
            }

            planned.extend(
                declarator_ranges(&statement.declarators, &matches)
                    .into_iter()
                    .map(|range| (EditKind::DeleteDeclarator, range)),
            );
        }

        if planned.is_empty() {
            return Ok(Vec::new());
        }

        // Apply back to front so earlier ranges stay valid
        planned.sort_by_key(|(_, range)| std::cmp::Reverse(range.start));
        let mut applied = Vec::with_capacity(planned.len());
        for (kind, range) in planned {
            let removed = self.source[range.clone()].to_string();
            self.source.replace_range(range.clone(), "");
            applied.push(Edit {
                kind,
                name: name.to_string(),
                range,
                removed,
            });
        }
        applied.reverse();

        self.tree = parse_tree(&mut self.parser, &self.source)?;
        self.edits.extend(applied.iter().cloned());
        Ok(applied)
    }
}

impl std::fmt::Debug for SourceModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceModule")
            .field("len", &self.source.len())
            .field("edits", &self.edits)
            .finish()
    }
}

/// A top-level variable statement.
struct Statement {
    /// Range of the whole statement, including an `export` keyword
    range: Range<usize>,
    declarators: Vec<Declarator>,
}

struct Declarator {
    range: Range<usize>,
    /// Identifier range; `None` for destructuring patterns
    name: Option<Range<usize>>,
}

fn parse_tree(parser: &mut Parser, source: &str) -> Result<Tree> {
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(0, 0, "parser produced no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        let node = first_error(root).unwrap_or(root);
        let position = node.start_position();
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            "unexpected syntax".to_string()
        };
        return Err(Error::parse(position.row + 1, position.column + 1, message));
    }

    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

fn top_level_declarations(tree: &Tree) -> Vec<Statement> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let children: Vec<Node<'_>> = root.named_children(&mut cursor).collect();

    children
        .into_iter()
        .filter_map(|node| {
            let declaration = match node.kind() {
                "lexical_declaration" | "variable_declaration" => node,
                "export_statement" => node
                    .child_by_field_name("declaration")
                    .filter(|d| matches!(d.kind(), "lexical_declaration" | "variable_declaration"))?,
                _ => return None,
            };

            let mut cursor = declaration.walk();
            let declarators = declaration
                .named_children(&mut cursor)
                .filter(|child| child.kind() == "variable_declarator")
                .map(|child| Declarator {
                    range: child.byte_range(),
                    name: child
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "identifier")
                        .map(|n| n.byte_range()),
                })
                .collect();

            Some(Statement {
                range: node.byte_range(),
                declarators,
            })
        })
        .collect()
}

/// Ranges removing the matched declarators and their separating commas
/// from a statement that keeps at least one declarator.
fn declarator_ranges(declarators: &[Declarator], matches: &[bool]) -> Vec<Range<usize>> {
    let Some(last_kept) = matches.iter().rposition(|m| !m) else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    for (index, _) in matches.iter().enumerate().filter(|(_, m)| **m) {
        if index < last_kept {
            // `a = 1, ` up to the next declarator
            ranges.push(declarators[index].range.start..declarators[index + 1].range.start);
        }
    }

    // Trailing matches are cut from the end of the last kept declarator
    if let Some(last) = declarators.last().filter(|_| last_kept + 1 < declarators.len()) {
        ranges.push(declarators[last_kept].range.end..last.range.end);
    }

    ranges
}

/// Widen a statement range to whole lines when nothing else shares them.
fn line_range(source: &str, range: Range<usize>) -> Range<usize> {
    let bytes = source.as_bytes();

    let mut end = range.end;
    while end < bytes.len() && matches!(bytes[end], b' ' | b'\t') {
        end += 1;
    }
    let ends_line = if source[end..].starts_with("\r\n") {
        end += 2;
        true
    } else if source[end..].starts_with('\n') {
        end += 1;
        true
    } else {
        end == bytes.len()
    };

    if !ends_line {
        return range;
    }

    let line_start = source[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let start = if source[line_start..range.start]
        .bytes()
        .all(|b| matches!(b, b' ' | b'\t'))
    {
        line_start
    } else {
        range.start
    };

    start..end
}
