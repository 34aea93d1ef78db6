//! Tree Views
//!
//! Read-only renderings of a snapshot for terminal output: an indented outline
//! that honours folder expansion, and a flat table of every node.

use crate::tree::{Node, Tree};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Options for the outline rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineOptions {
    /// Emit ANSI colors
    pub color: bool,
    /// Show children of collapsed folders too
    pub expand_all: bool,
}

/// Indented outline; collapsed folders hide their children unless `expand_all`
pub fn render_outline(tree: &Tree, selection: Option<&str>, options: OutlineOptions) -> String {
    let mut out = String::new();
    for node in tree.roots() {
        render_node(node, 0, selection, options, &mut out);
    }
    if out.is_empty() {
        out.push_str("(empty tree)\n");
    }
    out
}

fn render_node(
    node: &Node,
    depth: usize,
    selection: Option<&str>,
    options: OutlineOptions,
    out: &mut String,
) {
    let indent = "  ".repeat(depth);
    let marker = if selection == Some(node.id()) { "*" } else { " " };
    match node {
        Node::Folder(folder) => {
            let glyph = if folder.is_open { "▾" } else { "▸" };
            let label = format!("{}/", folder.name);
            let label = if options.color {
                label.blue().bold().to_string()
            } else {
                label
            };
            out.push_str(&format!(
                "{}{}{} {}  [{}]\n",
                marker, indent, glyph, label, folder.id
            ));
            if folder.is_open || options.expand_all {
                for child in &folder.children {
                    render_node(child, depth + 1, selection, options, out);
                }
            }
        }
        Node::File(file) => {
            let id = if options.color {
                file.id.dimmed().to_string()
            } else {
                file.id.clone()
            };
            out.push_str(&format!("{}{}  {}  [{}]\n", marker, indent, file.name, id));
        }
    }
}

/// Flat table of every node in pre-order, with its slash-joined path
pub fn render_table(tree: &Tree) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Type", "Path", "Open", "Size"]);
    let mut rows = Vec::new();
    collect_rows(tree.roots(), "", &mut rows);
    for row in rows {
        table.add_row(row);
    }
    format!("{}", table)
}

fn collect_rows(nodes: &[Node], prefix: &str, rows: &mut Vec<Vec<String>>) {
    for node in nodes {
        let path = if prefix.is_empty() {
            node.name().to_string()
        } else {
            format!("{}/{}", prefix, node.name())
        };
        match node {
            Node::Folder(folder) => {
                rows.push(vec![
                    folder.id.clone(),
                    "folder".to_string(),
                    format!("{}/", path),
                    if folder.is_open { "yes" } else { "no" }.to_string(),
                    format!("{} items", folder.children.len()),
                ]);
                collect_rows(&folder.children, &path, rows);
            }
            Node::File(file) => rows.push(vec![
                file.id.clone(),
                "file".to_string(),
                path,
                "-".to_string(),
                format!("{} B", file.content.len()),
            ]),
        }
    }
}
