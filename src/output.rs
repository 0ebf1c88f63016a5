//! Rendering outlines for the terminal, for tools and for editors.
//!
//! The tree view draws the hierarchy with box-drawing characters, JSON exposes every field of
//! every section, and the tags format writes ctags-style lines an editor can jump through.

use crate::error::Result;
use crate::section::Outline;
use clap::ValueEnum;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
/// How outlines are printed.
pub enum OutputFormat {
    /// Indented tree with line numbers.
    Tree,
    /// Pretty-printed JSON array of outlines.
    Json,
    /// ctags extended format, one tag per heading.
    Tags,
}

/// Render `outlines` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialisation fails.
pub fn render(outlines: &[Outline], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Tree => render_tree(outlines),
        OutputFormat::Json => serde_json::to_string_pretty(outlines)? + "\n",
        OutputFormat::Tags => render_tags(outlines),
    })
}

/// Indentation for a nested heading: one rail per ancestor that has more siblings to come,
/// then the branch joining this heading.
fn branch_prefix(rails: &[bool], is_last: bool) -> String {
    let mut prefix: String = rails
        .iter()
        .map(|&open| if open { "│   " } else { "    " })
        .collect();
    prefix.push_str(if is_last { "└── " } else { "├── " });
    prefix
}

#[must_use]
/// One block per document: its path, then each heading as `[line] prefix title`.
pub fn render_tree(outlines: &[Outline]) -> String {
    let mut out = String::new();
    for outline in outlines {
        let _ = writeln!(out, "{}", outline.file_path);
        let roots: Vec<usize> = outline.roots().collect();
        let mut parent_states = Vec::new();
        for (i, &root) in roots.iter().enumerate() {
            render_node(
                outline,
                root,
                0,
                i + 1 == roots.len(),
                &mut parent_states,
                &mut out,
            );
        }
    }
    out
}

fn render_node(
    outline: &Outline,
    index: usize,
    depth: usize,
    is_last: bool,
    parent_states: &mut Vec<bool>,
    out: &mut String,
) {
    let section = &outline.sections[index];
    let prefix = if depth == 0 {
        String::new()
    } else {
        branch_prefix(parent_states, is_last)
    };
    let _ = writeln!(out, "[{}] {prefix}{}", section.line, section.title);

    if depth > 0 {
        parent_states.push(!is_last);
    }
    let children = outline.children(index);
    for (i, &child) in children.iter().enumerate() {
        render_node(
            outline,
            child,
            depth + 1,
            i + 1 == children.len(),
            parent_states,
            out,
        );
    }
    if depth > 0 {
        parent_states.pop();
    }
}

#[must_use]
/// `title<TAB>file<TAB>line;"<TAB>kind<TAB>line:N`, plus the parent scope when there is one.
///
/// The scope field names the parent by its level (`chapter:Intro`), and kinds use the letters
/// `n`, `m`, `d` and `v`. Tabs and backslashes in titles and paths are escaped as `\t` and `\\`.
pub fn render_tags(outlines: &[Outline]) -> String {
    let mut out = String::new();
    for outline in outlines {
        let file = escape_field(&outline.file_path);
        for section in &outline.sections {
            let _ = write!(
                out,
                "{}\t{file}\t{};\"\t{}\tline:{}",
                escape_field(&section.title),
                section.line,
                section.level.kind_letter(),
                section.line
            );
            if let Some(parent) = section.parent_index.and_then(|p| outline.sections.get(p)) {
                let _ = write!(
                    out,
                    "\t{}:{}",
                    parent.level.name(),
                    escape_field(&parent.title)
                );
            }
            out.push('\n');
        }
    }
    out
}

/// Tag fields are tab-separated, so a literal tab would split one.
fn escape_field(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\t', "\\t")
}

#[cfg(test)]
#[path = "tests/output.rs"]
mod tests;
