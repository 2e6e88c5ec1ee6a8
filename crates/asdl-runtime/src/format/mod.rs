//! Pretty printer for display trees.
//!
//! Each record and list is first measured in its single-line form. If it
//! fits between the current column and the column budget it is printed on
//! one line; otherwise its opening token ends the line, every child goes on
//! its own line one level deeper, and the closing delimiter returns to the
//! indentation of the line the node started on:
//!
//! ```text
//! FuncCall(
//!   name=f,
//!   args=[Var(name=v1), Var(name=v2)]
//! )
//! ```
//!
//! The decision is made per node, so a broken parent can still have
//! single-line children.

pub mod options;
pub mod output;

use std::fmt;
use std::io;

pub use options::FormatOptions;
use output::{Output, TextOutput};

use crate::hnode::{Leaf, Node, Style};
use crate::strings::display_width;

const SEP: &str = ", ";

/// A child of a container and the name it is printed with, if any.
type Child<'a> = (Option<&'a str>, &'a Node);

/// Everything the printer needs from a record or list.
struct Container<'a> {
    type_name: &'a str,
    left: &'a str,
    right: &'a str,
    children: Vec<Child<'a>>,
}

enum Shape<'a> {
    Leaf(&'a Leaf),
    Container(Container<'a>),
}

impl<'a> Shape<'a> {
    fn of(node: &'a Node) -> Self {
        match node {
            Node::Leaf(leaf) => Shape::Leaf(leaf),
            Node::List(items) => Shape::Container(Container {
                type_name: "",
                left: "[",
                right: "]",
                children: items.iter().map(|item| (None, item)).collect(),
            }),
            Node::Record(record) => Shape::Container(Container {
                type_name: &record.node_type,
                left: record.left,
                right: record.right,
                children: record
                    .unnamed
                    .iter()
                    .map(|item| (None, item))
                    .chain(
                        record
                            .fields
                            .iter()
                            .map(|field| (Some(field.name.as_str()), &field.value)),
                    )
                    .collect(),
            }),
        }
    }
}

/// Accumulates single-line width and gives up as soon as it passes `limit`.
struct Measure {
    used: usize,
    limit: usize,
}

impl Measure {
    fn add(&mut self, s: &str) -> bool {
        self.used += display_width(s);
        self.used <= self.limit
    }

    fn node(&mut self, node: &Node) -> bool {
        match Shape::of(node) {
            Shape::Leaf(leaf) => self.add(&leaf.text),
            Shape::Container(c) => {
                if !(self.add(c.type_name) && self.add(c.left)) {
                    return false;
                }
                for (i, (name, child)) in c.children.iter().enumerate() {
                    if i > 0 && !self.add(SEP) {
                        return false;
                    }
                    if let Some(name) = name {
                        if !(self.add(name) && self.add("=")) {
                            return false;
                        }
                    }
                    if !self.node(child) {
                        return false;
                    }
                }
                self.add(c.right)
            }
        }
    }
}

/// Width of `node` printed on one line, or `None` if it exceeds `limit`.
pub fn flat_width(node: &Node, limit: usize) -> Option<usize> {
    let mut measure = Measure { used: 0, limit };
    if measure.node(node) {
        Some(measure.used)
    } else {
        None
    }
}

/// Prints display trees under one set of [`FormatOptions`].
///
/// The indentation depth lives here rather than in any global, and every
/// nested scope restores it on exit, including when the output fails.
#[derive(Debug, Clone)]
pub struct Printer {
    opts: FormatOptions,
    depth: usize,
}

impl Printer {
    pub fn new(opts: FormatOptions) -> Self {
        Self { opts, depth: 0 }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.opts
    }

    /// Current indentation depth; zero between calls to [`Printer::print`].
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn print(&mut self, node: &Node, out: &mut dyn Output) -> io::Result<()> {
        tracing::debug!(max_col = self.opts.max_col, kind = ?node.kind(), "printing tree");
        let col = self.indent_width();
        self.print_node(node, out, col, 0)
    }

    fn indent_width(&self) -> usize {
        self.depth * self.opts.indent
    }

    fn nested<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// `trailing` is the width of whatever follows the node on its line.
    fn fits(&self, container: &Container<'_>, node: &Node, col: usize, trailing: usize) -> bool {
        container.children.is_empty()
            || flat_width(node, self.opts.max_col.saturating_sub(col + trailing)).is_some()
    }

    fn print_node(
        &mut self,
        node: &Node,
        out: &mut dyn Output,
        col: usize,
        trailing: usize,
    ) -> io::Result<()> {
        let container = match Shape::of(node) {
            Shape::Leaf(leaf) => return out.write_styled(&leaf.text, leaf.style),
            Shape::Container(container) => container,
        };
        if self.fits(&container, node, col, trailing) {
            Self::print_flat(node, out)
        } else {
            tracing::trace!(depth = self.depth, col, "breaking node across lines");
            self.print_broken(&container, out)
        }
    }

    fn print_open(container: &Container<'_>, out: &mut dyn Output) -> io::Result<()> {
        if !container.type_name.is_empty() {
            out.write_styled(container.type_name, Style::TypeName)?;
        }
        out.write_str(container.left)
    }

    fn print_flat(node: &Node, out: &mut dyn Output) -> io::Result<()> {
        let container = match Shape::of(node) {
            Shape::Leaf(leaf) => return out.write_styled(&leaf.text, leaf.style),
            Shape::Container(container) => container,
        };
        Self::print_open(&container, out)?;
        for (i, (name, child)) in container.children.iter().enumerate() {
            if i > 0 {
                out.write_str(SEP)?;
            }
            if let Some(name) = name {
                out.write_str(name)?;
                out.write_str("=")?;
            }
            Self::print_flat(child, out)?;
        }
        out.write_str(container.right)
    }

    fn print_broken(&mut self, container: &Container<'_>, out: &mut dyn Output) -> io::Result<()> {
        Self::print_open(container, out)?;
        let last = container.children.len().saturating_sub(1);
        self.nested(|printer| {
            let indent = " ".repeat(printer.indent_width());
            for (i, (name, child)) in container.children.iter().enumerate() {
                out.write_str("\n")?;
                out.write_str(&indent)?;
                let mut col = indent.len();
                if let Some(name) = name {
                    out.write_str(name)?;
                    out.write_str("=")?;
                    col += display_width(name) + 1;
                }
                if i == last {
                    printer.print_node(child, out, col, 0)?;
                } else {
                    printer.print_node(child, out, col, 1)?;
                    out.write_str(",")?;
                }
            }
            Ok(())
        })?;
        out.write_str("\n")?;
        out.write_str(&" ".repeat(self.indent_width()))?;
        out.write_str(container.right)
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

/// Prints `node` to `out` with default options.
pub fn print_tree(node: &Node, out: &mut dyn Output) -> io::Result<()> {
    Printer::default().print(node, out)
}

pub fn print_tree_with(node: &Node, out: &mut dyn Output, opts: &FormatOptions) -> io::Result<()> {
    Printer::new(opts.clone()).print(node, out)
}

/// Renders `node` as plain text.
pub fn render_string(node: &Node, opts: &FormatOptions) -> String {
    let mut out = TextOutput::new(Vec::new());
    // Writes into a Vec cannot fail.
    let _ = print_tree_with(node, &mut out, opts);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_string(self, &FormatOptions::plain()))
    }
}
