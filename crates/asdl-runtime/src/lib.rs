//! Runtime support for schema-defined algebraic data types.
//!
//! # Overview
//!
//! Values of a schema's sum and product types are converted into a generic
//! display tree ([`Node`]) through the [`ToTree`] trait. The tree knows
//! nothing about the schema beyond type and field names, so a single
//! formatter ([`print_tree`]) renders every schema the same way:
//!
//! - records as `TypeName(field=value, ...)`
//! - lists as `[a, b, ...]`
//! - leaves as bare tokens
//!
//! A record or list that does not fit in the column budget is broken onto
//! one child per line, one indentation level deeper.
//!
//! # Example
//!
//! ```
//! use asdl_runtime::{render_string, FormatOptions, Node, Record, ToTree};
//!
//! struct Const {
//!     i: i64,
//! }
//!
//! impl ToTree for Const {
//!     fn to_tree(&self) -> Node {
//!         Record::new("Const").field("i", self.i.to_tree()).into()
//!     }
//! }
//!
//! let tree = Const { i: 42 }.to_tree();
//! assert_eq!(render_string(&tree, &FormatOptions::plain()), "Const(i=42)");
//! ```

pub mod convert;
pub mod dict;
pub mod error;
pub mod format;
pub mod hnode;
pub mod strings;
pub mod tag;

pub use convert::{ToTree, TreeMode};
pub use dict::Dict;
pub use error::Error;
pub use format::output::{
    output_for, stdout_output, AnsiOutput, ColorChoice, HtmlOutput, Output, TextOutput,
};
pub use format::{print_tree, print_tree_with, render_string, FormatOptions, Printer};
pub use hnode::{Field, Leaf, Node, NodeKind, Record, Style};
pub use tag::{SumTag, Tagged};
