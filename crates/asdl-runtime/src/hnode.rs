//! The generic display tree (`hnode`).
//!
//! Any schema value can be expressed with three node kinds:
//!
//! - [`Record`]: a type name with named (and optionally unnamed) children
//! - [`Leaf`]: a rendered token and the [`Style`] it is printed with
//! - `List`: an ordered sequence of children
//!
//! Trees own all of their text, so a tree is a snapshot of the value it was
//! built from.

use serde::Serialize;

use crate::strings;
use crate::tag::SumTag;

/// Token printed in place of a value that is absent.
pub const MISSING: &str = "<missing>";

/// Classifies a leaf for rendering purposes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    TypeName,
    StringConst,
    NumberConst,
    BoolConst,
    /// Variant of a simple (fieldless) sum, e.g. `op_id.Plus`.
    UserType,
    Missing,
}

impl Style {
    /// CSS class used by the HTML output.
    pub fn class_name(self) -> &'static str {
        match self {
            Style::TypeName => "type-name",
            Style::StringConst => "string-const",
            Style::NumberConst => "number-const",
            Style::BoolConst => "bool-const",
            Style::UserType => "user-type",
            Style::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: Node,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub node_type: String,
    pub left: &'static str,
    pub right: &'static str,
    /// Printed before the named fields, without names.
    pub unnamed: Vec<Node>,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            left: "(",
            right: ")",
            unnamed: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn delimiters(mut self, left: &'static str, right: &'static str) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: Node) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
        self
    }

    /// Adds a field only when `value` is present; used for `T?` schema
    /// fields.
    pub fn optional_field(self, name: impl Into<String>, value: Option<Node>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn unnamed(mut self, value: Node) -> Self {
        self.unnamed.push(value);
        self
    }

    /// Number of children, named and unnamed.
    pub fn len(&self) -> usize {
        self.unnamed.len() + self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Record(Record),
    Leaf(Leaf),
    List(Vec<Node>),
}

impl Node {
    pub fn leaf(text: impl Into<String>, style: Style) -> Self {
        Node::Leaf(Leaf {
            text: text.into(),
            style,
        })
    }

    /// A string leaf; the text is quoted unless it is a plain token.
    pub fn string(s: &str) -> Self {
        Node::leaf(strings::quote(s), Style::StringConst)
    }

    pub fn missing() -> Self {
        Node::leaf(MISSING, Style::Missing)
    }

    pub fn list(children: impl IntoIterator<Item = Node>) -> Self {
        Node::List(children.into_iter().collect())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Record(_) => NodeKind::Record,
            Node::Leaf(_) => NodeKind::Leaf,
            Node::List(_) => NodeKind::List,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(children) => Some(children),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Node::Leaf(Leaf { style: Style::Missing, .. }))
    }
}

impl From<Record> for Node {
    fn from(record: Record) -> Self {
        Node::Record(record)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

/// Tag of the display-tree sum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Record = 1,
    Leaf = 2,
    List = 3,
}

impl SumTag for NodeKind {
    const SUM_NAME: &'static str = "hnode";
    const ALL: &'static [Self] = &[NodeKind::Record, NodeKind::Leaf, NodeKind::List];

    fn raw(self) -> u16 {
        self as u16
    }

    fn variant_name(self) -> &'static str {
        match self {
            NodeKind::Record => "Record",
            NodeKind::Leaf => "Leaf",
            NodeKind::List => "List",
        }
    }
}
