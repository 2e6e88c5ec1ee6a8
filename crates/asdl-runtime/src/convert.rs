//! Conversion of values into display trees.
//!
//! Schema types implement [`ToTree`] by building a [`Record`] named after
//! the variant and adding one field per schema field, in declaration order.
//! The impls here cover the field types a schema can use.

use crate::hnode::{Node, Record, Style};

pub trait ToTree {
    /// The full display tree; every field is shown with its name.
    fn to_tree(&self) -> Node;

    /// A compact display tree. Types with a shorter form override this;
    /// containers recurse with `abbreviated_tree` on their elements.
    fn abbreviated_tree(&self) -> Node {
        self.to_tree()
    }
}

macro_rules! number_to_tree {
    ($($ty:ty),*) => {
        $(
            impl ToTree for $ty {
                fn to_tree(&self) -> Node {
                    Node::leaf(self.to_string(), Style::NumberConst)
                }
            }
        )*
    };
}

number_to_tree!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ToTree for bool {
    fn to_tree(&self) -> Node {
        Node::leaf(if *self { "true" } else { "false" }, Style::BoolConst)
    }
}

impl ToTree for str {
    fn to_tree(&self) -> Node {
        Node::string(self)
    }
}

impl ToTree for String {
    fn to_tree(&self) -> Node {
        Node::string(self)
    }
}

impl<T: ToTree + ?Sized> ToTree for &T {
    fn to_tree(&self) -> Node {
        (**self).to_tree()
    }

    fn abbreviated_tree(&self) -> Node {
        (**self).abbreviated_tree()
    }
}

impl<T: ToTree + ?Sized> ToTree for Box<T> {
    fn to_tree(&self) -> Node {
        (**self).to_tree()
    }

    fn abbreviated_tree(&self) -> Node {
        (**self).abbreviated_tree()
    }
}

/// `None` renders as the missing leaf. Schema fields declared optional
/// (`T?`) should instead go through [`Record::optional_field`], which omits
/// them.
impl<T: ToTree> ToTree for Option<T> {
    fn to_tree(&self) -> Node {
        match self {
            Some(value) => value.to_tree(),
            None => Node::missing(),
        }
    }

    fn abbreviated_tree(&self) -> Node {
        match self {
            Some(value) => value.abbreviated_tree(),
            None => Node::missing(),
        }
    }
}

impl<T: ToTree> ToTree for [T] {
    fn to_tree(&self) -> Node {
        Node::list(self.iter().map(ToTree::to_tree))
    }

    fn abbreviated_tree(&self) -> Node {
        Node::list(self.iter().map(ToTree::abbreviated_tree))
    }
}

impl<T: ToTree> ToTree for Vec<T> {
    fn to_tree(&self) -> Node {
        self.as_slice().to_tree()
    }

    fn abbreviated_tree(&self) -> Node {
        self.as_slice().abbreviated_tree()
    }
}

/// Which of the two trees is being built. Lets a type write its record
/// layout once and pass the mode down to its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMode {
    Full,
    Abbreviated,
}

impl TreeMode {
    pub fn of<T: ToTree + ?Sized>(self, value: &T) -> Node {
        match self {
            TreeMode::Full => value.to_tree(),
            TreeMode::Abbreviated => value.abbreviated_tree(),
        }
    }

    /// Like [`TreeMode::of`], but `None` yields no node so the field can be
    /// passed to [`Record::optional_field`].
    pub fn of_optional<T: ToTree>(self, value: &Option<T>) -> Option<Node> {
        value.as_ref().map(|value| self.of(value))
    }
}

/// Builds the leaf for a variant of a simple sum (one without fields).
pub fn user_type(sum: &str, variant: &str) -> Node {
    Node::leaf(format!("{sum}.{variant}"), Style::UserType)
}

/// Builds an empty record for a fieldless variant of a compound sum.
pub fn nullary(variant: &str) -> Node {
    Record::new(variant).into()
}
