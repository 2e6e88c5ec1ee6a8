//! ```text
//! module typed_demo {
//!   op_id = Plus | Minus | Star
//!
//!   cflow = Break | Continue | Return(int status)
//!
//!   word = (string value)
//!
//!   bool_expr =
//!     Binary(word left, word right)
//!   | Unary(word child)
//!   | LogicalNot(bool_expr b)
//!   | LogicalBinary(op_id op, bool_expr left, bool_expr right)
//!
//!   maps = (map[string, string] ss, map[int, bool] ib)
//! }
//! ```

use asdl_runtime::convert::{nullary, user_type};
use asdl_runtime::{Dict, Node, Record, SumTag, Tagged, ToTree, TreeMode};

// ── op_id ──────────────────────────────────────────────────────────────────

/// Simple sum: its values are its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpId {
    Plus = 1,
    Minus = 2,
    Star = 3,
}

impl SumTag for OpId {
    const SUM_NAME: &'static str = "op_id";
    const ALL: &'static [Self] = &[OpId::Plus, OpId::Minus, OpId::Star];

    fn raw(self) -> u16 {
        self as u16
    }

    fn variant_name(self) -> &'static str {
        match self {
            OpId::Plus => "Plus",
            OpId::Minus => "Minus",
            OpId::Star => "Star",
        }
    }
}

impl ToTree for OpId {
    fn to_tree(&self) -> Node {
        user_type(Self::SUM_NAME, self.variant_name())
    }
}

// ── cflow ──────────────────────────────────────────────────────────────────

pub mod cflow {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Return {
        pub status: i32,
    }

    impl Return {
        pub fn new(status: i32) -> Self {
            Self { status }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Return")
                .field("status", mode.of(&self.status))
                .into()
        }
    }

    impl_to_tree!(Return);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cflow {
    Break,
    Continue,
    Return(cflow::Return),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CflowTag {
    Break = 1,
    Continue = 2,
    Return = 3,
}

impl SumTag for CflowTag {
    const SUM_NAME: &'static str = "cflow";
    const ALL: &'static [Self] = &[CflowTag::Break, CflowTag::Continue, CflowTag::Return];

    fn raw(self) -> u16 {
        self as u16
    }

    fn variant_name(self) -> &'static str {
        match self {
            CflowTag::Break => "Break",
            CflowTag::Continue => "Continue",
            CflowTag::Return => "Return",
        }
    }
}

impl Tagged for Cflow {
    type Tag = CflowTag;

    fn tag(&self) -> CflowTag {
        match self {
            Cflow::Break => CflowTag::Break,
            Cflow::Continue => CflowTag::Continue,
            Cflow::Return(_) => CflowTag::Return,
        }
    }
}

impl Cflow {
    fn tree(&self, mode: TreeMode) -> Node {
        match self {
            Cflow::Break | Cflow::Continue => nullary(self.tag().variant_name()),
            Cflow::Return(v) => mode.of(v),
        }
    }
}

impl_to_tree!(Cflow);

// ── word ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub value: String,
}

impl Word {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Abbreviated as `w(value)`.
    fn tree(&self, mode: TreeMode) -> Node {
        let record = match mode {
            TreeMode::Full => Record::new("word").field("value", self.value.to_tree()),
            TreeMode::Abbreviated => Record::new("w").unnamed(self.value.to_tree()),
        };
        record.into()
    }
}

impl_to_tree!(Word);

// ── bool_expr ──────────────────────────────────────────────────────────────

pub mod bool_expr {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Binary {
        pub left: Word,
        pub right: Word,
    }

    impl Binary {
        pub fn new(left: Word, right: Word) -> Self {
            Self { left, right }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Binary")
                .field("left", mode.of(&self.left))
                .field("right", mode.of(&self.right))
                .into()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Unary {
        pub child: Word,
    }

    impl Unary {
        pub fn new(child: Word) -> Self {
            Self { child }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Unary")
                .field("child", mode.of(&self.child))
                .into()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LogicalNot {
        pub b: Box<BoolExpr>,
    }

    impl LogicalNot {
        pub fn new(b: impl Into<BoolExpr>) -> Self {
            Self {
                b: Box::new(b.into()),
            }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("LogicalNot").field("b", mode.of(&self.b)).into()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LogicalBinary {
        pub op: OpId,
        pub left: Box<BoolExpr>,
        pub right: Box<BoolExpr>,
    }

    impl LogicalBinary {
        pub fn new(op: OpId, left: impl Into<BoolExpr>, right: impl Into<BoolExpr>) -> Self {
            Self {
                op,
                left: Box::new(left.into()),
                right: Box::new(right.into()),
            }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("LogicalBinary")
                .field("op", mode.of(&self.op))
                .field("left", mode.of(&self.left))
                .field("right", mode.of(&self.right))
                .into()
        }
    }

    impl_to_tree!(Binary, Unary, LogicalNot, LogicalBinary);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolExpr {
    Binary(bool_expr::Binary),
    Unary(bool_expr::Unary),
    LogicalNot(bool_expr::LogicalNot),
    LogicalBinary(bool_expr::LogicalBinary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolExprTag {
    Binary = 1,
    Unary = 2,
    LogicalNot = 3,
    LogicalBinary = 4,
}

impl SumTag for BoolExprTag {
    const SUM_NAME: &'static str = "bool_expr";
    const ALL: &'static [Self] = &[
        BoolExprTag::Binary,
        BoolExprTag::Unary,
        BoolExprTag::LogicalNot,
        BoolExprTag::LogicalBinary,
    ];

    fn raw(self) -> u16 {
        self as u16
    }

    fn variant_name(self) -> &'static str {
        match self {
            BoolExprTag::Binary => "Binary",
            BoolExprTag::Unary => "Unary",
            BoolExprTag::LogicalNot => "LogicalNot",
            BoolExprTag::LogicalBinary => "LogicalBinary",
        }
    }
}

impl Tagged for BoolExpr {
    type Tag = BoolExprTag;

    fn tag(&self) -> BoolExprTag {
        match self {
            BoolExpr::Binary(_) => BoolExprTag::Binary,
            BoolExpr::Unary(_) => BoolExprTag::Unary,
            BoolExpr::LogicalNot(_) => BoolExprTag::LogicalNot,
            BoolExpr::LogicalBinary(_) => BoolExprTag::LogicalBinary,
        }
    }
}

impl BoolExpr {
    fn tree(&self, mode: TreeMode) -> Node {
        match self {
            BoolExpr::Binary(v) => mode.of(v),
            BoolExpr::Unary(v) => mode.of(v),
            BoolExpr::LogicalNot(v) => mode.of(v),
            BoolExpr::LogicalBinary(v) => mode.of(v),
        }
    }
}

impl_to_tree!(BoolExpr);

impl From<bool_expr::Binary> for BoolExpr {
    fn from(v: bool_expr::Binary) -> Self {
        BoolExpr::Binary(v)
    }
}

impl From<bool_expr::Unary> for BoolExpr {
    fn from(v: bool_expr::Unary) -> Self {
        BoolExpr::Unary(v)
    }
}

impl From<bool_expr::LogicalNot> for BoolExpr {
    fn from(v: bool_expr::LogicalNot) -> Self {
        BoolExpr::LogicalNot(v)
    }
}

impl From<bool_expr::LogicalBinary> for BoolExpr {
    fn from(v: bool_expr::LogicalBinary) -> Self {
        BoolExpr::LogicalBinary(v)
    }
}

// ── maps ───────────────────────────────────────────────────────────────────

/// Map fields start unset and are installed by the caller; an unset map
/// renders as the missing leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Maps {
    pub ss: Option<Dict<String, String>>,
    pub ib: Option<Dict<i64, bool>>,
}

impl Maps {
    fn tree(&self, mode: TreeMode) -> Node {
        Record::new("maps")
            .field("ss", mode.of(&self.ss))
            .field("ib", mode.of(&self.ib))
            .into()
    }
}

impl_to_tree!(Maps);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_id_is_a_user_type_leaf() {
        assert_eq!(OpId::Star.to_tree().to_string(), "op_id.Star");
        assert_eq!(OpId::from_raw(2), OpId::Minus);
    }

    #[test]
    fn nullary_variants_render_as_empty_records() {
        assert_eq!(Cflow::Break.to_tree().to_string(), "Break()");
        assert_eq!(Cflow::Continue.tag(), CflowTag::Continue);
        assert_eq!(
            Cflow::Return(cflow::Return::new(2)).to_tree().to_string(),
            "Return(status=2)"
        );
    }

    #[test]
    fn word_abbreviation() {
        let w = Word::new("left");
        assert_eq!(w.to_tree().to_string(), "word(value=left)");
        assert_eq!(w.abbreviated_tree().to_string(), "w(left)");
    }

    #[test]
    fn logical_binary_nests() {
        let e: BoolExpr = bool_expr::LogicalBinary::new(
            OpId::Plus,
            bool_expr::Unary::new(Word::new("a")),
            bool_expr::Unary::new(Word::new("b")),
        )
        .into();
        assert_eq!(e.tag(), BoolExprTag::LogicalBinary);
        assert_eq!(
            e.abbreviated_tree().to_string(),
            "LogicalBinary(op=op_id.Plus, left=Unary(child=w(a)), right=Unary(child=w(b)))"
        );

        let not: BoolExpr = bool_expr::LogicalNot::new(e).into();
        assert_eq!(not.tag(), BoolExprTag::LogicalNot);
        assert!(not.to_tree().to_string().starts_with("LogicalNot(\n  b=LogicalBinary("));
    }

    #[test]
    fn unset_maps_are_missing() {
        let m = Maps::default();
        assert_eq!(m.to_tree().to_string(), "maps(ss=<missing>, ib=<missing>)");
    }
}
