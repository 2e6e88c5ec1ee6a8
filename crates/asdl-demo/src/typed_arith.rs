//! ```text
//! module typed_arith {
//!   arith_expr =
//!     Unary(string op, arith_expr a)
//!   | Binary(string op, arith_expr left, arith_expr right)
//!   | FuncCall(string name, arith_expr* args)
//!   | Slice(arith_expr a, arith_expr? begin, arith_expr? end)
//!   | Const(int i)
//!   | Var(string name)
//!
//!   pipeline = (bool negated)
//! }
//! ```

use asdl_runtime::{Node, Record, SumTag, Tagged, ToTree, TreeMode};

pub mod arith_expr {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Unary {
        pub op: String,
        pub a: Box<ArithExpr>,
    }

    impl Unary {
        pub fn new(op: impl Into<String>, a: impl Into<ArithExpr>) -> Self {
            Self {
                op: op.into(),
                a: Box::new(a.into()),
            }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Unary")
                .field("op", mode.of(&self.op))
                .field("a", mode.of(&self.a))
                .into()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Binary {
        pub op: String,
        pub left: Box<ArithExpr>,
        pub right: Box<ArithExpr>,
    }

    impl Binary {
        pub fn new(
            op: impl Into<String>,
            left: impl Into<ArithExpr>,
            right: impl Into<ArithExpr>,
        ) -> Self {
            Self {
                op: op.into(),
                left: Box::new(left.into()),
                right: Box::new(right.into()),
            }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Binary")
                .field("op", mode.of(&self.op))
                .field("left", mode.of(&self.left))
                .field("right", mode.of(&self.right))
                .into()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct FuncCall {
        pub name: String,
        pub args: Vec<ArithExpr>,
    }

    impl FuncCall {
        pub fn new(name: impl Into<String>, args: Vec<ArithExpr>) -> Self {
            Self {
                name: name.into(),
                args,
            }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("FuncCall")
                .field("name", mode.of(&self.name))
                .field("args", mode.of(&self.args))
                .into()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Slice {
        pub a: Box<ArithExpr>,
        pub begin: Option<Box<ArithExpr>>,
        pub end: Option<Box<ArithExpr>>,
    }

    impl Slice {
        pub fn new(
            a: impl Into<ArithExpr>,
            begin: Option<ArithExpr>,
            end: Option<ArithExpr>,
        ) -> Self {
            Self {
                a: Box::new(a.into()),
                begin: begin.map(Box::new),
                end: end.map(Box::new),
            }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Slice")
                .field("a", mode.of(&self.a))
                .optional_field("begin", mode.of_optional(&self.begin))
                .optional_field("end", mode.of_optional(&self.end))
                .into()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Const {
        pub i: i64,
    }

    impl Const {
        pub fn new(i: i64) -> Self {
            Self { i }
        }

        fn tree(&self, mode: TreeMode) -> Node {
            Record::new("Const").field("i", mode.of(&self.i)).into()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Var {
        pub name: String,
    }

    impl Var {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        /// Abbreviated as `Var(v1)`.
        fn tree(&self, mode: TreeMode) -> Node {
            let record = Record::new("Var");
            let record = match mode {
                TreeMode::Full => record.field("name", self.name.to_tree()),
                TreeMode::Abbreviated => record.unnamed(self.name.to_tree()),
            };
            record.into()
        }
    }

    impl_to_tree!(Unary, Binary, FuncCall, Slice, Const, Var);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArithExpr {
    Unary(arith_expr::Unary),
    Binary(arith_expr::Binary),
    FuncCall(arith_expr::FuncCall),
    Slice(arith_expr::Slice),
    Const(arith_expr::Const),
    Var(arith_expr::Var),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithExprTag {
    Unary = 1,
    Binary = 2,
    FuncCall = 3,
    Slice = 4,
    Const = 5,
    Var = 6,
}

impl SumTag for ArithExprTag {
    const SUM_NAME: &'static str = "arith_expr";
    const ALL: &'static [Self] = &[
        ArithExprTag::Unary,
        ArithExprTag::Binary,
        ArithExprTag::FuncCall,
        ArithExprTag::Slice,
        ArithExprTag::Const,
        ArithExprTag::Var,
    ];

    fn raw(self) -> u16 {
        self as u16
    }

    fn variant_name(self) -> &'static str {
        match self {
            ArithExprTag::Unary => "Unary",
            ArithExprTag::Binary => "Binary",
            ArithExprTag::FuncCall => "FuncCall",
            ArithExprTag::Slice => "Slice",
            ArithExprTag::Const => "Const",
            ArithExprTag::Var => "Var",
        }
    }
}

impl Tagged for ArithExpr {
    type Tag = ArithExprTag;

    fn tag(&self) -> ArithExprTag {
        match self {
            ArithExpr::Unary(_) => ArithExprTag::Unary,
            ArithExpr::Binary(_) => ArithExprTag::Binary,
            ArithExpr::FuncCall(_) => ArithExprTag::FuncCall,
            ArithExpr::Slice(_) => ArithExprTag::Slice,
            ArithExpr::Const(_) => ArithExprTag::Const,
            ArithExpr::Var(_) => ArithExprTag::Var,
        }
    }
}

impl ArithExpr {
    fn tree(&self, mode: TreeMode) -> Node {
        match self {
            ArithExpr::Unary(v) => mode.of(v),
            ArithExpr::Binary(v) => mode.of(v),
            ArithExpr::FuncCall(v) => mode.of(v),
            ArithExpr::Slice(v) => mode.of(v),
            ArithExpr::Const(v) => mode.of(v),
            ArithExpr::Var(v) => mode.of(v),
        }
    }
}

impl_to_tree!(ArithExpr);

macro_rules! arith_expr_from {
    ($($variant:ident),*) => {
        $(
            impl From<arith_expr::$variant> for ArithExpr {
                fn from(v: arith_expr::$variant) -> Self {
                    ArithExpr::$variant(v)
                }
            }
        )*
    };
}

arith_expr_from!(Unary, Binary, FuncCall, Slice, Const, Var);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pipeline {
    pub negated: bool,
}

impl Pipeline {
    pub fn new(negated: bool) -> Self {
        Self { negated }
    }

    fn tree(&self, mode: TreeMode) -> Node {
        Record::new("pipeline")
            .field("negated", mode.of(&self.negated))
            .into()
    }
}

impl_to_tree!(Pipeline);

#[cfg(test)]
mod tests {
    use super::arith_expr::*;
    use super::*;
    use asdl_runtime::Style;

    #[test]
    fn const_tree() {
        let c = Const::new(42);
        assert_eq!(c.i, 42);
        assert_eq!(
            c.to_tree(),
            Node::from(Record::new("Const").field("i", Node::leaf("42", Style::NumberConst)))
        );
    }

    #[test]
    fn tag_follows_variant() {
        let e: ArithExpr = Var::new("foo").into();
        assert_eq!(e.tag(), ArithExprTag::Var);
        assert_eq!(e.tag().qualified_name(), "arith_expr.Var");
        let e: ArithExpr = Unary::new("-", Var::new("foo")).into();
        assert_eq!(e.tag(), ArithExprTag::Unary);
    }

    #[test]
    fn slice_omits_absent_bounds() {
        let s = Slice::new(Var::new("a"), None, Some(Const::new(3).into()));
        assert_eq!(s.to_tree().to_string(), "Slice(a=Var(name=a), end=Const(i=3))");
    }

    #[test]
    fn var_abbreviation() {
        assert_eq!(Var::new("v1").abbreviated_tree().to_string(), "Var(v1)");
        let call: ArithExpr = FuncCall::new("f", vec![Var::new("x").into()]).into();
        assert_eq!(call.abbreviated_tree().to_string(), "FuncCall(name=f, args=[Var(x)])");
    }

    #[test]
    fn pipeline_tree() {
        assert_eq!(Pipeline::new(true).to_tree().to_string(), "pipeline(negated=true)");
    }
}
