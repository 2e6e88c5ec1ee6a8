//! Typed values for the `typed_arith` and `typed_demo` schemas.
//!
//! These modules have the shape the schema compiler emits: one `enum` per
//! compound sum with one struct per variant, a tag enum implementing
//! [`SumTag`](asdl_runtime::SumTag), and a [`ToTree`](asdl_runtime::ToTree)
//! impl per type.
//!
//! # Example
//!
//! ```
//! use asdl_demo::typed_arith::{arith_expr, ArithExpr};
//! use asdl_runtime::ToTree;
//!
//! let f: ArithExpr = arith_expr::FuncCall::new(
//!     "f",
//!     vec![arith_expr::Var::new("v1").into(), arith_expr::Var::new("v2").into()],
//! )
//! .into();
//!
//! assert_eq!(
//!     f.to_tree().to_string(),
//!     "FuncCall(name=f, args=[Var(name=v1), Var(name=v2)])"
//! );
//! ```

/// Implements `ToTree` by forwarding to an inherent `tree(TreeMode)`.
macro_rules! impl_to_tree {
    ($($ty:ty),* $(,)?) => {
        $(
            impl asdl_runtime::ToTree for $ty {
                fn to_tree(&self) -> asdl_runtime::Node {
                    self.tree(asdl_runtime::TreeMode::Full)
                }

                fn abbreviated_tree(&self) -> asdl_runtime::Node {
                    self.tree(asdl_runtime::TreeMode::Abbreviated)
                }
            }
        )*
    };
}

pub mod typed_arith;
pub mod typed_demo;
