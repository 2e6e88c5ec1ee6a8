//! Tags of closed sum types.
//!
//! Every sum type in a schema gets a fieldless tag enum implementing
//! [`SumTag`]. Dispatch on a value's variant is an exhaustive `match` on the
//! value itself or on its tag; raw integer tags only appear at boundaries
//! where a tag arrives from outside the type system, and an unknown one there
//! is a program defect.

use crate::error::Error;

/// The tag enum of one schema sum type.
pub trait SumTag: Copy + Eq + Sized + 'static {
    /// Schema name of the sum type, e.g. `"arith_expr"`.
    const SUM_NAME: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The stable numeric tag.
    fn raw(self) -> u16;

    /// Schema name of the variant, e.g. `"Const"`.
    fn variant_name(self) -> &'static str;

    /// `sum.Variant`, e.g. `"arith_expr.Const"`.
    fn qualified_name(self) -> String {
        format!("{}.{}", Self::SUM_NAME, self.variant_name())
    }

    fn try_from_raw(raw: u16) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.raw() == raw)
            .ok_or(Error::UnknownTag {
                sum: Self::SUM_NAME,
                tag: raw,
            })
    }

    /// Converts a raw tag, panicking if it names no variant.
    ///
    /// The variant set is closed when the schema is compiled, so an unknown
    /// tag here means the caller is out of sync with the schema.
    fn from_raw(raw: u16) -> Self {
        match Self::try_from_raw(raw) {
            Ok(tag) => tag,
            Err(err) => panic!("{err}"),
        }
    }
}

/// A value of a sum type that can report which variant it is.
pub trait Tagged {
    type Tag: SumTag;

    fn tag(&self) -> Self::Tag;
}
