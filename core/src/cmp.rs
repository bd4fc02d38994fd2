//! Column comparators for `WHERE` clauses.
//!
//! A [`Comparator`] pairs a column with a value and a comparison operator
//! fixed at construction. There is no way to change the operator of an
//! existing comparator; build a new one instead.
//!
//! ```
//! use cqlgen_core::cmp::{eq, gte, in_list};
//!
//! let bucket = eq("month_bucket", 9);
//! assert_eq!(bucket.to_cql(), "month_bucket=?");
//!
//! let since = gte("timestamp", 1_525_132_800_000_i64);
//! assert_eq!(since.to_cql(), "timestamp>=?");
//!
//! let ids = in_list("user_id", [1, 2, 3]);
//! assert_eq!(ids.to_cql(), "user_id IN ?");
//! ```

use std::fmt;

use crate::value::CqlValue;

/// Comparison operator of a [`Comparator`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Gt,
    GtOrEq,
    Lt,
    LtOrEq,
    In,
}

impl CmpOp {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::GtOrEq => ">=",
            Self::Lt => "<",
            Self::LtOrEq => "<=",
            Self::In => " IN ",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed predicate on one column.
///
/// Carries no knowledge of the table; the column name is used verbatim
/// when the statement is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparator {
    column: String,
    op: CmpOp,
    value: CqlValue,
}

impl Comparator {
    fn new(column: impl Into<String>, op: CmpOp, value: CqlValue) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }

    #[inline]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[inline]
    pub const fn op(&self) -> CmpOp {
        self.op
    }

    #[inline]
    pub const fn value(&self) -> &CqlValue {
        &self.value
    }

    pub fn into_value(self) -> CqlValue {
        self.value
    }

    /// Statement fragment with a single placeholder, e.g. `ts>=?`
    pub fn to_cql(&self) -> String {
        format!("{}{}?", self.column, self.op)
    }
}

/// Equality comparison (`=`).
pub fn eq(column: impl Into<String>, value: impl Into<CqlValue>) -> Comparator {
    Comparator::new(column, CmpOp::Eq, value.into())
}

/// Greater-than comparison (`>`).
pub fn gt(column: impl Into<String>, value: impl Into<CqlValue>) -> Comparator {
    Comparator::new(column, CmpOp::Gt, value.into())
}

/// Greater-than-or-equal comparison (`>=`).
pub fn gte(column: impl Into<String>, value: impl Into<CqlValue>) -> Comparator {
    Comparator::new(column, CmpOp::GtOrEq, value.into())
}

/// Less-than comparison (`<`).
pub fn lt(column: impl Into<String>, value: impl Into<CqlValue>) -> Comparator {
    Comparator::new(column, CmpOp::Lt, value.into())
}

/// Less-than-or-equal comparison (`<=`).
pub fn lte(column: impl Into<String>, value: impl Into<CqlValue>) -> Comparator {
    Comparator::new(column, CmpOp::LtOrEq, value.into())
}

/// Set membership (`IN`).
///
/// Takes a sequence of values; the whole list is bound to one placeholder.
pub fn in_list<I>(column: impl Into<String>, values: I) -> Comparator
where
    I: IntoIterator,
    I::Item: Into<CqlValue>,
{
    let values = values.into_iter().map(Into::into).collect();
    Comparator::new(column, CmpOp::In, CqlValue::List(values))
}
