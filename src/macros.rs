/// Declare a record struct that binds to and reads from table columns.
///
/// Each field is mapped to a physical column name. The struct gets
/// [`ToRow`](crate::ToRow), so it can be passed to
/// [`Table::insert`](crate::Table::insert), and [`FromRow`](crate::FromRow),
/// so it can be selected into. Field types must be `Clone`, convertible into
/// a [`CqlValue`](crate::CqlValue) and readable through
/// [`FromCqlValue`](crate::FromCqlValue).
///
/// ```
/// cqlgen::cql_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Event {
///         pub month_bucket: i16 => "month_bucket",
///         pub timestamp: i64 => "timestamp",
///         pub data: String => "data",
///     }
/// }
///
/// use cqlgen::{CqlValue, ToRow};
///
/// let event = Event { month_bucket: 9, timestamp: 0, data: "x".into() };
/// assert_eq!(event.column_value("month_bucket"), Some(CqlValue::SmallInt(9)));
/// assert_eq!(event.column_value("other"), None);
/// ```
#[macro_export]
macro_rules! cql_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $column:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::ToRow for $name {
            fn column_value(&self, column: &str) -> ::core::option::Option<$crate::CqlValue> {
                match column {
                    $(
                        $column => ::core::option::Option::Some(
                            $crate::CqlValue::from(::core::clone::Clone::clone(&self.$field)),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::FromRow for $name {
            fn from_row(row: &$crate::Row) -> $crate::Result<Self> {
                ::core::result::Result::Ok(Self {
                    $(
                        $field: row.get::<$ty>($column)?,
                    )*
                })
            }
        }
    };
}
