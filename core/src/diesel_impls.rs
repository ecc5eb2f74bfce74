use std::option::Option as StdOption;

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, Queryable};
use diesel::expression::AsExpression;
use diesel::internal::derives::as_expression::Bound;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{is_nullable, Nullable, SingleValue, SqlType};

use crate::option::Option::{self, None, Some};

/// Reads a nullable column: SQL `NULL` becomes `None`, any other value is converted by `T`'s own [`FromSql`] into
/// `Some`.
impl<T, ST, DB> FromSql<Nullable<ST>, DB> for Option<T> where
  T: FromSql<ST, DB>,
  ST: SqlType<IsNull=is_nullable::NotNull>,
  DB: Backend,
{
  #[inline]
  fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
    T::from_sql(bytes).map(Some)
  }

  fn from_nullable_sql(bytes: StdOption<DB::RawValue<'_>>) -> deserialize::Result<Self> {
    match bytes {
      StdOption::Some(bytes) => T::from_sql(bytes).map(Some),
      StdOption::None => {
        #[cfg(feature = "tracing")]
        tracing::trace!("scanned SQL NULL into None");
        Ok(None)
      }
    }
  }
}

/// Binds `None` as SQL `NULL` and `Some(value)` through `T`'s own [`ToSql`].
impl<T, ST, DB> ToSql<Nullable<ST>, DB> for Option<T> where
  T: ToSql<ST, DB>,
  ST: SqlType<IsNull=is_nullable::NotNull>,
  DB: Backend,
{
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
    match self {
      Some(value) => value.to_sql(out),
      None => {
        #[cfg(feature = "tracing")]
        tracing::trace!("bound None as SQL NULL");
        Ok(IsNull::Yes)
      }
    }
  }
}

/// Loads a single nullable column directly into an `Option`.
impl<T, ST, DB> Queryable<ST, DB> for Option<T> where
  ST: SingleValue,
  DB: Backend,
  Self: FromSql<ST, DB>,
{
  type Row = Self;

  #[inline]
  fn build(row: Self::Row) -> deserialize::Result<Self> {
    Ok(row)
  }
}

/// Uses an `Option` as a nullable expression, so it can be compared against a column or inserted into one.
impl<T, ST> AsExpression<Nullable<ST>> for Option<T> where
  ST: SqlType<IsNull=is_nullable::NotNull> + SingleValue,
{
  type Expression = Bound<Nullable<ST>, Self>;

  #[inline]
  fn as_expression(self) -> Self::Expression {
    Bound::new(self)
  }
}

impl<'a, T, ST> AsExpression<Nullable<ST>> for &'a Option<T> where
  ST: SqlType<IsNull=is_nullable::NotNull> + SingleValue,
{
  type Expression = Bound<Nullable<ST>, Self>;

  #[inline]
  fn as_expression(self) -> Self::Expression {
    Bound::new(self)
  }
}
