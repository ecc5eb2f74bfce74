use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{Error, Visitor};

use crate::option::Option::{self, None, Some};

/// Serializes `Some(value)` as `value` itself and `None` as the format's null.
impl<T: Serialize> Serialize for Option<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Some(value) => serializer.serialize_some(value),
      None => serializer.serialize_none(),
    }
  }
}

/// Deserializes null as `None` and anything else as `Some` through `T`'s own deserialization.
///
/// A struct field of this type that is missing from the input deserializes to `None`.
///
/// Unlike std's `Option`, a field of this type cannot be combined with `#[serde(flatten)]`: serde only exposes the
/// hook for flattened optional fields to its own `Option`. Such a field fails with "can only flatten structs and maps".
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_option(OptionVisitor(PhantomData))
  }
}

struct OptionVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OptionVisitor<T> {
  type Value = Option<T>;

  fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("null or a value")
  }

  #[inline]
  fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
    #[cfg(feature = "tracing")]
    tracing::trace!("deserialized null into None");
    Ok(None)
  }

  #[inline]
  fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
    self.visit_none()
  }

  #[inline]
  fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
    T::deserialize(deserializer).map(Some)
  }
}
