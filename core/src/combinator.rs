//! Transformations of one or two [`Option`]s into another `Option` or a bare value.
//!
//! Every function inspects its inputs first and only calls the supplied function when all of its operands are
//! present. Supplied functions are called at most once.

use crate::option::Option::{self, None, Some};

/// An ordered pair of values, produced by [`zip`] and consumed by [`unzip`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Pair<T, U> {
  pub value1: T,
  pub value2: U,
}

impl<T, U> Pair<T, U> {
  #[inline]
  pub const fn new(value1: T, value2: U) -> Self { Self { value1, value2 } }

  #[inline]
  pub fn into_tuple(self) -> (T, U) { (self.value1, self.value2) }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
  #[inline]
  fn from((value1, value2): (T, U)) -> Self { Self::new(value1, value2) }
}
impl<T, U> From<Pair<T, U>> for (T, U) {
  #[inline]
  fn from(pair: Pair<T, U>) -> Self { pair.into_tuple() }
}


// Map

/// Maps the payload of `option` with `mapper`. `None` stays `None`.
#[inline]
pub fn map<T, U>(option: Option<T>, mapper: impl FnOnce(T) -> U) -> Option<U> {
  match option {
    Some(value) => Some(mapper(value)),
    None => None,
  }
}

/// Maps the payload of `option` with `mapper`, or returns `fallback` when `None`.
#[inline]
pub fn map_or<T, U>(option: Option<T>, fallback: U, mapper: impl FnOnce(T) -> U) -> U {
  match option {
    Some(value) => mapper(value),
    None => fallback,
  }
}

/// Maps the payload of `option` with the fallible `mapper`.
///
/// Returns `Ok(None)` when `option` is `None`, so that an absent value can be told apart from a failing mapper.
#[inline]
pub fn map_with_error<T, U, E>(option: Option<T>, mapper: impl FnOnce(T) -> Result<U, E>) -> Result<Option<U>, E> {
  match option {
    Some(value) => mapper(value).map(Some),
    None => Ok(None),
  }
}

#[inline]
pub fn map_or_with_error<T, U, E>(
  option: Option<T>,
  fallback: U,
  mapper: impl FnOnce(T) -> Result<U, E>,
) -> Result<U, E> {
  match option {
    Some(value) => mapper(value),
    None => Ok(fallback),
  }
}


// Flat map

/// Maps the payload of `option` with `mapper` that itself returns an `Option`, flattening the result.
#[inline]
pub fn flat_map<T, U>(option: Option<T>, mapper: impl FnOnce(T) -> Option<U>) -> Option<U> {
  match option {
    Some(value) => mapper(value),
    None => None,
  }
}

#[inline]
pub fn flat_map_or<T, U>(option: Option<T>, fallback: U, mapper: impl FnOnce(T) -> Option<U>) -> U {
  match option {
    Some(value) => mapper(value).take_or(fallback),
    None => fallback,
  }
}

#[inline]
pub fn flat_map_with_error<T, U, E>(
  option: Option<T>,
  mapper: impl FnOnce(T) -> Result<Option<U>, E>,
) -> Result<Option<U>, E> {
  match option {
    Some(value) => mapper(value),
    None => Ok(None),
  }
}

/// Maps the payload of `option` with the fallible `mapper` that returns an `Option`, returning `fallback` when
/// either `option` or the mapped `Option` is `None`.
#[inline]
pub fn flat_map_or_with_error<T, U, E>(
  option: Option<T>,
  fallback: U,
  mapper: impl FnOnce(T) -> Result<Option<U>, E>,
) -> Result<U, E> {
  match option {
    Some(value) => Ok(mapper(value)?.take_or(fallback)),
    None => Ok(fallback),
  }
}


// Zip

/// Zips the payloads of `option1` and `option2` into a [`Pair`]. Returns `None` if either is `None`.
#[inline]
pub fn zip<T, U>(option1: Option<T>, option2: Option<U>) -> Option<Pair<T, U>> {
  zip_with(option1, option2, Pair::new)
}

/// Combines the payloads of `option1` and `option2` with `zipper`. Returns `None` if either is `None`, in which case
/// `zipper` is not called.
#[inline]
pub fn zip_with<T, U, V>(option1: Option<T>, option2: Option<U>, zipper: impl FnOnce(T, U) -> V) -> Option<V> {
  match (option1, option2) {
    (Some(value1), Some(value2)) => Some(zipper(value1, value2)),
    _ => None,
  }
}

#[inline]
pub fn unzip<T, U>(option: Option<Pair<T, U>>) -> (Option<T>, Option<U>) {
  unzip_with(option, Pair::into_tuple)
}

/// Splits the payload of `option` into two `Option`s with `unzipper`. Returns two `None`s when `None`.
#[inline]
pub fn unzip_with<T, U, V>(option: Option<V>, unzipper: impl FnOnce(V) -> (T, U)) -> (Option<T>, Option<U>) {
  match option {
    Some(value) => {
      let (value1, value2) = unzipper(value);
      (Some(value1), Some(value2))
    }
    None => (None, None),
  }
}
