use std::fmt::{self, Display, Formatter};
use std::option::Option as StdOption;

use crate::error::OptionError;

use self::Option::{None, Some};

/// A value that is either present ([`Some`](Option::Some)) or absent ([`None`](Option::None)).
///
/// Presence is a property of the container, not of the payload: `Some(std::ptr::null::<u8>())` and
/// `Some(StdOption::<u8>::None)` are both present.
///
/// Transformations consume the receiver and produce a new `Option`. The free functions in
/// [`combinator`](crate::combinator) cover transformations into other payload types.
#[must_use]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Option<T> {
  None,
  Some(T),
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { None }
}


// Construction

impl<T> Option<T> {
  /// Creates a present `Option` holding `value`.
  #[inline]
  pub const fn some(value: T) -> Self { Some(value) }
  /// Creates an absent `Option`.
  #[inline]
  pub const fn none() -> Self { None }

  /// Creates an `Option` from a nullable value: `StdOption::None` becomes `None`, anything else becomes `Some`.
  #[inline]
  pub fn from_nullable(value: StdOption<T>) -> Self {
    match value {
      StdOption::Some(value) => Some(value),
      StdOption::None => None,
    }
  }

  /// Creates an `Option` from a nullable reference, cloning the referenced value into the payload.
  #[inline]
  pub fn from_nullable_ref(value: StdOption<&T>) -> Self where T: Clone {
    Self::from_nullable(value.cloned())
  }

  /// Converts into a std option: `None` becomes `StdOption::None`, `Some(value)` becomes `StdOption::Some(value)`.
  #[inline]
  pub fn into_nullable(self) -> StdOption<T> {
    match self {
      Some(value) => StdOption::Some(value),
      None => StdOption::None,
    }
  }
}

impl<T> From<StdOption<T>> for Option<T> {
  #[inline]
  fn from(value: StdOption<T>) -> Self { Self::from_nullable(value) }
}
impl<T> From<Option<T>> for StdOption<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { option.into_nullable() }
}


// Inspection and extraction

impl<T> Option<T> {
  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, None) }
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Some(_)) }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Some(value) => Some(value),
      None => None,
    }
  }

  /// Returns the payload, or `T::default()` when `None`.
  #[inline]
  pub fn unwrap(self) -> T where T: Default {
    match self {
      Some(value) => value,
      None => T::default(),
    }
  }

  /// Returns a reference to the payload, or a null-equivalent `StdOption::None` when `None`.
  #[inline]
  pub const fn unwrap_as_ref(&self) -> StdOption<&T> {
    match self {
      Some(value) => StdOption::Some(value),
      None => StdOption::None,
    }
  }

  /// Takes the payload, failing with [`OptionError::NoneValueTaken`] when `None`.
  #[inline]
  pub fn take(self) -> Result<T, OptionError> {
    match self {
      Some(value) => Ok(value),
      None => Err(OptionError::NoneValueTaken),
    }
  }

  #[inline]
  pub fn take_or(self, fallback: T) -> T {
    match self {
      Some(value) => value,
      None => fallback,
    }
  }

  /// Returns the payload, or the result of `fallback` when `None`. `fallback` is not called when `Some`.
  #[inline]
  pub fn take_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Some(value) => value,
      None => fallback(),
    }
  }
}


// Filtering and fallbacks

impl<T> Option<T> {
  /// Keeps `self` when it is `Some` and its payload satisfies `predicate`, returning `None` otherwise.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Some(value) => if predicate(&value) { Some(value) } else { None },
      None => None,
    }
  }

  #[inline]
  pub fn or(self, fallback: Self) -> Self {
    match self {
      Some(_) => self,
      None => fallback,
    }
  }

  #[inline]
  pub fn or_else(self, fallback: impl FnOnce() -> Self) -> Self {
    match self {
      Some(_) => self,
      None => fallback(),
    }
  }
}


// Side effects

impl<T> Option<T> {
  #[inline]
  pub fn if_some(self, action: impl FnOnce(T)) {
    if let Some(value) = self {
      action(value);
    }
  }

  /// Calls `action` with the payload when `Some`, returning its result. Returns `Ok(())` when `None`.
  #[inline]
  pub fn if_some_with_error<E>(self, action: impl FnOnce(T) -> Result<(), E>) -> Result<(), E> {
    match self {
      Some(value) => action(value),
      None => Ok(()),
    }
  }

  #[inline]
  pub fn if_none(self, action: impl FnOnce()) {
    if self.is_none() {
      action();
    }
  }

  /// Calls `action` when `None`, returning its result. Returns `Ok(())` when `Some`.
  #[inline]
  pub fn if_none_with_error<E>(self, action: impl FnOnce() -> Result<(), E>) -> Result<(), E> {
    match self {
      Some(_) => Ok(()),
      None => action(),
    }
  }
}


/// Formats as `Some[<value>]` using the payload's own `Display`, or `None[]`.
impl<T: Display> Display for Option<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Some(value) => write!(f, "Some[{}]", value),
      None => f.write_str("None[]"),
    }
  }
}
