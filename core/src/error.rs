use thiserror::Error;

/// Error produced by [`Option`](crate::Option) itself, as opposed to errors produced by caller-supplied functions or
/// by the boundary adapters, which are passed through unchanged.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionError {
  /// A value was [taken](crate::Option::take) from a `None`.
  #[error("none value taken")]
  NoneValueTaken,
}
