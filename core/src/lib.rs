//! A two-state [`Option`] container, either holding a value (`Some`) or not (`None`), with free-function
//! [combinators](combinator) and opt-in boundary adapters for `serde` and `diesel`.

pub mod option;
pub mod combinator;
pub mod error;

#[cfg(feature = "serde")]
mod serde_impls;
#[cfg(feature = "diesel")]
mod diesel_impls;

pub use option::Option;
pub use combinator::{
  flat_map, flat_map_or, flat_map_or_with_error, flat_map_with_error, map, map_or, map_or_with_error, map_with_error,
  unzip, unzip_with, zip, zip_with, Pair,
};
pub use error::OptionError;
