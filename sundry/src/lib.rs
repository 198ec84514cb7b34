//! Functional helpers over sequences and mappings.
//!
//! Everything is built on one traversal primitive, [`each`], which visits
//! the elements of a [`Collection`] together with their keys. The
//! combinators ([`map`], [`filter`], [`contains`], [`every`] and the rest)
//! and [`reduce`] are layered on top of it. The decorators [`once`] and
//! [`memoize`] wrap functions over argument slices.
//!
//! ```
//! use sundry::{filter, reduce, Value};
//!
//! let items: Vec<Value> = [1, 2, 3, 4].into_iter().map(Value::from).collect();
//! let even = filter((&items).into(), |item, _, _| {
//!     matches!(item, Value::Number(n) if n % 2.0 == 0.0)
//! });
//! let total = reduce(
//!     (&even).into(),
//!     |total, item| match (total, item) {
//!         (Value::Number(a), Value::Number(b)) => Value::from(a + b),
//!         _ => Value::Undefined,
//!     },
//!     None,
//! );
//! assert_eq!(total, Ok(Value::from(6)));
//! ```
mod array;
mod combinators;
mod equality;
#[cfg(test)]
mod fixtures;
mod memo;
mod object;
mod traverse;

pub use sundry_value::{error, Collection, Entries, Key, MapKey, Mapping, Sequence, Value};

pub use array::{difference, first, first_n, flatten, intersection, last, last_n, zip};
pub use combinators::{contains, every, filter, index_of, map, pluck, reject, some, to_array, uniq};
pub use equality::{equal_contents, len};
pub use memo::{memoize, once, Memoize, Once};
pub use object::{defaults, extend};
pub use traverse::{each, fold, identity, reduce};
