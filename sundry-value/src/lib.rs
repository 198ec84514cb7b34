//! The value model of Sundry.
//!
//! A [`Value`] is either atomic or a collection. The two collection shapes,
//! [`Sequence`] and [`Mapping`], are traversed through the borrowed
//! [`Collection`] view, which yields each element together with its
//! [`Key`].
mod collection;
pub mod error;
mod map_key;
mod mapping;
mod sequence;
#[cfg(feature = "serde")]
mod serialize;
mod value;

pub use collection::{Collection, Iter, Key};
pub use map_key::MapKey;
pub use mapping::{Entries, Mapping};
pub use sequence::Sequence;
pub use value::Value;
