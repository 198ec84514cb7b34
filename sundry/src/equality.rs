use sundry_value::{Collection, Value};

use crate::combinators::{contains, every};

/// The number of elements in the collection: the length of a sequence, or
/// the number of keys of a mapping.
pub fn len(collection: Collection<'_>) -> usize {
    collection.len()
}

/// Compare the contents of two collections, regardless of order or
/// position.
///
/// The collections are equal when they have the same length and every
/// element of `a` can be found somewhere in `b`. Multiplicities are not
/// compared, so `[1, 1, 2]` and `[1, 2, 2]` are equal by contents.
pub fn equal_contents(a: Collection<'_>, b: Collection<'_>) -> bool {
    if len(a) != len(b) {
        return false;
    }
    every(a, Some(&mut |item: &Value| contains(b, item)))
}
