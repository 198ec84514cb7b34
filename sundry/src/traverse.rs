use sundry_value::{error, Collection, Key, Value};

/// Returns whatever value is passed in.
///
/// This is the pass-through iterator, used wherever an iterator is not
/// given.
pub fn identity(value: &Value) -> Value {
    value.clone()
}

/// Call `visitor(value, key, collection)` for each element of the
/// collection, exactly once.
///
/// A sequence is visited in ascending index order, a mapping in key
/// enumeration order.
pub fn each<'a, F>(collection: Collection<'a>, mut visitor: F)
where
    F: FnMut(&'a Value, Key<'a>, Collection<'a>),
{
    for (key, value) in collection.iter() {
        visitor(value, key, collection);
    }
}

/// Fold the collection into an accumulator of any type, starting from
/// `initial` and replacing the accumulator with `iterator(accumulator,
/// value)` for every element in traversal order.
pub fn fold<'a, A, F>(collection: Collection<'a>, initial: A, iterator: F) -> A
where
    F: FnMut(A, &'a Value) -> A,
{
    collection.values().fold(initial, iterator)
}

/// Reduce the collection to a single value.
///
/// With an `initial` value this is [`fold`]. Without one, the first
/// element in traversal order seeds the accumulator and is never passed to
/// `iterator`; a single element collection therefore reduces to that
/// element without calling `iterator` at all.
///
/// Reducing an empty collection without an initial value is an
/// [`error::Error::EmptyReduce`].
pub fn reduce<'a, F>(
    collection: Collection<'a>,
    iterator: F,
    initial: Option<Value>,
) -> error::Result<Value>
where
    F: FnMut(Value, &'a Value) -> Value,
{
    let mut values = collection.values();
    let accumulator = match initial {
        Some(initial) => initial,
        // the seed is consumed here, the rest of the traversal continues
        // from the same iterator
        None => values.next().cloned().ok_or(error::Error::EmptyReduce)?,
    };
    Ok(values.fold(accumulator, iterator))
}
