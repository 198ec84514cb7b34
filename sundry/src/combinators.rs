use sundry_value::{Collection, Key, Value};

use crate::traverse::{each, fold};

/// Return the results of applying `iterator` to each element, in
/// traversal order.
pub fn map<'a, F>(collection: Collection<'a>, mut iterator: F) -> Vec<Value>
where
    F: FnMut(&'a Value, Key<'a>, Collection<'a>) -> Value,
{
    let mut result = Vec::with_capacity(collection.len());
    each(collection, |value, key, collection| {
        result.push(iterator(value, key, collection));
    });
    result
}

/// Return all elements that pass `test`.
pub fn filter<'a, F>(collection: Collection<'a>, mut test: F) -> Vec<Value>
where
    F: FnMut(&'a Value, Key<'a>, Collection<'a>) -> bool,
{
    let mut result = Vec::new();
    each(collection, |value, key, collection| {
        if test(value, key, collection) {
            result.push(value.clone());
        }
    });
    result
}

/// Return all elements that don't pass `test`.
pub fn reject<'a, F>(collection: Collection<'a>, mut test: F) -> Vec<Value>
where
    F: FnMut(&'a Value, Key<'a>, Collection<'a>) -> bool,
{
    filter(collection, |value, key, collection| {
        !test(value, key, collection)
    })
}

/// The index of the first element strictly equal to `target`.
pub fn index_of(items: &[Value], target: &Value) -> Option<usize> {
    let mut result = None;
    each(items.into(), |item, key, _| {
        if result.is_none() && item.strict_equal(target) {
            result = key.index();
        }
    });
    result
}

/// A duplicate-free version of the sequence, keeping first occurrences in
/// their original order.
///
/// Values that are not strictly equal to themselves (`NaN`) have no first
/// occurrence and are dropped.
pub fn uniq(items: &[Value]) -> Vec<Value> {
    filter(items.into(), |item, key, _| index_of(items, item) == key.index())
}

/// Determine whether the collection holds a value strictly equal to
/// `target`.
pub fn contains(collection: Collection<'_>, target: &Value) -> bool {
    fold(collection, false, |was_found, item| {
        was_found || item.strict_equal(target)
    })
}

/// Determine whether all of the elements pass `iterator`. Without an
/// iterator, elements are tested by their effective boolean value.
///
/// Once an element fails, `iterator` is not called again.
pub fn every(
    collection: Collection<'_>,
    iterator: Option<&mut dyn FnMut(&Value) -> bool>,
) -> bool {
    match iterator {
        Some(iterator) => fold(collection, true, |all_true, item| all_true && iterator(item)),
        None => fold(collection, true, |all_true, item| {
            all_true && item.effective_boolean_value()
        }),
    }
}

/// Determine whether any of the elements pass `iterator`. Without an
/// iterator, elements are tested by their effective boolean value.
///
/// Once an element passes, `iterator` is not called again.
pub fn some(
    collection: Collection<'_>,
    iterator: Option<&mut dyn FnMut(&Value) -> bool>,
) -> bool {
    match iterator {
        Some(iterator) => fold(collection, false, |one_true, item| one_true || iterator(item)),
        None => fold(collection, false, |one_true, item| {
            one_true || item.effective_boolean_value()
        }),
    }
}

/// Takes a collection of mappings and returns the value each holds under
/// `name`.
pub fn pluck(collection: Collection<'_>, name: &str) -> Vec<Value> {
    map(collection, |item, _, _| item.get(name))
}

/// The values of the collection, in traversal order.
pub fn to_array(collection: Collection<'_>) -> Vec<Value> {
    map(collection, |value, _, _| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use sundry_value::Mapping;

    use crate::fixtures::{is_even, numbers};

    #[test]
    fn test_map() {
        let items = numbers(&[1, 2, 3]);
        let doubled = map((&items).into(), |item, _, _| match item {
            Value::Number(n) => Value::from(n * 2.0),
            _ => Value::Undefined,
        });
        assert_eq!(doubled, numbers(&[2, 4, 6]));
    }

    #[test]
    fn test_map_mapping_uses_keys() {
        let mapping: Mapping = [("a", Value::from(1)), ("b", Value::from(2))]
            .into_iter()
            .collect();
        let keys = map((&mapping).into(), |_, key, _| Value::from(key));
        assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_filter_and_reject() {
        let items = numbers(&[1, 2, 3, 4]);
        assert_eq!(
            filter((&items).into(), |item, _, _| is_even(item)),
            numbers(&[2, 4])
        );
        assert_eq!(
            reject((&items).into(), |item, _, _| is_even(item)),
            numbers(&[1, 3])
        );
    }

    #[test]
    fn test_filter_mapping_collects_values() {
        let mapping: Mapping = [
            ("a", Value::from(1)),
            ("b", Value::from(2)),
            ("c", Value::from(4)),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            filter((&mapping).into(), |item, _, _| is_even(item)),
            numbers(&[2, 4])
        );
    }

    #[rstest]
    #[case(&[1, 2, 3], 2, Some(1))]
    #[case(&[1, 2, 2], 2, Some(1))]
    #[case(&[1, 2, 3], 4, None)]
    #[case(&[], 1, None)]
    fn test_index_of(#[case] items: &[i32], #[case] target: i32, #[case] expected: Option<usize>) {
        assert_eq!(index_of(&numbers(items), &Value::from(target)), expected);
    }

    #[test]
    fn test_index_of_is_strict() {
        let items = vec![Value::from("1"), Value::from(1)];
        assert_eq!(index_of(&items, &Value::from(1)), Some(1));
    }

    #[rstest]
    #[case(&[1, 2, 1, 3, 2], &[1, 2, 3])]
    #[case(&[4, 4, 4], &[4])]
    #[case(&[], &[])]
    fn test_uniq(#[case] items: &[i32], #[case] expected: &[i32]) {
        assert_eq!(uniq(&numbers(items)), numbers(expected));
    }

    #[test]
    fn test_uniq_drops_nan() {
        let items = vec![Value::from(f64::NAN), Value::from(1)];
        assert_eq!(uniq(&items), numbers(&[1]));
    }

    #[test]
    fn test_contains() {
        let items = numbers(&[1, 2, 3]);
        assert!(contains((&items).into(), &Value::from(2)));
        assert!(!contains((&items).into(), &Value::from("2")));
        assert!(!contains(Collection::Sequence(&[]), &Value::Undefined));
    }

    #[test]
    fn test_contains_mapping_values() {
        let mapping: Mapping = [("a", Value::from("x"))].into_iter().collect();
        assert!(contains((&mapping).into(), &Value::from("x")));
        assert!(!contains((&mapping).into(), &Value::from("a")));
    }

    #[test]
    fn test_contains_collection_by_identity() {
        let inner = Value::from(numbers(&[1]));
        let items = vec![inner.clone()];
        assert!(contains((&items).into(), &inner));
        assert!(!contains((&items).into(), &Value::from(numbers(&[1]))));
    }

    #[test]
    fn test_every() {
        let items = numbers(&[2, 4, 6]);
        assert!(every((&items).into(), Some(&mut |item: &Value| is_even(item))));
        let items = numbers(&[2, 3, 6]);
        assert!(!every((&items).into(), Some(&mut |item: &Value| is_even(item))));
    }

    #[test]
    fn test_every_stops_calling_after_failure() {
        let items = numbers(&[1, 2, 3, 4]);
        let mut calls = 0;
        let result = every(
            (&items).into(),
            Some(&mut |_: &Value| {
                calls += 1;
                false
            }),
        );
        assert!(!result);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_every_default_iterator() {
        let items = vec![Value::from(1), Value::from("a"), Value::from(true)];
        assert!(every((&items).into(), None));
        let items = vec![Value::from(1), Value::from(0)];
        assert!(!every((&items).into(), None));
    }

    #[test]
    fn test_some() {
        let items = numbers(&[1, 3, 4]);
        assert!(some((&items).into(), Some(&mut |item: &Value| is_even(item))));
        let items = numbers(&[1, 3, 5]);
        assert!(!some((&items).into(), Some(&mut |item: &Value| is_even(item))));
    }

    #[test]
    fn test_some_stops_calling_after_success() {
        let items = numbers(&[2, 4, 6]);
        let mut calls = 0;
        let result = some(
            (&items).into(),
            Some(&mut |item: &Value| {
                calls += 1;
                is_even(item)
            }),
        );
        assert!(result);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_some_default_iterator() {
        let items = vec![Value::Null, Value::from(""), Value::from(0)];
        assert!(!some((&items).into(), None));
        let items = vec![Value::Null, Value::from("yes")];
        assert!(some((&items).into(), None));
    }

    #[test]
    fn test_every_and_some_empty() {
        assert!(every(Collection::Sequence(&[]), Some(&mut |_: &Value| false)));
        assert!(!some(Collection::Sequence(&[]), Some(&mut |_: &Value| true)));
    }

    #[test]
    fn test_pluck() {
        let people: Vec<Value> = [("ada", 36), ("alan", 41)]
            .into_iter()
            .map(|(name, age)| {
                let person: Mapping = [("name", Value::from(name)), ("age", Value::from(age))]
                    .into_iter()
                    .collect();
                Value::from(person)
            })
            .collect();
        assert_eq!(pluck((&people).into(), "age"), numbers(&[36, 41]));
        assert_eq!(
            pluck((&people).into(), "height"),
            vec![Value::Undefined, Value::Undefined]
        );
    }

    #[test]
    fn test_to_array() {
        let mapping: Mapping = [("b", Value::from(2)), ("a", Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(to_array((&mapping).into()), numbers(&[2, 1]));
    }
}
