use sundry_value::{error, Collection, Value};

use crate::combinators::{contains, filter, reject};
use crate::traverse::{each, fold};

/// The first element, or `undefined` for an empty sequence.
pub fn first(items: &[Value]) -> Value {
    items.first().cloned().unwrap_or_default()
}

/// The first `n` elements, or all of them when there are fewer.
pub fn first_n(items: &[Value], n: usize) -> Vec<Value> {
    items[..n.min(items.len())].to_vec()
}

/// The last element, or `undefined` for an empty sequence.
pub fn last(items: &[Value]) -> Value {
    items.last().cloned().unwrap_or_default()
}

/// The last `n` elements, or all of them when there are fewer.
pub fn last_n(items: &[Value], n: usize) -> Vec<Value> {
    items[items.len().saturating_sub(n)..].to_vec()
}

/// Flatten nested sequences, at any depth, into a single sequence.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut result = Vec::new();
    flatten_into(items, &mut result);
    result
}

fn flatten_into(items: &[Value], result: &mut Vec<Value>) {
    each(items.into(), |item, _, _| match item {
        Value::Sequence(nested) => flatten_into(nested, result),
        _ => result.push(item.clone()),
    });
}

/// The elements of the first sequence that are found in every sequence.
///
/// Arguments that are not sequences are ignored.
pub fn intersection(arguments: &[Value]) -> Vec<Value> {
    let sequences = filter(arguments.into(), |argument, _, _| argument.is_sequence());
    let start: Vec<Value> = sequences
        .first()
        .and_then(Value::as_collection)
        .map(|first| first.values().cloned().collect())
        .unwrap_or_default();

    fold(
        Collection::from(&sequences),
        start,
        |accumulator: Vec<Value>, sequence| {
            let Some(sequence) = sequence.as_collection() else {
                return accumulator;
            };
            filter((&accumulator).into(), |item, _, _| contains(sequence, item))
        },
    )
}

/// The elements of `items` not found in any of `others`.
///
/// `others` is flattened first, so nested sequences count at any depth.
pub fn difference(items: &[Value], others: &[Value]) -> Vec<Value> {
    let combined = flatten(others);
    reject(items.into(), |item, _, _| contains((&combined).into(), item))
}

/// Zip sequences together: the n-th result holds the n-th element of
/// every argument, padded with `undefined` up to the longest argument.
pub fn zip(arguments: &[Value]) -> error::Result<Vec<Value>> {
    let sequences = arguments
        .iter()
        .map(Value::to_sequence)
        .collect::<error::Result<Vec<_>>>()?;
    let longest = sequences.iter().map(|sequence| sequence.len()).max().unwrap_or(0);
    Ok((0..longest)
        .map(|index| {
            Value::from(
                sequences
                    .iter()
                    .map(|sequence| sequence.get(index).cloned().unwrap_or_default())
                    .collect::<Vec<_>>(),
            )
        })
        .collect())
}
