use std::fmt;
use std::rc::Rc;

use crate::mapping::{Entries, Mapping};
use crate::sequence::Sequence;
use crate::value::Value;

/// A borrowed view of a container: either an ordered sequence or a
/// mapping.
///
/// All traversal dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collection<'a> {
    Sequence(&'a [Value]),
    Mapping(&'a Entries),
}

/// The position of an element in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// A 0-based index into a sequence.
    Index(usize),
    /// A key of a mapping.
    Name(&'a str),
}

impl<'a> Collection<'a> {
    /// The number of elements: the length of a sequence, or the number of
    /// keys of a mapping.
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Collection::Sequence(_))
    }

    /// Iterate over every element exactly once, in traversal order.
    ///
    /// Sequences go in ascending index order, mappings in key enumeration
    /// order.
    pub fn iter(&self) -> Iter<'a> {
        match *self {
            Collection::Sequence(items) => Iter {
                inner: IterInner::Sequence(items.iter().enumerate()),
            },
            Collection::Mapping(entries) => Iter {
                inner: IterInner::Mapping(entries.iter()),
            },
        }
    }

    /// Iterate over the values only, in traversal order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &'a Value> {
        self.iter().map(|(_, value)| value)
    }
}

impl<'a> IntoIterator for Collection<'a> {
    type Item = (Key<'a>, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> From<&'a [Value]> for Collection<'a> {
    fn from(items: &'a [Value]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a> From<&'a Vec<Value>> for Collection<'a> {
    fn from(items: &'a Vec<Value>) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a> From<&'a Sequence> for Collection<'a> {
    fn from(sequence: &'a Sequence) -> Self {
        sequence.as_collection()
    }
}

impl<'a> From<&'a Entries> for Collection<'a> {
    fn from(entries: &'a Entries) -> Self {
        Collection::Mapping(entries)
    }
}

impl<'a> From<&'a Mapping> for Collection<'a> {
    fn from(mapping: &'a Mapping) -> Self {
        mapping.as_collection()
    }
}

impl Key<'_> {
    pub fn index(self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(index),
            Key::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<Key<'_>> for Value {
    fn from(key: Key<'_>) -> Self {
        match key {
            Key::Index(index) => Value::Number(index as f64),
            Key::Name(name) => Value::from(name),
        }
    }
}

/// The traversal iterator over a collection, yielding each element with
/// its key.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Mapping(indexmap::map::Iter<'a, Rc<str>, Value>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Sequence(iter) => iter.next().map(|(index, value)| (Key::Index(index), value)),
            IterInner::Mapping(iter) => iter.next().map(|(name, value)| (Key::Name(&**name), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Sequence(iter) => iter.size_hint(),
            IterInner::Mapping(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}
