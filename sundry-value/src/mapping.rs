use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::collection::Collection;
use crate::value::Value;

/// The entries of a mapping, in insertion order.
pub type Entries = IndexMap<Rc<str>, Value, ahash::RandomState>;

/// A key-value mapping.
///
/// Keys are enumerated in insertion order. That order is stable, so every
/// traversal of the same mapping sees the keys in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping(Rc<Entries>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_collection(&self) -> Collection<'_> {
        Collection::Mapping(&self.0)
    }

    pub fn entries(&self) -> &Entries {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(|k| &**k)
    }

    /// A new mapping with `key` set to `value`. An existing key keeps its
    /// position.
    pub fn put(&self, key: impl Into<Rc<str>>, value: Value) -> Self {
        let mut entries = self.0.as_ref().clone();
        entries.insert(key.into(), value);
        Self(Rc::new(entries))
    }

    /// Whether two mappings are the same mapping.
    pub fn ptr_eq(&self, other: &Mapping) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl From<Entries> for Mapping {
    fn from(entries: Entries) -> Self {
        Self(Rc::new(entries))
    }
}

impl<K> FromIterator<(K, Value)> for Mapping
where
    K: Into<Rc<str>>,
{
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<Entries>()
            .into()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}
