use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::collection::Collection;
use crate::value::Value;

/// An ordered sequence of values, addressed by a 0-based index.
///
/// Cloning a sequence is cheap; the clone is the same sequence under
/// strict equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    items: Rc<[Value]>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_collection(&self) -> Collection<'_> {
        Collection::Sequence(&self.items)
    }

    /// Whether two sequences are the same sequence.
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.items).cast::<()>() as usize
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Vec::<Value>::new().into()
    }
}

impl Deref for Sequence {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.items
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Sequence {
            items: items.into(),
        }
    }
}

impl From<&[Value]> for Sequence {
    fn from(items: &[Value]) -> Self {
        Sequence {
            items: items.into(),
        }
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
