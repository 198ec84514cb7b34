use std::fmt;
use std::rc::Rc;

use crate::collection::Collection;
use crate::error;
use crate::mapping::Mapping;
use crate::sequence::Sequence;

/// A Sundry value. Collections hold values, and collections are
/// themselves values, so they nest.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    ///
    /// Returned for missing elements and by decorators that have no
    /// result yet.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// An ordered sequence.
    Sequence(Sequence),
    /// A key-value mapping.
    Mapping(Mapping),
}

// a static assertion to ensure that Value never grows in size
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Value, [u8; 24]);

impl Value {
    /// View the value as a collection, if it is one.
    pub fn as_collection(&self) -> Option<Collection<'_>> {
        match self {
            Value::Sequence(sequence) => Some(sequence.as_collection()),
            Value::Mapping(mapping) => Some(mapping.as_collection()),
            _ => None,
        }
    }

    /// Try to view the value as a collection.
    pub fn to_collection(&self) -> error::Result<Collection<'_>> {
        self.as_collection().ok_or(error::Error::NotACollection)
    }

    /// Try to get the value as a sequence.
    pub fn to_sequence(&self) -> error::Result<Sequence> {
        match self {
            Value::Sequence(sequence) => Ok(sequence.clone()),
            _ => Err(error::Error::NotASequence),
        }
    }

    /// Try to get the value as a mapping.
    pub fn to_mapping(&self) -> error::Result<Mapping> {
        match self {
            Value::Mapping(mapping) => Ok(mapping.clone()),
            _ => Err(error::Error::NotAMapping),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Strict equality.
    ///
    /// Atomic values are equal when they hold the same value; `NaN` is not
    /// equal to anything, and positive and negative zero are equal.
    /// Collections are equal only when they are the same collection.
    pub fn strict_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            (Value::Mapping(a), Value::Mapping(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// The effective boolean value, used wherever a test result decides
    /// whether an element is kept.
    ///
    /// - `undefined` and `null` are false.
    ///
    /// - A boolean is its own value.
    ///
    /// - A number is false if it is zero or `NaN`.
    ///
    /// - A string is false if it is empty.
    ///
    /// - Collections are always true, even when empty.
    pub fn effective_boolean_value(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Sequence(_) | Value::Mapping(_) => true,
        }
    }

    /// Property access by name.
    ///
    /// Mappings are looked up by key. Sequences are indexed when the name
    /// is a decimal index. Anything else gives `undefined`.
    pub fn get(&self, name: &str) -> Value {
        match self {
            Value::Mapping(mapping) => mapping.get(name).cloned().unwrap_or_default(),
            Value::Sequence(sequence) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| sequence.get(index))
                .cloned()
                .unwrap_or_default(),
            _ => Value::Undefined,
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n == 0.0 {
        // no negative zero
        write!(f, "0")
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Sequence(sequence) => write!(f, "{}", sequence),
            Value::Mapping(mapping) => write!(f, "{}", mapping),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Rc<str>> for Value {
    fn from(s: Rc<str>) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items.into())
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Value::Sequence(sequence)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}
